//! Advisory text generation
//!
//! Maps the computed risk metrics onto categorical, human-readable guidance.
//! Checks run in a fixed order and every applicable message is emitted; only
//! messages within the same tier group are mutually exclusive.

use crate::types::StrategyResult;

const LOSS_HIGH: f64 = 6_000.0;
const LOSS_MEDIUM: f64 = 3_000.0;
const BREAK_EVEN_FAR: f64 = 100.0;
const BREAK_EVEN_MODERATE: f64 = 50.0;
const MIN_RISK_REWARD: f64 = 0.1;

/// Produce the ordered advisory list for one completed run.
pub fn advise(result: &StrategyResult) -> Vec<String> {
    let metrics = &result.risk_metrics;
    let mut advice = Vec::new();

    let loss = metrics.max_possible_loss.abs();
    if loss > LOSS_HIGH {
        advice.push(format!(
            "High risk: a full ladder at maximum drawdown loses {loss:.2}. \
             Consider a smaller first volume or a lower volume exponent."
        ));
    } else if loss > LOSS_MEDIUM {
        advice.push(format!(
            "Moderate risk: worst-case loss is {loss:.2}. \
             Verify this fits your account's loss tolerance."
        ));
    } else {
        advice.push(format!(
            "Conservative setup: worst-case loss is limited to {loss:.2}."
        ));
    }

    let max_single = result.max_single_volume();
    if max_single > result.total_volume / 3.0 {
        advice.push(format!(
            "Uneven sizing: the largest single position ({max_single:.2}) carries more than \
             a third of total volume. A deep level dominates the ladder's exposure."
        ));
    }

    if metrics.break_even_pips > BREAK_EVEN_FAR {
        advice.push(format!(
            "Recovery is distant: price must retrace {:.1} pips to break even \
             after the full ladder fills.",
            metrics.break_even_pips
        ));
    } else if metrics.break_even_pips >= BREAK_EVEN_MODERATE {
        advice.push(format!(
            "Recovery needs a {:.1}-pip retrace with the full ladder filled; \
             feasible, but watch ranging markets.",
            metrics.break_even_pips
        ));
    } else {
        advice.push(format!(
            "Break-even sits only {:.1} pips above the average cost; \
             shallow retraces close the ladder in profit.",
            metrics.break_even_pips
        ));
    }

    if metrics.risk_reward_ratio < MIN_RISK_REWARD {
        advice.push(format!(
            "Risk/reward ratio is low ({:.3}): the drawdown horizon dwarfs the \
             break-even distance. The ladder risks much to recover little.",
            metrics.risk_reward_ratio
        ));
    }

    advice
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::run;
    use crate::types::StrategyParams;

    #[test]
    fn test_low_risk_setup_gets_conservative_messages() {
        let params = StrategyParams {
            pip_step: 10.0,
            first_volume: 0.01,
            volume_exponent: 1.0,
            max_positions: 3,
            max_drawdown_pips: 50.0,
            pip_value: 10.0,
        };
        let result = run(&params).unwrap();
        let advice = advise(&result);

        assert!(advice[0].contains("Conservative"));
        assert!(!advice.iter().any(|a| a.contains("Uneven sizing")));
    }

    #[test]
    fn test_aggressive_exponent_triggers_uneven_sizing() {
        // Last level of a 2x ladder always exceeds a third of total volume.
        let params = StrategyParams {
            pip_step: 10.0,
            first_volume: 1.0,
            volume_exponent: 2.0,
            max_positions: 6,
            max_drawdown_pips: 100.0,
            pip_value: 10.0,
        };
        let result = run(&params).unwrap();
        let advice = advise(&result);

        assert!(advice.iter().any(|a| a.contains("Uneven sizing")));
    }

    #[test]
    fn test_large_ladder_reports_high_risk_and_low_ratio() {
        let params = StrategyParams {
            pip_step: 10.0,
            first_volume: 1.0,
            volume_exponent: 1.5,
            max_positions: 10,
            max_drawdown_pips: 5_000.0,
            pip_value: 10.0,
        };
        let result = run(&params).unwrap();
        let advice = advise(&result);

        assert!(advice[0].contains("High risk"));
        assert!(advice.iter().any(|a| a.contains("Risk/reward ratio is low")));
    }

    #[test]
    fn test_exactly_one_message_per_tier_group() {
        let result = run(&StrategyParams::default()).unwrap();
        let advice = advise(&result);

        let loss_tier = advice
            .iter()
            .filter(|a| {
                a.contains("High risk") || a.contains("Moderate risk") || a.contains("Conservative")
            })
            .count();
        let break_even_tier = advice
            .iter()
            .filter(|a| a.contains("retrace") || a.contains("Break-even sits"))
            .count();

        assert_eq!(loss_tier, 1);
        assert_eq!(break_even_tier, 1);
    }
}
