//! Position ladder construction
//!
//! Builds the ordered sequence of DCA entry levels from validated
//! parameters: an arithmetic progression in price (one `pip_step` lower per
//! level) and a geometric progression in volume. Fully deterministic; the
//! ladder is built once per run and never mutated afterwards.

use crate::error::{EngineError, EngineResult};
use crate::types::{Ladder, Position, StrategyParams, PIP, REFERENCE_PRICE};

/// Build the full entry ladder for the given (already validated) parameters.
///
/// Entries are priced relative to the fixed 1.00000 reference; level 0 sits
/// exactly at the reference and each subsequent level `pip_step` pips below.
pub fn build_ladder(params: &StrategyParams) -> EngineResult<Ladder> {
    let mut positions = Vec::with_capacity(params.max_positions as usize);
    let mut cumulative_volume = 0.0;
    let mut cumulative_investment = 0.0;
    let mut weighted_entry_sum = 0.0;

    for level in 0..params.max_positions {
        let entry_price = REFERENCE_PRICE - level as f64 * params.pip_step * PIP;
        let volume = params.first_volume * params.volume_exponent.powi(level as i32);
        let investment = volume * REFERENCE_PRICE;

        cumulative_volume += volume;
        cumulative_investment += investment;
        weighted_entry_sum += entry_price * volume;

        positions.push(Position {
            level,
            entry_price,
            volume,
            investment,
            pip_distance: level as f64 * params.pip_step,
            cumulative_volume,
            cumulative_investment,
        });
    }

    // Guarded upstream by validation; never divide by a degenerate total.
    if cumulative_volume <= 0.0 {
        return Err(EngineError::Validation {
            errors: vec!["ladder has zero total volume".to_string()],
        });
    }

    let avg_cost_price = weighted_entry_sum / cumulative_volume;

    tracing::debug!(
        levels = positions.len(),
        total_volume = format!("{:.4}", cumulative_volume),
        avg_cost = format!("{:.5}", avg_cost_price),
        "Built DCA ladder"
    );

    Ok(Ladder {
        positions,
        total_volume: cumulative_volume,
        total_investment: cumulative_investment,
        avg_cost_price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params(pip_step: f64, first_volume: f64, exponent: f64, levels: u32) -> StrategyParams {
        StrategyParams {
            pip_step,
            first_volume,
            volume_exponent: exponent,
            max_positions: levels,
            ..StrategyParams::default()
        }
    }

    #[test]
    fn test_ladder_length_and_closed_form_volumes() {
        let p = params(10.0, 0.5, 1.5, 8);
        let ladder = build_ladder(&p).unwrap();

        assert_eq!(ladder.positions.len(), 8);
        for (i, pos) in ladder.positions.iter().enumerate() {
            assert_relative_eq!(pos.volume, 0.5 * 1.5f64.powi(i as i32), epsilon = 1e-9);
            assert_relative_eq!(pos.pip_distance, i as f64 * 10.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_entry_prices_strictly_decrease() {
        let ladder = build_ladder(&params(7.0, 1.0, 2.0, 12)).unwrap();
        for pair in ladder.positions.windows(2) {
            assert!(pair[1].entry_price < pair[0].entry_price);
        }
    }

    #[test]
    fn test_totals_match_running_sums() {
        let ladder = build_ladder(&params(5.0, 0.2, 1.3, 15)).unwrap();
        let volume_sum: f64 = ladder.positions.iter().map(|p| p.volume).sum();
        let investment_sum: f64 = ladder.positions.iter().map(|p| p.investment).sum();

        assert_relative_eq!(ladder.total_volume, volume_sum, epsilon = 1e-9);
        assert_relative_eq!(ladder.total_investment, investment_sum, epsilon = 1e-9);
        let last = ladder.positions.last().unwrap();
        assert_relative_eq!(last.cumulative_volume, volume_sum, epsilon = 1e-9);
        assert_relative_eq!(last.cumulative_investment, investment_sum, epsilon = 1e-9);
    }

    #[test]
    fn test_avg_cost_is_convex_combination_of_entries() {
        let ladder = build_ladder(&params(20.0, 1.0, 1.8, 10)).unwrap();
        let min = ladder
            .positions
            .iter()
            .map(|p| p.entry_price)
            .fold(f64::MAX, f64::min);
        let max = ladder
            .positions
            .iter()
            .map(|p| p.entry_price)
            .fold(f64::MIN, f64::max);

        assert!(ladder.avg_cost_price >= min);
        assert!(ladder.avg_cost_price <= max);
    }

    #[test]
    fn test_worked_example_flat_volume() {
        // pip_step 5, first_volume 1, exponent 1, 3 levels
        let ladder = build_ladder(&params(5.0, 1.0, 1.0, 3)).unwrap();

        let entries: Vec<f64> = ladder.positions.iter().map(|p| p.entry_price).collect();
        assert_relative_eq!(entries[0], 1.00000, epsilon = 1e-9);
        assert_relative_eq!(entries[1], 0.99950, epsilon = 1e-9);
        assert_relative_eq!(entries[2], 0.99900, epsilon = 1e-9);
        assert_relative_eq!(ladder.total_volume, 3.0, epsilon = 1e-9);
        assert_relative_eq!(ladder.avg_cost_price, 0.99950, epsilon = 1e-9);
    }

    #[test]
    fn test_single_level_avg_cost_is_reference() {
        let ladder = build_ladder(&params(10.0, 1.0, 2.0, 1)).unwrap();
        assert_relative_eq!(ladder.avg_cost_price, REFERENCE_PRICE, epsilon = 1e-12);
    }
}
