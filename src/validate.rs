//! Parameter validation
//!
//! Every rule is checked independently so the caller sees all violations at
//! once, not just the first. A failed report means the run must not proceed
//! to ladder construction.

use serde::{Deserialize, Serialize};

use crate::types::StrategyParams;

/// Pass/fail verdict with human-readable reasons
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        ValidationReport {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Check the six strategy parameters against their domain-valid ranges.
///
/// Non-finite values count as missing. No side effects; the report is the
/// only output.
pub fn validate(params: &StrategyParams) -> ValidationReport {
    let mut errors = Vec::new();

    if !params.pip_step.is_finite() || params.pip_step <= 0.0 {
        errors.push("Pip step (DCA spacing) must be a positive number of pips".to_string());
    }

    if !params.first_volume.is_finite() || params.first_volume <= 0.0 {
        errors.push("First position volume must be greater than 0".to_string());
    }

    if !params.volume_exponent.is_finite()
        || params.volume_exponent < 0.1
        || params.volume_exponent > 5.0
    {
        errors.push("Volume exponent must be between 0.1 and 5".to_string());
    }

    if params.max_positions < 1 || params.max_positions > 50 {
        errors.push("Maximum positions must be between 1 and 50".to_string());
    }

    if !params.max_drawdown_pips.is_finite()
        || params.max_drawdown_pips < 10.0
        || params.max_drawdown_pips > 10_000.0
    {
        errors.push("Maximum drawdown must be between 10 and 10000 pips".to_string());
    }

    if !params.pip_value.is_finite() || params.pip_value <= 0.0 {
        errors.push("Pip value must be greater than 0".to_string());
    }

    ValidationReport::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_are_valid() {
        let report = validate(&StrategyParams::default());
        assert!(report.valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_zero_pip_step_rejected() {
        let params = StrategyParams {
            pip_step: 0.0,
            ..StrategyParams::default()
        };
        let report = validate(&params);
        assert!(!report.valid);
        assert!(report.errors[0].contains("DCA spacing"));
    }

    #[test]
    fn test_all_violations_reported_together() {
        let params = StrategyParams {
            pip_step: -1.0,
            first_volume: 0.0,
            volume_exponent: 9.0,
            max_positions: 0,
            max_drawdown_pips: 5.0,
            pip_value: 0.0,
        };
        let report = validate(&params);
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 6);
    }

    #[test]
    fn test_range_boundaries_inclusive() {
        let low = StrategyParams {
            volume_exponent: 0.1,
            max_positions: 1,
            max_drawdown_pips: 10.0,
            ..StrategyParams::default()
        };
        assert!(validate(&low).valid);

        let high = StrategyParams {
            volume_exponent: 5.0,
            max_positions: 50,
            max_drawdown_pips: 10_000.0,
            ..StrategyParams::default()
        };
        assert!(validate(&high).valid);
    }

    #[test]
    fn test_nan_counts_as_missing() {
        let params = StrategyParams {
            pip_step: f64::NAN,
            ..StrategyParams::default()
        };
        assert!(!validate(&params).valid);
    }
}
