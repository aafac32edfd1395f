//! Engine entry points
//!
//! Thin orchestration over the validator, ladder builder, drawdown simulator
//! and metrics calculator. Each run is an independent, synchronous, pure
//! computation: identical parameters produce bit-identical results and no
//! state survives between invocations.

use crate::advice;
use crate::drawdown;
use crate::error::{EngineError, EngineResult};
use crate::ladder;
use crate::metrics;
use crate::types::{StrategyParams, StrategyResult};
use crate::validate::{self, ValidationReport};

/// Check parameters against their domain-valid ranges.
pub fn validate(params: &StrategyParams) -> ValidationReport {
    validate::validate(params)
}

/// Run one full calculation: ladder, drawdown curve, risk metrics.
///
/// Fails closed: parameters are re-validated here and an out-of-range set
/// returns [`EngineError::Validation`] before any ladder work begins. The
/// engine never partially computes and then fails.
pub fn run(params: &StrategyParams) -> EngineResult<StrategyResult> {
    let report = validate::validate(params);
    if !report.valid {
        return Err(EngineError::Validation {
            errors: report.errors,
        });
    }

    let ladder = ladder::build_ladder(params)?;
    let drawdown_analysis = drawdown::simulate(&ladder, params.max_drawdown_pips, params.pip_value);
    let risk_metrics = metrics::compute(&ladder, params);

    tracing::debug!(
        positions = ladder.positions.len(),
        samples = drawdown_analysis.len(),
        max_loss = format!("{:.2}", risk_metrics.max_possible_loss),
        "Calculation run complete"
    );

    Ok(StrategyResult {
        params: *params,
        positions: ladder.positions,
        total_volume: ladder.total_volume,
        total_investment: ladder.total_investment,
        avg_cost_price: ladder.avg_cost_price,
        drawdown_analysis,
        risk_metrics,
    })
}

/// Map a completed run onto its ordered advisory strings.
pub fn advise(result: &StrategyResult) -> Vec<String> {
    advice::advise(result)
}
