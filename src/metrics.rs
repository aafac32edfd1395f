//! Summary risk metrics
//!
//! Derives the headline figures for a run from the full ladder. Unlike the
//! per-sample drawdown analysis these assume the worst case: every level
//! filled and price at the simulation floor.

use crate::types::{
    Ladder, RiskMetrics, StrategyParams, CONTRACT_SIZE, LEVERAGE, PIP, REFERENCE_PRICE,
};

/// Compute the run-level risk metrics for a validated ladder.
pub fn compute(ladder: &Ladder, params: &StrategyParams) -> RiskMetrics {
    let max_drawdown_price = REFERENCE_PRICE - params.max_drawdown_pips * PIP;

    let max_possible_loss =
        ((ladder.avg_cost_price - max_drawdown_price) / PIP) * ladder.total_volume * params.pip_value;

    let break_even_pips = (REFERENCE_PRICE - ladder.avg_cost_price).abs() / PIP;

    let first_volume = ladder
        .positions
        .first()
        .map(|p| p.volume)
        .unwrap_or(params.first_volume);

    RiskMetrics {
        max_possible_loss,
        break_even_pips,
        margin_required: ladder.total_volume * CONTRACT_SIZE * REFERENCE_PRICE / LEVERAGE,
        risk_reward_ratio: break_even_pips / params.max_drawdown_pips,
        position_size_risk: ladder.total_volume / first_volume,
    }
}
