//! Formula verification helpers
//!
//! Recomputes selected figures from a finished run with their intermediate
//! terms spelled out, for eyeballing a result rather than deciding anything.
//! Thin wrappers over the ladder/drawdown/metrics arithmetic.

use crate::types::{StrategyResult, CONTRACT_SIZE, LEVERAGE, PIP, REFERENCE_PRICE};

/// Render the headline formulas of a run as human-readable lines.
pub fn formula_report(result: &StrategyResult) -> Vec<String> {
    let params = &result.params;
    let floor = REFERENCE_PRICE - params.max_drawdown_pips * PIP;
    let gap_pips = (result.avg_cost_price - floor) / PIP;

    vec![
        format!(
            "avg cost price = sum(entry*volume)/total = {:.5} over {} levels",
            result.avg_cost_price,
            result.positions.len()
        ),
        format!(
            "max possible loss = (({:.5} - {:.5}) / {PIP}) * {:.4} * {:.2} = {:.2}",
            result.avg_cost_price,
            floor,
            result.total_volume,
            params.pip_value,
            gap_pips * result.total_volume * params.pip_value,
        ),
        format!(
            "break-even pips = |{REFERENCE_PRICE:.5} - {:.5}| / {PIP} = {:.1}",
            result.avg_cost_price, result.risk_metrics.break_even_pips,
        ),
        format!(
            "margin required = {:.4} * {CONTRACT_SIZE} * {REFERENCE_PRICE:.2} / {LEVERAGE} = {:.2}",
            result.total_volume, result.risk_metrics.margin_required,
        ),
        format!(
            "drawdown samples = {} ({} grid, {} trigger)",
            result.drawdown_analysis.len(),
            result
                .drawdown_analysis
                .iter()
                .filter(|p| p.point_type == crate::types::PointType::GridSample)
                .count(),
            result
                .drawdown_analysis
                .iter()
                .filter(|p| p.point_type == crate::types::PointType::Trigger)
                .count(),
        ),
    ]
}
