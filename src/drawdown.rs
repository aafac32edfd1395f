//! Drawdown curve simulation
//!
//! Walks price down from the reference price toward the drawdown floor and
//! produces one analysed sample per price of interest. Two independent
//! passes generate candidates: a fixed 10-pip sampling grid, and one
//! "trigger" point exactly at each ladder entry inside the horizon. The two
//! sets are merged by integer pip bucket; on a collision the grid sample
//! wins because it is inserted first.

use std::collections::BTreeMap;

use crate::types::{
    DrawdownPoint, Ladder, PointType, RiskLevel, CONTRACT_SIZE, GRID_STEP_PIPS, LEVERAGE, PIP,
    REFERENCE_PRICE, RISK_HIGH_LOSS, RISK_MEDIUM_LOSS,
};

/// Integer pip bucket used as the merge/dedup key (precision 0.0001)
fn pip_bucket(price: f64) -> i64 {
    (price / PIP).round() as i64
}

/// Analyse the ladder at one price.
///
/// A position is active once price has fallen to or through its entry
/// (`price <= entry_price`). Because entries strictly decrease with level,
/// the active set is always a prefix of the ladder.
pub fn analyze_at_price(
    ladder: &Ladder,
    price: f64,
    pip_value: f64,
    point_type: PointType,
) -> DrawdownPoint {
    let active = ladder
        .positions
        .iter()
        .take_while(|p| price <= p.entry_price)
        .count();

    let mut floating_pnl = 0.0;
    let mut total_active_volume = 0.0;
    let mut weighted_entry_sum = 0.0;
    for pos in &ladder.positions[..active] {
        // Convert the price move to pips BEFORE applying pip value; pip value
        // is currency per pip per unit volume, not currency per price unit.
        floating_pnl += ((price - pos.entry_price) / PIP) * pos.volume * pip_value;
        total_active_volume += pos.volume;
        weighted_entry_sum += pos.entry_price * pos.volume;
    }

    let avg_cost_price = if total_active_volume > 0.0 {
        weighted_entry_sum / total_active_volume
    } else {
        REFERENCE_PRICE
    };

    let cumulative_investment = if active > 0 {
        ladder.positions[active - 1].cumulative_investment
    } else {
        0.0
    };

    let drawdown_percentage = if cumulative_investment > 0.0 {
        (floating_pnl.abs() / cumulative_investment * 100.0 * 10.0).round() / 10.0
    } else {
        0.0
    };

    let loss = floating_pnl.abs();
    let risk_level = if loss > RISK_HIGH_LOSS {
        RiskLevel::High
    } else if loss > RISK_MEDIUM_LOSS {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    DrawdownPoint {
        price,
        pips_from_start: ((REFERENCE_PRICE - price) / PIP).round() as i64,
        floating_pnl,
        active_positions: active,
        total_active_volume,
        avg_cost_price,
        cumulative_investment,
        break_even_pips_needed: (avg_cost_price - price).abs() / PIP,
        next_dca_trigger_price: ladder.positions.get(active).map(|p| p.entry_price),
        risk_level,
        margin_required: total_active_volume * CONTRACT_SIZE * REFERENCE_PRICE / LEVERAGE,
        drawdown_percentage,
        point_type,
    }
}

/// Simulate the drawdown curve from the reference price down to
/// `reference - max_drawdown_pips * 0.0001`.
///
/// The result is ordered by strictly decreasing price and holds at most one
/// point per pip bucket. Ladder levels deeper than the horizon simply never
/// activate in any sample.
pub fn simulate(ladder: &Ladder, max_drawdown_pips: f64, pip_value: f64) -> Vec<DrawdownPoint> {
    let floor = REFERENCE_PRICE - max_drawdown_pips * PIP;
    let mut points: BTreeMap<i64, DrawdownPoint> = BTreeMap::new();

    // Grid pass: 10-pip steps, floor included only when it lands on a step.
    let grid_steps = (max_drawdown_pips / GRID_STEP_PIPS).floor() as i64;
    for step in 0..=grid_steps {
        let price = REFERENCE_PRICE - step as f64 * GRID_STEP_PIPS * PIP;
        let point = analyze_at_price(ladder, price, pip_value, PointType::GridSample);
        points.insert(pip_bucket(price), point);
    }

    // Trigger pass: skip buckets the grid already occupies.
    for pos in &ladder.positions {
        if pos.entry_price < floor || pos.entry_price > REFERENCE_PRICE {
            continue;
        }
        points.entry(pip_bucket(pos.entry_price)).or_insert_with(|| {
            analyze_at_price(ladder, pos.entry_price, pip_value, PointType::Trigger)
        });
    }

    tracing::debug!(
        samples = points.len(),
        floor = format!("{:.5}", floor),
        "Simulated drawdown curve"
    );

    // BTreeMap iterates ascending by bucket (ascending price); reverse for
    // the descending-price output order.
    points.into_values().rev().collect()
}
