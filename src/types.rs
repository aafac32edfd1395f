//! Core data types used across the risk engine

use serde::{Deserialize, Serialize};

/// Price-space size of one pip in the engine's normalized price grid.
pub const PIP: f64 = 0.0001;

/// Fixed normalized reference price. The engine works in relative price
/// space; the absolute instrument price does not change the risk shape.
pub const REFERENCE_PRICE: f64 = 1.0;

/// Spacing of the drawdown grid-sampling pass, in pips.
pub const GRID_STEP_PIPS: f64 = 10.0;

/// Contract size used for margin computation (units per 1.0 of volume).
pub const CONTRACT_SIZE: f64 = 100_000.0;

/// Account leverage used for margin computation.
pub const LEVERAGE: f64 = 30.0;

/// Floating-loss magnitude above which a sample is bucketed `Medium`.
pub const RISK_MEDIUM_LOSS: f64 = 5_000.0;

/// Floating-loss magnitude above which a sample is bucketed `High`.
pub const RISK_HIGH_LOSS: f64 = 10_000.0;

/// Input parameters describing one DCA strategy configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategyParams {
    /// Spacing between consecutive DCA entries, in pips
    pub pip_step: f64,
    /// Volume of the first (level-0) position
    pub first_volume: f64,
    /// Multiplicative volume growth per level (level volume = first_volume * exponent^level)
    pub volume_exponent: f64,
    /// Ladder depth, 1..=50
    pub max_positions: u32,
    /// Simulation horizon below the reference price, in pips
    pub max_drawdown_pips: f64,
    /// Monetary value of a one-pip move per unit volume
    pub pip_value: f64,
}

impl Default for StrategyParams {
    fn default() -> Self {
        StrategyParams {
            pip_step: 10.0,
            first_volume: 0.1,
            volume_exponent: 1.5,
            max_positions: 10,
            max_drawdown_pips: 500.0,
            pip_value: 10.0,
        }
    }
}

/// One DCA ladder level.
///
/// Levels are 0-indexed internally; presentation layers display them
/// 1-indexed. Entry prices strictly decrease with level (long-only,
/// averaging down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub level: u32,
    pub entry_price: f64,
    pub volume: f64,
    /// Notional committed at this level (volume * reference price)
    pub investment: f64,
    /// Distance of this entry below the reference price, in pips
    pub pip_distance: f64,
    /// Running volume through this level
    pub cumulative_volume: f64,
    /// Running investment through this level
    pub cumulative_investment: f64,
}

/// Full position ladder plus its aggregate figures.
///
/// `avg_cost_price` is the volume-weighted average entry over ALL levels,
/// not just levels a given price has triggered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ladder {
    pub positions: Vec<Position>,
    pub total_volume: f64,
    pub total_investment: f64,
    pub avg_cost_price: f64,
}

/// Provenance of a drawdown sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointType {
    /// Produced by the fixed 10-pip sampling grid
    #[serde(rename = "grid-sample")]
    GridSample,
    /// Placed exactly at a ladder level's entry price
    #[serde(rename = "trigger")]
    Trigger,
}

/// Categorical loss severity of a drawdown sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// One simulated price sample on the drawdown curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawdownPoint {
    pub price: f64,
    /// Rounded pip distance below the reference price
    pub pips_from_start: i64,
    pub floating_pnl: f64,
    /// Number of ladder levels triggered at this price
    pub active_positions: usize,
    pub total_active_volume: f64,
    /// Volume-weighted average entry of the active levels (reference price when none)
    pub avg_cost_price: f64,
    /// Investment committed through the deepest active level
    pub cumulative_investment: f64,
    pub break_even_pips_needed: f64,
    /// Entry price of the next untriggered level, None once the ladder is filled
    pub next_dca_trigger_price: Option<f64>,
    pub risk_level: RiskLevel,
    pub margin_required: f64,
    /// |floating PnL| as a percentage of cumulative investment, one decimal
    pub drawdown_percentage: f64,
    pub point_type: PointType,
}

/// Summary risk figures for one strategy run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// Worst-case loss with the full ladder filled and price at the drawdown floor
    pub max_possible_loss: f64,
    /// Pips price must recover for the full ladder to break even
    pub break_even_pips: f64,
    /// Margin to hold the full ladder
    pub margin_required: f64,
    /// break_even_pips / max_drawdown_pips
    pub risk_reward_ratio: f64,
    /// total_volume / first position volume
    pub position_size_risk: f64,
}

/// Complete output of one calculation run.
///
/// Owned by the caller; every run produces a fresh value and no run mutates
/// the output of a previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyResult {
    pub params: StrategyParams,
    pub positions: Vec<Position>,
    pub total_volume: f64,
    pub total_investment: f64,
    pub avg_cost_price: f64,
    pub drawdown_analysis: Vec<DrawdownPoint>,
    pub risk_metrics: RiskMetrics,
}

impl StrategyResult {
    /// Largest single-level volume in the ladder
    pub fn max_single_volume(&self) -> f64 {
        self.positions.iter().map(|p| p.volume).fold(0.0, f64::max)
    }
}
