//! DCA Risk Engine
//!
//! Models the risk profile of a Dollar-Cost-Averaging trading strategy:
//! given six strategy parameters it projects the ladder of layered entries
//! the strategy would open, simulates profit/loss across a price-drawdown
//! range, and derives summary risk metrics plus advisory text.
//!
//! The engine is a pure, synchronous, in-process library: no market data,
//! no order execution, no shared state between runs. Prices are normalized
//! to a fixed 1.00000 reference with a pip of 0.0001, so the risk shape is
//! independent of the absolute instrument price.
//!
//! # Example
//! ```
//! use dca_risk::{engine, StrategyParams};
//!
//! let params = StrategyParams {
//!     pip_step: 20.0,
//!     first_volume: 0.1,
//!     volume_exponent: 1.5,
//!     max_positions: 5,
//!     max_drawdown_pips: 200.0,
//!     pip_value: 10.0,
//! };
//!
//! let report = engine::validate(&params);
//! assert!(report.valid);
//!
//! let result = engine::run(&params)?;
//! assert_eq!(result.positions.len(), 5);
//! for line in engine::advise(&result) {
//!     println!("{line}");
//! }
//! # Ok::<(), dca_risk::EngineError>(())
//! ```

pub mod advice;
pub mod diag;
pub mod drawdown;
pub mod engine;
pub mod error;
pub mod export;
pub mod ladder;
pub mod metrics;
pub mod store;
pub mod types;
pub mod validate;

pub use error::{EngineError, EngineResult};
pub use export::ExportDocument;
pub use store::ParamStore;
pub use types::*;
pub use validate::ValidationReport;
