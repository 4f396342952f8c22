//! # Volgrid Risk (L3: Scenario Analysis)
//!
//! Scenario grid construction and P&L analytics over the Black-Scholes
//! kernel.
//!
//! This crate provides:
//! - Grid configuration with validated ranges and resolution
//! - The (spot × volatility) scenario grid with price, P&L and
//!   percentage-P&L matrices
//! - Breakeven extraction and summary statistics
//! - 1D sensitivity curves (price vs. spot, price vs. volatility)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            volgrid_risk (L3)            │
//! ├─────────────────────────────────────────┤
//! │  scenarios/config     - GridConfig      │
//! │  scenarios/grid       - ScenarioGrid    │
//! │  scenarios/analytics  - breakeven,      │
//! │                         summary stats   │
//! │  scenarios/sensitivity - 1D curves      │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │          volgrid_models (L2)            │
//! │  Black-Scholes price and Greeks         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Every computation here is a pure, single-threaded function of one
//! parameter snapshot: one `OptionParameters` + `GridConfig` pair in, one
//! internally consistent set of matrices out. Nothing is cached between
//! recomputations.
//!
//! ## Example
//!
//! ```
//! use volgrid_models::{OptionParameters, OptionType};
//! use volgrid_risk::scenarios::{GridConfig, ScenarioGrid};
//!
//! let params = OptionParameters::new(100.0_f64, 100.0, 0.25, 0.05, 0.20, OptionType::Call)
//!     .unwrap();
//! let grid = ScenarioGrid::build(&params, &GridConfig::default()).unwrap();
//!
//! let summary = grid.summary();
//! assert!(summary.max_profit >= summary.max_loss);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod scenarios;

pub use scenarios::{
    BreakevenPoint, GridConfig, GridError, GridMatrix, GridMetric, Position, ScenarioGrid,
    ScenarioSummary, SensitivityCurve,
};
