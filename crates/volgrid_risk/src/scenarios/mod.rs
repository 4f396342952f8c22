//! Scenario grid construction and analytics.
//!
//! The flow mirrors the engine's external interface: a base
//! `OptionParameters` plus a `GridConfig` produce a [`ScenarioGrid`]
//! (price / P&L / %-P&L matrices over a spot × volatility sweep), which
//! then feeds breakeven extraction and summary statistics.

pub mod analytics;
pub mod config;
pub mod grid;
pub mod sensitivity;

pub use analytics::{BreakevenPoint, ScenarioSummary};
pub use config::{GridConfig, GridError, GridMetric, Position};
pub use grid::{GridMatrix, ScenarioGrid};
pub use sensitivity::{price_vs_spot, price_vs_vol, SensitivityCurve};
