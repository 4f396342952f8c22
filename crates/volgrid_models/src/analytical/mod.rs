//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions under the Black-Scholes
//! model:
//! - Option price (call and put)
//! - Analytical Greeks (delta, gamma, theta, vega, rho), computed from the
//!   same d1/d2 evaluation as the price so the two are always numerically
//!   consistent
//!
//! ## Numerical Stability
//!
//! The normal CDF is evaluated through an erfc polynomial approximation
//! (Abramowitz & Stegun 7.1.26), accurate to 1.5e-7 for all inputs.

pub mod black_scholes;
pub mod distributions;
pub mod error;

pub use black_scholes::{BlackScholes, Greeks};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
