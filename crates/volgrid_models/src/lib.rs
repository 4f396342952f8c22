//! # Volgrid Models (L2: Analytical Kernel)
//!
//! Option domain types and closed-form Black-Scholes valuation.
//!
//! This crate provides:
//! - Validated option parameter sets (`OptionParameters`)
//! - Standard normal distribution functions (CDF/PDF)
//! - The `BlackScholes` model: price and analytical Greeks from a single
//!   shared d1/d2 evaluation
//!
//! ## Design Principles
//!
//! - **Validate once, compute freely**: all domain checks (S>0, K>0, T>0,
//!   r≥0, σ>0) live in the `OptionParameters` constructor; the pricing
//!   methods themselves never clamp or guard
//! - **Generic over `T: Float`**: supports `f64` and `f32`
//! - **Pure functions**: every method is a deterministic function of the
//!   constructed parameters

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;

pub use analytical::{BlackScholes, Greeks};
pub use instruments::{OptionParameters, OptionType};
