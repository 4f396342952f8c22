//! # Volgrid Core (L1: Foundation)
//!
//! Shared traits and error types for the volgrid pricing engine.
//!
//! This crate provides:
//! - The `Float` scalar bound used by every numeric computation
//! - The `Priceable` trait implemented by analytical models
//! - `PricingError`, the categorised error type that crate-level
//!   errors converge into
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: the engine works with `f64` and `f32`
//! - **Static dispatch**: traits are designed for enum/struct dispatch,
//!   not `Box<dyn Trait>`
//! - **Pure functions**: nothing in this workspace holds mutable state
//!   between invocations

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod traits;
pub mod types;

pub use traits::{Float, Priceable};
pub use types::PricingError;
