//! Core types shared across the workspace.

pub mod error;

pub use error::PricingError;
