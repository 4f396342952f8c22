//! Option instrument definitions.
//!
//! This module provides the validated parameter set for a single European
//! option position. All numeric preconditions of the analytical kernel are
//! enforced here, once, at construction time.

pub mod params;

pub use params::{OptionParameters, OptionType};
