//! Core traits for the pricing engine.
//!
//! This module defines:
//! - Generic floating-point operations (`Float` trait)
//! - Price calculation (`Priceable` trait)

/// Generic floating-point trait for numeric computations.
///
/// Re-exported from `num_traits` so every crate in the workspace shares a
/// single scalar bound. All engine computations are written against this
/// trait and therefore work with both `f64` and `f32`.
///
/// # Examples
/// ```
/// use volgrid_core::traits::Float;
///
/// fn discount_factor<T: Float>(rate: T, time: T) -> T {
///     (-rate * time).exp()
/// }
///
/// let df: f64 = discount_factor(0.05, 1.0);
/// assert!((df - 0.951229).abs() < 1e-5);
/// ```
pub use num_traits::Float;

pub mod priceable;

pub use priceable::Priceable;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_trait_with_f64() {
        fn generic_sqrt<T: Float>(x: T) -> T {
            x.sqrt()
        }

        assert_eq!(generic_sqrt(4.0_f64), 2.0);
    }

    #[test]
    fn test_float_trait_with_f32() {
        fn generic_exp<T: Float>(x: T) -> T {
            x.exp()
        }

        assert_eq!(generic_exp(0.0_f32), 1.0_f32);
    }
}
