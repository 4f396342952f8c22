//! Trait for priceable entities.

use num_traits::Float;

/// Trait for entities that can produce a theoretical price.
///
/// # Type Parameters
/// * `T` - Floating-point type (`f64` or `f32`)
///
/// # Design Philosophy
///
/// This trait is designed for **static dispatch**: implement it directly on
/// model structs (or enums over models) rather than behind
/// `Box<dyn Priceable>`. The engine has no dynamic model registry, so the
/// indirection buys nothing.
///
/// # Examples
/// ```
/// use volgrid_core::traits::Priceable;
/// use num_traits::Float;
///
/// struct Forward<T: Float> {
///     spot: T,
///     rate: T,
///     expiry: T,
/// }
///
/// impl<T: Float> Priceable<T> for Forward<T> {
///     fn price(&self) -> T {
///         self.spot * (self.rate * self.expiry).exp()
///     }
/// }
///
/// let fwd = Forward { spot: 100.0_f64, rate: 0.05, expiry: 1.0 };
/// assert!(fwd.price() > 100.0);
/// ```
pub trait Priceable<T: Float> {
    /// Calculate the theoretical price.
    ///
    /// # Invariants
    /// - The returned price must be non-negative (no arbitrage)
    /// - The method must be pure (no side effects, deterministic)
    fn price(&self) -> T;
}
