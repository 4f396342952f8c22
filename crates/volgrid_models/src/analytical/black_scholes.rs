//! Black-Scholes pricing model for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·Φ(d₁) - K·e^(-rT)·Φ(d₂)
//! **Put Price**: P = K·e^(-rT)·Φ(-d₂) - S·Φ(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! Price and Greeks are computed from one shared d1/d2 evaluation, so the
//! two are always numerically consistent for a given parameter snapshot.

use num_traits::Float;
use volgrid_core::traits::Priceable;

use super::distributions::{norm_cdf, norm_pdf};
use crate::instruments::{OptionParameters, OptionType};

/// Days per year used to scale theta to a per-calendar-day figure.
const DAYS_PER_YEAR: f64 = 365.0;

/// Scaling for per-percentage-point sensitivities (vega, rho).
const PER_PERCENT: f64 = 100.0;

/// Analytical first- and second-order sensitivities.
///
/// Scaling conventions follow market practice:
/// - `theta` is per calendar day (annual theta ÷ 365)
/// - `vega` is per 1 percentage-point move in volatility (raw vega ÷ 100)
/// - `rho` is per 1 percentage-point move in the rate (raw rho ÷ 100)
/// - `delta` and `gamma` are unscaled
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks<T: Float> {
    /// ∂V/∂S. In [0, 1] for calls, [-1, 0] for puts.
    pub delta: T,
    /// ∂²V/∂S². Non-negative, identical for calls and puts.
    pub gamma: T,
    /// Time decay per calendar day. Usually negative.
    pub theta: T,
    /// Sensitivity to a 1pp volatility move. Non-negative, call/put identical.
    pub vega: T,
    /// Sensitivity to a 1pp rate move.
    pub rho: T,
}

/// Black-Scholes model for a single European option.
///
/// Wraps a validated [`OptionParameters`] snapshot and exposes closed-form
/// price and Greeks. Construction is infallible because every domain
/// precondition (S>0, K>0, T>0, σ>0) was already enforced by the parameter
/// constructor; the methods here never clamp or guard.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (`f64` or `f32`)
///
/// # Examples
/// ```
/// use volgrid_models::{BlackScholes, OptionParameters, OptionType};
///
/// let params = OptionParameters::new(100.0_f64, 100.0, 1.0, 0.05, 0.2, OptionType::Call)
///     .unwrap();
/// let call = BlackScholes::new(params);
///
/// let put_params = OptionParameters::new(100.0_f64, 100.0, 1.0, 0.05, 0.2, OptionType::Put)
///     .unwrap();
/// let put = BlackScholes::new(put_params);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call.price() - put.price() - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes<T: Float> {
    params: OptionParameters<T>,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a model from a validated parameter snapshot.
    #[inline]
    pub fn new(params: OptionParameters<T>) -> Self {
        Self { params }
    }

    /// The parameter snapshot this model prices.
    #[inline]
    pub fn params(&self) -> &OptionParameters<T> {
        &self.params
    }

    /// Computes the (d₁, d₂) pair of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T), d₂ = d₁ - σ√T.
    ///
    /// This is the single evaluation shared by [`price`](Self::price) and
    /// [`greeks`](Self::greeks).
    #[inline]
    pub fn d_terms(&self) -> (T, T) {
        let half = T::from(0.5).unwrap();

        let s = self.params.spot();
        let k = self.params.strike();
        let t = self.params.expiry();
        let r = self.params.rate();
        let sigma = self.params.volatility();

        let vol_sqrt_t = sigma * t.sqrt();
        let log_moneyness = (s / k).ln();
        let drift = (r + half * sigma * sigma) * t;

        let d1 = (log_moneyness + drift) / vol_sqrt_t;
        let d2 = d1 - vol_sqrt_t;
        (d1, d2)
    }

    /// Discount factor e^(-rT).
    #[inline]
    fn discount(&self) -> T {
        (-self.params.rate() * self.params.expiry()).exp()
    }

    /// Computes the theoretical option price.
    ///
    /// - Call: C = S·Φ(d₁) - K·e^(-rT)·Φ(d₂)
    /// - Put:  P = K·e^(-rT)·Φ(-d₂) - S·Φ(-d₁)
    ///
    /// Pure and deterministic; no side effects.
    #[inline]
    pub fn price(&self) -> T {
        let (d1, d2) = self.d_terms();
        let s = self.params.spot();
        let k = self.params.strike();
        let discounted_strike = k * self.discount();

        match self.params.option_type() {
            OptionType::Call => s * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
            OptionType::Put => discounted_strike * norm_cdf(-d2) - s * norm_cdf(-d1),
        }
    }

    /// Computes all five Greeks from the same d1/d2 as [`price`](Self::price).
    ///
    /// - delta: Φ(d₁) for calls, Φ(d₁) - 1 for puts
    /// - gamma: φ(d₁) / (S·σ·√T)
    /// - theta: (-S·φ(d₁)·σ/(2√T) ∓ r·K·e^(-rT)·Φ(±d₂)) / 365
    /// - vega:  S·φ(d₁)·√T / 100
    /// - rho:   ±K·T·e^(-rT)·Φ(±d₂) / 100
    pub fn greeks(&self) -> Greeks<T> {
        let (d1, d2) = self.d_terms();

        let s = self.params.spot();
        let k = self.params.strike();
        let t = self.params.expiry();
        let r = self.params.rate();
        let sigma = self.params.volatility();

        let sqrt_t = t.sqrt();
        let pdf_d1 = norm_pdf(d1);
        let discounted_strike = k * self.discount();

        let two = T::from(2.0).unwrap();
        let days = T::from(DAYS_PER_YEAR).unwrap();
        let per_pct = T::from(PER_PERCENT).unwrap();

        // Time-decay term common to calls and puts: -S·φ(d₁)·σ / (2√T)
        let decay = -(s * pdf_d1 * sigma) / (two * sqrt_t);
        let carry = r * discounted_strike;

        let (delta, theta_annual, rho_raw) = match self.params.option_type() {
            OptionType::Call => (
                norm_cdf(d1),
                decay - carry * norm_cdf(d2),
                k * t * self.discount() * norm_cdf(d2),
            ),
            OptionType::Put => (
                norm_cdf(d1) - T::one(),
                decay + carry * norm_cdf(-d2),
                -(k * t * self.discount() * norm_cdf(-d2)),
            ),
        };

        Greeks {
            delta,
            gamma: pdf_d1 / (s * sigma * sqrt_t),
            theta: theta_annual / days,
            vega: s * pdf_d1 * sqrt_t / per_pct,
            rho: rho_raw / per_pct,
        }
    }
}

impl<T: Float> Priceable<T> for BlackScholes<T> {
    fn price(&self) -> T {
        BlackScholes::price(self)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn build(spot: f64, strike: f64, expiry: f64, rate: f64, vol: f64) -> (f64, f64) {
        let call = BlackScholes::new(
            OptionParameters::new(spot, strike, expiry, rate, vol, OptionType::Call).unwrap(),
        )
        .price();
        let put = BlackScholes::new(
            OptionParameters::new(spot, strike, expiry, rate, vol, OptionType::Put).unwrap(),
        )
        .price();
        (call, put)
    }

    proptest! {
        #[test]
        fn prop_put_call_parity(
            spot in 20.0_f64..500.0,
            strike in 20.0_f64..500.0,
            expiry in 0.05_f64..3.0,
            rate in 0.0_f64..0.15,
            vol in 0.05_f64..1.0,
        ) {
            let (call, put) = build(spot, strike, expiry, rate, vol);
            let forward = spot - strike * (-rate * expiry).exp();
            // CDF approximation is accurate to ~1.5e-7; scale tolerance by notional
            prop_assert!((call - put - forward).abs() < 1e-4 * spot.max(strike));
        }

        #[test]
        fn prop_prices_non_negative(
            spot in 20.0_f64..500.0,
            strike in 20.0_f64..500.0,
            expiry in 0.05_f64..3.0,
            rate in 0.0_f64..0.15,
            vol in 0.05_f64..1.0,
        ) {
            let (call, put) = build(spot, strike, expiry, rate, vol);
            prop_assert!(call >= -1e-9);
            prop_assert!(put >= -1e-9);
        }

        #[test]
        fn prop_delta_difference_is_one(
            spot in 20.0_f64..500.0,
            strike in 20.0_f64..500.0,
            expiry in 0.05_f64..3.0,
            rate in 0.0_f64..0.15,
            vol in 0.05_f64..1.0,
        ) {
            let call = BlackScholes::new(
                OptionParameters::new(spot, strike, expiry, rate, vol, OptionType::Call).unwrap(),
            )
            .greeks();
            let put = BlackScholes::new(
                OptionParameters::new(spot, strike, expiry, rate, vol, OptionType::Put).unwrap(),
            )
            .greeks();
            prop_assert!((call.delta - put.delta - 1.0).abs() < 1e-12);
            prop_assert!((call.gamma - put.gamma).abs() < 1e-15);
            prop_assert!((call.vega - put.vega).abs() < 1e-15);
        }
    }
}
