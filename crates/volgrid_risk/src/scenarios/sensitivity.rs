//! 1D sensitivity curves for the presentation layer's line charts.
//!
//! Two sweeps around the base contract: price vs. spot at fixed volatility
//! (±30% of spot) and price vs. volatility at fixed spot (5%–100% vol).

use num_traits::Float;
use volgrid_models::{BlackScholes, OptionParameters};

use super::config::GridError;
use super::grid::linspace;

/// Spot sweep bounds as fractions of the base spot.
const SPOT_SWEEP: (f64, f64) = (0.7, 1.3);

/// Volatility sweep bounds (absolute, decimal).
const VOL_SWEEP: (f64, f64) = (0.05, 1.0);

/// Default number of samples per curve.
pub const DEFAULT_CURVE_SAMPLES: usize = 100;

/// A sampled 1D price curve.
///
/// `xs` holds the swept variable (spot or volatility), `prices` the option
/// price at each sample; both have the same length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensitivityCurve<T> {
    /// Sampled values of the swept variable, strictly increasing.
    pub xs: Vec<T>,
    /// Option price at each sample.
    pub prices: Vec<T>,
}

/// Option price vs. spot at the contract's own volatility.
///
/// Sweeps `samples` uniform spots over [0.7·S, 1.3·S].
///
/// # Errors
/// `GridError::InvalidResolution` when `samples` < 2.
///
/// # Examples
/// ```
/// use volgrid_models::{OptionParameters, OptionType};
/// use volgrid_risk::scenarios::price_vs_spot;
///
/// let params = OptionParameters::new(100.0_f64, 100.0, 0.25, 0.05, 0.20, OptionType::Call)
///     .unwrap();
/// let curve = price_vs_spot(&params, 100).unwrap();
/// assert_eq!(curve.xs.len(), 100);
/// // Call price increases with spot
/// assert!(curve.prices.last().unwrap() > curve.prices.first().unwrap());
/// ```
pub fn price_vs_spot<T: Float>(
    params: &OptionParameters<T>,
    samples: usize,
) -> Result<SensitivityCurve<T>, GridError> {
    if samples < 2 {
        return Err(GridError::InvalidResolution {
            resolution: samples,
        });
    }

    let low = T::from(SPOT_SWEEP.0).unwrap() * params.spot();
    let high = T::from(SPOT_SWEEP.1).unwrap() * params.spot();
    let xs = linspace(low, high, samples);

    let mut prices = Vec::with_capacity(samples);
    for &spot in &xs {
        let scenario = params.with_scenario(spot, params.volatility())?;
        prices.push(BlackScholes::new(scenario).price());
    }

    Ok(SensitivityCurve { xs, prices })
}

/// Option price vs. volatility at the contract's own spot.
///
/// Sweeps `samples` uniform volatilities over [0.05, 1.0], independent of
/// the contract's current volatility.
///
/// # Errors
/// `GridError::InvalidResolution` when `samples` < 2.
pub fn price_vs_vol<T: Float>(
    params: &OptionParameters<T>,
    samples: usize,
) -> Result<SensitivityCurve<T>, GridError> {
    if samples < 2 {
        return Err(GridError::InvalidResolution {
            resolution: samples,
        });
    }

    let low = T::from(VOL_SWEEP.0).unwrap();
    let high = T::from(VOL_SWEEP.1).unwrap();
    let xs = linspace(low, high, samples);

    let mut prices = Vec::with_capacity(samples);
    for &vol in &xs {
        let scenario = params.with_scenario(params.spot(), vol)?;
        prices.push(BlackScholes::new(scenario).price());
    }

    Ok(SensitivityCurve { xs, prices })
}
