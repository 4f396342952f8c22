//! Validated option parameters.
//!
//! This module provides the immutable parameter set consumed by the
//! analytical kernel, with validation ensuring every precondition of the
//! Black-Scholes formulas holds before any pricing code runs.

use num_traits::Float;

use crate::analytical::error::AnalyticalError;

/// European option flavour.
///
/// # Examples
/// ```
/// use volgrid_models::OptionType;
///
/// assert!(OptionType::Call.is_call());
/// assert_eq!(OptionType::Put.name(), "Put");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// Right to buy at the strike.
    #[default]
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionType {
    /// True for `Call`.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            OptionType::Call => "Call",
            OptionType::Put => "Put",
        }
    }
}

/// Validated parameters for a single European option.
///
/// Immutable after construction. The constructor enforces the domain
/// preconditions of the Black-Scholes formulas: spot, strike, expiry and
/// volatility strictly positive, rate non-negative. Downstream code
/// (pricing, Greeks, grid sweeps) relies on these invariants and performs
/// no further guarding.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (`f64` or `f32`)
///
/// # Examples
/// ```
/// use volgrid_models::{OptionParameters, OptionType};
///
/// let params = OptionParameters::new(100.0_f64, 100.0, 0.25, 0.05, 0.20, OptionType::Call)
///     .unwrap();
/// assert_eq!(params.spot(), 100.0);
///
/// // Volatility must be strictly positive
/// assert!(OptionParameters::new(100.0_f64, 100.0, 0.25, 0.05, 0.0, OptionType::Call).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionParameters<T: Float> {
    spot: T,
    strike: T,
    expiry: T,
    rate: T,
    volatility: T,
    option_type: OptionType,
}

impl<T: Float> OptionParameters<T> {
    /// Creates a new validated parameter set.
    ///
    /// # Arguments
    /// * `spot` - Current underlying price S (must be positive)
    /// * `strike` - Strike price K (must be positive)
    /// * `expiry` - Time to expiry T in years (must be positive)
    /// * `rate` - Annualised risk-free rate r as a decimal (must be ≥ 0)
    /// * `volatility` - Annualised volatility σ as a decimal (must be positive)
    /// * `option_type` - Call or put
    ///
    /// # Errors
    /// One `AnalyticalError` variant per violated precondition, carrying the
    /// offending value.
    pub fn new(
        spot: T,
        strike: T,
        expiry: T,
        rate: T,
        volatility: T,
        option_type: OptionType,
    ) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        if spot <= zero {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }
        if strike <= zero {
            return Err(AnalyticalError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }
        if expiry <= zero {
            return Err(AnalyticalError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(f64::NAN),
            });
        }
        if rate < zero {
            return Err(AnalyticalError::InvalidRate {
                rate: rate.to_f64().unwrap_or(f64::NAN),
            });
        }
        if volatility <= zero {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            option_type,
        })
    }

    /// Returns a copy with spot and volatility replaced, re-validated.
    ///
    /// Used by scenario sweeps that re-price the same contract at shifted
    /// (spot, volatility) coordinates. Strike, expiry, rate and option type
    /// are carried over unchanged.
    pub fn with_scenario(&self, spot: T, volatility: T) -> Result<Self, AnalyticalError> {
        Self::new(
            spot,
            self.strike,
            self.expiry,
            self.rate,
            volatility,
            self.option_type,
        )
    }

    /// Underlying spot price S.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Strike price K.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Annualised risk-free rate (decimal).
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Annualised volatility (decimal).
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Call or put.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }
}
