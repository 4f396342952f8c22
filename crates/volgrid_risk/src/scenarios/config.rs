//! Scenario grid configuration.
//!
//! `GridConfig` captures everything the grid builder needs besides the
//! option itself: percentage ranges for the two axes, resolution, the side
//! of the position, the metric driving downstream analytics, and the
//! breakeven tolerance. Validation happens once at construction.

use num_traits::Float;
use thiserror::Error;
use volgrid_core::types::PricingError;
use volgrid_models::analytical::AnalyticalError;

/// Direction of the option position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Position {
    /// Bought the option: P&L = scenario price − anchor price.
    #[default]
    Long,
    /// Wrote the option: P&L = anchor price − scenario price.
    Short,
}

impl Position {
    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Position::Long => "Long",
            Position::Short => "Short",
        }
    }
}

/// Which matrix drives downstream breakeven/summary analytics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridMetric {
    /// Absolute P&L in currency units.
    #[default]
    PnL,
    /// Raw option price.
    Price,
    /// P&L as a percentage of the anchor price.
    PctPnL,
}

impl GridMetric {
    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            GridMetric::PnL => "P&L",
            GridMetric::Price => "Option Price",
            GridMetric::PctPnL => "% P&L",
        }
    }
}

/// Errors from scenario grid configuration and construction.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GridError {
    /// Grid side length below the minimum of 2.
    #[error("Invalid grid resolution: {resolution} (minimum 2)")]
    InvalidResolution {
        /// The rejected resolution
        resolution: usize,
    },

    /// Spot percentage range empty, inverted, or reaching -100%.
    #[error("Invalid spot range: [{low}%, {high}%]")]
    InvalidSpotRange {
        /// Lower bound in percent
        low: f64,
        /// Upper bound in percent
        high: f64,
    },

    /// Volatility percentage range empty, inverted, or reaching -100%.
    #[error("Invalid volatility range: [{low}%, {high}%]")]
    InvalidVolRange {
        /// Lower bound in percent
        low: f64,
        /// Upper bound in percent
        high: f64,
    },

    /// Non-positive breakeven tolerance.
    #[error("Invalid breakeven tolerance: {tolerance}")]
    InvalidTolerance {
        /// The rejected tolerance
        tolerance: f64,
    },

    /// Domain error surfaced while re-pricing a scenario point.
    #[error(transparent)]
    Analytical(#[from] AnalyticalError),
}

impl From<GridError> for PricingError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::Analytical(inner) => inner.into(),
            other => PricingError::InvalidConfiguration(other.to_string()),
        }
    }
}

/// Validated configuration for a scenario grid sweep.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (`f64` or `f32`)
///
/// # Examples
/// ```
/// use volgrid_risk::scenarios::{GridConfig, GridMetric, Position};
///
/// // Defaults match the interactive tool: ±40% spot, -30/+50% vol, N=30
/// let config = GridConfig::<f64>::default();
/// assert_eq!(config.resolution(), 30);
///
/// let custom = GridConfig::new((-20.0, 20.0), (-10.0, 10.0), 50, Position::Short, GridMetric::Price)
///     .unwrap();
/// assert_eq!(custom.position(), Position::Short);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig<T: Float> {
    spot_range_pct: (T, T),
    vol_range_pct: (T, T),
    resolution: usize,
    position: Position,
    metric: GridMetric,
    breakeven_tolerance: T,
}

impl<T: Float> GridConfig<T> {
    /// Default breakeven tolerance in currency units.
    const DEFAULT_TOLERANCE: f64 = 0.01;

    /// Creates a validated grid configuration.
    ///
    /// # Arguments
    /// * `spot_range_pct` - (low, high) spot shift in percent, low > -100
    /// * `vol_range_pct` - (low, high) volatility shift in percent
    /// * `resolution` - grid side length N (N² pricing evaluations; the
    ///   interactive tool offers 15–100, the engine accepts any N ≥ 2)
    /// * `position` - long or short
    /// * `metric` - matrix driving downstream analytics
    ///
    /// # Errors
    /// `GridError` when a range is empty/inverted, the spot range reaches
    /// -100% (which would produce non-positive spots), or N < 2.
    pub fn new(
        spot_range_pct: (T, T),
        vol_range_pct: (T, T),
        resolution: usize,
        position: Position,
        metric: GridMetric,
    ) -> Result<Self, GridError> {
        let minus_hundred = T::from(-100.0).unwrap();

        if resolution < 2 {
            return Err(GridError::InvalidResolution { resolution });
        }
        if spot_range_pct.0 >= spot_range_pct.1 || spot_range_pct.0 <= minus_hundred {
            return Err(GridError::InvalidSpotRange {
                low: spot_range_pct.0.to_f64().unwrap_or(f64::NAN),
                high: spot_range_pct.1.to_f64().unwrap_or(f64::NAN),
            });
        }
        if vol_range_pct.0 >= vol_range_pct.1 || vol_range_pct.1 <= minus_hundred {
            return Err(GridError::InvalidVolRange {
                low: vol_range_pct.0.to_f64().unwrap_or(f64::NAN),
                high: vol_range_pct.1.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot_range_pct,
            vol_range_pct,
            resolution,
            position,
            metric,
            breakeven_tolerance: T::from(Self::DEFAULT_TOLERANCE).unwrap(),
        })
    }

    /// Replaces the breakeven tolerance (absolute, currency units).
    ///
    /// The default of 0.01 is a heuristic inherited from the interactive
    /// tool; callers pricing very cheap or very expensive options should
    /// pick a tolerance matched to the option's price scale.
    pub fn with_breakeven_tolerance(mut self, tolerance: T) -> Result<Self, GridError> {
        if tolerance <= T::zero() {
            return Err(GridError::InvalidTolerance {
                tolerance: tolerance.to_f64().unwrap_or(f64::NAN),
            });
        }
        self.breakeven_tolerance = tolerance;
        Ok(self)
    }

    /// (low, high) spot shift in percent.
    #[inline]
    pub fn spot_range_pct(&self) -> (T, T) {
        self.spot_range_pct
    }

    /// (low, high) volatility shift in percent.
    #[inline]
    pub fn vol_range_pct(&self) -> (T, T) {
        self.vol_range_pct
    }

    /// Grid side length N.
    #[inline]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Long or short.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Matrix selected for downstream analytics.
    #[inline]
    pub fn metric(&self) -> GridMetric {
        self.metric
    }

    /// Absolute breakeven tolerance in currency units.
    #[inline]
    pub fn breakeven_tolerance(&self) -> T {
        self.breakeven_tolerance
    }
}

impl<T: Float> Default for GridConfig<T> {
    /// Defaults mirror the interactive tool's sliders: spot ±40%,
    /// volatility -30%/+50%, resolution 30, long P&L view.
    fn default() -> Self {
        Self {
            spot_range_pct: (T::from(-40.0).unwrap(), T::from(40.0).unwrap()),
            vol_range_pct: (T::from(-30.0).unwrap(), T::from(50.0).unwrap()),
            resolution: 30,
            position: Position::Long,
            metric: GridMetric::PnL,
            breakeven_tolerance: T::from(Self::DEFAULT_TOLERANCE).unwrap(),
        }
    }
}
