//! Scenario grid construction.
//!
//! `ScenarioGrid::build` sweeps the Black-Scholes price over an N×N grid of
//! (spot, volatility) scenarios around the base parameters and derives the
//! P&L and percentage-P&L matrices against the anchor price.

use num_traits::Float;
use volgrid_models::{BlackScholes, OptionParameters};

use super::config::{GridConfig, GridError, GridMetric, Position};

/// Lower floor for the volatility axis (1%), applied regardless of how
/// negative the configured low percentage is.
const VOL_FLOOR: f64 = 0.01;

/// N uniformly spaced values over [start, end], endpoints included.
pub(crate) fn linspace<T: Float>(start: T, end: T, n: usize) -> Vec<T> {
    debug_assert!(n >= 2);
    let step = (end - start) / T::from(n - 1).unwrap();
    let mut values = Vec::with_capacity(n);
    for i in 0..n {
        values.push(start + step * T::from(i).unwrap());
    }
    // Pin the endpoint so axis bounds are exact despite accumulation error
    values[n - 1] = end;
    values
}

/// Dense row-major N×N matrix of scenario values.
///
/// Indexed by (volatility index `i`, spot index `j`), matching the grid's
/// axis ordering.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridMatrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Float> GridMatrix<T> {
    /// Builds a matrix by evaluating `f(row, col)` at every cell.
    ///
    /// # Examples
    /// ```
    /// use volgrid_risk::scenarios::GridMatrix;
    ///
    /// let m = GridMatrix::from_fn(2, 3, |i, j| (i * 3 + j) as f64);
    /// assert_eq!(m.get(1, 2), 5.0);
    /// assert_eq!(m.len(), 6);
    /// ```
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    /// Value at (row, col).
    ///
    /// # Panics
    /// Panics if the indices are out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col]
    }

    /// Number of rows (volatility samples).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (spot samples).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the matrix has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// All cells in row-major order.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.data
    }
}

/// Price, P&L and percentage-P&L matrices over a (spot × volatility) sweep.
///
/// All three matrices, the axes and the anchor price come from one
/// parameter snapshot, so they are always internally consistent. Matrices
/// are indexed `(volatility index i, spot index j)`; both axes are strictly
/// increasing and uniformly spaced.
///
/// # Examples
/// ```
/// use volgrid_models::{OptionParameters, OptionType};
/// use volgrid_risk::scenarios::{GridConfig, ScenarioGrid};
///
/// let params = OptionParameters::new(100.0_f64, 100.0, 0.25, 0.05, 0.20, OptionType::Call)
///     .unwrap();
/// let grid = ScenarioGrid::build(&params, &GridConfig::default()).unwrap();
///
/// assert_eq!(grid.spots.len(), 30);
/// assert_eq!(grid.pnl.rows(), 30);
/// // The centre of the default grid re-prices the base contract
/// assert!(grid.anchor_price > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioGrid<T: Float> {
    /// Sampled spot prices, strictly increasing.
    pub spots: Vec<T>,
    /// Sampled volatilities, strictly increasing, floored at 0.01.
    pub vols: Vec<T>,
    /// Option price per scenario.
    pub price: GridMatrix<T>,
    /// P&L against the anchor price, signed by position.
    pub pnl: GridMatrix<T>,
    /// P&L as a percentage of the anchor price (0 when the anchor is 0).
    pub pct_pnl: GridMatrix<T>,
    /// Price of the option at the base parameters (the P&L baseline).
    pub anchor_price: T,
    /// Position side the P&L matrices were computed for.
    pub position: Position,
    /// Metric selected for downstream analytics.
    pub metric: GridMetric,
    /// Absolute breakeven tolerance carried from the configuration.
    pub breakeven_tolerance: T,
}

impl<T: Float> ScenarioGrid<T> {
    /// Builds the scenario grid for one parameter snapshot.
    ///
    /// Axes:
    /// - spot: N uniform points in `[S·(1+low/100), S·(1+high/100)]`
    /// - volatility: N uniform points in
    ///   `[max(0.01, σ·(1+low/100)), σ·(1+high/100)]`
    ///
    /// For each cell the option is re-priced at `(spot_j, vol_i)` with
    /// strike, expiry, rate and type unchanged. O(N²) pricing evaluations,
    /// deterministic, nothing cached.
    ///
    /// # Errors
    /// `GridError::InvalidVolRange` when the floored lower volatility bound
    /// meets or exceeds the upper bound (the axis would not be strictly
    /// increasing); `GridError::Analytical` if a scenario coordinate fails
    /// domain validation.
    pub fn build(params: &OptionParameters<T>, config: &GridConfig<T>) -> Result<Self, GridError> {
        let one = T::one();
        let hundred = T::from(100.0).unwrap();
        let floor = T::from(VOL_FLOOR).unwrap();

        let n = config.resolution();
        let spot = params.spot();
        let vol = params.volatility();

        let (spot_low, spot_high) = config.spot_range_pct();
        let spot_min = spot * (one + spot_low / hundred);
        let spot_max = spot * (one + spot_high / hundred);

        let (vol_low, vol_high) = config.vol_range_pct();
        let vol_min = (vol * (one + vol_low / hundred)).max(floor);
        let vol_max = vol * (one + vol_high / hundred);

        if vol_max <= vol_min {
            return Err(GridError::InvalidVolRange {
                low: vol_low.to_f64().unwrap_or(f64::NAN),
                high: vol_high.to_f64().unwrap_or(f64::NAN),
            });
        }

        let spots = linspace(spot_min, spot_max, n);
        let vols = linspace(vol_min, vol_max, n);

        let anchor_price = BlackScholes::new(*params).price();

        let mut price_data = Vec::with_capacity(n * n);
        let mut pnl_data = Vec::with_capacity(n * n);
        let mut pct_data = Vec::with_capacity(n * n);

        for &vol_i in &vols {
            for &spot_j in &spots {
                let scenario_price =
                    BlackScholes::new(params.with_scenario(spot_j, vol_i)?).price();

                let pnl = match config.position() {
                    Position::Long => scenario_price - anchor_price,
                    Position::Short => anchor_price - scenario_price,
                };
                // Zero-anchor policy: percentage P&L is 0, not NaN
                let pct_pnl = if anchor_price == T::zero() {
                    T::zero()
                } else {
                    pnl / anchor_price * hundred
                };

                price_data.push(scenario_price);
                pnl_data.push(pnl);
                pct_data.push(pct_pnl);
            }
        }

        Ok(Self {
            spots,
            vols,
            price: GridMatrix {
                rows: n,
                cols: n,
                data: price_data,
            },
            pnl: GridMatrix {
                rows: n,
                cols: n,
                data: pnl_data,
            },
            pct_pnl: GridMatrix {
                rows: n,
                cols: n,
                data: pct_data,
            },
            anchor_price,
            position: config.position(),
            metric: config.metric(),
            breakeven_tolerance: config.breakeven_tolerance(),
        })
    }

    /// The matrix selected by the configured [`GridMetric`].
    #[inline]
    pub fn active_matrix(&self) -> &GridMatrix<T> {
        match self.metric {
            GridMetric::PnL => &self.pnl,
            GridMetric::Price => &self.price,
            GridMetric::PctPnL => &self.pct_pnl,
        }
    }

    /// Grid side length N.
    #[inline]
    pub fn resolution(&self) -> usize {
        self.spots.len()
    }
}
