//! Breakeven extraction and summary statistics over a scenario grid.

use num_traits::Float;

use super::grid::{GridMatrix, ScenarioGrid};

/// A grid coordinate where the position's P&L is approximately zero.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakevenPoint<T> {
    /// Spot price at the breakeven cell.
    pub spot: T,
    /// Volatility at the breakeven cell.
    pub vol: T,
}

/// Summary statistics over the grid's active matrix.
///
/// `mean` and `std_dev` are population statistics over all N² cells;
/// `profit_probability` is the share of cells above zero, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioSummary<T> {
    /// Largest cell value.
    pub max_profit: T,
    /// Smallest cell value.
    pub max_loss: T,
    /// Percentage of cells strictly above zero.
    pub profit_probability: T,
    /// Population mean of all cells.
    pub mean: T,
    /// Population standard deviation of all cells.
    pub std_dev: T,
    /// mean / std_dev, defined as 0 when std_dev is 0.
    pub risk_reward_ratio: T,
}

impl<T: Float> ScenarioSummary<T> {
    /// Computes summary statistics over one matrix.
    ///
    /// An empty matrix yields all-zero statistics.
    pub fn from_matrix(matrix: &GridMatrix<T>) -> Self {
        let zero = T::zero();
        let hundred = T::from(100.0).unwrap();

        if matrix.is_empty() {
            return Self {
                max_profit: zero,
                max_loss: zero,
                profit_probability: zero,
                mean: zero,
                std_dev: zero,
                risk_reward_ratio: zero,
            };
        }

        let values = matrix.values();
        let total = T::from(values.len()).unwrap();

        let mut max_profit = values[0];
        let mut max_loss = values[0];
        let mut sum = zero;
        let mut positive = 0_usize;

        for &v in values {
            max_profit = max_profit.max(v);
            max_loss = max_loss.min(v);
            sum = sum + v;
            if v > zero {
                positive += 1;
            }
        }

        let mean = sum / total;

        let mut sq_dev_sum = zero;
        for &v in values {
            let dev = v - mean;
            sq_dev_sum = sq_dev_sum + dev * dev;
        }
        let std_dev = (sq_dev_sum / total).sqrt();

        // Degenerate case: all-equal matrix gives ratio 0, never NaN
        let risk_reward_ratio = if std_dev > zero {
            mean / std_dev
        } else {
            zero
        };

        Self {
            max_profit,
            max_loss,
            profit_probability: T::from(positive).unwrap() / total * hundred,
            mean,
            std_dev,
            risk_reward_ratio,
        }
    }
}

impl<T: Float> ScenarioGrid<T> {
    /// Every grid cell where |P&L| falls below the configured tolerance,
    /// in row-major (volatility, spot) order.
    ///
    /// This is a tolerance-based heuristic over a discrete grid, not exact
    /// root-finding: a coarse grid can step over true breakeven points, and
    /// the fixed absolute tolerance can report none or many cells depending
    /// on the option's price scale. Tune the tolerance through
    /// [`GridConfig::with_breakeven_tolerance`](super::GridConfig::with_breakeven_tolerance)
    /// when the default 0.01 does not suit the contract.
    ///
    /// Always scans the P&L matrix, regardless of the active metric.
    pub fn breakeven_points(&self) -> Vec<BreakevenPoint<T>> {
        let mut points = Vec::new();
        for (i, &vol) in self.vols.iter().enumerate() {
            for (j, &spot) in self.spots.iter().enumerate() {
                if self.pnl.get(i, j).abs() < self.breakeven_tolerance {
                    points.push(BreakevenPoint { spot, vol });
                }
            }
        }
        points
    }

    /// Summary statistics over the matrix selected by the active metric.
    pub fn summary(&self) -> ScenarioSummary<T> {
        ScenarioSummary::from_matrix(self.active_matrix())
    }
}
