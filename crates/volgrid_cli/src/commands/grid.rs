//! Grid command implementation.
//!
//! Builds the (spot × volatility) scenario grid and prints breakeven
//! points and summary statistics.

use tracing::info;
use volgrid_risk::scenarios::{GridConfig, GridMetric, Position, ScenarioGrid};

use super::contract_params;
use crate::{ContractArgs, MetricArg, PositionArg, Result};

/// Run the grid command.
#[allow(clippy::too_many_arguments)]
pub fn run(
    contract: &ContractArgs,
    spot_range_pct: (f64, f64),
    vol_range_pct: (f64, f64),
    resolution: usize,
    position: PositionArg,
    metric: MetricArg,
    tolerance: f64,
) -> Result<()> {
    let params = contract_params(contract)?;

    let position = match position {
        PositionArg::Long => Position::Long,
        PositionArg::Short => Position::Short,
    };
    let metric = match metric {
        MetricArg::Pnl => GridMetric::PnL,
        MetricArg::Price => GridMetric::Price,
        MetricArg::PctPnl => GridMetric::PctPnL,
    };

    let config = GridConfig::new(spot_range_pct, vol_range_pct, resolution, position, metric)?
        .with_breakeven_tolerance(tolerance)?;

    info!(
        "Building {}×{} {} grid for a {} {}",
        resolution,
        resolution,
        metric.name(),
        position.name(),
        params.option_type().name()
    );

    let grid = ScenarioGrid::build(&params, &config)?;
    let summary = grid.summary();
    let breakevens = grid.breakeven_points();

    println!(
        "\n{} {} — {} over spot [{:.2}, {:.2}], vol [{:.1}%, {:.1}%]",
        position.name(),
        params.option_type().name(),
        metric.name(),
        grid.spots[0],
        grid.spots[grid.spots.len() - 1],
        grid.vols[0] * 100.0,
        grid.vols[grid.vols.len() - 1] * 100.0
    );
    println!("Anchor price: {:.4}", grid.anchor_price);

    println!("\n┌─────────────────────┬────────────┐");
    println!("│ Max Profit          │ {:>10.2} │", summary.max_profit);
    println!("│ Max Loss            │ {:>10.2} │", summary.max_loss);
    println!("│ Profit Probability  │ {:>9.1}% │", summary.profit_probability);
    println!("│ Mean                │ {:>10.2} │", summary.mean);
    println!("│ Std Dev             │ {:>10.2} │", summary.std_dev);
    println!("│ Risk-Reward Ratio   │ {:>10.2} │", summary.risk_reward_ratio);
    println!("└─────────────────────┴────────────┘");

    if breakevens.is_empty() {
        println!("\nNo breakeven cells within tolerance {}", tolerance);
    } else {
        println!(
            "\n{} breakeven cell(s) within tolerance {}:",
            breakevens.len(),
            tolerance
        );
        for point in breakevens.iter().take(10) {
            println!("  spot {:>8.2}  vol {:>5.1}%", point.spot, point.vol * 100.0);
        }
        if breakevens.len() > 10 {
            println!("  ... and {} more", breakevens.len() - 10);
        }
    }

    Ok(())
}
