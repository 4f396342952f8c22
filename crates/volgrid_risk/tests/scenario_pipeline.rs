//! End-to-end tests over the full engine surface: parameters → price +
//! Greeks → scenario grid → breakeven points and summary statistics.

use approx::assert_relative_eq;
use proptest::prelude::*;
use volgrid_models::{BlackScholes, OptionParameters, OptionType};
use volgrid_risk::scenarios::{GridConfig, GridMetric, Position, ScenarioGrid};

fn reference_params() -> OptionParameters<f64> {
    OptionParameters::new(100.0, 100.0, 0.25, 0.05, 0.20, OptionType::Call).unwrap()
}

#[test]
fn full_pipeline_reference_contract() {
    let params = reference_params();

    // Single-point evaluation
    let model = BlackScholes::new(params);
    let price = model.price();
    let greeks = model.greeks();
    assert_relative_eq!(price, 4.6150, epsilon = 1e-3);
    assert_relative_eq!(greeks.delta, 0.5695, epsilon = 1e-3);

    // Grid built from the identical snapshot uses the same anchor
    let grid = ScenarioGrid::build(&params, &GridConfig::default()).unwrap();
    assert_eq!(grid.anchor_price, price);

    let summary = grid.summary();
    assert!(summary.max_profit > 0.0);
    assert!(summary.max_loss < 0.0);
    assert!(summary.profit_probability > 0.0 && summary.profit_probability < 100.0);
    assert!(summary.std_dev > 0.0);
    assert_relative_eq!(
        summary.risk_reward_ratio,
        summary.mean / summary.std_dev,
        epsilon = 1e-12
    );
}

#[test]
fn breakeven_points_lie_on_grid_axes() {
    let params = reference_params();
    let config = GridConfig::new(
        (-40.0, 40.0),
        (-30.0, 50.0),
        80,
        Position::Long,
        GridMetric::PnL,
    )
    .unwrap()
    .with_breakeven_tolerance(0.05)
    .unwrap();

    let grid = ScenarioGrid::build(&params, &config).unwrap();
    for point in grid.breakeven_points() {
        assert!(grid.spots.contains(&point.spot));
        assert!(grid.vols.contains(&point.vol));
    }
}

#[test]
fn grid_rebuilds_identically_from_same_snapshot() {
    let params = reference_params();
    let config = GridConfig::default();
    assert_eq!(
        ScenarioGrid::build(&params, &config).unwrap(),
        ScenarioGrid::build(&params, &config).unwrap()
    );
}

#[test]
fn put_grid_profits_when_spot_falls() {
    let params =
        OptionParameters::new(100.0, 100.0, 0.25, 0.05, 0.20, OptionType::Put).unwrap();
    let grid = ScenarioGrid::build(&params, &GridConfig::default()).unwrap();

    // Lowest-spot column at mid volatility: a long put gains
    let mid = grid.vols.len() / 2;
    assert!(grid.pnl.get(mid, 0) > 0.0);
    // Highest-spot column: a long put loses
    assert!(grid.pnl.get(mid, grid.spots.len() - 1) < 0.0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_short_grid_negates_long_grid(
        spot in 50.0_f64..200.0,
        strike in 50.0_f64..200.0,
        expiry in 0.1_f64..2.0,
        vol in 0.1_f64..0.6,
        resolution in 5_usize..20,
    ) {
        let params =
            OptionParameters::new(spot, strike, expiry, 0.05, vol, OptionType::Call).unwrap();

        let long_config = GridConfig::new(
            (-40.0, 40.0), (-30.0, 50.0), resolution, Position::Long, GridMetric::PnL,
        ).unwrap();
        let short_config = GridConfig::new(
            (-40.0, 40.0), (-30.0, 50.0), resolution, Position::Short, GridMetric::PnL,
        ).unwrap();

        let long = ScenarioGrid::build(&params, &long_config).unwrap();
        let short = ScenarioGrid::build(&params, &short_config).unwrap();

        for (l, s) in long.pnl.values().iter().zip(short.pnl.values()) {
            prop_assert!((l + s).abs() < 1e-12);
        }
    }

    #[test]
    fn prop_anchor_cell_has_near_zero_pnl(
        spot in 50.0_f64..200.0,
        vol in 0.1_f64..0.6,
    ) {
        // An odd resolution with symmetric ranges samples the base (S, σ)
        // exactly at the grid centre, where P&L must vanish
        let params =
            OptionParameters::new(spot, 100.0, 0.5, 0.05, vol, OptionType::Call).unwrap();
        let config = GridConfig::new(
            (-40.0, 40.0), (-30.0, 30.0), 21, Position::Long, GridMetric::PnL,
        ).unwrap();

        let grid = ScenarioGrid::build(&params, &config).unwrap();
        prop_assert!(grid.pnl.get(10, 10).abs() < 1e-6 * spot);
    }
}
