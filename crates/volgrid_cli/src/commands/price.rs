//! Price command implementation.
//!
//! Prices a single European option and prints its Greeks.

use tracing::info;
use volgrid_models::BlackScholes;

use super::contract_params;
use crate::{ContractArgs, Result};

/// Run the price command.
pub fn run(contract: &ContractArgs) -> Result<()> {
    let params = contract_params(contract)?;
    info!(
        "Pricing {} option: S={}, K={}, T={}y",
        params.option_type().name(),
        params.spot(),
        params.strike(),
        params.expiry()
    );

    let model = BlackScholes::new(params);
    let price = model.price();
    let greeks = model.greeks();

    println!("\n┌────────────────┬────────────┐");
    println!("│ {} Option      │            │", params.option_type().name());
    println!("├────────────────┼────────────┤");
    println!("│ Price          │ {:>10.4} │", price);
    println!("│ Delta          │ {:>10.4} │", greeks.delta);
    println!("│ Gamma          │ {:>10.4} │", greeks.gamma);
    println!("│ Theta (/day)   │ {:>10.4} │", greeks.theta);
    println!("│ Vega (/1pp)    │ {:>10.4} │", greeks.vega);
    println!("│ Rho (/1pp)     │ {:>10.4} │", greeks.rho);
    println!("└────────────────┴────────────┘");

    Ok(())
}
