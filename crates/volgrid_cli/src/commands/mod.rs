//! CLI command implementations.

pub mod grid;
pub mod price;

use volgrid_models::{OptionParameters, OptionType};

use crate::{ContractArgs, OptionTypeArg, Result};

/// Builds validated engine parameters from CLI arguments.
///
/// Rate and volatility arrive in percent and are converted to decimals.
pub(crate) fn contract_params(args: &ContractArgs) -> Result<OptionParameters<f64>> {
    let option_type = match args.option_type {
        OptionTypeArg::Call => OptionType::Call,
        OptionTypeArg::Put => OptionType::Put,
    };
    Ok(OptionParameters::new(
        args.spot,
        args.strike,
        args.expiry,
        args.rate / 100.0,
        args.vol / 100.0,
        option_type,
    )?)
}
