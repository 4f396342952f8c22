//! CLI error types.

use thiserror::Error;
use volgrid_models::analytical::AnalyticalError;
use volgrid_risk::scenarios::GridError;

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced to the command line.
#[derive(Debug, Error)]
pub enum CliError {
    /// Option parameters rejected by the engine.
    #[error("Invalid option parameters: {0}")]
    Model(#[from] AnalyticalError),

    /// Grid configuration rejected by the engine.
    #[error("Invalid grid configuration: {0}")]
    Grid(#[from] GridError),
}
