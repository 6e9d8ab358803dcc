//! Build errors for the configuration builder.

use thiserror::Error;

/// Errors that can occur when assembling a machine configuration.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("initial state not specified. Call .initial_state(state) before .build()")]
    MissingInitialState,
}
