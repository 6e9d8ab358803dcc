//! Configuration validation errors.

use thiserror::Error;

/// Errors detected when validating a configuration tree at start.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("initial state '{state}' is not defined in the configuration")]
    UndefinedInitialState { state: String },

    #[error("transition target '{target}' from state '{from}' is not defined in the configuration")]
    UndefinedTargetState { from: String, target: String },
}
