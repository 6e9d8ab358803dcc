//! Runtime errors surfaced by `start` and `handle`.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur while starting or driving a machine instance.
#[derive(Debug, Error)]
pub enum MachineError {
    /// The configuration tree failed validation; no instance is created.
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// No instance in the reachable hierarchy could resolve the event. The
    /// unhandled-event hooks have already fired when this surfaces.
    #[error("state '{state}' cannot handle event '{event}'")]
    UnhandledEvent { event: String, state: String },
}
