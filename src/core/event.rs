//! Core Event trait for the events a machine reacts to.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine events.
///
/// Events key the per-state transition tables and are cloned when an event is
/// delegated to a submachine or recorded in history. `String` implements
/// `Event` so string-keyed machines work directly; the
/// [`event_enum!`](crate::event_enum) macro generates implementations for
/// plain enums.
pub trait Event:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Get the event's name for display, logging, and error messages.
    fn name(&self) -> &str;
}

impl Event for String {
    fn name(&self) -> &str {
        self
    }
}
