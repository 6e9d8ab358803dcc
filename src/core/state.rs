//! Core State trait for state machine states.
//!
//! Every state machine instance is generic over its state vocabulary. A state
//! is an immutable value that names a mode of the machine; the engine only
//! needs to compare, hash, and display states.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// States are pure values. The engine uses them as map keys in the
/// configuration tree and as the `current_state` of a live instance.
///
/// # Required Traits
///
/// - `Clone`: states are cloned into history records and instances
/// - `Eq` + `Hash`: states key the configuration's state map
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states appear in serializable history
///
/// `String` implements `State` out of the box, so string-keyed machines need
/// no custom types. For enums, the [`state_enum!`](crate::state_enum) macro
/// generates the implementation.
///
/// # Example
///
/// ```rust
/// use cascade::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Open,
///     Closed,
///     Locked,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Locked => "Locked",
///         }
///     }
/// }
///
/// assert_eq!(DoorState::Locked.name(), "Locked");
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Get the state's name for display, logging, and error messages.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self
    }
}
