//! Fluent builder for machine configurations.
//!
//! The builder is the human-facing surface for assembling the immutable
//! configuration tree the engine consumes. States are configured through
//! closure-scoped sub-builders; global hooks through [`ConfigBuilder::global`].
//!
//! # Example
//!
//! ```rust
//! use cascade::{ConfigBuilder, StateMachine, Transition};
//!
//! let config = ConfigBuilder::new()
//!     .initial_state("state1".to_string())
//!     .state("state1".to_string(), |state| {
//!         state.on("event1".to_string(), Transition::external("state2".to_string()))
//!     })
//!     .state("state2".to_string(), |state| state)
//!     .build()?;
//!
//! let machine = StateMachine::start(config)?;
//! machine.handle("event1".to_string())?;
//! assert_eq!(machine.current_state(), "state2");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
pub mod macros;

pub use error::BuildError;

use crate::config::{GlobalHooks, MachineConfig, StateConfig, Transition};
use crate::core::{Event, EventSink, State};
use std::collections::HashMap;
use std::sync::Arc;

/// Builder for a [`MachineConfig`].
pub struct ConfigBuilder<S: State, E: Event> {
    initial: Option<S>,
    states: HashMap<S, StateConfig<S, E>>,
    hooks: GlobalHooks<S, E>,
}

impl<S: State, E: Event> ConfigBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: HashMap::new(),
            hooks: GlobalHooks::default(),
        }
    }

    /// Set the initial state (required). The state is declared even if no
    /// [`state`](Self::state) call configures it further.
    pub fn initial_state(mut self, state: S) -> Self {
        self.states.entry(state.clone()).or_default();
        self.initial = Some(state);
        self
    }

    /// Declare or extend a state. Calling `state` twice with the same name
    /// merges the two configurations.
    pub fn state<F>(mut self, state: S, configure: F) -> Self
    where
        F: FnOnce(StateBuilder<S, E>) -> StateBuilder<S, E>,
    {
        let config = self.states.remove(&state).unwrap_or_default();
        let built = configure(StateBuilder { config }).config;
        self.states.insert(state, built);
        self
    }

    /// Register global hooks, invoked for every relevant state or transition.
    pub fn global<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(GlobalHooksBuilder<S, E>) -> GlobalHooksBuilder<S, E>,
    {
        self.hooks = configure(GlobalHooksBuilder { hooks: self.hooks }).hooks;
        self
    }

    /// Build the immutable configuration.
    pub fn build(self) -> Result<MachineConfig<S, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        Ok(MachineConfig {
            initial,
            states: self.states,
            hooks: self.hooks,
        })
    }
}

impl<S: State, E: Event> Default for ConfigBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Closure-scoped builder for a single state's configuration.
pub struct StateBuilder<S: State, E: Event> {
    config: StateConfig<S, E>,
}

impl<S: State, E: Event> StateBuilder<S, E> {
    /// Append an entry action, invoked with the state being entered.
    pub fn on_enter<F>(mut self, action: F) -> Self
    where
        F: Fn(&S, &mut EventSink<E>) + Send + Sync + 'static,
    {
        self.config.entry_actions.push(Arc::new(action));
        self
    }

    /// Append an exit action, invoked with the state being left.
    pub fn on_exit<F>(mut self, action: F) -> Self
    where
        F: Fn(&S, &mut EventSink<E>) + Send + Sync + 'static,
    {
        self.config.exit_actions.push(Arc::new(action));
        self
    }

    /// Register a transition rule for an event. Rules registered for the
    /// same event are tried in registration order; first match wins.
    pub fn on(mut self, event: E, transition: Transition<S, E>) -> Self {
        self.config
            .transitions
            .entry(event)
            .or_default()
            .push(transition);
        self
    }

    /// Declare a nested submachine, started whenever this state is entered
    /// and discarded when it is left.
    pub fn submachine(mut self, config: MachineConfig<S, E>) -> Self {
        self.config.submachine = Some(Arc::new(config));
        self
    }
}

/// Closure-scoped builder for the global hook set.
pub struct GlobalHooksBuilder<S: State, E: Event> {
    hooks: GlobalHooks<S, E>,
}

impl<S: State, E: Event> GlobalHooksBuilder<S, E> {
    /// Append a hook invoked with every state being entered.
    pub fn on_state_enter<F>(mut self, hook: F) -> Self
    where
        F: Fn(&S, &mut EventSink<E>) + Send + Sync + 'static,
    {
        self.hooks.state_enter.push(Arc::new(hook));
        self
    }

    /// Append a hook invoked with every state being left.
    pub fn on_state_exit<F>(mut self, hook: F) -> Self
    where
        F: Fn(&S, &mut EventSink<E>) + Send + Sync + 'static,
    {
        self.hooks.state_exit.push(Arc::new(hook));
        self
    }

    /// Append a hook invoked with `(from, to)` for every fired transition.
    pub fn on_transition<F>(mut self, hook: F) -> Self
    where
        F: Fn(&S, &S, &mut EventSink<E>) + Send + Sync + 'static,
    {
        self.hooks.transition.push(Arc::new(hook));
        self
    }

    /// Append a hook invoked with `(event, state)` when no level of the
    /// hierarchy can handle an event.
    pub fn on_unhandled_event<F>(mut self, hook: F) -> Self
    where
        F: Fn(&E, &S, &mut EventSink<E>) + Send + Sync + 'static,
    {
        self.hooks.unhandled_event.push(Arc::new(hook));
        self
    }
}
