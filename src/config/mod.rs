//! Immutable machine configuration.
//!
//! A [`MachineConfig`] is a read-only tree produced by the
//! [builder](crate::builder): an initial state, a map from state to
//! [`StateConfig`], and a [`GlobalHooks`] set. Configurations are shared by
//! reference (`Arc`) with every instance spawned from them and are never
//! mutated or inspected beyond this structure by the engine.

mod error;
mod hooks;
mod transition;

pub use error::ConfigError;
pub use hooks::{Condition, GlobalHooks, StateHook, TransitionHook, UnhandledHook};
pub use transition::{Transition, TransitionKind};

use crate::core::{Event, State};
use std::collections::HashMap;
use std::sync::Arc;

/// Immutable configuration for one machine in the hierarchy.
pub struct MachineConfig<S: State, E: Event> {
    pub(crate) initial: S,
    pub(crate) states: HashMap<S, StateConfig<S, E>>,
    pub(crate) hooks: GlobalHooks<S, E>,
}

impl<S: State, E: Event> MachineConfig<S, E> {
    /// The state a fresh instance starts in.
    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    pub(crate) fn state(&self, state: &S) -> Option<&StateConfig<S, E>> {
        self.states.get(state)
    }

    /// Check the whole tree: the initial state and every external transition
    /// target must name a declared state, recursively through submachine
    /// configurations.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !self.states.contains_key(&self.initial) {
            return Err(ConfigError::UndefinedInitialState {
                state: self.initial.name().to_string(),
            });
        }
        for (state, state_config) in &self.states {
            for rules in state_config.transitions.values() {
                for rule in rules {
                    if let TransitionKind::External(target) = &rule.kind {
                        if !self.states.contains_key(target) {
                            return Err(ConfigError::UndefinedTargetState {
                                from: state.name().to_string(),
                                target: target.name().to_string(),
                            });
                        }
                    }
                }
            }
            if let Some(submachine) = &state_config.submachine {
                submachine.validate()?;
            }
        }
        Ok(())
    }
}

/// Declarative description of a single state: entry/exit actions, the ordered
/// transition rules per event, and an optional nested submachine
/// configuration.
pub struct StateConfig<S: State, E: Event> {
    pub(crate) entry_actions: Vec<StateHook<S, E>>,
    pub(crate) exit_actions: Vec<StateHook<S, E>>,
    pub(crate) transitions: HashMap<E, Vec<Transition<S, E>>>,
    pub(crate) submachine: Option<Arc<MachineConfig<S, E>>>,
}

impl<S: State, E: Event> Default for StateConfig<S, E> {
    fn default() -> Self {
        Self {
            entry_actions: Vec::new(),
            exit_actions: Vec::new(),
            transitions: HashMap::new(),
            submachine: None,
        }
    }
}

impl<S: State, E: Event> StateConfig<S, E> {
    /// Resolve an event against this state's transition rules.
    ///
    /// Rules registered for the event are tried in declaration order; the
    /// first rule whose condition is absent or evaluates true is returned and
    /// later conditions are not evaluated. `None` means the event is
    /// unhandled at this level. No side effects.
    pub(crate) fn resolve(&self, event: &E) -> Option<&Transition<S, E>> {
        self.transitions
            .get(event)?
            .iter()
            .find(|rule| rule.matches())
    }

    /// True if at least one transition rule is registered for the event,
    /// ignoring condition results.
    pub(crate) fn defines(&self, event: &E) -> bool {
        self.transitions
            .get(event)
            .is_some_and(|rules| !rules.is_empty())
    }
}
