//! Hook types and the global hook set.
//!
//! Hooks are first-class callable values held in ordered lists and invoked in
//! registration order. Every hook receives `&mut EventSink<E>` as its final
//! argument so it can raise follow-up events (see [`EventSink`]).

use crate::core::{Event, EventSink, State};
use std::sync::Arc;

/// Hook invoked with a single state: entry/exit actions and the global
/// `state_enter` / `state_exit` hooks.
pub type StateHook<S, E> = Arc<dyn Fn(&S, &mut EventSink<E>) + Send + Sync>;

/// Hook invoked with `(from, to)`: the global `transition` hooks and
/// per-transition actions.
pub type TransitionHook<S, E> = Arc<dyn Fn(&S, &S, &mut EventSink<E>) + Send + Sync>;

/// Hook invoked with `(event, current_state)` when no level of the hierarchy
/// can resolve an event.
pub type UnhandledHook<S, E> = Arc<dyn Fn(&E, &S, &mut EventSink<E>) + Send + Sync>;

/// Guard predicate evaluated when resolving a transition.
pub type Condition = Arc<dyn Fn() -> bool + Send + Sync>;

/// Hooks registered once per configuration and invoked for every relevant
/// state or transition of the machine that owns them.
///
/// Submachine configurations carry their own independent hook set.
pub struct GlobalHooks<S: State, E: Event> {
    pub(crate) state_enter: Vec<StateHook<S, E>>,
    pub(crate) state_exit: Vec<StateHook<S, E>>,
    pub(crate) transition: Vec<TransitionHook<S, E>>,
    pub(crate) unhandled_event: Vec<UnhandledHook<S, E>>,
}

impl<S: State, E: Event> Default for GlobalHooks<S, E> {
    fn default() -> Self {
        Self {
            state_enter: Vec::new(),
            state_exit: Vec::new(),
            transition: Vec::new(),
            unhandled_event: Vec::new(),
        }
    }
}

impl<S: State, E: Event> Clone for GlobalHooks<S, E> {
    fn clone(&self) -> Self {
        Self {
            state_enter: self.state_enter.clone(),
            state_exit: self.state_exit.clone(),
            transition: self.transition.clone(),
            unhandled_event: self.unhandled_event.clone(),
        }
    }
}
