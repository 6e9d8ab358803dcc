//! Transition definitions: kind, guard condition, and action.

use super::hooks::{Condition, TransitionHook};
use crate::core::{Event, EventSink, State};
use std::sync::Arc;

/// How a transition relates source and target state.
#[derive(Clone, Debug)]
pub enum TransitionKind<S> {
    /// Leave the current state and enter the named target state.
    External(S),
    /// Leave and re-enter the current state; exit and entry hooks fire.
    SelfTransition,
    /// Handle the event without leaving the state; only transition hooks and
    /// the action fire.
    Internal,
    /// Consume the event without running any hooks or changing state.
    Ignore,
}

/// A single transition rule: a kind, an optional guard condition, and an
/// optional action invoked with `(from, to)` between the exit and entry
/// phases.
///
/// Rules registered for the same event are tried in registration order; the
/// first rule whose condition is absent or evaluates true fires and no
/// further conditions are evaluated.
///
/// # Example
///
/// ```rust
/// use cascade::Transition;
///
/// let rule: Transition<String, String> = Transition::external("state2".to_string())
///     .when(|| true)
///     .with_action(|from, to, _sink| {
///         println!("{} -> {}", from, to);
///     });
/// ```
pub struct Transition<S: State, E: Event> {
    pub(crate) kind: TransitionKind<S>,
    pub(crate) condition: Option<Condition>,
    pub(crate) action: Option<TransitionHook<S, E>>,
}

impl<S: State, E: Event> Transition<S, E> {
    /// Transition to a different state, firing the full exit/entry sequence.
    pub fn external(target: S) -> Self {
        Self {
            kind: TransitionKind::External(target),
            condition: None,
            action: None,
        }
    }

    /// Explicitly leave and re-enter the current state.
    pub fn self_transition() -> Self {
        Self {
            kind: TransitionKind::SelfTransition,
            condition: None,
            action: None,
        }
    }

    /// Handle the event in place; no exit or entry hooks fire.
    pub fn internal() -> Self {
        Self {
            kind: TransitionKind::Internal,
            condition: None,
            action: None,
        }
    }

    /// Consume the event silently.
    pub fn ignore() -> Self {
        Self {
            kind: TransitionKind::Ignore,
            condition: None,
            action: None,
        }
    }

    /// Guard this rule with a condition. A rule without a condition always
    /// matches.
    pub fn when<F>(mut self, condition: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.condition = Some(Arc::new(condition));
        self
    }

    /// Attach an action invoked with `(from, to)` when the rule fires.
    pub fn with_action<F>(mut self, action: F) -> Self
    where
        F: Fn(&S, &S, &mut EventSink<E>) + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    /// Evaluate this rule's condition. True when no condition is set.
    pub(crate) fn matches(&self) -> bool {
        self.condition.as_ref().is_none_or(|condition| condition())
    }
}

impl<S: State, E: Event> Clone for Transition<S, E> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind.clone(),
            condition: self.condition.clone(),
            action: self.action.as_ref().map(Arc::clone),
        }
    }
}
