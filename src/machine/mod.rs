//! Live machine instances.
//!
//! [`StateMachine::start`] spawns an instance from an immutable
//! [`MachineConfig`], runs the initial entry sequence, and starts the initial
//! state's submachine if it declares one. [`StateMachine::handle`] enqueues
//! an event and drains the instance's FIFO queue one event at a time, so an
//! event raised from inside a hook never interleaves with the in-flight
//! transition: it runs after the current transition completes and before the
//! top-level `handle` call returns.
//!
//! Hook ordering for an external or self-transition from `A` to `B`:
//!
//! 1. global `state_exit` hooks with `A`, then `A`'s exit actions
//! 2. global `transition` hooks with `(A, B)`
//! 3. the fired rule's action with `(A, B)`
//! 4. global `state_enter` hooks with `B`, then `B`'s entry actions
//! 5. `current_state` becomes `B`, the old submachine is dropped, and `B`'s
//!    submachine (if declared) is started
//!
//! Internal transitions run only step 2 and 3 with `(A, A)`; ignored events
//! run nothing at all.

mod error;

pub use error::MachineError;

use crate::config::{MachineConfig, Transition, TransitionKind};
use crate::core::{Event, EventSink, State, TransitionHistory, TransitionRecord};
use chrono::Utc;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use std::sync::Arc;

struct Inner<S: State, E: Event> {
    config: Arc<MachineConfig<S, E>>,
    current: S,
    submachine: Option<StateMachine<S, E>>,
    // Upward delegation only; the parent owns this instance's lifetime.
    parent: Option<Weak<RefCell<Inner<S, E>>>>,
    queue: VecDeque<E>,
    dispatching: bool,
    history: TransitionHistory<S, E>,
}

/// A live state machine instance.
///
/// Instances are handles to shared single-threaded state: cloning a
/// `StateMachine` (or calling [`submachine`](Self::submachine)) yields
/// another handle to the same instance. The configuration is shared
/// read-only across the whole hierarchy.
///
/// # Example
///
/// ```rust
/// use cascade::{ConfigBuilder, StateMachine, Transition};
///
/// let config = ConfigBuilder::new()
///     .initial_state("red".to_string())
///     .state("red".to_string(), |state| {
///         state.on("go".to_string(), Transition::external("green".to_string()))
///     })
///     .state("green".to_string(), |state| state)
///     .build()?;
///
/// let machine = StateMachine::start(config)?;
/// assert_eq!(machine.current_state(), "red");
/// machine.handle("go".to_string())?;
/// assert_eq!(machine.current_state(), "green");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct StateMachine<S: State, E: Event> {
    inner: Rc<RefCell<Inner<S, E>>>,
}

impl<S: State, E: Event> std::fmt::Debug for StateMachine<S, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", &self.inner.borrow().current)
            .finish_non_exhaustive()
    }
}

impl<S: State, E: Event> Clone for StateMachine<S, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: State, E: Event> StateMachine<S, E> {
    /// Start a new instance from a configuration.
    ///
    /// The configuration tree is validated first; on success the initial
    /// entry hooks run, the initial state's submachine (if any) is started,
    /// and any events raised during entry are drained before returning.
    pub fn start(config: MachineConfig<S, E>) -> Result<Self, MachineError> {
        let config = Arc::new(config);
        config.validate()?;
        Self::spawn(config, None)
    }

    fn spawn(
        config: Arc<MachineConfig<S, E>>,
        parent: Option<Weak<RefCell<Inner<S, E>>>>,
    ) -> Result<Self, MachineError> {
        let current = config.initial_state().clone();
        let machine = Self {
            inner: Rc::new(RefCell::new(Inner {
                config,
                current,
                submachine: None,
                parent,
                queue: VecDeque::new(),
                dispatching: false,
                history: TransitionHistory::new(),
            })),
        };
        machine.enter_initial()?;
        machine.drain()?;
        Ok(machine)
    }

    /// The state this instance is currently in.
    pub fn current_state(&self) -> S {
        self.inner.borrow().current.clone()
    }

    /// The active submachine instance, if the current state declares one.
    pub fn submachine(&self) -> Option<StateMachine<S, E>> {
        self.inner.borrow().submachine.clone()
    }

    /// The transitions this instance has fired, in order.
    pub fn history(&self) -> TransitionHistory<S, E> {
        self.inner.borrow().history.clone()
    }

    /// True if any instance along the full ancestor and active-descendant
    /// chain has a transition registered for the event, independent of guard
    /// truth at the moment of the query.
    pub fn can_handle(&self, event: &E) -> bool {
        self.root().can_handle_down(event)
    }

    /// Enqueue an event and drain the queue.
    ///
    /// Each drained event is resolved against the current state; if no rule
    /// matches it is delegated to the active submachine. If no level of the
    /// hierarchy handles it, the unhandled-event hooks fire and the call
    /// fails with [`MachineError::UnhandledEvent`]; remaining queued events
    /// are abandoned.
    pub fn handle(&self, event: E) -> Result<&Self, MachineError> {
        self.inner.borrow_mut().queue.push_back(event);
        self.drain()?;
        Ok(self)
    }

    fn context(&self) -> (Arc<MachineConfig<S, E>>, S) {
        let inner = self.inner.borrow();
        (Arc::clone(&inner.config), inner.current.clone())
    }

    fn root(&self) -> StateMachine<S, E> {
        let mut node = self.clone();
        loop {
            let parent = node.inner.borrow().parent.as_ref().and_then(Weak::upgrade);
            match parent {
                Some(inner) => node = StateMachine { inner },
                None => return node,
            }
        }
    }

    fn can_handle_down(&self, event: &E) -> bool {
        if self.defines_locally(event) {
            return true;
        }
        let submachine = self.inner.borrow().submachine.clone();
        submachine.is_some_and(|sub| sub.can_handle_down(event))
    }

    fn defines_locally(&self, event: &E) -> bool {
        let (config, current) = self.context();
        config
            .state(&current)
            .is_some_and(|state_config| state_config.defines(event))
    }

    /// Drain the queue unless a drain is already in progress on this
    /// instance, in which case the active loop picks the new events up.
    fn drain(&self) -> Result<(), MachineError> {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.dispatching {
                return Ok(());
            }
            inner.dispatching = true;
        }
        let result = self.drain_loop();
        {
            let mut inner = self.inner.borrow_mut();
            inner.dispatching = false;
            if result.is_err() {
                inner.queue.clear();
            }
        }
        result
    }

    fn drain_loop(&self) -> Result<(), MachineError> {
        loop {
            let next = self.inner.borrow_mut().queue.pop_front();
            let Some(event) = next else {
                return Ok(());
            };
            if self.dispatch(&event)? {
                continue;
            }
            let (config, current) = self.context();
            let mut sink = EventSink::new();
            for hook in &config.hooks.unhandled_event {
                hook(&event, &current, &mut sink);
            }
            // The queue is abandoned when the error surfaces; anything the
            // unhandled hooks posted is discarded with it.
            return Err(MachineError::UnhandledEvent {
                event: event.name().to_string(),
                state: current.name().to_string(),
            });
        }
    }

    /// Resolve and fire one event at this level, delegating to the active
    /// submachine when no local rule matches. Returns false if no level of
    /// the active descendant chain handled it.
    fn dispatch(&self, event: &E) -> Result<bool, MachineError> {
        let (config, current) = self.context();
        if let Some(state_config) = config.state(&current) {
            if let Some(rule) = state_config.resolve(event) {
                self.fire(rule, event)?;
                return Ok(true);
            }
        }
        let submachine = self.inner.borrow().submachine.clone();
        if let Some(sub) = submachine {
            if sub.delegate(event)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Delegated dispatch: like a local `handle`, but an unresolvable event
    /// is reported back to the parent instead of firing unhandled hooks here.
    fn delegate(&self, event: &E) -> Result<bool, MachineError> {
        if self.dispatch(event)? {
            // Events raised by our hooks while handling the delegated event
            // belong to this instance's queue.
            self.drain()?;
            return Ok(true);
        }
        Ok(false)
    }

    fn fire(&self, rule: &Transition<S, E>, event: &E) -> Result<(), MachineError> {
        let (config, from) = self.context();
        match &rule.kind {
            TransitionKind::Ignore => Ok(()),
            TransitionKind::Internal => {
                let mut sink = EventSink::new();
                for hook in &config.hooks.transition {
                    hook(&from, &from, &mut sink);
                }
                if let Some(action) = &rule.action {
                    action(&from, &from, &mut sink);
                }
                self.record(from.clone(), from, event.clone());
                self.flush(sink);
                Ok(())
            }
            TransitionKind::External(_) | TransitionKind::SelfTransition => {
                let to = match &rule.kind {
                    TransitionKind::External(target) => target.clone(),
                    _ => from.clone(),
                };
                let mut sink = EventSink::new();
                for hook in &config.hooks.state_exit {
                    hook(&from, &mut sink);
                }
                if let Some(from_config) = config.state(&from) {
                    for action in &from_config.exit_actions {
                        action(&from, &mut sink);
                    }
                }
                for hook in &config.hooks.transition {
                    hook(&from, &to, &mut sink);
                }
                if let Some(action) = &rule.action {
                    action(&from, &to, &mut sink);
                }
                for hook in &config.hooks.state_enter {
                    hook(&to, &mut sink);
                }
                if let Some(to_config) = config.state(&to) {
                    for action in &to_config.entry_actions {
                        action(&to, &mut sink);
                    }
                }
                {
                    let mut inner = self.inner.borrow_mut();
                    inner.current = to.clone();
                    // The old submachine is dropped before any replacement
                    // starts, even on self-transitions.
                    inner.submachine = None;
                }
                self.spawn_submachine(&config, &to)?;
                self.record(from, to, event.clone());
                self.flush(sink);
                Ok(())
            }
        }
    }

    fn enter_initial(&self) -> Result<(), MachineError> {
        let (config, current) = self.context();
        let mut sink = EventSink::new();
        for hook in &config.hooks.state_enter {
            hook(&current, &mut sink);
        }
        if let Some(state_config) = config.state(&current) {
            for action in &state_config.entry_actions {
                action(&current, &mut sink);
            }
        }
        self.spawn_submachine(&config, &current)?;
        self.flush(sink);
        Ok(())
    }

    fn spawn_submachine(
        &self,
        config: &MachineConfig<S, E>,
        state: &S,
    ) -> Result<(), MachineError> {
        let sub_config = config
            .state(state)
            .and_then(|state_config| state_config.submachine.clone());
        if let Some(sub_config) = sub_config {
            let child = StateMachine::spawn(sub_config, Some(Rc::downgrade(&self.inner)))?;
            self.inner.borrow_mut().submachine = Some(child);
        }
        Ok(())
    }

    fn record(&self, from: S, to: S, event: E) {
        let mut inner = self.inner.borrow_mut();
        inner.history = inner.history.record(TransitionRecord {
            from,
            to,
            event,
            timestamp: Utc::now(),
        });
    }

    fn flush(&self, mut sink: EventSink<E>) {
        self.inner.borrow_mut().queue.extend(sink.take());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ConfigBuilder;
    use crate::config::ConfigError;
    use std::sync::Mutex;

    fn s(name: &str) -> String {
        name.to_string()
    }

    type Log = Arc<Mutex<Vec<&'static str>>>;

    fn log() -> Log {
        Arc::new(Mutex::new(Vec::new()))
    }

    fn push(log: &Log, entry: &'static str) {
        log.lock().unwrap().push(entry);
    }

    fn entries(log: &Log) -> Vec<&'static str> {
        log.lock().unwrap().clone()
    }

    #[test]
    fn starts_in_initial_state() {
        let config = ConfigBuilder::<String, String>::new()
            .initial_state(s("state1"))
            .build()
            .unwrap();

        let machine = StateMachine::start(config).unwrap();
        assert_eq!(machine.current_state(), "state1");
    }

    #[test]
    fn start_runs_enter_hooks_for_initial_state() {
        let calls = log();
        let global = calls.clone();
        let entry = calls.clone();

        let config = ConfigBuilder::<String, String>::new()
            .initial_state(s("state1"))
            .state(s("state1"), |state| {
                state.on_enter(move |current, _| {
                    assert_eq!(current, "state1");
                    push(&entry, "entry action");
                })
            })
            .global(|g| {
                g.on_state_enter(move |current, _| {
                    assert_eq!(current, "state1");
                    push(&global, "stateEnter hook");
                })
            })
            .build()
            .unwrap();

        StateMachine::start(config).unwrap();
        assert_eq!(entries(&calls), vec!["stateEnter hook", "entry action"]);
    }

    #[test]
    fn start_rejects_undefined_transition_target() {
        // Builder permits it; start validates the tree.
        let config = ConfigBuilder::<String, String>::new()
            .initial_state(s("state1"))
            .state(s("state1"), |state| {
                state.on(s("event1"), Transition::external(s("nowhere")))
            })
            .build()
            .unwrap();

        let result = StateMachine::start(config);
        assert!(matches!(
            result,
            Err(MachineError::Configuration(
                ConfigError::UndefinedTargetState { .. }
            ))
        ));
    }

    #[test]
    fn can_handle_reflects_registered_transitions() {
        let config = ConfigBuilder::<String, String>::new()
            .initial_state(s("state1"))
            .state(s("state1"), |state| {
                state.on(s("event1"), Transition::external(s("state2")))
            })
            .state(s("state2"), |state| state)
            .build()
            .unwrap();

        let machine = StateMachine::start(config).unwrap();
        assert!(machine.can_handle(&s("event1")));
        assert!(!machine.can_handle(&s("event2")));
    }

    #[test]
    fn handle_transitions_to_next_state() {
        let config = ConfigBuilder::<String, String>::new()
            .initial_state(s("state1"))
            .state(s("state1"), |state| {
                state.on(s("event1"), Transition::external(s("state2")))
            })
            .state(s("state2"), |state| state)
            .build()
            .unwrap();

        let machine = StateMachine::start(config).unwrap();
        machine.handle(s("event1")).unwrap();
        assert_eq!(machine.current_state(), "state2");
    }

    #[test]
    fn first_matching_condition_wins() {
        let config = ConfigBuilder::<String, String>::new()
            .initial_state(s("state1"))
            .state(s("state1"), |state| {
                state
                    .on(s("event1"), Transition::external(s("state2")).when(|| false))
                    .on(s("event1"), Transition::external(s("state3")).when(|| true))
                    .on(s("event1"), Transition::external(s("state4")).when(|| true))
            })
            .state(s("state2"), |state| state)
            .state(s("state3"), |state| state)
            .state(s("state4"), |state| state)
            .build()
            .unwrap();

        let machine = StateMachine::start(config).unwrap();
        machine.handle(s("event1")).unwrap();
        assert_eq!(machine.current_state(), "state3");
    }

    #[test]
    fn handle_fails_for_unhandled_event() {
        let config = ConfigBuilder::<String, String>::new()
            .initial_state(s("state1"))
            .build()
            .unwrap();

        let machine = StateMachine::start(config).unwrap();
        let error = machine.handle(s("event1")).unwrap_err();
        match error {
            MachineError::UnhandledEvent { event, state } => {
                assert_eq!(event, "event1");
                assert_eq!(state, "state1");
            }
            other => panic!("expected unhandled event error, got {other:?}"),
        }
    }

    #[test]
    fn unhandled_event_hook_fires_before_the_error() {
        let calls = log();
        let hook_calls = calls.clone();

        let config = ConfigBuilder::<String, String>::new()
            .initial_state(s("state1"))
            .global(|g| {
                g.on_unhandled_event(move |event, state, _| {
                    assert_eq!(event, "event1");
                    assert_eq!(state, "state1");
                    push(&hook_calls, "unhandledEvent hook");
                })
            })
            .build()
            .unwrap();

        let machine = StateMachine::start(config).unwrap();
        assert!(machine.handle(s("event1")).is_err());
        assert_eq!(entries(&calls), vec!["unhandledEvent hook"]);
    }

    #[test]
    fn hooks_run_in_prescribed_order() {
        let calls = log();

        let config = {
            let enter = calls.clone();
            let exit = calls.clone();
            let transition = calls.clone();
            let entry1 = calls.clone();
            let exit1 = calls.clone();
            let action = calls.clone();
            let entry2 = calls.clone();

            ConfigBuilder::<String, String>::new()
                .global(|g| {
                    g.on_state_enter(move |_, _| push(&enter, "stateEnter hook"))
                        .on_state_exit(move |_, _| push(&exit, "stateExit hook"))
                        .on_transition(move |_, _, _| push(&transition, "transition hook"))
                })
                .initial_state(s("state1"))
                .state(s("state1"), |state| {
                    state
                        .on_enter(move |_, _| push(&entry1, "state1 entry action"))
                        .on_exit(move |_, _| push(&exit1, "state1 exit action"))
                        .on(
                            s("event"),
                            Transition::external(s("state2")).with_action(move |_, _, _| {
                                push(&action, "state1->state2 transition action")
                            }),
                        )
                })
                .state(s("state2"), |state| {
                    state.on_enter(move |_, _| push(&entry2, "state2 entry action"))
                })
                .build()
                .unwrap()
        };

        let machine = StateMachine::start(config).unwrap();
        machine.handle(s("event")).unwrap();

        assert_eq!(
            entries(&calls),
            vec![
                "stateEnter hook",
                "state1 entry action",
                "stateExit hook",
                "state1 exit action",
                "transition hook",
                "state1->state2 transition action",
                "stateEnter hook",
                "state2 entry action",
            ]
        );
    }

    #[test]
    fn self_transition_fires_full_sequence_with_same_state() {
        let calls = log();

        let config = {
            let enter = calls.clone();
            let exit = calls.clone();
            let transition = calls.clone();
            let entry = calls.clone();
            let exit_action = calls.clone();
            let action = calls.clone();

            ConfigBuilder::<String, String>::new()
                .global(|g| {
                    g.on_state_enter(move |state, _| {
                        assert_eq!(state, "state1");
                        push(&enter, "stateEnter hook");
                    })
                    .on_state_exit(move |state, _| {
                        assert_eq!(state, "state1");
                        push(&exit, "stateExit hook");
                    })
                    .on_transition(move |from, to, _| {
                        assert_eq!((from.as_str(), to.as_str()), ("state1", "state1"));
                        push(&transition, "transition hook");
                    })
                })
                .initial_state(s("state1"))
                .state(s("state1"), |state| {
                    state
                        .on_enter(move |_, _| push(&entry, "entry action"))
                        .on_exit(move |_, _| push(&exit_action, "exit action"))
                        .on(
                            s("event1"),
                            Transition::self_transition()
                                .with_action(move |_, _, _| push(&action, "transition action")),
                        )
                })
                .build()
                .unwrap()
        };

        let machine = StateMachine::start(config).unwrap();
        calls.lock().unwrap().clear();

        machine.handle(s("event1")).unwrap();
        assert_eq!(
            entries(&calls),
            vec![
                "stateExit hook",
                "exit action",
                "transition hook",
                "transition action",
                "stateEnter hook",
                "entry action",
            ]
        );
        assert_eq!(machine.current_state(), "state1");
    }

    #[test]
    fn internal_transition_fires_only_transition_hooks() {
        let calls = log();

        let config = {
            let enter = calls.clone();
            let exit = calls.clone();
            let transition = calls.clone();
            let entry = calls.clone();
            let exit_action = calls.clone();
            let action = calls.clone();

            ConfigBuilder::<String, String>::new()
                .global(|g| {
                    g.on_state_enter(move |_, _| push(&enter, "stateEnter hook"))
                        .on_state_exit(move |_, _| push(&exit, "stateExit hook"))
                        .on_transition(move |from, to, _| {
                            assert_eq!((from.as_str(), to.as_str()), ("state1", "state1"));
                            push(&transition, "transition hook");
                        })
                })
                .initial_state(s("state1"))
                .state(s("state1"), |state| {
                    state
                        .on_enter(move |_, _| push(&entry, "entry action"))
                        .on_exit(move |_, _| push(&exit_action, "exit action"))
                        .on(
                            s("event1"),
                            Transition::internal()
                                .with_action(move |_, _, _| push(&action, "transition action")),
                        )
                })
                .build()
                .unwrap()
        };

        let machine = StateMachine::start(config).unwrap();
        calls.lock().unwrap().clear();

        machine.handle(s("event1")).unwrap();
        assert_eq!(entries(&calls), vec!["transition hook", "transition action"]);
        assert_eq!(machine.current_state(), "state1");
    }

    #[test]
    fn ignored_event_is_consumed_silently() {
        let calls = log();
        let transition = calls.clone();

        let config = ConfigBuilder::<String, String>::new()
            .global(|g| g.on_transition(move |_, _, _| push(&transition, "transition hook")))
            .initial_state(s("state1"))
            .state(s("state1"), |state| state.on(s("event1"), Transition::ignore()))
            .build()
            .unwrap();

        let machine = StateMachine::start(config).unwrap();
        assert!(machine.can_handle(&s("event1")));
        machine.handle(s("event1")).unwrap();

        assert_eq!(machine.current_state(), "state1");
        assert!(entries(&calls).is_empty());
        assert!(machine.history().records().is_empty());
    }

    #[test]
    fn event_posted_from_entry_action_is_processed() {
        let config = ConfigBuilder::<String, String>::new()
            .initial_state(s("state1"))
            .state(s("state1"), |state| {
                state.on(s("event1"), Transition::external(s("state2")))
            })
            .state(s("state2"), |state| {
                state
                    .on_enter(|_, sink| sink.post("event2".to_string()))
                    .on(s("event2"), Transition::external(s("state3")))
            })
            .state(s("state3"), |state| state)
            .build()
            .unwrap();

        let machine = StateMachine::start(config).unwrap();
        machine.handle(s("event1")).unwrap();
        assert_eq!(machine.current_state(), "state3");
    }

    #[test]
    fn event_posted_mid_transition_runs_after_it_completes() {
        let calls = log();

        let config = {
            let exit1 = calls.clone();
            let action12 = calls.clone();
            let entry2 = calls.clone();
            let exit2 = calls.clone();
            let action23 = calls.clone();
            let entry3 = calls.clone();

            ConfigBuilder::<String, String>::new()
                .initial_state(s("state1"))
                .state(s("state1"), |state| {
                    state
                        .on(
                            s("event1"),
                            Transition::external(s("state2")).with_action(move |_, _, _| {
                                push(&action12, "state1->state2 transition action")
                            }),
                        )
                        .on_exit(move |_, sink| {
                            sink.post("event2".to_string());
                            push(&exit1, "state1 exit action");
                        })
                })
                .state(s("state2"), |state| {
                    state
                        .on_enter(move |_, _| push(&entry2, "state2 entry action"))
                        .on_exit(move |_, _| push(&exit2, "state2 exit action"))
                        .on(
                            s("event2"),
                            Transition::external(s("state3")).with_action(move |_, _, _| {
                                push(&action23, "state2->state3 transition action")
                            }),
                        )
                })
                .state(s("state3"), |state| {
                    state.on_enter(move |_, _| push(&entry3, "state3 entry action"))
                })
                .build()
                .unwrap()
        };

        let machine = StateMachine::start(config).unwrap();
        machine.handle(s("event1")).unwrap();

        assert_eq!(machine.current_state(), "state3");
        assert_eq!(
            entries(&calls),
            vec![
                "state1 exit action",
                "state1->state2 transition action",
                "state2 entry action",
                "state2 exit action",
                "state2->state3 transition action",
                "state3 entry action",
            ]
        );
    }

    #[test]
    fn queue_is_abandoned_when_a_queued_event_is_unhandled() {
        let config = ConfigBuilder::<String, String>::new()
            .initial_state(s("state1"))
            .state(s("state1"), |state| {
                state.on(s("event1"), Transition::external(s("state2")))
            })
            .state(s("state2"), |state| {
                state.on_enter(|_, sink| {
                    sink.post("bogus".to_string());
                    sink.post("also-lost".to_string());
                })
            })
            .build()
            .unwrap();

        let machine = StateMachine::start(config).unwrap();
        let error = machine.handle(s("event1")).unwrap_err();

        assert!(matches!(error, MachineError::UnhandledEvent { .. }));
        // The transition itself completed; no rollback is attempted.
        assert_eq!(machine.current_state(), "state2");
        // "also-lost" was dropped with the abandoned queue: the next failure
        // reports the new event, not a leftover one.
        match machine.handle(s("nope")).unwrap_err() {
            MachineError::UnhandledEvent { event, .. } => assert_eq!(event, "nope"),
            other => panic!("expected unhandled event error, got {other:?}"),
        }
    }

    #[test]
    fn history_records_fired_transitions() {
        let config = ConfigBuilder::<String, String>::new()
            .initial_state(s("state1"))
            .state(s("state1"), |state| {
                state.on(s("event1"), Transition::external(s("state2")))
            })
            .state(s("state2"), |state| {
                state.on(s("event2"), Transition::external(s("state3")))
            })
            .state(s("state3"), |state| state)
            .build()
            .unwrap();

        let machine = StateMachine::start(config).unwrap();
        machine
            .handle(s("event1"))
            .unwrap()
            .handle(s("event2"))
            .unwrap();

        let history = machine.history();
        assert_eq!(history.get_path(), vec!["state1", "state2", "state3"]);
        assert_eq!(history.records()[0].event, "event1");
        assert_eq!(history.records()[1].event, "event2");
    }

    #[test]
    fn handle_is_fluent() {
        let config = ConfigBuilder::<String, String>::new()
            .initial_state(s("state1"))
            .state(s("state1"), |state| {
                state.on(s("event1"), Transition::external(s("state2")))
            })
            .state(s("state2"), |state| {
                state.on(s("event2"), Transition::external(s("state1")))
            })
            .build()
            .unwrap();

        let machine = StateMachine::start(config).unwrap();
        machine
            .handle(s("event1"))
            .unwrap()
            .handle(s("event2"))
            .unwrap();
        assert_eq!(machine.current_state(), "state1");
    }
}
