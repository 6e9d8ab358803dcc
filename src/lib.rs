//! Cascade: a hierarchical finite-state-machine execution engine.
//!
//! Cascade drives live machine instances from a static, declarative
//! description of states, transitions, guard conditions, and lifecycle
//! hooks. The engine guarantees deterministic hook ordering, safe
//! re-entrancy when hooks raise new events, and correct delegation across
//! parent/submachine boundaries.
//!
//! # Core Concepts
//!
//! - **Configuration**: an immutable tree built once via [`ConfigBuilder`]
//!   and shared read-only with every instance spawned from it
//! - **Instance**: a [`StateMachine`] created by `start`, driven by `handle`
//! - **Hooks**: first-class callables held in ordered lists; each receives an
//!   [`EventSink`] so it can raise follow-up events that run after the
//!   current transition completes
//! - **Submachines**: a state may declare a nested machine configuration;
//!   the instance entering that state starts a child instance and delegates
//!   events it cannot resolve locally
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
//!     .state("state2".to_string(), |state| {
//!         state.on("event2".to_string(), Transition::internal())
//!     })
//!     .build()?;
//!
//! let machine = StateMachine::start(config)?;
//! machine.handle("event1".to_string())?;
//! assert_eq!(machine.current_state(), "state2");
//! assert!(machine.can_handle(&"event2".to_string()));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod machine;

// Re-export the public surface
pub use crate::builder::{BuildError, ConfigBuilder, GlobalHooksBuilder, StateBuilder};
pub use crate::config::{ConfigError, GlobalHooks, MachineConfig, Transition, TransitionKind};
pub use crate::core::{Event, EventSink, State, TransitionHistory, TransitionRecord};
pub use crate::machine::{MachineError, StateMachine};
