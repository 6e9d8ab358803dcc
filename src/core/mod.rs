//! Core vocabulary of the engine.
//!
//! - `State` and `Event` traits describe the machine's alphabet
//! - `EventSink` lets hooks raise events without re-entering the machine
//! - `TransitionHistory` tracks the transitions an instance has fired

mod event;
mod history;
mod sink;
mod state;

pub use event::Event;
pub use history::{TransitionHistory, TransitionRecord};
pub use sink::EventSink;
pub use state::State;
