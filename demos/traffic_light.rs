//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine with global
//! hooks observing every transition.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Enum states and events via the generator macros
//! - Global hooks observing entry and transitions
//!
//! Run with: cargo run --example traffic_light

use cascade::{event_enum, state_enum, ConfigBuilder, StateMachine, Transition};

state_enum! {
    enum TrafficLight {
        Red,
        Yellow,
        Green,
    }
}

event_enum! {
    enum Tick {
        Next,
    }
}

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let config = ConfigBuilder::new()
        .initial_state(TrafficLight::Red)
        .state(TrafficLight::Red, |state| {
            state.on(Tick::Next, Transition::external(TrafficLight::Green))
        })
        .state(TrafficLight::Green, |state| {
            state.on(Tick::Next, Transition::external(TrafficLight::Yellow))
        })
        .state(TrafficLight::Yellow, |state| {
            state.on(Tick::Next, Transition::external(TrafficLight::Red))
        })
        .global(|g| {
            g.on_transition(|from, to, _| println!("  {:?} -> {:?}", from, to))
        })
        .build()
        .expect("configuration is complete");

    let machine = StateMachine::start(config).expect("configuration is valid");
    println!("Initial state: {:?}\n", machine.current_state());

    println!("One full cycle:");
    for _ in 0..3 {
        machine.handle(Tick::Next).expect("Next is always handled");
    }

    println!("\nBack at: {:?}", machine.current_state());
    println!(
        "Path taken: {:?}",
        machine
            .history()
            .get_path()
            .iter()
            .map(|state| format!("{state:?}"))
            .collect::<Vec<_>>()
    );

    println!("\n=== Example Complete ===");
}
