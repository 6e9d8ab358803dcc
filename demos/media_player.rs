//! Hierarchical Media Player
//!
//! This example demonstrates submachine delegation: the `Playing` state owns
//! a nested machine that tracks playback phase. Events the parent cannot
//! resolve are delegated to the active submachine; leaving `Playing` tears
//! the submachine down.
//!
//! Run with: cargo run --example media_player

use cascade::{ConfigBuilder, StateMachine, Transition};

fn s(name: &str) -> String {
    name.to_string()
}

fn main() {
    println!("=== Hierarchical Media Player ===\n");

    let playback = ConfigBuilder::new()
        .initial_state(s("buffering"))
        .state(s("buffering"), |state| {
            state
                .on_enter(|_, _| println!("  [playback] buffering..."))
                .on(s("buffered"), Transition::external(s("streaming")))
        })
        .state(s("streaming"), |state| {
            state.on_enter(|_, _| println!("  [playback] streaming"))
        })
        .build()
        .expect("playback configuration is complete");

    let config = ConfigBuilder::new()
        .initial_state(s("stopped"))
        .state(s("stopped"), |state| {
            state.on(s("play"), Transition::external(s("playing")))
        })
        .state(s("playing"), |state| {
            state
                .submachine(playback)
                .on(s("stop"), Transition::external(s("stopped")))
        })
        .global(|g| {
            g.on_state_enter(|state, _| println!("entered '{state}'"))
                .on_unhandled_event(|event, state, _| {
                    println!("'{event}' means nothing in '{state}'")
                })
        })
        .build()
        .expect("player configuration is complete");

    let player = StateMachine::start(config).expect("configuration is valid");

    player.handle(s("play")).expect("play is handled");
    println!(
        "player: {}, playback: {}",
        player.current_state(),
        player.submachine().expect("playing owns a submachine").current_state()
    );

    // The parent does not know "buffered"; the submachine does.
    player.handle(s("buffered")).expect("delegated to the submachine");
    println!(
        "player: {}, playback: {}",
        player.current_state(),
        player.submachine().expect("playing owns a submachine").current_state()
    );

    player.handle(s("stop")).expect("stop is handled");
    println!(
        "player: {}, playback gone: {}",
        player.current_state(),
        player.submachine().is_none()
    );

    // Nobody handles this one; the hook fires, then the error surfaces.
    let error = player.handle(s("eject")).unwrap_err();
    println!("error: {error}");

    println!("\n=== Example Complete ===");
}
