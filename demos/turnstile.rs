//! Coin-operated Turnstile
//!
//! The classic two-state turnstile: a coin unlocks it, a push locks it again.
//! Pushing a locked turnstile is not a registered transition, so the machine
//! drops into its error state and has to be reset.
//!
//! Key concepts:
//! - Building a machine with transitions, a circular transition and listeners
//! - Closure listeners alongside the built-in history recorder
//! - The error-state fallback on rejected events
//!
//! Run with: RUST_LOG=debug cargo run --example turnstile

use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use turnstile::{fsm_enum, HistoryRecorder, SharedListener, StateMachineBuilder};

fsm_enum! {
    enum Gate {
        Locked,
        Unlocked,
        Violated,
    }
}

fsm_enum! {
    enum Input {
        Coin,
        Push,
        Reset,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Turnstile State Machine ===\n");

    let announcer: SharedListener<Gate, Input> =
        Arc::new(|old: &Gate, input: &Input, new: &Gate| {
            println!("  {old:<9} --{input}--> {new}");
        });
    let recorder = Arc::new(HistoryRecorder::<Gate, Input>::new());

    let mut gate = match StateMachineBuilder::new(Gate::Violated)
        .transition(Gate::Locked, Input::Coin, Gate::Unlocked)
        .transition(Gate::Unlocked, Input::Push, Gate::Locked)
        .circular(Gate::Unlocked, Input::Coin)
        .transition(Gate::Violated, Input::Reset, Gate::Locked)
        .listener(announcer)
        .listener(recorder.clone())
        .start(Gate::Locked)
        .build()
    {
        Ok(gate) => gate,
        Err(err) => {
            eprintln!("invalid turnstile configuration: {err}");
            return;
        }
    };

    println!("Transitions:");
    for input in [
        Input::Coin,
        Input::Coin,
        Input::Push,
        Input::Push,
        Input::Reset,
    ] {
        if let Err(err) = gate.process(input) {
            println!("  rejected: {err}");
        }
    }

    let current = gate
        .current_state()
        .map_or("uninitialized", |state| state.name());
    println!("\nFinal state: {current}");

    let history = recorder.snapshot();
    println!("Accepted transitions: {}", history.len());
    match serde_json::to_string_pretty(&history) {
        Ok(json) => println!("\nHistory:\n{json}"),
        Err(err) => eprintln!("could not serialize history: {err}"),
    }

    println!("\n=== Example Complete ===");
}
