#![allow(dead_code)]

use bounce::{Button, DebouncePolicy, RawSource};
use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Debounced event seen while running a trace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Rose(u64),
    Fell(u64),
}

/// Mock pin returning `states` in order, one per read
pub fn pin_with_states(states: &[State]) -> PinMock {
    let expectations: Vec<Transaction> = states.iter().map(|s| Transaction::get(*s)).collect();
    PinMock::new(&expectations)
}

/// Pin states of a raw trace: one for `attach`, then one per tick in `ticks`.
pub fn states_from_fn(ticks: core::ops::RangeInclusive<u64>, level: impl Fn(u64) -> State) -> Vec<State> {
    let start = *ticks.start();
    core::iter::once(level(start)).chain(ticks.map(level)).collect()
}

/// Attach at the first tick, update once per tick, and collect the debounced edges
pub fn run_ticks<S: RawSource, P: DebouncePolicy>(
    button: &mut Button<S, P>,
    ticks: core::ops::RangeInclusive<u64>,
) -> Vec<Edge> {
    button.attach(*ticks.start());
    let mut edges = Vec::new();
    for t in ticks {
        if button.update(t) {
            assert_ne!(button.rose(), button.fell());
            if button.rose() {
                edges.push(Edge::Rose(t));
            } else {
                edges.push(Edge::Fell(t));
            }
        } else {
            assert!(!button.changed());
        }
    }
    edges
}
