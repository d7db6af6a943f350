use super::{DebounceOutcome, DebouncePolicy, DebounceState};

/// Lock-out debouncer.
///
/// A change is accepted on the first tick it's seen, then all input is ignored for the
/// interval. There's no latency, but a re-press during the lock-out window is missed.
///
/// The lock-out window also runs from t = 0 after configuring, so an input attached within
/// the first interval of the clock is ignored until the clock passes the interval.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LockOut;

impl DebouncePolicy for LockOut {
    fn initial_timestamp(_now_ms: u64) -> u64 {
        0
    }

    fn detect_change_with_debounce(state: &mut DebounceState<Self>, raw: bool, now_ms: u64) -> DebounceOutcome {
        if !state.interval_elapsed(now_ms) {
            // Locked out
            return DebounceOutcome::Ignored;
        }

        if raw != state.read() {
            DebounceOutcome::Debounced
        } else {
            DebounceOutcome::Ignored
        }
    }
}
