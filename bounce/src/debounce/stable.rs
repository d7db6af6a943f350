use super::{DebounceOutcome, DebouncePolicy, DebounceState};

/// Stable debouncer, the default policy.
///
/// Every change of the raw reading restarts the timer. A transition is accepted only after
/// the input has held its new level for the whole interval, so a noisy input never
/// produces a spurious transition. The price is one interval of latency per change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Stable;

impl DebouncePolicy for Stable {
    fn detect_change_with_debounce(state: &mut DebounceState<Self>, raw: bool, now_ms: u64) -> DebounceOutcome {
        // Still bouncing, restart the timer
        if raw != state.unstable() {
            state.track_unstable(raw, now_ms);
            return DebounceOutcome::InProgress;
        }

        if raw == state.read() {
            DebounceOutcome::Ignored
        } else if state.interval_elapsed(now_ms) {
            DebounceOutcome::Debounced
        } else {
            DebounceOutcome::InProgress
        }
    }
}
