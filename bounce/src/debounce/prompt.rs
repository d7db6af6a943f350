use super::{DebounceOutcome, DebouncePolicy, DebounceState};

/// Debouncer with prompt detection.
///
/// A change is accepted on the first tick it's seen, as long as the raw input has been
/// quiet for the interval before it. Every raw change restarts the timer, so during
/// bouncing no further transition is accepted until the input settles again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PromptDetection;

impl DebouncePolicy for PromptDetection {
    fn detect_change_with_debounce(state: &mut DebounceState<Self>, raw: bool, now_ms: u64) -> DebounceOutcome {
        let mut outcome = DebounceOutcome::Ignored;
        if raw != state.read() {
            outcome = if state.interval_elapsed(now_ms) {
                DebounceOutcome::Debounced
            } else {
                DebounceOutcome::InProgress
            };
        }

        // Checked independently of the acceptance above, both can happen in the same tick
        if raw != state.unstable() {
            state.track_unstable(raw, now_ms);
            if outcome == DebounceOutcome::Ignored {
                outcome = DebounceOutcome::InProgress;
            }
        }

        outcome
    }
}
