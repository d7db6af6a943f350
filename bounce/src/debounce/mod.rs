use core::marker::PhantomData;

use crate::config::{DEFAULT_INTERVAL_MS, DebounceConfig};

pub mod lock_out;
pub mod prompt;
pub mod stable;

pub use lock_out::LockOut;
pub use prompt::PromptDetection;
pub use stable::Stable;

/// Timing policy of a [`DebounceState`].
///
/// A policy only decides whether the current raw reading completes a transition. The
/// shared effects of an accepted transition are applied by [`DebounceState::update`].
pub trait DebouncePolicy: Sized {
    /// Timestamp recorded when the state is (re)configured.
    fn initial_timestamp(now_ms: u64) -> u64 {
        now_ms
    }

    fn detect_change_with_debounce(state: &mut DebounceState<Self>, raw: bool, now_ms: u64) -> DebounceOutcome;
}

/// Result of feeding one raw reading to a policy
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceOutcome {
    /// The raw reading is accepted as the new state
    Debounced,
    /// A change is seen but not (yet) accepted
    InProgress,
    /// Nothing to do
    Ignored,
}

/// Packed state bits of a debounced input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) struct StateFlags(u8);

impl StateFlags {
    /// Debounced (accepted) state
    pub(crate) const DEBOUNCED: u8 = 0b0000_0001;
    /// Last raw reading
    pub(crate) const UNSTABLE: u8 = 0b0000_0010;
    /// The debounced state changed in the last update
    pub(crate) const CHANGED: u8 = 0b0000_0100;
    /// Pressed latch, cleared by `consume_pressed`
    pub(crate) const PRESSED: u8 = 0b0000_1000;

    #[inline]
    pub(crate) fn set(&mut self, flag: u8) {
        self.0 |= flag;
    }

    #[inline]
    pub(crate) fn unset(&mut self, flag: u8) {
        self.0 &= !flag;
    }

    #[inline]
    pub(crate) fn toggle(&mut self, flag: u8) {
        self.0 ^= flag;
    }

    #[inline]
    pub(crate) fn get(&self, flag: u8) -> bool {
        self.0 & flag != 0
    }
}

/// Debounce state of a single input.
///
/// The state is a pure reducer: feed it one raw reading per polling tick with
/// [`update`](Self::update). Timestamps are in ms from any monotonic clock, counter
/// wraparound is fine since elapsed time is always computed with wrapping arithmetic.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceState<P: DebouncePolicy = Stable> {
    flags: StateFlags,
    /// Timestamp of the last accepted or candidate transition
    last_transition_ms: u64,
    interval_ms: u16,
    _policy: PhantomData<P>,
}

impl<P: DebouncePolicy> Default for DebounceState<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: DebouncePolicy> DebounceState<P> {
    /// Create a debounce state with the default interval.
    ///
    /// A fresh state behaves as if it was configured with a released input at t = 0.
    pub fn new() -> Self {
        Self::with_interval(DEFAULT_INTERVAL_MS)
    }

    pub fn with_interval(interval_ms: u16) -> Self {
        DebounceState {
            flags: StateFlags::default(),
            last_transition_ms: 0,
            interval_ms,
            _policy: PhantomData,
        }
    }

    pub fn with_config(config: DebounceConfig) -> Self {
        Self::with_interval(config.interval_ms)
    }

    /// Reset the state to the current raw reading.
    ///
    /// The initial reading becomes the accepted state, so the startup condition is never
    /// reported as a transition.
    pub fn configure(&mut self, initial_raw: bool, now_ms: u64) {
        self.flags = StateFlags::default();
        if initial_raw {
            self.flags.set(StateFlags::DEBOUNCED | StateFlags::UNSTABLE);
        }
        self.last_transition_ms = P::initial_timestamp(now_ms);
    }

    /// Set the debounce interval. A pending transition keeps its start time.
    pub fn set_interval(&mut self, interval_ms: u16) {
        self.interval_ms = interval_ms;
    }

    pub fn interval(&self) -> u16 {
        self.interval_ms
    }

    /// Feed a raw reading, returns true if the debounced state changed.
    pub fn update(&mut self, raw: bool, now_ms: u64) -> bool {
        self.flags.unset(StateFlags::CHANGED);

        match P::detect_change_with_debounce(self, raw, now_ms) {
            DebounceOutcome::Debounced => {
                self.flags.toggle(StateFlags::DEBOUNCED);
                self.flags.set(StateFlags::CHANGED | StateFlags::PRESSED);
                self.last_transition_ms = now_ms;
                debug!("Debounced to {} at {}ms", self.read(), now_ms);
                true
            }
            outcome => {
                trace!("Debounce {:?}, raw: {}, at {}ms", outcome, raw, now_ms);
                false
            }
        }
    }

    /// The debounced state
    pub fn read(&self) -> bool {
        self.flags.get(StateFlags::DEBOUNCED)
    }

    /// The debounced state went from released to pressed in the last update
    pub fn rose(&self) -> bool {
        self.flags.get(StateFlags::DEBOUNCED) && self.flags.get(StateFlags::CHANGED)
    }

    /// The debounced state went from pressed to released in the last update
    pub fn fell(&self) -> bool {
        !self.flags.get(StateFlags::DEBOUNCED) && self.flags.get(StateFlags::CHANGED)
    }

    /// The debounced state changed in the last update
    pub fn changed(&self) -> bool {
        self.flags.get(StateFlags::CHANGED)
    }

    /// Returns true once per press.
    ///
    /// The latch is only cleared when this returns true, so a held button reports a single
    /// press, and the next one is reported after it's released and pressed again.
    pub fn consume_pressed(&mut self) -> bool {
        let pressed = self.flags.get(StateFlags::DEBOUNCED) && self.flags.get(StateFlags::PRESSED);
        if pressed {
            self.flags.unset(StateFlags::PRESSED);
        }
        pressed
    }

    /// The last raw reading seen by the policy
    pub fn unstable(&self) -> bool {
        self.flags.get(StateFlags::UNSTABLE)
    }

    /// Time since the last accepted or candidate transition
    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.wrapping_sub(self.last_transition_ms)
    }

    pub fn interval_elapsed(&self, now_ms: u64) -> bool {
        self.elapsed_ms(now_ms) >= u64::from(self.interval_ms)
    }

    /// Record a new raw reading and restart the timer, for policies tracking bounces.
    pub fn track_unstable(&mut self, raw: bool, now_ms: u64) {
        if raw {
            self.flags.set(StateFlags::UNSTABLE);
        } else {
            self.flags.unset(StateFlags::UNSTABLE);
        }
        self.last_transition_ms = now_ms;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[ctor::ctor]
    fn init_log() {
        let _ = env_logger::builder()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    fn press<P: DebouncePolicy>(state: &mut DebounceState<P>, raw: bool, from: u64, to: u64) -> Option<u64> {
        (from..=to).find(|&t| state.update(raw, t))
    }

    #[test]
    fn test_flags() {
        let mut flags = StateFlags::default();
        flags.set(StateFlags::DEBOUNCED | StateFlags::PRESSED);
        assert!(flags.get(StateFlags::DEBOUNCED));
        assert!(flags.get(StateFlags::PRESSED));
        assert!(!flags.get(StateFlags::UNSTABLE));

        flags.toggle(StateFlags::DEBOUNCED);
        assert!(!flags.get(StateFlags::DEBOUNCED));
        flags.unset(StateFlags::PRESSED);
        assert_eq!(flags, StateFlags::default());
    }

    #[test]
    fn test_configure_pressed() {
        let mut state: DebounceState = DebounceState::new();
        state.configure(true, 100);
        assert!(state.read());
        assert!(state.unstable());
        assert!(!state.changed());
        // The startup condition is not a press
        assert!(!state.consume_pressed());

        // Holding the button doesn't report anything
        for t in 100..200 {
            assert!(!state.update(true, t));
        }
        assert!(!state.rose());
    }

    #[test]
    fn test_changed_lasts_one_update() {
        let mut state: DebounceState = DebounceState::new();
        state.configure(false, 0);
        let t = press(&mut state, true, 0, 100).unwrap();
        assert!(state.changed());
        assert!(state.rose());

        // Same input on the next tick clears the flag
        assert!(!state.update(true, t + 1));
        assert!(!state.changed());
        assert!(!state.rose());
        assert!(state.read());
    }

    #[test]
    fn test_consume_pressed_once() {
        let mut state: DebounceState = DebounceState::new();
        state.configure(false, 0);
        press(&mut state, true, 0, 100).unwrap();

        assert!(state.consume_pressed());
        assert!(!state.consume_pressed());

        // Still held
        for t in 100..200 {
            state.update(true, t);
            assert!(!state.consume_pressed());
        }

        // Release, the release itself is not a press
        press(&mut state, false, 200, 300).unwrap();
        assert!(state.fell());
        assert!(!state.consume_pressed());

        // Press again
        press(&mut state, true, 300, 400).unwrap();
        assert!(state.consume_pressed());
        assert!(!state.consume_pressed());
    }

    #[test]
    fn test_rose_fell_exclusive() {
        let mut state: DebounceState<PromptDetection> = DebounceState::with_interval(3);
        state.configure(false, 0);
        // Noisy input, toggling with varying periods
        let mut raw = false;
        for t in 0..2000u64 {
            if t % 7 == 0 || t % 11 == 0 {
                raw = !raw;
            }
            state.update(raw, t);
            assert!(!(state.rose() && state.fell()));
            assert_eq!(state.changed(), state.rose() || state.fell());
        }
    }

    #[test]
    fn test_set_interval() {
        let mut state: DebounceState = DebounceState::with_config(DebounceConfig::new(20));
        assert_eq!(state.interval(), 20);
        state.configure(false, 0);
        assert!(!state.update(true, 0));

        state.set_interval(5);
        assert_eq!(state.interval(), 5);
        // The pending transition keeps its start time
        assert!(!state.update(true, 4));
        assert!(state.update(true, 5));
    }

    #[test]
    fn test_update_without_configure() {
        let mut state: DebounceState = DebounceState::default();
        assert!(!state.read());
        assert!(!state.update(false, 0));
        assert_eq!(press(&mut state, true, 1, 100), Some(11));
    }

    #[test]
    fn test_elapsed_wraps() {
        let mut state: DebounceState = DebounceState::new();
        state.configure(false, u64::MAX - 2);
        assert_eq!(state.elapsed_ms(u64::MAX), 2);
        assert_eq!(state.elapsed_ms(0), 3);
        assert_eq!(state.elapsed_ms(7), 10);
        assert!(!state.interval_elapsed(6));
        assert!(state.interval_elapsed(7));
    }
}
