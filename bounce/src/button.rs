use embedded_hal::digital::InputPin;

use crate::clock::Clock;
use crate::config::{DebounceConfig, ThresholdConfig};
use crate::debounce::{DebouncePolicy, DebounceState, Stable};
use crate::source::{ActiveLevel, AnalogInput, AnalogSource, DigitalSource, RawSource};

/// A debounced button.
///
/// `S` is where raw readings come from, `P` is the debounce policy. Both are fixed when the
/// button is created. Call [`attach`](Self::attach) once, then [`update`](Self::update) on
/// every polling tick.
pub struct Button<S: RawSource, P: DebouncePolicy = Stable> {
    source: S,
    state: DebounceState<P>,
}

impl<In: InputPin> Button<DigitalSource<In>> {
    /// Create a button on a digital input pin, with the default policy
    pub fn digital(pin: In, active_level: ActiveLevel) -> Self {
        Self::new(DigitalSource::new(pin, active_level))
    }
}

impl<A: AnalogInput> Button<AnalogSource<A>> {
    /// Create a button on an analog input, with the default policy
    pub fn analog(input: A, config: ThresholdConfig) -> Self {
        Self::new(AnalogSource::new(input, config))
    }
}

impl<S: RawSource, P: DebouncePolicy> Button<S, P> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: DebounceState::new(),
        }
    }

    pub fn with_config(source: S, config: DebounceConfig) -> Self {
        Self {
            source,
            state: DebounceState::with_config(config),
        }
    }

    /// Read the initial state of the input.
    ///
    /// Whatever the input is at this point is the starting state, not a transition.
    pub fn attach(&mut self, now_ms: u64) {
        let raw = self.source.read_raw();
        self.state.configure(raw, now_ms);
        debug!("Button attached, initial state: {}", raw);
    }

    pub fn set_interval(&mut self, interval_ms: u16) {
        self.state.set_interval(interval_ms);
        info!("Debounce interval set to {}ms", interval_ms);
    }

    pub fn interval(&self) -> u16 {
        self.state.interval()
    }

    /// Sample the input and run the debouncer, returns true if the state changed
    pub fn update(&mut self, now_ms: u64) -> bool {
        let raw = self.source.read_raw();
        self.state.update(raw, now_ms)
    }

    /// [`update`](Self::update) with the current time of `clock`
    pub fn poll<C: Clock>(&mut self, clock: &C) -> bool {
        self.update(clock.now_ms())
    }

    pub fn read(&self) -> bool {
        self.state.read()
    }

    pub fn rose(&self) -> bool {
        self.state.rose()
    }

    pub fn fell(&self) -> bool {
        self.state.fell()
    }

    pub fn changed(&self) -> bool {
        self.state.changed()
    }

    /// Returns true once per press, see [`DebounceState::consume_pressed`]
    pub fn consume_pressed(&mut self) -> bool {
        self.state.consume_pressed()
    }

    pub fn state(&self) -> &DebounceState<P> {
        &self.state
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn release(self) -> S {
        self.source
    }
}

impl<A: AnalogInput, F: RawSource, P: DebouncePolicy> Button<AnalogSource<A, F>, P> {
    /// Set the pressed band of the analog input, then attach.
    ///
    /// `center == UNSET_LEVEL` switches the button to its digital fallback.
    pub fn attach_threshold(&mut self, center: i32, tolerance: i32, now_ms: u64) {
        self.source.reader_mut().configure(center, tolerance);
        self.attach(now_ms);
    }

    /// The last analog sample
    pub fn last_sample(&self) -> i32 {
        self.source.last_sample()
    }
}
