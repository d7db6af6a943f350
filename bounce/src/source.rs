//! Raw reading strategies
//!
//! A [`RawSource`] produces the undebounced state of an input on every polling tick. The
//! source is a type parameter of [`Button`](crate::button::Button), so digital and analog
//! inputs share the debouncer without branching on the input kind at runtime.
use core::convert::Infallible;

use embedded_hal::digital::InputPin;

use crate::config::ThresholdConfig;
use crate::threshold::ThresholdReader;

/// Source of raw readings, true means active (pressed).
pub trait RawSource {
    fn read_raw(&mut self) -> bool;
}

impl<F: FnMut() -> bool> RawSource for F {
    fn read_raw(&mut self) -> bool {
        self()
    }
}

/// A source that's never active
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Inactive;

impl RawSource for Inactive {
    fn read_raw(&mut self) -> bool {
        false
    }
}

/// Pin level of an active input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    High,
    /// Buttons with a pull-up resistor, shorting the pin to ground when pressed
    Low,
}

/// Digital input pin.
///
/// The pin should be already configured as input, with pull-up or pull-down as the
/// hardware requires. A failed pin read is treated as inactive.
pub struct DigitalSource<P: InputPin> {
    pin: P,
    active_level: ActiveLevel,
}

impl<P: InputPin> DigitalSource<P> {
    pub fn new(pin: P, active_level: ActiveLevel) -> Self {
        Self { pin, active_level }
    }

    pub fn active_level(&self) -> ActiveLevel {
        self.active_level
    }

    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: InputPin> RawSource for DigitalSource<P> {
    fn read_raw(&mut self) -> bool {
        match self.active_level {
            ActiveLevel::Low => self.pin.is_low().ok().unwrap_or_default(),
            ActiveLevel::High => self.pin.is_high().ok().unwrap_or_default(),
        }
    }
}

/// A single analog sample source, e.g. one ADC channel
pub trait AnalogInput {
    type Error;

    fn read_sample(&mut self) -> Result<i32, Self::Error>;
}

impl<F: FnMut() -> i32> AnalogInput for F {
    type Error = Infallible;

    fn read_sample(&mut self) -> Result<i32, Self::Error> {
        Ok(self())
    }
}

/// Analog input thresholded into a raw reading.
///
/// While the threshold reader is disabled, the readings come from the `fallback` source
/// and the analog input isn't sampled.
pub struct AnalogSource<A: AnalogInput, F: RawSource = Inactive> {
    input: A,
    reader: ThresholdReader,
    fallback: F,
}

impl<A: AnalogInput> AnalogSource<A> {
    pub fn new(input: A, config: ThresholdConfig) -> Self {
        Self::with_fallback(input, config, Inactive)
    }
}

impl<A: AnalogInput, F: RawSource> AnalogSource<A, F> {
    pub fn with_fallback(input: A, config: ThresholdConfig, fallback: F) -> Self {
        Self {
            input,
            reader: ThresholdReader::with_config(config),
            fallback,
        }
    }

    pub fn reader(&self) -> &ThresholdReader {
        &self.reader
    }

    pub fn reader_mut(&mut self) -> &mut ThresholdReader {
        &mut self.reader
    }

    /// The last analog sample
    pub fn last_sample(&self) -> i32 {
        self.reader.last_sample()
    }

    pub fn release(self) -> (A, F) {
        (self.input, self.fallback)
    }
}

impl<A: AnalogInput, F: RawSource> RawSource for AnalogSource<A, F> {
    fn read_raw(&mut self) -> bool {
        if !self.reader.is_enabled() {
            return self.fallback.read_raw();
        }

        match self.input.read_sample() {
            Ok(sample) => self.reader.read(sample),
            Err(_) => {
                warn!("Failed to read analog sample");
                false
            }
        }
    }
}
