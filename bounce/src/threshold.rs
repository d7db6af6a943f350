//! Analog threshold reader
//!
//! Turns an analog sample into a raw button reading, so that buttons on a resistor ladder
//! can share one ADC channel and still use the same debouncer as a digital pin.
use crate::config::{ThresholdConfig, UNSET_LEVEL};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ThresholdReader {
    center: i32,
    tolerance: i32,
    /// Exclusive lower bound of the pressed band
    lower: i32,
    /// Exclusive upper bound of the pressed band
    upper: i32,
    last_sample: i32,
}

impl Default for ThresholdReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ThresholdReader {
    /// Create a disabled reader
    pub const fn new() -> Self {
        Self {
            center: UNSET_LEVEL,
            tolerance: 0,
            lower: UNSET_LEVEL,
            upper: UNSET_LEVEL,
            last_sample: 0,
        }
    }

    pub fn with_config(config: ThresholdConfig) -> Self {
        let mut reader = Self::new();
        reader.configure(config.center, config.tolerance);
        reader
    }

    /// Set the pressed band to `(center - tolerance, center + tolerance)`.
    ///
    /// `center == UNSET_LEVEL` disables the reader. A non-positive tolerance gives an empty
    /// band, the reader then never reports a press.
    pub fn configure(&mut self, center: i32, tolerance: i32) {
        if center == UNSET_LEVEL {
            *self = Self {
                last_sample: self.last_sample,
                ..Self::new()
            };
            info!("Threshold reader disabled");
            return;
        }

        self.center = center;
        self.tolerance = tolerance;
        self.lower = center.saturating_sub(tolerance);
        self.upper = center.saturating_add(tolerance);
        info!("Threshold band: ({}, {})", self.lower, self.upper);
    }

    pub fn is_enabled(&self) -> bool {
        self.center != UNSET_LEVEL
    }

    /// Compare a sample against the band, bounds excluded.
    pub fn read(&mut self, sample: i32) -> bool {
        self.last_sample = sample;
        self.is_enabled() && sample > self.lower && sample < self.upper
    }

    pub fn last_sample(&self) -> i32 {
        self.last_sample
    }

    pub fn center(&self) -> i32 {
        self.center
    }

    pub fn tolerance(&self) -> i32 {
        self.tolerance
    }
}
