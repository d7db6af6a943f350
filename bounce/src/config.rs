use serde::{Deserialize, Serialize};

/// Default debounce interval, in ms.
pub const DEFAULT_INTERVAL_MS: u16 = 10;

/// Center level that marks a threshold reader as disabled.
pub const UNSET_LEVEL: i32 = -1;

/// Configuration for debouncing
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceConfig {
    /// Minimum time in ms a reading has to be stable before it's accepted
    pub interval_ms: u16,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

impl DebounceConfig {
    pub fn new(interval_ms: u16) -> Self {
        Self { interval_ms }
    }
}

/// Configuration of an analog button.
///
/// The button is considered as "pressed" when the analog sample lies strictly between
/// `center - tolerance` and `center + tolerance`. Both values are in ADC digits, so with a
/// 10-bit converter they are in `0..1024`.
///
/// Several buttons on one resistor ladder share an ADC channel and differ only in `center`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ThresholdConfig {
    /// Expected sample when the button is pressed, [`UNSET_LEVEL`] disables the threshold
    pub center: i32,
    /// Half width of the accepted band
    pub tolerance: i32,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            center: UNSET_LEVEL,
            tolerance: 0,
        }
    }
}

impl ThresholdConfig {
    pub fn new(center: i32, tolerance: i32) -> Self {
        Self { center, tolerance }
    }
}
