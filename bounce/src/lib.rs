//! Debouncing for polled buttons and switches.
//!
//! A [`Button`] samples a raw input on each polling tick and runs it through a
//! [`DebounceState`]. The raw input is a digital pin, an analog input compared against a
//! threshold band, or any closure. The timing policy ([`Stable`], [`PromptDetection`] or
//! [`LockOut`]) is chosen with a type parameter.
//!
//! ```ignore
//! let mut button = Button::digital(pin, ActiveLevel::Low);
//! button.attach(clock.now_ms());
//! loop {
//!     button.poll(&clock);
//!     if button.consume_pressed() {
//!         info!("Pressed");
//!     }
//! }
//! ```
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod button;
pub mod clock;
pub mod config;
pub mod debounce;
pub mod source;
pub mod threshold;

pub use button::Button;
pub use clock::{Clock, EmbassyClock};
pub use config::{DebounceConfig, ThresholdConfig, DEFAULT_INTERVAL_MS, UNSET_LEVEL};
pub use debounce::{DebounceOutcome, DebouncePolicy, DebounceState, LockOut, PromptDetection, Stable};
pub use source::{ActiveLevel, AnalogInput, AnalogSource, DigitalSource, Inactive, RawSource};
pub use threshold::ThresholdReader;
