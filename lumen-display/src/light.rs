//! Backlight configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Backlight parameter record
///
/// The current board revision leaves the backlight permanently on in
/// hardware, so the default record carries no pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BacklightConfig {
    /// Backlight control pin, if wired
    pub pin: Option<u8>,
}

impl BacklightConfig {
    /// Backlight without a control pin
    pub const fn disabled() -> Self {
        Self { pin: None }
    }

    /// Backlight controlled through the given pin
    pub const fn on_pin(pin: u8) -> Self {
        Self { pin: Some(pin) }
    }

    /// Whether a control pin is assigned
    pub const fn is_controllable(&self) -> bool {
        self.pin.is_some()
    }
}
