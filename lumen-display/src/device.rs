//! Composed device descriptor
//!
//! Binds one panel record to its bus and backlight records and
//! registers the result as the device's active panel. Bindings are
//! established once at construction; the records move into the binding,
//! so nothing can rebind or reconfigure them afterwards.

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bus::SpiBusConfig;
use crate::error::ConfigError;
use crate::light::BacklightConfig;
use crate::panel::PanelConfig;

/// One panel together with the bus and backlight bound to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelBinding {
    panel: PanelConfig,
    bus: SpiBusConfig,
    light: BacklightConfig,
}

impl PanelBinding {
    /// Bind a panel to the bus that drives it
    ///
    /// The backlight defaults to disabled; use [`with_backlight`] when
    /// the board wires a control pin.
    ///
    /// [`with_backlight`]: Self::with_backlight
    pub const fn new(panel: PanelConfig, bus: SpiBusConfig) -> Self {
        Self {
            panel,
            bus,
            light: BacklightConfig::disabled(),
        }
    }

    /// Bind a backlight record to the panel
    pub const fn with_backlight(mut self, light: BacklightConfig) -> Self {
        self.light = light;
        self
    }

    /// The bound panel record
    pub const fn panel(&self) -> &PanelConfig {
        &self.panel
    }

    /// The bound bus record
    pub const fn bus(&self) -> &SpiBusConfig {
        &self.bus
    }

    /// The bound backlight record
    pub const fn backlight(&self) -> &BacklightConfig {
        &self.light
    }

    /// Check every bound record plus the cross-record pin assignments
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bus.validate()?;
        self.panel.validate()?;

        // Capacity matches the maximum number of assignable pins
        let mut seen: Vec<u8, 8> = Vec::new();
        let pins = [
            Some(self.bus.sclk),
            Some(self.bus.mosi),
            self.bus.miso,
            Some(self.bus.dc),
            self.panel.cs,
            self.panel.rst,
            self.panel.busy,
            self.light.pin,
        ];
        for pin in pins.into_iter().flatten() {
            if seen.contains(&pin) {
                return Err(ConfigError::DuplicatePin { pin });
            }
            let _ = seen.push(pin);
        }
        Ok(())
    }
}

/// The composed device descriptor handed to the rendering driver
///
/// Holds the active panel binding. The descriptor is created once
/// during start-up and never reconfigured; drivers treat it as one
/// addressable display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceDescriptor {
    panel: PanelBinding,
}

impl DeviceDescriptor {
    /// Register the binding as the device's active panel
    pub const fn new(panel: PanelBinding) -> Self {
        Self { panel }
    }

    /// The active panel binding
    pub const fn panel(&self) -> &PanelBinding {
        &self.panel
    }

    /// Validate the active panel binding
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.panel.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::SpiHost;
    use proptest::prelude::*;

    fn test_bus() -> SpiBusConfig {
        SpiBusConfig::new(SpiHost::Spi2, 21, 19, 4)
            .with_rates(40_000_000, 16_000_000)
            .with_miso(20)
    }

    fn test_panel() -> PanelConfig {
        PanelConfig::new(320, 480).with_cs(18).with_rst(5)
    }

    #[test]
    fn test_binding_holds_its_records() {
        let bus = test_bus();
        let panel = test_panel();
        let light = BacklightConfig::on_pin(15);

        let binding = PanelBinding::new(panel, bus).with_backlight(light);
        assert_eq!(*binding.panel(), panel);
        assert_eq!(*binding.bus(), bus);
        assert_eq!(*binding.backlight(), light);
    }

    #[test]
    fn test_descriptor_active_panel_identity() {
        let binding = PanelBinding::new(test_panel(), test_bus());
        let device = DeviceDescriptor::new(binding);
        assert_eq!(*device.panel(), binding);
    }

    #[test]
    fn test_backlight_defaults_to_disabled() {
        let binding = PanelBinding::new(test_panel(), test_bus());
        assert!(!binding.backlight().is_controllable());
    }

    #[test]
    fn test_valid_binding_passes() {
        let device = DeviceDescriptor::new(
            PanelBinding::new(test_panel(), test_bus()).with_backlight(BacklightConfig::on_pin(15)),
        );
        assert_eq!(device.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_pin_shared_between_bus_and_panel() {
        // CS on the same GPIO as SCLK
        let panel = PanelConfig::new(320, 480).with_cs(21);
        let binding = PanelBinding::new(panel, test_bus());
        assert_eq!(
            binding.validate(),
            Err(ConfigError::DuplicatePin { pin: 21 })
        );
    }

    #[test]
    fn test_rejects_backlight_on_taken_pin() {
        let binding =
            PanelBinding::new(test_panel(), test_bus()).with_backlight(BacklightConfig::on_pin(18));
        assert_eq!(
            binding.validate(),
            Err(ConfigError::DuplicatePin { pin: 18 })
        );
    }

    #[test]
    fn test_propagates_record_errors() {
        let bad_bus = test_bus().with_rates(0, 0);
        let binding = PanelBinding::new(test_panel(), bad_bus);
        assert_eq!(binding.validate(), Err(ConfigError::ZeroClockRate));
    }

    proptest! {
        // Any distinct pin assignment with sane rates and geometry
        // must validate
        #[test]
        fn prop_distinct_pins_validate(base in 0u8..100) {
            let bus = SpiBusConfig::new(SpiHost::Spi2, base, base + 1, base + 2)
                .with_miso(base + 3)
                .with_rates(40_000_000, 16_000_000);
            let panel = PanelConfig::new(320, 480)
                .with_cs(base + 4)
                .with_rst(base + 5);
            let binding = PanelBinding::new(panel, bus)
                .with_backlight(BacklightConfig::on_pin(base + 6));
            prop_assert_eq!(binding.validate(), Ok(()));
        }

        // Read rate at or below the write rate is always accepted
        #[test]
        fn prop_read_not_above_write_validates(write in 1u32.., read in 1u32..) {
            let (write, read) = if read > write { (read, write) } else { (write, read) };
            let bus = SpiBusConfig::new(SpiHost::Spi2, 21, 19, 4).with_rates(write, read);
            prop_assert_eq!(bus.validate(), Ok(()));
        }

        // A visible area that fits inside memory is always accepted
        #[test]
        fn prop_fitting_geometry_validates(
            w in 1u16..=500,
            h in 1u16..=500,
            dx in 0u16..=100,
            dy in 0u16..=100,
        ) {
            let panel = PanelConfig::new(w, h)
                .with_memory_size(w + dx, h + dy)
                .with_offset(dx, dy);
            prop_assert_eq!(panel.validate(), Ok(()));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_descriptor_postcard_round_trip() {
        let device = DeviceDescriptor::new(
            PanelBinding::new(test_panel(), test_bus()).with_backlight(BacklightConfig::on_pin(15)),
        );
        let bytes = postcard::to_allocvec(&device).unwrap();
        let restored: DeviceDescriptor = postcard::from_bytes(&bytes).unwrap();
        assert_eq!(restored, device);
    }
}
