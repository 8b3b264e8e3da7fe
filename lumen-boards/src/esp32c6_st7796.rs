//! ESP32-C6 devkit with ST7796 320x480 SPI panel, revision A
//!
//! The values here are the board's wiring contract: changing any of
//! them requires a new revision module, not an edit. The panel hangs
//! off SPI2 (the C6's general purpose host) with MISO wired, so the
//! driver can read controller registers back. The backlight is tied
//! high in hardware and has no control pin on this revision.

use lumen_display::{
    BacklightConfig, DeviceDescriptor, PanelBinding, PanelConfig, SpiBusConfig, SpiHost, SpiMode,
};

/// SPI2, mode 0, 40 MHz writes with reads throttled to 16 MHz
pub const BUS: SpiBusConfig = SpiBusConfig::new(SpiHost::Spi2, 21, 19, 4)
    .with_mode(SpiMode::Mode0)
    .with_rates(40_000_000, 16_000_000)
    .with_miso(20)
    .with_lock(true);

/// ST7796: 320x480 mapped one-to-one, RGB order, shared bus
pub const PANEL: PanelConfig = PanelConfig::new(320, 480)
    .with_cs(18)
    .with_rst(5)
    .with_readable(true)
    .with_bus_shared(true);

/// No backlight control pin on rev A
pub const BACKLIGHT: BacklightConfig = BacklightConfig::disabled();

/// Compose the rev A device descriptor
pub const fn device() -> DeviceDescriptor {
    DeviceDescriptor::new(PanelBinding::new(PANEL, BUS).with_backlight(BACKLIGHT))
}
