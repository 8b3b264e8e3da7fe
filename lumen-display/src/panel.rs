//! Panel configuration
//!
//! Control pins, geometry and behavioral flags for one LCD panel.
//! Geometry distinguishes the controller's memory area from the
//! visible area: smaller panels sit at an offset inside a larger
//! framebuffer (the ST7796 maps 320x480 one-to-one, so both match).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Subpixel order of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColorOrder {
    /// Red-green-blue
    #[default]
    Rgb,
    /// Blue-green-red
    Bgr,
}

/// Panel parameter record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelConfig {
    /// Chip select pin, if wired
    pub cs: Option<u8>,
    /// Hardware reset pin, if wired
    pub rst: Option<u8>,
    /// Busy pin, if wired (most SPI panels have none)
    pub busy: Option<u8>,
    /// Controller memory width in pixels
    pub memory_width: u16,
    /// Controller memory height in pixels
    pub memory_height: u16,
    /// Visible width in pixels
    pub panel_width: u16,
    /// Visible height in pixels
    pub panel_height: u16,
    /// Horizontal offset of the visible area inside memory
    pub offset_x: u16,
    /// Vertical offset of the visible area inside memory
    pub offset_y: u16,
    /// Subpixel order
    pub color_order: ColorOrder,
    /// Invert all pixel data
    pub invert: bool,
    /// Panel supports read-back over the bus
    pub readable: bool,
    /// The bus is shared with other devices (driver must assert CS
    /// around every transaction)
    pub bus_shared: bool,
    /// Transfer pixel data as 16-bit units instead of bytes
    pub wide_bus: bool,
}

impl PanelConfig {
    /// Create a panel record with matching memory and visible size
    ///
    /// Defaults: no control pins, zero offset, RGB order, no inversion,
    /// not readable, bus not shared, byte-wide transfers.
    pub const fn new(width: u16, height: u16) -> Self {
        Self {
            cs: None,
            rst: None,
            busy: None,
            memory_width: width,
            memory_height: height,
            panel_width: width,
            panel_height: height,
            offset_x: 0,
            offset_y: 0,
            color_order: ColorOrder::Rgb,
            invert: false,
            readable: false,
            bus_shared: false,
            wide_bus: false,
        }
    }

    /// Set the controller memory size independently of the visible size
    pub const fn with_memory_size(mut self, width: u16, height: u16) -> Self {
        self.memory_width = width;
        self.memory_height = height;
        self
    }

    /// Set the offset of the visible area inside memory
    pub const fn with_offset(mut self, x: u16, y: u16) -> Self {
        self.offset_x = x;
        self.offset_y = y;
        self
    }

    /// Assign the chip select pin
    pub const fn with_cs(mut self, cs: u8) -> Self {
        self.cs = Some(cs);
        self
    }

    /// Assign the hardware reset pin
    pub const fn with_rst(mut self, rst: u8) -> Self {
        self.rst = Some(rst);
        self
    }

    /// Assign the busy pin
    pub const fn with_busy(mut self, busy: u8) -> Self {
        self.busy = Some(busy);
        self
    }

    /// Set the subpixel order
    pub const fn with_color_order(mut self, color_order: ColorOrder) -> Self {
        self.color_order = color_order;
        self
    }

    /// Enable or disable pixel inversion
    pub const fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Mark the panel as readable over the bus
    pub const fn with_readable(mut self, readable: bool) -> Self {
        self.readable = readable;
        self
    }

    /// Mark the bus as shared with other devices
    pub const fn with_bus_shared(mut self, bus_shared: bool) -> Self {
        self.bus_shared = bus_shared;
        self
    }

    /// Use 16-bit bus transfers
    pub const fn with_wide_bus(mut self, wide_bus: bool) -> Self {
        self.wide_bus = wide_bus;
        self
    }

    /// Visible size as (width, height)
    pub const fn visible_size(&self) -> (u16, u16) {
        (self.panel_width, self.panel_height)
    }

    /// Check the record for internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.memory_width == 0
            || self.memory_height == 0
            || self.panel_width == 0
            || self.panel_height == 0
        {
            return Err(ConfigError::ZeroPanelDimension);
        }
        // u32 arithmetic so offset + size cannot wrap
        let right = self.offset_x as u32 + self.panel_width as u32;
        let bottom = self.offset_y as u32 + self.panel_height as u32;
        if right > self.memory_width as u32 || bottom > self.memory_height as u32 {
            return Err(ConfigError::VisibleAreaOutOfBounds);
        }
        Ok(())
    }
}
