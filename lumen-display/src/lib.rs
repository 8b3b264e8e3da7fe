//! Display descriptor types for the Lumen control board
//!
//! This crate defines the declarative parameter records for one
//! SPI-attached LCD panel and the composed device descriptor that binds
//! them together:
//!
//! - [`SpiBusConfig`] - host, mode, clock rates and wiring of the SPI bus
//! - [`PanelConfig`] - control pins, geometry and flags of the panel
//! - [`BacklightConfig`] - the backlight control pin, when one is wired
//! - [`PanelBinding`] / [`DeviceDescriptor`] - the composed descriptor
//!
//! The records are plain data: constructing and composing them performs
//! no I/O. The rendering driver that consumes the descriptor owns all
//! SPI sequencing and panel initialization. Board crates provide the
//! actual literals per hardware revision.

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod device;
pub mod error;
pub mod light;
pub mod panel;

// Re-export key types
pub use bus::{SpiBusConfig, SpiHost, SpiMode};
pub use device::{DeviceDescriptor, PanelBinding};
pub use error::ConfigError;
pub use light::BacklightConfig;
pub use panel::{ColorOrder, PanelConfig};
