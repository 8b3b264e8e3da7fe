//! SPI bus configuration
//!
//! Timing and wiring of the SPI interface between the controller and
//! the panel. This is declarative data only; the driver consuming the
//! descriptor performs the actual bus setup and transactions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// SPI host peripheral
///
/// Which of the chip's SPI controllers drives the panel. The general
/// purpose hosts start at SPI2 (SPI0/SPI1 are reserved for flash).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpiHost {
    /// SPI2 (first general purpose host)
    #[default]
    Spi2,
    /// SPI3 (not present on all chips)
    Spi3,
}

/// SPI mode (combined clock polarity and phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpiMode {
    /// Mode 0: CPOL=0, CPHA=0
    #[default]
    Mode0,
    /// Mode 1: CPOL=0, CPHA=1
    Mode1,
    /// Mode 2: CPOL=1, CPHA=0
    Mode2,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}

/// SPI bus parameter record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpiBusConfig {
    /// Host peripheral driving the bus
    pub host: SpiHost,
    /// SPI mode
    pub mode: SpiMode,
    /// Write clock rate in Hz
    pub freq_write: u32,
    /// Read clock rate in Hz (panels read slower than they write)
    pub freq_read: u32,
    /// Half-duplex wiring: commands and reads share one data line
    pub three_wire: bool,
    /// Take the host's bus lock around transactions (needed when the
    /// bus is shared with other devices)
    pub use_lock: bool,
    /// Clock pin
    pub sclk: u8,
    /// Controller-to-panel data pin
    pub mosi: u8,
    /// Panel-to-controller data pin, absent on write-only wiring
    pub miso: Option<u8>,
    /// Data/command select pin
    pub dc: u8,
}

impl SpiBusConfig {
    /// Create a bus record on the given host and required pins
    ///
    /// Defaults: mode 0, 10 MHz write / 5 MHz read, four-wire, bus lock
    /// enabled, no MISO.
    pub const fn new(host: SpiHost, sclk: u8, mosi: u8, dc: u8) -> Self {
        Self {
            host,
            mode: SpiMode::Mode0,
            freq_write: 10_000_000,
            freq_read: 5_000_000,
            three_wire: false,
            use_lock: true,
            sclk,
            mosi,
            miso: None,
            dc,
        }
    }

    /// Set the SPI mode
    pub const fn with_mode(mut self, mode: SpiMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the write and read clock rates in Hz
    pub const fn with_rates(mut self, freq_write: u32, freq_read: u32) -> Self {
        self.freq_write = freq_write;
        self.freq_read = freq_read;
        self
    }

    /// Assign a MISO pin
    pub const fn with_miso(mut self, miso: u8) -> Self {
        self.miso = Some(miso);
        self
    }

    /// Mark the bus as half-duplex three-wire
    pub const fn with_three_wire(mut self, three_wire: bool) -> Self {
        self.three_wire = three_wire;
        self
    }

    /// Enable or disable the host bus lock
    pub const fn with_lock(mut self, use_lock: bool) -> Self {
        self.use_lock = use_lock;
        self
    }

    /// Check the record for internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.freq_write == 0 || self.freq_read == 0 {
            return Err(ConfigError::ZeroClockRate);
        }
        if self.freq_read > self.freq_write {
            return Err(ConfigError::ReadRateAboveWriteRate);
        }
        if self.three_wire && self.miso.is_some() {
            return Err(ConfigError::MisoOnThreeWireBus);
        }
        Ok(())
    }
}
