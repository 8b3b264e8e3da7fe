//! Descriptor validation errors

/// Errors reported by descriptor validation
///
/// Construction of the records themselves is infallible; these surface
/// only from the explicit `validate()` calls, catching wiring mistakes
/// that the driver would otherwise reveal as a blank or garbled screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A clock rate is zero
    ZeroClockRate,
    /// Read clock rate exceeds the write clock rate
    ReadRateAboveWriteRate,
    /// A MISO pin is assigned on a bus marked three-wire
    MisoOnThreeWireBus,
    /// Panel or memory dimension is zero
    ZeroPanelDimension,
    /// Visible area plus offset exceeds the controller memory area
    VisibleAreaOutOfBounds,
    /// The same GPIO is assigned to more than one function
    DuplicatePin {
        /// The doubly-assigned GPIO number
        pin: u8,
    },
}
