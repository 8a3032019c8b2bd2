// src/common/error.rs

#[derive(Debug, thiserror::Error)]
pub enum Tc74Error<E = ()>
where
    E: core::fmt::Debug, // Needed for the generic Bus error in the format strings
{
    /// Underlying I2C error from the HAL implementation (NACK, arbitration loss, ...).
    #[error("I2C bus error: {0:?}")]
    Bus(E),

    /// The HAL refused the bus configuration during initialization.
    #[error("I2C bus setup failed: {0:?}")]
    Setup(E),

    /// DATA_RDY was clear when a temperature read was attempted.
    /// Also what a sensor in standby reports.
    #[error("Temperature conversion not ready")]
    NotReady,

    /// Address is not one of the eight TC74 part variants (0x48..=0x4F).
    #[error("Invalid TC74 address: {0:#04x}")]
    InvalidAddress(u8),
}

impl<E: core::fmt::Debug> Tc74Error<E> {
    /// True when the failure came from the bus rather than the sensor state.
    #[inline]
    pub fn is_bus_error(&self) -> bool {
        matches!(self, Tc74Error::Bus(_) | Tc74Error::Setup(_))
    }
}

// Lets `?` lift a raw HAL error into `Tc74Error::Bus`.
impl<E: core::fmt::Debug> From<E> for Tc74Error<E> {
    fn from(e: E) -> Self {
        Tc74Error::Bus(e)
    }
}

// Note: `E` only needs `Debug` here. With the `std` feature thiserror also
// implements `std::error::Error`, otherwise `core::error::Error`.
