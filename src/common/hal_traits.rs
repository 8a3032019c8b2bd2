// src/common/hal_traits.rs

use super::timing;
use embedded_hal::i2c::ErrorType;

/// Bus parameters the TC74 needs from the host's I2C peripheral.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BusSettings {
    /// SCL frequency in Hz.
    pub frequency_hz: u32,
    /// Enable the MCU's internal pull-ups on SDA/SCL.
    pub internal_pull_ups: bool,
}

impl BusSettings {
    /// 100 kHz with internal pull-ups, for boards without external resistors.
    pub const TC74: BusSettings = BusSettings {
        frequency_hz: timing::MAX_BUS_FREQUENCY_HZ,
        internal_pull_ups: true,
    };
}

impl Default for BusSettings {
    fn default() -> Self {
        Self::TC74
    }
}

/// One-time configuration of the platform's I2C peripheral.
///
/// `embedded-hal` has no trait for clock rate or pin setup, so a HAL's I2C
/// type (or a thin wrapper around it) implements this to let
/// [`Tc74::init`](crate::driver::Tc74::init) bring the bus up.
///
/// Implementations must route SDA/SCL to the board's default I2C pins. Calling
/// this while a transfer is in flight is undefined at the hardware level.
pub trait BusSetup: ErrorType {
    fn configure(&mut self, settings: &BusSettings) -> Result<(), Self::Error>;
}
