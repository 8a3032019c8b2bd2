// src/common/config.rs

use bitfield::bitfield;
use core::fmt;

/// Value returned by the legacy configuration read when the bus transfer fails.
/// Never produced by a TC74, since bits 5..0 always read as zero.
pub const CONFIG_ERROR_SENTINEL: u8 = 0xFF;

bitfield! {
    /// Contents of the RWCR (configuration) register.
    ///
    /// D7 (SHDN) is the only host-writable bit. D6 (DATA_RDY) is set by the
    /// part once a conversion has completed and must never be written.
    #[derive(Copy, Clone, PartialEq, Eq, Hash)]
    pub struct ConfigRegister(u8);
    impl Debug;
    pub bool, standby, set_standby: 7;
    pub bool, data_ready, _: 6;
}

impl ConfigRegister {
    pub const STANDBY_BIT: u8 = 1 << 7;
    pub const DATA_READY_BIT: u8 = 1 << 6;

    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        ConfigRegister(bits)
    }

    #[inline]
    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// The byte written to select `mode`. Every other bit is cleared.
    pub fn for_power_mode(mode: PowerMode) -> Self {
        let mut config = ConfigRegister(0);
        config.set_standby(mode == PowerMode::Standby);
        config
    }

    pub fn power_mode(&self) -> PowerMode {
        if self.standby() {
            PowerMode::Standby
        } else {
            PowerMode::Normal
        }
    }
}

impl From<u8> for ConfigRegister {
    fn from(bits: u8) -> Self {
        ConfigRegister(bits)
    }
}

impl From<ConfigRegister> for u8 {
    fn from(config: ConfigRegister) -> Self {
        config.0
    }
}

/// Operating mode selected through the SHDN bit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PowerMode {
    /// Continuous conversion, about 200 uA.
    Normal,
    /// Conversions halted, about 5 uA. The serial port stays active.
    Standby,
}

impl From<bool> for PowerMode {
    fn from(standby: bool) -> Self {
        if standby {
            PowerMode::Standby
        } else {
            PowerMode::Normal
        }
    }
}

impl fmt::Display for PowerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowerMode::Normal => f.write_str("normal"),
            PowerMode::Standby => f.write_str("standby"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_flags() {
        let config = ConfigRegister::from_bits(0b0100_0000);
        assert!(config.data_ready());
        assert!(!config.standby());
        assert_eq!(config.power_mode(), PowerMode::Normal);

        let config = ConfigRegister::from_bits(0b1000_0000);
        assert!(!config.data_ready());
        assert!(config.standby());
        assert_eq!(config.power_mode(), PowerMode::Standby);
    }

    #[test]
    fn test_for_power_mode_clears_other_bits() {
        assert_eq!(ConfigRegister::for_power_mode(PowerMode::Standby).bits(), 0x80);
        assert_eq!(ConfigRegister::for_power_mode(PowerMode::Normal).bits(), 0x00);
    }

    #[test]
    fn test_set_standby_leaves_data_ready() {
        let mut config = ConfigRegister::from_bits(ConfigRegister::DATA_READY_BIT);
        config.set_standby(true);
        assert_eq!(config.bits(), 0xC0);
        config.set_standby(false);
        assert_eq!(config.bits(), ConfigRegister::DATA_READY_BIT);
    }

    #[test]
    fn test_power_mode_from_bool() {
        assert_eq!(PowerMode::from(true), PowerMode::Standby);
        assert_eq!(PowerMode::from(false), PowerMode::Normal);
    }
}
