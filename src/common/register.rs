//! TC74 register commands.
//!
//! See the TC74 datasheet (DS21462), Section 4.0 "Register Set and Programmer's Model".
//! The part has a single command byte selecting one of two registers; every
//! read or write starts by sending it.

use core::fmt;

/// The register selected by the command byte of a transaction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Register {
    /// Read Temperature (RTR) - read-only, signed 8-bit degrees Celsius.
    Temperature = 0x00,

    /// Read/Write Configuration (RWCR) - standby control and data-ready status.
    Configuration = 0x01,
}

impl Register {
    /// The command byte sent on the bus for this register.
    #[inline]
    pub const fn command(self) -> u8 {
        self as u8
    }

    /// Whether the host may write this register.
    #[inline]
    pub const fn is_writable(self) -> bool {
        matches!(self, Register::Configuration)
    }
}

impl TryFrom<u8> for Register {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(Register::Temperature),
            0x01 => Ok(Register::Configuration),
            other => Err(other),
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Register::Temperature => f.write_str("RTR"),
            Register::Configuration => f.write_str("RWCR"),
        }
    }
}
