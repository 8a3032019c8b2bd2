// src/common/temperature.rs

use super::address::Tc74Address;
use core::fmt;

/// Value returned by the legacy temperature read on any failure.
/// Outside the range any `i8` reading plus an `i8` offset can reach.
pub const TEMPERATURE_ERROR_SENTINEL: i16 = 404;

/// A calibrated temperature in whole degrees Celsius.
///
/// The TC74 reports a two's complement byte (-128..=127). The caller's offset
/// is added after widening, so the result is not clamped to the sensor range.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Temperature(i16);

impl Temperature {
    /// Interprets the RTR byte as signed and applies `offset`.
    #[inline]
    pub const fn from_raw(raw: u8, offset: i8) -> Self {
        Temperature(raw as i8 as i16 + offset as i16)
    }

    #[inline]
    pub const fn from_celsius(celsius: i16) -> Self {
        Temperature(celsius)
    }

    #[inline]
    pub const fn celsius(&self) -> i16 {
        self.0
    }

    /// Returns a copy shifted by another offset, or `None` if it leaves the `i16` range.
    #[inline]
    pub const fn with_offset(self, offset: i8) -> Option<Self> {
        match self.0.checked_add(offset as i16) {
            Some(celsius) => Some(Temperature(celsius)),
            None => None,
        }
    }
}

impl From<Temperature> for i16 {
    fn from(t: Temperature) -> Self {
        t.0
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} °C", self.0)
    }
}

/// One temperature taken from one sensor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Reading {
    pub address: Tc74Address,
    pub temperature: Temperature,
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (from {})", self.temperature, self.address)
    }
}
