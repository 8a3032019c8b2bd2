// src/driver/sync_driver/protocol_helpers.rs

use super::Tc74;
use crate::common::{address::Tc74Address, error::Tc74Error, register::Register};
use embedded_hal::{delay::DelayNs, i2c::I2c};

impl<I2C, D> Tc74<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Reads one register: command byte, repeated START, one data byte, STOP.
    ///
    /// Sent as a single transaction, so a NACK on the command byte aborts the
    /// read instead of reading whatever register the pointer was left at.
    pub(super) fn read_register(
        &mut self,
        address: Tc74Address,
        register: Register,
    ) -> Result<u8, Tc74Error<I2C::Error>> {
        let mut value = [0u8; 1];
        self.write_read_bytes(address, &[register.command()], &mut value)?;
        log::trace!("{} {} = {:#04x}", address, register, value[0]);
        Ok(value[0])
    }

    /// Writes one register as `[command, value]` in a single transaction.
    pub(super) fn write_register(
        &mut self,
        address: Tc74Address,
        register: Register,
        value: u8,
    ) -> Result<(), Tc74Error<I2C::Error>> {
        debug_assert!(register.is_writable(), "{} is read-only", register);
        self.write_bytes(address, &[register.command(), value])?;
        log::trace!("{} {} <- {:#04x}", address, register, value);
        Ok(())
    }
}
