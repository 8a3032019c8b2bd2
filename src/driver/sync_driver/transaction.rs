// src/driver/sync_driver/transaction.rs

use super::Tc74;
use crate::common::{address::Tc74Address, error::Tc74Error, timing};
use embedded_hal::{delay::DelayNs, i2c::I2c};

// Bus transport: every transfer the driver issues goes through `transact`,
// so the bus-free time after each one is enforced in a single place.
impl<I2C, D> Tc74<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Runs one I2C transaction, then holds the bus idle for
    /// `QUIESCENCE_DELAY` whether or not the transfer succeeded.
    pub(super) fn transact<T, FN>(&mut self, f: FN) -> Result<T, Tc74Error<I2C::Error>>
    where
        FN: FnOnce(&mut I2C) -> Result<T, I2C::Error>,
    {
        let result = f(&mut self.i2c);
        self.delay.delay_us(timing::QUIESCENCE_DELAY.as_micros() as u32);

        if let Err(ref e) = result {
            log::trace!("I2C transfer failed: {:?}", e);
        }
        result.map_err(Tc74Error::Bus)
    }

    /// Writes `bytes` in one transaction ending with STOP. Returns the byte count.
    pub(super) fn write_bytes(
        &mut self,
        address: Tc74Address,
        bytes: &[u8],
    ) -> Result<usize, Tc74Error<I2C::Error>> {
        log::trace!("i2c write {}: {:02x?}", address, bytes);
        self.transact(|i2c| i2c.write(address.as_u8(), bytes))?;
        Ok(bytes.len())
    }

    /// Reads `buffer.len()` bytes in one transaction ending with STOP.
    pub(super) fn read_bytes(
        &mut self,
        address: Tc74Address,
        buffer: &mut [u8],
    ) -> Result<usize, Tc74Error<I2C::Error>> {
        let len = buffer.len();
        self.transact(|i2c| i2c.read(address.as_u8(), buffer))?;
        log::trace!("i2c read {}: {} byte(s)", address, len);
        Ok(len)
    }

    /// Writes `bytes`, then repeated START and reads into `buffer`, then STOP.
    /// Returns the number of bytes read.
    pub(super) fn write_read_bytes(
        &mut self,
        address: Tc74Address,
        bytes: &[u8],
        buffer: &mut [u8],
    ) -> Result<usize, Tc74Error<I2C::Error>> {
        let len = buffer.len();
        self.transact(|i2c| i2c.write_read(address.as_u8(), bytes, buffer))?;
        log::trace!("i2c write_read {}: {:02x?} -> {} byte(s)", address, bytes, len);
        Ok(len)
    }
}
