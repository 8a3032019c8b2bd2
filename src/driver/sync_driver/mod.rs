// src/driver/sync_driver/mod.rs

use crate::common::{
    address::Tc74Address,
    config::{ConfigRegister, PowerMode, CONFIG_ERROR_SENTINEL},
    error::Tc74Error,
    hal_traits::{BusSettings, BusSetup},
    register::Register,
    temperature::{Reading, Temperature, TEMPERATURE_ERROR_SENTINEL},
    timing,
};
use arrayvec::ArrayVec;
use embedded_hal::{delay::DelayNs, i2c::I2c};

mod protocol_helpers;
mod transaction;

#[cfg(test)]
mod sim;

/// Blocking driver for any number of TC74 parts sharing one I2C bus.
///
/// The driver owns the bus handle and a delay provider but keeps no per-sensor
/// state: every operation takes the target address, and the part itself is the
/// only place standby and data-ready live.
#[derive(Debug)]
pub struct Tc74<I2C, D> {
    i2c: I2C,
    delay: D,
}

impl<I2C, D> Tc74<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Wraps an I2C bus that is already configured for the TC74 (<= 100 kHz).
    pub fn new(i2c: I2C, delay: D) -> Self {
        Tc74 { i2c, delay }
    }

    /// Applies [`BusSettings::TC74`] to the bus, then waits out the sensor
    /// power-up time. Call once, before any other operation.
    pub fn init(mut i2c: I2C, mut delay: D) -> Result<Self, Tc74Error<I2C::Error>>
    where
        I2C: BusSetup,
    {
        let settings = BusSettings::TC74;
        i2c.configure(&settings).map_err(Tc74Error::Setup)?;
        log::debug!(
            "I2C configured: {} Hz, pull-ups {}",
            settings.frequency_hz,
            settings.internal_pull_ups
        );
        delay.delay_ms(timing::STARTUP_DELAY.as_millis() as u32);
        Ok(Tc74 { i2c, delay })
    }

    /// Gives the bus and delay back.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    // --- Public Blocking Methods ---

    /// Checks whether anything acknowledges `address`.
    ///
    /// Issues a bare one-byte read with no command, so the register pointer
    /// and power mode are left untouched.
    pub fn probe(&mut self, address: Tc74Address) -> bool {
        let mut scratch = [0u8; 1];
        let present = self.read_bytes(address, &mut scratch).is_ok();
        log::debug!(
            "TC74 at {}: {}",
            address,
            if present { "present" } else { "absent" }
        );
        present
    }

    /// Probes every TC74 address, lowest first, and returns those that answered.
    pub fn scan(&mut self) -> ArrayVec<Tc74Address, 8> {
        Tc74Address::ALL
            .into_iter()
            .filter(|&address| self.probe(address))
            .collect()
    }

    /// Reads RWCR. See [`read_configuration_or_sentinel`](Self::read_configuration_or_sentinel)
    /// for the form that returns 255 on failure.
    pub fn read_configuration(
        &mut self,
        address: Tc74Address,
    ) -> Result<ConfigRegister, Tc74Error<I2C::Error>> {
        self.read_register(address, Register::Configuration)
            .map(ConfigRegister::from_bits)
    }

    /// Reads the temperature register as-is: no DATA_RDY check, no offset.
    pub fn read_raw_temperature(&mut self, address: Tc74Address) -> Result<i8, Tc74Error<I2C::Error>> {
        self.read_register(address, Register::Temperature)
            .map(|raw| raw as i8)
    }

    /// Reads the temperature and adds `offset` degrees.
    ///
    /// Fails with [`Tc74Error::NotReady`] when DATA_RDY is clear, which is also
    /// the case for a part in standby. The offset is applied after widening and
    /// is not clamped.
    pub fn read_temperature(
        &mut self,
        address: Tc74Address,
        offset: i8,
    ) -> Result<Temperature, Tc74Error<I2C::Error>> {
        let config = self.read_configuration(address)?;
        if !config.data_ready() {
            log::debug!("TC74 at {}: data not ready ({:?})", address, config);
            return Err(Tc74Error::NotReady);
        }

        let raw = self.read_register(address, Register::Temperature)?;
        let temperature = Temperature::from_raw(raw, offset);
        log::debug!("TC74 at {}: {}", address, temperature);
        Ok(temperature)
    }

    /// [`read_temperature`](Self::read_temperature), tagged with the address.
    pub fn measure(
        &mut self,
        address: Tc74Address,
        offset: i8,
    ) -> Result<Reading, Tc74Error<I2C::Error>> {
        let temperature = self.read_temperature(address, offset)?;
        Ok(Reading {
            address,
            temperature,
        })
    }

    /// Writes RWCR with only SHDN set as requested; all other bits are cleared.
    pub fn set_power_mode(
        &mut self,
        address: Tc74Address,
        mode: PowerMode,
    ) -> Result<(), Tc74Error<I2C::Error>> {
        let config = ConfigRegister::for_power_mode(mode);
        self.write_register(address, Register::Configuration, config.bits())?;
        log::debug!("TC74 at {}: {} mode", address, mode);
        Ok(())
    }

    /// Enters (`true`) or leaves (`false`) standby. Writes the whole RWCR, so
    /// every bit other than SHDN is cleared.
    pub fn set_standby(
        &mut self,
        address: Tc74Address,
        enable: bool,
    ) -> Result<(), Tc74Error<I2C::Error>> {
        self.set_power_mode(address, PowerMode::from(enable))
    }

    /// Leaves standby and waits one conversion period so the next
    /// [`read_temperature`](Self::read_temperature) finds DATA_RDY set.
    pub fn resume(&mut self, address: Tc74Address) -> Result<(), Tc74Error<I2C::Error>> {
        self.set_power_mode(address, PowerMode::Normal)?;
        self.delay.delay_ms(timing::CONVERSION_TIME.as_millis() as u32);
        Ok(())
    }

    // --- Integer-sentinel Interface ---

    /// Like [`read_temperature`](Self::read_temperature), but every failure
    /// becomes [`TEMPERATURE_ERROR_SENTINEL`] (404).
    pub fn read_temperature_or_sentinel(&mut self, address: Tc74Address, offset: i8) -> i16 {
        self.read_temperature(address, offset)
            .map(i16::from)
            .unwrap_or(TEMPERATURE_ERROR_SENTINEL)
    }

    /// Like [`read_configuration`](Self::read_configuration), but a bus failure
    /// becomes [`CONFIG_ERROR_SENTINEL`] (255).
    pub fn read_configuration_or_sentinel(&mut self, address: Tc74Address) -> u8 {
        self.read_configuration(address)
            .map(u8::from)
            .unwrap_or(CONFIG_ERROR_SENTINEL)
    }
}
