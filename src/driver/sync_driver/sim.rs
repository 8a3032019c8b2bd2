// src/driver/sync_driver/sim.rs
//
// Test doubles: a bus with up to eight simulated TC74 parts and a delay that
// records what it was asked to wait.

use crate::common::{
    address::Tc74Address,
    hal_traits::{BusSettings, BusSetup},
    register::Register,
};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};

// --- Simulated TC74 ---
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SimDevice {
    pub temperature: u8,
    pub standby: bool,
    /// Conversion-complete latch. Reported in RWCR only while not in standby.
    pub data_ready: bool,
    pointer: u8,
}

impl SimDevice {
    /// A part in normal mode with a completed conversion.
    pub fn new(temperature: u8) -> Self {
        SimDevice {
            temperature,
            standby: false,
            data_ready: true,
            pointer: Register::Temperature.command(),
        }
    }

    pub fn not_ready(mut self) -> Self {
        self.data_ready = false;
        self
    }

    pub fn config(&self) -> u8 {
        let mut bits = 0;
        if self.standby {
            bits |= 1 << 7;
        }
        if self.data_ready && !self.standby {
            bits |= 1 << 6;
        }
        bits
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), ErrorKind> {
        let Some((&command, data)) = bytes.split_first() else {
            return Ok(());
        };
        let register =
            Register::try_from(command).map_err(|_| ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data))?;
        self.pointer = command;
        if let Some(&value) = data.first() {
            if !register.is_writable() {
                return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data));
            }
            // Only SHDN is writable, DATA_RDY is owned by the part.
            self.standby = value & 0x80 != 0;
        }
        Ok(())
    }

    fn read(&self, buffer: &mut [u8]) {
        let value = match Register::try_from(self.pointer) {
            Ok(Register::Configuration) => self.config(),
            _ => self.temperature,
        };
        buffer.fill(value);
    }
}

// --- Simulated Bus ---
#[derive(Debug, Default)]
pub(crate) struct SimulatedBus {
    devices: [Option<SimDevice>; 8],
    /// Every transaction attempted, acknowledged or not.
    pub transactions: usize,
    pub configured_with: Option<BusSettings>,
    pub fail_setup: bool,
}

impl SimulatedBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, address: Tc74Address, device: SimDevice) {
        self.devices[address.variant() as usize] = Some(device);
    }

    pub fn device(&self, address: Tc74Address) -> Option<&SimDevice> {
        self.devices[address.variant() as usize].as_ref()
    }

    pub fn device_mut(&mut self, address: Tc74Address) -> Option<&mut SimDevice> {
        self.devices[address.variant() as usize].as_mut()
    }
}

impl ErrorType for SimulatedBus {
    type Error = ErrorKind;
}

impl I2c for SimulatedBus {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.transactions += 1;
        let device = Tc74Address::new(address)
            .ok()
            .and_then(|addr| self.devices[addr.variant() as usize].as_mut())
            .ok_or(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address))?;

        for op in operations.iter_mut() {
            match op {
                Operation::Write(bytes) => device.write(bytes)?,
                Operation::Read(buffer) => device.read(buffer),
            }
        }
        Ok(())
    }
}

impl BusSetup for SimulatedBus {
    fn configure(&mut self, settings: &BusSettings) -> Result<(), Self::Error> {
        if self.fail_setup {
            return Err(ErrorKind::Other);
        }
        self.configured_with = Some(*settings);
        Ok(())
    }
}

// --- Counting Delay ---
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct CountingDelay {
    pub us_calls: usize,
    pub total_us: u64,
    pub total_ms: u64,
}

impl CountingDelay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_us += u64::from(ns) / 1_000;
    }

    fn delay_us(&mut self, us: u32) {
        self.us_calls += 1;
        self.total_us += u64::from(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.total_ms += u64::from(ms);
    }
}
