// src/lib.rs

#![no_std]

#[cfg(test)]
extern crate std;

pub mod common;
pub mod driver;

// Re-export key types for convenience
pub use common::{
    BusSettings, BusSetup, ConfigRegister, PowerMode, Reading, Register, Tc74Address, Tc74Error,
    Temperature,
};
pub use driver::Tc74;
