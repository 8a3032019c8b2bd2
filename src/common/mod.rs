// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod address;
pub mod config;
pub mod error;
pub mod hal_traits;
pub mod register;
pub mod temperature;
pub mod timing;

// --- Re-export key types/traits for easier access ---

// From address.rs
pub use address::Tc74Address;

// From config.rs
pub use config::{ConfigRegister, PowerMode, CONFIG_ERROR_SENTINEL};

// From error.rs
pub use error::Tc74Error;

// From hal_traits.rs
pub use hal_traits::{BusSettings, BusSetup};

// From register.rs
pub use register::Register;

// From temperature.rs
pub use temperature::{Reading, Temperature, TEMPERATURE_ERROR_SENTINEL};

// From timing.rs (constants - users can access via common::timing::*)
// No re-exports by default.
