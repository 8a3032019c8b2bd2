// src/driver/mod.rs

// Declare the sub-module
pub mod sync_driver;

// Re-export the public driver struct
pub use sync_driver::Tc74;
