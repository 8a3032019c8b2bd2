// src/common/address.rs

use super::error::Tc74Error;
use core::fmt;

/// 7-bit I2C address of a TC74 part.
///
/// The address is fixed at the factory and encoded in the part number
/// (`TC74A0` .. `TC74A7`), so only eight values are legal.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Tc74Address(u8);

impl Tc74Address {
    pub const A0: Tc74Address = Tc74Address(0x48);
    pub const A1: Tc74Address = Tc74Address(0x49);
    pub const A2: Tc74Address = Tc74Address(0x4A);
    pub const A3: Tc74Address = Tc74Address(0x4B);
    pub const A4: Tc74Address = Tc74Address(0x4C);
    pub const A5: Tc74Address = Tc74Address(0x4D);
    pub const A6: Tc74Address = Tc74Address(0x4E);
    pub const A7: Tc74Address = Tc74Address(0x4F);

    /// Every legal address, lowest first.
    pub const ALL: [Tc74Address; 8] = [
        Self::A0,
        Self::A1,
        Self::A2,
        Self::A3,
        Self::A4,
        Self::A5,
        Self::A6,
        Self::A7,
    ];

    const BASE: u8 = 0x48;

    /// Creates a new `Tc74Address` if the given value belongs to the TC74 family.
    /// Returns `Result<Self, Tc74Error<()>>` because validation itself
    /// cannot cause a bus error.
    pub fn new(address: u8) -> Result<Self, Tc74Error<()>> {
        if Self::is_valid_address(address) {
            Ok(Tc74Address(address))
        } else {
            Err(Tc74Error::InvalidAddress(address))
        }
    }

    /// Address for part variant `An`, `n` in `0..=7`.
    pub fn from_variant(n: u8) -> Result<Self, Tc74Error<()>> {
        if n <= 7 {
            Ok(Tc74Address(Self::BASE + n))
        } else {
            Err(Tc74Error::InvalidAddress(Self::BASE.wrapping_add(n)))
        }
    }

    #[inline]
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// The `n` in the `TC74An` part number.
    #[inline]
    pub const fn variant(&self) -> u8 {
        self.0 - Self::BASE
    }

    #[inline]
    pub const fn is_valid_address(address: u8) -> bool {
        matches!(address, 0x48..=0x4F)
    }
}

// TC74A5 is the factory-standard part.
impl Default for Tc74Address {
    fn default() -> Self {
        Self::A5
    }
}

impl TryFrom<u8> for Tc74Address {
    type Error = Tc74Error<()>;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tc74Address> for u8 {
    fn from(value: Tc74Address) -> Self {
        value.0
    }
}

impl fmt::Display for Tc74Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}
