use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of fixed learning modules in the portal.
pub const MODULE_COUNT: u8 = 5;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("module number {0} is outside 1..=5")]
pub struct InvalidModuleNumber(pub u8);

/// Identifier of one of the five fixed learning modules (1..=5).
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct ModuleNumber(u8);

impl ModuleNumber {
    /// Creates a `ModuleNumber`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidModuleNumber` when `value` is outside `1..=5`.
    pub fn new(value: u8) -> Result<Self, InvalidModuleNumber> {
        if (1..=MODULE_COUNT).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidModuleNumber(value))
        }
    }

    /// Returns the underlying number.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// All module numbers, in catalog order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=MODULE_COUNT).map(Self)
    }
}

impl TryFrom<u8> for ModuleNumber {
    type Error = InvalidModuleNumber;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ModuleNumber> for u8 {
    fn from(number: ModuleNumber) -> Self {
        number.0
    }
}

impl fmt::Debug for ModuleNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModuleNumber({})", self.0)
    }
}

impl fmt::Display for ModuleNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Title of a module as shown across the portal.
#[must_use]
pub fn module_name(number: ModuleNumber) -> &'static str {
    match number.value() {
        1 => "Mata Pelajaran Koding dan KA",
        2 => "Literasi Algoritma",
        3 => "Etika dan Resiko KA",
        4 => "Komunikasi Melalui Tools KA",
        _ => "Pedagogik Koding dan KA",
    }
}
