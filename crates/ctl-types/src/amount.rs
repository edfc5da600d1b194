use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeError;

/// A non-negative token quantity.
///
/// Amounts are bounded by `u128::MAX`; every arithmetic step is checked and
/// overflow surfaces as a [`TypeError::Overflow`] rather than wrapping. The
/// JSON representation is a decimal string, so snapshots remain readable by
/// arbitrary-precision consumers.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Amount(u128);

impl Amount {
    pub const ZERO: Self = Self(0);

    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition; `context` names the operation for error reporting.
    pub fn checked_add(self, other: Self, context: &'static str) -> Result<Self, TypeError> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or(TypeError::Overflow(context))
    }

    /// Checked subtraction; underflow below zero is an error.
    pub fn checked_sub(self, other: Self, context: &'static str) -> Result<Self, TypeError> {
        self.0
            .checked_sub(other.0)
            .map(Self)
            .ok_or(TypeError::Overflow(context))
    }

    /// Subtraction clamped at zero.
    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Parse a decimal string.
    pub fn from_decimal(s: &str) -> Result<Self, TypeError> {
        s.parse::<u128>()
            .map(Self)
            .map_err(|e| TypeError::InvalidAmount(format!("{s:?}: {e}")))
    }
}

impl fmt::Debug for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Amount({})", self.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(value as u128)
    }
}

impl FromStr for Amount {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal(s)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_decimal(&s).map_err(de::Error::custom)
    }
}
