//! Monetary types for salary representation.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// A role's salary.
///
/// Any numeric input is accepted, including negative and fractional values.
/// Only non-numeric text is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Salary(Decimal);

impl Salary {
    /// Create a salary from an exact decimal amount.
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        Self(amount.normalize())
    }

    /// Parse a salary from free-text input.
    ///
    /// Surrounding whitespace is ignored. Plain decimals (`50000`, `1234.50`)
    /// and scientific notation (`5e4`) are accepted.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidSalary`] when the input is blank or not
    /// a number.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        let invalid = || DomainError::InvalidSalary {
            input: input.to_string(),
        };
        if trimmed.is_empty() {
            return Err(invalid());
        }

        Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map(Self::new)
            .map_err(|_| invalid())
    }

    /// Rebuild a salary from the text kept in the `role.salary` column.
    ///
    /// # Errors
    /// Returns [`DomainError::CorruptSalary`] when the column holds something
    /// other than a decimal number.
    pub fn from_stored(value: &str) -> Result<Self, DomainError> {
        Decimal::from_str(value.trim())
            .map(Self::new)
            .map_err(|_| DomainError::CorruptSalary {
                value: value.to_string(),
            })
    }

    /// The exact decimal text written to the `role.salary` column.
    #[must_use]
    pub fn to_stored(self) -> String {
        self.0.to_string()
    }

    /// The exact decimal amount.
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Salary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Salary {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
