//! Domain validation errors for core domain types.
//!
//! These errors are returned when user-supplied values violate a domain
//! rule, before anything reaches the store.
//!
//! # Examples
//!
//! ```
//! use roster::domain::error::DomainError;
//! use roster::domain::Salary;
//!
//! let result = Salary::parse("lots");
//! assert!(matches!(result, Err(DomainError::InvalidSalary { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Salary input did not parse as a number.
    #[error("invalid salary '{input}': not a number")]
    InvalidSalary {
        /// The rejected input.
        input: String,
    },

    /// A stored salary is not a decimal number.
    #[error("stored salary '{value}' is not a number")]
    CorruptSalary {
        /// The column contents.
        value: String,
    },

    /// A selection prompt had nothing to offer.
    #[error("no {what} available to choose from")]
    NothingToChoose {
        /// What the prompt was asking for, e.g. "department".
        what: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_salary_message_includes_input() {
        let err = DomainError::InvalidSalary {
            input: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "invalid salary 'abc': not a number");
    }

    #[test]
    fn nothing_to_choose_message_names_subject() {
        let err = DomainError::NothingToChoose { what: "department" };
        assert_eq!(err.to_string(), "no department available to choose from");
    }
}
