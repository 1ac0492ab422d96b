//! Labelled values offered by selection prompts.

use super::error::DomainError;

/// One entry in a selection list: what the user sees and what the
/// handler gets back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice<T> {
    pub label: String,
    pub value: T,
}

impl<T> Choice<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Label shown for the "no manager" entry of the manager prompt.
pub const NO_MANAGER_LABEL: &str = "None";

/// Prepend the `None` entry to a list of manager candidates.
///
/// Selecting it yields `None`, which is stored as a NULL manager reference.
#[must_use]
pub fn with_no_manager<T>(candidates: Vec<Choice<T>>) -> Vec<Choice<Option<T>>> {
    std::iter::once(Choice::new(NO_MANAGER_LABEL, None))
        .chain(
            candidates
                .into_iter()
                .map(|c| Choice::new(c.label, Some(c.value))),
        )
        .collect()
}

/// Fail early when a selection prompt would be empty.
///
/// # Errors
/// Returns [`DomainError::NothingToChoose`] for an empty list.
pub fn ensure_non_empty<T>(choices: &[Choice<T>], what: &'static str) -> Result<(), DomainError> {
    if choices.is_empty() {
        return Err(DomainError::NothingToChoose { what });
    }
    Ok(())
}
