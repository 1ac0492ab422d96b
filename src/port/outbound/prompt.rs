//! Prompt port: how handlers ask the user for input.

use crate::domain::Choice;
use crate::error::{Error, Result};

/// Validation callback for free-text prompts.
///
/// Returns the message to show the user when the input is rejected.
pub type Validator<'a> = &'a dyn Fn(&str) -> std::result::Result<(), String>;

/// Interactive question facility.
///
/// Each call blocks until the user answers. Implementations return
/// [`Error::Prompt`] when the terminal goes away.
pub trait Prompter {
    /// Show a single-choice list and return the index of the picked item.
    fn select(&mut self, message: &str, items: &[String]) -> Result<usize>;

    /// Ask for arbitrary free text. Empty answers are allowed.
    fn input(&mut self, message: &str) -> Result<String>;

    /// Ask for free text, re-asking until `validate` accepts it.
    fn input_validated(&mut self, message: &str, validate: Validator<'_>) -> Result<String>;
}

/// Present labelled choices and return the value behind the picked label.
///
/// # Errors
/// Propagates prompt failures, and returns [`Error::Prompt`] if the
/// prompter reports an index outside the list.
pub fn choose<P, T>(prompter: &mut P, message: &str, choices: &[Choice<T>]) -> Result<T>
where
    P: Prompter + ?Sized,
    T: Clone,
{
    let labels: Vec<String> = choices.iter().map(|c| c.label.clone()).collect();
    let index = prompter.select(message, &labels)?;
    choices
        .get(index)
        .map(|c| c.value.clone())
        .ok_or_else(|| Error::Prompt(format!("selection {index} out of range")))
}
