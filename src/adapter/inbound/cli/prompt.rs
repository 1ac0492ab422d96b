//! Terminal prompts backed by `dialoguer`.

use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Input, Select};

use crate::error::{Error, Result};
use crate::port::{Prompter, Validator};

/// [`Prompter`] that asks questions on the controlling terminal.
pub struct TerminalPrompter {
    theme: Box<dyn Theme>,
}

impl TerminalPrompter {
    /// Create a prompter; `color` picks the colorful or plain theme.
    #[must_use]
    pub fn new(color: bool) -> Self {
        let theme: Box<dyn Theme> = if color {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        };
        Self { theme }
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, message: &str, items: &[String]) -> Result<usize> {
        if items.is_empty() {
            return Err(Error::Prompt(format!("nothing to select for '{message}'")));
        }
        let index = Select::with_theme(self.theme.as_ref())
            .with_prompt(message)
            .items(items)
            .default(0)
            .interact()?;
        Ok(index)
    }

    fn input(&mut self, message: &str) -> Result<String> {
        let answer: String = Input::with_theme(self.theme.as_ref())
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }

    fn input_validated(&mut self, message: &str, validate: Validator<'_>) -> Result<String> {
        let answer: String = Input::with_theme(self.theme.as_ref())
            .with_prompt(message)
            .allow_empty(true)
            .validate_with(|input: &String| validate(input.as_str()))
            .interact_text()?;
        Ok(answer)
    }
}
