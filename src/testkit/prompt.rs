//! Scripted prompt answers for driving the menu without a terminal.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{Error, Result};
use crate::port::{Prompter, Validator};

/// One queued answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Pick the list item at this index.
    Index(usize),
    /// Pick the list item with this exact label.
    Pick(String),
    /// Type this free text.
    Text(String),
}

impl Answer {
    pub fn pick(label: impl Into<String>) -> Self {
        Answer::Pick(label.into())
    }

    pub fn text(text: impl Into<String>) -> Self {
        Answer::Text(text.into())
    }
}

#[derive(Debug, Default)]
struct Script {
    answers: VecDeque<Answer>,
    asked: Vec<String>,
    offered: Vec<(String, Vec<String>)>,
    rejections: Vec<String>,
}

/// [`Prompter`] that replays a fixed list of answers.
///
/// Clones share state, so a test can keep a handle after moving the
/// prompter into a session. When the script runs out every prompt fails
/// with [`Error::Prompt`], which ends the menu loop.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    script: Arc<Mutex<Script>>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        let script = Script {
            answers: answers.into_iter().collect(),
            ..Script::default()
        };
        Self {
            script: Arc::new(Mutex::new(script)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Script> {
        match self.script.lock() {
            Ok(script) => script,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Every prompt message shown so far, in order.
    pub fn asked(&self) -> Vec<String> {
        self.lock().asked.clone()
    }

    /// Items offered by the most recent selection prompt with this message.
    pub fn offered(&self, message: &str) -> Option<Vec<String>> {
        self.lock()
            .offered
            .iter()
            .rev()
            .find(|(m, _)| m == message)
            .map(|(_, items)| items.clone())
    }

    /// Validation messages produced by rejected free-text answers.
    pub fn rejections(&self) -> Vec<String> {
        self.lock().rejections.clone()
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.lock().answers.len()
    }
}

fn next_answer(script: &mut Script, message: &str) -> Result<Answer> {
    script.asked.push(message.to_string());
    script
        .answers
        .pop_front()
        .ok_or_else(|| Error::Prompt(format!("script exhausted at '{message}'")))
}

fn expect_text(answer: Answer, message: &str) -> Result<String> {
    match answer {
        Answer::Text(text) => Ok(text),
        other => Err(Error::Prompt(format!(
            "expected text for '{message}', script had {other:?}"
        ))),
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, message: &str, items: &[String]) -> Result<usize> {
        let mut script = self.lock();
        script
            .offered
            .push((message.to_string(), items.to_vec()));
        match next_answer(&mut script, message)? {
            Answer::Index(index) => Ok(index),
            Answer::Pick(label) => items
                .iter()
                .position(|item| *item == label)
                .ok_or_else(|| Error::Prompt(format!("no item '{label}' in '{message}'"))),
            Answer::Text(text) => Err(Error::Prompt(format!(
                "expected a selection for '{message}', script had text '{text}'"
            ))),
        }
    }

    fn input(&mut self, message: &str) -> Result<String> {
        let mut script = self.lock();
        let answer = next_answer(&mut script, message)?;
        expect_text(answer, message)
    }

    fn input_validated(&mut self, message: &str, validate: Validator<'_>) -> Result<String> {
        let mut script = self.lock();
        loop {
            let text = expect_text(next_answer(&mut script, message)?, message)?;
            match validate(&text) {
                Ok(()) => return Ok(text),
                Err(reason) => script.rejections.push(reason),
            }
        }
    }
}
