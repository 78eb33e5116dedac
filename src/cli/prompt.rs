//! Interactive input
//!
//! Handlers ask questions through [`Prompter`]; the terminal implementation is backed by
//! `inquire`, and [`ScriptedPrompter`] replays fixed answers.

use crate::core::services::types::Choice;
use crate::error::PromptError;
use inquire::{InquireError, Select, Text};
use std::collections::VecDeque;

/// Label of the extra option offered by optional selections
pub const NO_SELECTION_LABEL: &str = "None";

const PAGE_SIZE: usize = 10;

pub trait Prompter: Send {
    /// Ask for free text
    fn text(&mut self, message: &str) -> Result<String, PromptError>;

    /// Ask for exactly one of `options`, returning its index
    fn select(&mut self, message: &str, options: &[String]) -> Result<usize, PromptError>;
}

/// Ask for one of `choices`; `what` names them when the list is empty
pub fn select_choice(
    prompter: &mut dyn Prompter,
    message: &str,
    choices: &[Choice],
    what: &str,
) -> Result<Choice, PromptError> {
    if choices.is_empty() {
        return Err(PromptError::NoChoices {
            what: what.to_string(),
        });
    }
    let labels: Vec<String> = choices.iter().map(|c| c.label.clone()).collect();
    let index = prompter.select(message, &labels)?;
    choices.get(index).cloned().ok_or_else(|| PromptError::Terminal {
        message: format!("selection {} out of range", index),
    })
}

/// Like [`select_choice`] but with a leading "None" option, so an empty list is fine
pub fn select_optional_choice(
    prompter: &mut dyn Prompter,
    message: &str,
    choices: &[Choice],
) -> Result<Option<Choice>, PromptError> {
    let mut labels = Vec::with_capacity(choices.len() + 1);
    labels.push(NO_SELECTION_LABEL.to_string());
    labels.extend(choices.iter().map(|c| c.label.clone()));

    match prompter.select(message, &labels)? {
        0 => Ok(None),
        index => choices
            .get(index - 1)
            .cloned()
            .map(Some)
            .ok_or_else(|| PromptError::Terminal {
                message: format!("selection {} out of range", index),
            }),
    }
}

fn map_inquire_error(error: InquireError) -> PromptError {
    match error {
        InquireError::OperationCanceled => PromptError::Canceled,
        InquireError::OperationInterrupted => PromptError::Interrupted,
        other => PromptError::Terminal {
            message: other.to_string(),
        },
    }
}

/// Terminal prompts
#[derive(Debug, Default)]
pub struct InquirePrompter;

impl InquirePrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for InquirePrompter {
    fn text(&mut self, message: &str) -> Result<String, PromptError> {
        Text::new(message).prompt().map_err(map_inquire_error)
    }

    fn select(&mut self, message: &str, options: &[String]) -> Result<usize, PromptError> {
        // inquire refuses an empty option list
        if options.is_empty() {
            return Err(PromptError::NoChoices {
                what: "options".to_string(),
            });
        }
        Select::new(message, options.to_vec())
            .with_page_size(PAGE_SIZE)
            .raw_prompt()
            .map(|selected| selected.index)
            .map_err(map_inquire_error)
    }
}

/// One pre-recorded answer
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptedAnswer {
    Text(String),
    /// Select by position
    Index(usize),
    /// Select the option with this exact label
    Label(String),
    Cancel,
}

/// Replays answers in order; running out behaves like Ctrl-C.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<ScriptedAnswer>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = ScriptedAnswer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Messages of every prompt shown so far
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next_answer(&mut self, message: &str) -> Result<ScriptedAnswer, PromptError> {
        self.asked.push(message.to_string());
        match self.answers.pop_front() {
            Some(ScriptedAnswer::Cancel) => Err(PromptError::Canceled),
            Some(answer) => Ok(answer),
            None => Err(PromptError::Interrupted),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn text(&mut self, message: &str) -> Result<String, PromptError> {
        match self.next_answer(message)? {
            ScriptedAnswer::Text(text) => Ok(text),
            other => Err(PromptError::Terminal {
                message: format!("expected text for '{}', got {:?}", message, other),
            }),
        }
    }

    fn select(&mut self, message: &str, options: &[String]) -> Result<usize, PromptError> {
        if options.is_empty() {
            return Err(PromptError::NoChoices {
                what: "options".to_string(),
            });
        }
        let index = match self.next_answer(message)? {
            ScriptedAnswer::Index(index) => index,
            ScriptedAnswer::Label(label) => options
                .iter()
                .position(|option| *option == label)
                .ok_or_else(|| PromptError::Terminal {
                    message: format!("'{}' is not an option for '{}'", label, message),
                })?,
            other => {
                return Err(PromptError::Terminal {
                    message: format!("expected a selection for '{}', got {:?}", message, other),
                });
            }
        };
        if index >= options.len() {
            return Err(PromptError::Terminal {
                message: format!("selection {} out of range for '{}'", index, message),
            });
        }
        Ok(index)
    }
}
