//! Oxford-comma sentence assembly.

use super::tokenize::{tokenize, WordInput};
use crate::config::{EmptyListPolicy, FormatterConfig};
use crate::error::{Result, ToolboxError};

/// Formats word lists into sentence fragments such as `"red, blue, and green"`.
#[derive(Debug, Clone, Default)]
pub struct ListFormatter {
    config: FormatterConfig,
}

impl ListFormatter {
    /// Surrounding whitespace on the conjunction is dropped.
    pub fn new(mut config: FormatterConfig) -> Self {
        config.conjunction = config.conjunction.trim().to_string();
        Self { config }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Tokenize with this formatter's word cap.
    pub fn words(&self, input: &WordInput) -> Vec<String> {
        tokenize(input, self.config.max_words)
    }

    /// Sentence fragment for `input`. Never fails; an empty list gives `""`.
    pub fn sentence(&self, input: &WordInput) -> String {
        join_words(&self.words(input), &self.config.conjunction)
    }

    /// Like [`sentence`](Self::sentence), but honours the empty-list policy.
    pub fn try_sentence(&self, input: &WordInput) -> Result<String> {
        let words = self.words(input);
        if words.is_empty() && self.config.empty_list == EmptyListPolicy::Reject {
            return Err(ToolboxError::EmptyWordList);
        }
        Ok(join_words(&words, &self.config.conjunction))
    }

    /// `"{subject} related to {sentence}"`, trimmed.
    pub fn caption_sentence(&self, subject: &str, input: &WordInput) -> String {
        related_to(subject, &self.sentence(input))
    }

    /// Caption sentence that honours the empty-list policy.
    pub fn try_caption_sentence(&self, subject: &str, input: &WordInput) -> Result<String> {
        Ok(related_to(subject, &self.try_sentence(input)?))
    }
}

fn related_to(subject: &str, sentence: &str) -> String {
    format!("{subject} related to {sentence}").trim().to_string()
}

/// Join already-normalized words with an oxford comma before `conjunction`.
///
/// A single word is returned on its own, without the conjunction.
pub fn join_words(words: &[String], conjunction: &str) -> String {
    let sentence = match words {
        [] => String::new(),
        [only] => only.clone(),
        [first, last] => format!("{first} {conjunction} {last}"),
        [init @ .., last] => format!("{}, {conjunction} {last}", init.join(", ")),
    };
    sentence.trim().to_string()
}
