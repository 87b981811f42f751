//! Answers submitted by respondents.

use super::question::Question;

/// The raw content of an answer. Which variant is valid depends on the
/// question kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerContent {
    Text(String),
    Integer(i64),
    Boolean(bool),
    Selection(Vec<String>),
}

/// An immutable answer to a survey question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    content: AnswerContent,
}

impl Answer {
    pub fn new(content: AnswerContent) -> Self {
        Self { content }
    }

    /// Creates a checkbox-style answer from the selected options.
    pub fn selection<I, O>(options: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<String>,
    {
        Self::new(AnswerContent::Selection(
            options.into_iter().map(Into::into).collect(),
        ))
    }

    pub fn content(&self) -> &AnswerContent {
        &self.content
    }

    /// Returns true iff this answer is valid for `question`.
    pub fn is_valid(&self, question: &Question) -> bool {
        question.validate(self)
    }
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        Self::new(AnswerContent::Boolean(value))
    }
}

impl From<i64> for Answer {
    fn from(value: i64) -> Self {
        Self::new(AnswerContent::Integer(value))
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Self::new(AnswerContent::Text(value.to_string()))
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Self::new(AnswerContent::Text(value))
    }
}

impl From<AnswerContent> for Answer {
    fn from(content: AnswerContent) -> Self {
        Self::new(content)
    }
}
