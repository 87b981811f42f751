//! Survey respondents.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::answer::Answer;
use super::question::{Question, QuestionId};

/// Identifier of a respondent, unique within a roster.
pub type RespondentId = u32;

/// A respondent with a display name and the answers they submitted.
///
/// Respondents compare and hash by id only: two values with the same id are
/// the same respondent regardless of name or answers.
#[derive(Debug, Clone)]
pub struct Respondent {
    id: RespondentId,
    name: String,
    answers: HashMap<QuestionId, Answer>,
}

impl Respondent {
    pub fn new(id: RespondentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            answers: HashMap::new(),
        }
    }

    /// Records an answer to `question`, replacing any earlier one.
    pub fn set_answer(&mut self, question: &Question, answer: impl Into<Answer>) {
        self.answers.insert(question.id(), answer.into());
    }

    /// Builder form of [`set_answer`](Self::set_answer).
    pub fn with_answer(mut self, question: &Question, answer: impl Into<Answer>) -> Self {
        self.set_answer(question, answer);
        self
    }

    pub fn id(&self) -> RespondentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the answer recorded for `question`, if any.
    pub fn answer(&self, question: &Question) -> Option<&Answer> {
        self.answers.get(&question.id())
    }

    /// Returns true iff an answer is recorded for `question` and it is valid.
    pub fn has_answer(&self, question: &Question) -> bool {
        self.answer(question)
            .is_some_and(|answer| answer.is_valid(question))
    }
}

impl PartialEq for Respondent {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Respondent {}

impl Hash for Respondent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Respondent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
