//! Survey questions and the rules that judge their answers.

use std::collections::HashSet;
use std::fmt;

use super::answer::{Answer, AnswerContent};

/// Identifier of a question, unique within a survey.
pub type QuestionId = u32;

/// The kind of a question, which decides what counts as a valid answer
/// and how similar two valid answers are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Exactly one of a fixed list of text options.
    MultipleChoice { options: Vec<String> },

    /// An integer in the inclusive range `[min, max]`.
    Numeric { min: i64, max: i64 },

    /// A boolean.
    YesNo,

    /// A non-empty set of distinct options from a fixed list.
    Checkbox { options: Vec<String> },
}

/// A survey question.
///
/// Two questions are the same question iff they share an id; the text and
/// kind are only consulted for validation, similarity and display.
///
/// # Examples
///
/// ```
/// use groupforge_core::{Answer, Question};
///
/// let q = Question::numeric(2, "Pick a number", 1, 3);
/// assert!(q.validate(&Answer::from(2_i64)));
/// assert!(!q.validate(&Answer::from(4_i64)));
/// assert_eq!(q.similarity(&Answer::from(1_i64), &Answer::from(2_i64)), 0.5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: String,
    kind: QuestionKind,
}

impl Question {
    /// Creates a question of any kind.
    pub fn new(id: QuestionId, text: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id,
            text: text.into(),
            kind,
        }
    }

    /// Creates a multiple choice question.
    pub fn multiple_choice<I, O>(id: QuestionId, text: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<String>,
    {
        let options = options.into_iter().map(Into::into).collect();
        Self::new(id, text, QuestionKind::MultipleChoice { options })
    }

    /// Creates a numeric question accepting integers in `[min, max]`.
    pub fn numeric(id: QuestionId, text: impl Into<String>, min: i64, max: i64) -> Self {
        Self::new(id, text, QuestionKind::Numeric { min, max })
    }

    /// Creates a yes/no question.
    pub fn yes_no(id: QuestionId, text: impl Into<String>) -> Self {
        Self::new(id, text, QuestionKind::YesNo)
    }

    /// Creates a checkbox question.
    pub fn checkbox<I, O>(id: QuestionId, text: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<String>,
    {
        let options = options.into_iter().map(Into::into).collect();
        Self::new(id, text, QuestionKind::Checkbox { options })
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Returns true iff `answer` is a valid answer to this question.
    pub fn validate(&self, answer: &Answer) -> bool {
        match (&self.kind, answer.content()) {
            (QuestionKind::MultipleChoice { options }, AnswerContent::Text(text)) => {
                options.iter().any(|o| o == text)
            }
            (QuestionKind::Numeric { min, max }, AnswerContent::Integer(value)) => {
                (*min..=*max).contains(value)
            }
            (QuestionKind::YesNo, AnswerContent::Boolean(_)) => true,
            (QuestionKind::Checkbox { options }, AnswerContent::Selection(selected)) => {
                let mut seen = HashSet::with_capacity(selected.len());
                !selected.is_empty()
                    && selected
                        .iter()
                        .all(|s| seen.insert(s.as_str()) && options.iter().any(|o| o == s))
            }
            _ => false,
        }
    }

    /// Returns a similarity in `[0, 1]` between two answers to this question.
    ///
    /// Only meaningful when both answers are valid; if either is not, the
    /// answers share nothing and the similarity is 0.0.
    pub fn similarity(&self, first: &Answer, second: &Answer) -> f64 {
        if !self.validate(first) || !self.validate(second) {
            return 0.0;
        }

        match (&self.kind, first.content(), second.content()) {
            (QuestionKind::Numeric { min, max }, AnswerContent::Integer(a), AnswerContent::Integer(b)) => {
                if max == min {
                    return 1.0;
                }
                // Widened so ranges spanning the whole i64 domain cannot overflow.
                let distance = (i128::from(*a) - i128::from(*b)).abs();
                let range = i128::from(*max) - i128::from(*min);
                1.0 - distance as f64 / range as f64
            }
            (
                QuestionKind::Checkbox { .. },
                AnswerContent::Selection(a),
                AnswerContent::Selection(b),
            ) => jaccard(a, b),
            _ => {
                if first.content() == second.content() {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

// Jaccard index of two option sets.
fn jaccard(a: &[String], b: &[String]) -> f64 {
    let a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let b: HashSet<&str> = b.iter().map(String::as_str).collect();
    let union = a.union(&b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(&b).count() as f64 / union as f64
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            QuestionKind::MultipleChoice { options } | QuestionKind::Checkbox { options } => {
                write!(f, "{}", self.text)?;
                for option in options {
                    write!(f, "\n{}", option)?;
                }
                Ok(())
            }
            QuestionKind::Numeric { min, max } => write!(
                f,
                "{}\n(The answer is an integer between {} and {})",
                self.text, min, max
            ),
            QuestionKind::YesNo => write!(f, "{} (True / False)", self.text),
        }
    }
}
