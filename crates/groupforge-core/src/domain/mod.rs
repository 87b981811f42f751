//! Survey domain: questions, answers, respondents and the roster.
//!
//! Questions own the validity and similarity rules; respondents hold one
//! answer per question id; the roster fixes the enumeration order that
//! groupers consume.

mod answer;
mod question;
mod respondent;
mod roster;
mod weight;


pub use answer::{Answer, AnswerContent};
pub use question::{Question, QuestionId, QuestionKind};
pub use respondent::{Respondent, RespondentId};
pub use roster::Roster;
pub use weight::{is_valid_weight, DEFAULT_WEIGHT};
