//! GroupForge Core - Survey domain and group containers
//!
//! This crate provides the fundamental abstractions for GroupForge:
//! - Questions, answers and their validity / similarity rules
//! - Respondents and the roster they are enrolled in
//! - Group and Grouping containers enforcing partition invariants

pub mod domain;
pub mod error;
pub mod group;

pub use domain::{
    is_valid_weight, Answer, AnswerContent, Question, QuestionId, QuestionKind, Respondent,
    RespondentId, Roster, DEFAULT_WEIGHT,
};
pub use error::{GroupForgeError, Result};
pub use group::{Group, Grouping};
