//! Scoring for GroupForge
//!
//! This crate turns respondents' answers into quality scores:
//! - [`Criterion`] scores one question's answers for a set of respondents
//! - [`GroupScorer`] is the seam groupers evaluate candidate groups through
//! - [`Survey`] aggregates weighted criterion scores over a question set
//! - [`FnScorer`] adapts a closure into a scorer

pub mod criterion;
pub mod scorer;
pub mod survey;

pub use criterion::Criterion;
pub use scorer::{FnScorer, GroupScorer};
pub use survey::Survey;
