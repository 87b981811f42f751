//! Shared test fixtures for GroupForge crates.
//!
//! This crate provides rosters, questions and respondents for testing.
//! It depends only on `groupforge-core` so every other crate can use it
//! as a dev-dependency without cycles.
//!
//! - [`yes_no`] - Single yes/no question rosters
//! - [`mixed`] - Four-question surveys covering every question kind
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! groupforge-test = { workspace = true }
//! ```
//!
//! ```ignore
//! use groupforge_test::yes_no::{cooking_roster, yes_no_question};
//! ```

pub mod mixed;
pub mod yes_no;

pub use mixed::{mixed_questions, MixedQuestions};
pub use yes_no::{
    answered_roster, cooking_roster, named_roster, swimming_roster, window_roster, yes_no_question,
};
