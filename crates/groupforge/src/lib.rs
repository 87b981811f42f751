//! GroupForge - Survey-Driven Group Formation in Rust
//!
//! Partition a roster of survey respondents into fixed-size groups, scored by
//! how well each group's answers fit per-question criteria.
//!
//! # Example
//!
//! ```rust
//! use groupforge::prelude::*;
//!
//! let q = Question::yes_no(0, "Morning person?");
//! let roster = Roster::new("Cooking")
//!     .with_respondents([
//!         Respondent::new(1, "Amy").with_answer(&q, true),
//!         Respondent::new(2, "Lisa").with_answer(&q, true),
//!         Respondent::new(3, "Kali").with_answer(&q, false),
//!         Respondent::new(4, "May").with_answer(&q, true),
//!     ])
//!     .unwrap();
//! let survey = Survey::new([q]);
//!
//! let grouping = run_grouping(&roster, &survey, &GrouperConfig::default()).unwrap();
//! assert_eq!(grouping.to_string(), "Amy Lisa\nKali May\n");
//! ```

// Domain and containers
pub use groupforge_core::{
    Answer, AnswerContent, Group, GroupForgeError, Grouping, Question, QuestionId, QuestionKind,
    Respondent, RespondentId, Result, Roster,
};

// Scoring
pub use groupforge_scoring::{Criterion, FnScorer, GroupScorer, Survey};

// Groupers
pub use groupforge_solver::{
    build_grouper, AlphaGrouper, GreedyGrouper, Grouper, GrouperBuilder, RandomGrouper,
    WindowGrouper,
};

// Configuration
pub use groupforge_config::{
    ConfigError, CriterionType, GrouperConfig, GrouperType, QuestionConfig,
};

#[cfg(feature = "console")]
pub use groupforge_console as console;

mod run;
mod survey_config;

pub use run::run_grouping;
pub use survey_config::{apply_to_survey, criterion_for};

pub mod prelude {
    pub use super::{Answer, Group, Grouping, Question, Respondent, Roster};
    pub use super::{Criterion, GroupScorer, Survey};
    pub use super::{Grouper, GrouperConfig, GrouperType};
    pub use super::{apply_to_survey, run_grouping};
}
