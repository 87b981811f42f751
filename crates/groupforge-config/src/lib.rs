//! Configuration system for GroupForge.
//!
//! Load grouper configuration from TOML or YAML files to choose the
//! grouping algorithm, the group size and per-question scoring overrides
//! without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use groupforge_config::{CriterionType, GrouperConfig, GrouperType};
//!
//! let config = GrouperConfig::from_toml_str(r#"
//!     grouper_type = "window"
//!     group_size = 3
//!
//!     [[questions]]
//!     id = 4
//!     weight = 2.0
//!     criterion = "lonely_member"
//! "#).unwrap();
//!
//! assert_eq!(config.grouper_type, GrouperType::Window);
//! assert_eq!(config.group_size, 3);
//! assert_eq!(config.questions[0].criterion, Some(CriterionType::LonelyMember));
//! ```
//!
//! Use default config when the file is missing:
//!
//! ```
//! use groupforge_config::GrouperConfig;
//!
//! let config = GrouperConfig::load("grouper.toml").unwrap_or_default();
//! assert_eq!(config.group_size, 2);
//! ```

use std::path::Path;

use groupforge_core::is_valid_weight;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Group size used when none is configured.
pub const DEFAULT_GROUP_SIZE: usize = 2;

pub use groupforge_core::DEFAULT_WEIGHT;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main grouper configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct GrouperConfig {
    /// Grouping algorithm.
    #[serde(default)]
    pub grouper_type: GrouperType,

    /// Target number of members per group.
    #[serde(default = "default_group_size")]
    pub group_size: usize,

    /// Random seed for reproducible random groupings.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Weight for questions without an explicit weight.
    #[serde(default = "default_weight")]
    pub default_weight: f64,

    /// Criterion for questions without an explicit criterion.
    #[serde(default)]
    pub default_criterion: CriterionType,

    /// Per-question overrides.
    #[serde(default)]
    pub questions: Vec<QuestionConfig>,
}

fn default_group_size() -> usize {
    DEFAULT_GROUP_SIZE
}

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

impl Default for GrouperConfig {
    fn default() -> Self {
        Self {
            grouper_type: GrouperType::default(),
            group_size: DEFAULT_GROUP_SIZE,
            random_seed: None,
            default_weight: DEFAULT_WEIGHT,
            default_criterion: CriterionType::default(),
            questions: Vec::new(),
        }
    }
}

impl GrouperConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, contains invalid TOML, or
    /// fails [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the grouping algorithm.
    pub fn with_grouper_type(mut self, grouper_type: GrouperType) -> Self {
        self.grouper_type = grouper_type;
        self
    }

    /// Sets the target group size.
    pub fn with_group_size(mut self, group_size: usize) -> Self {
        self.group_size = group_size;
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Adds a per-question override.
    pub fn with_question(mut self, question: QuestionConfig) -> Self {
        self.questions.push(question);
        self
    }

    /// Checks the invariants the groupers and the survey rely on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the group size is below 2, a weight
    /// is not positive and finite, or two overrides name the same question.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.group_size < 2 {
            return Err(ConfigError::Invalid(format!(
                "group_size must be at least 2, got {}",
                self.group_size
            )));
        }
        if !is_valid_weight(self.default_weight) {
            return Err(ConfigError::Invalid(format!(
                "default_weight must be positive and finite, got {}",
                self.default_weight
            )));
        }
        for (i, question) in self.questions.iter().enumerate() {
            if let Some(weight) = question.weight {
                if !is_valid_weight(weight) {
                    return Err(ConfigError::Invalid(format!(
                        "weight for question {} must be positive and finite, got {}",
                        question.id, weight
                    )));
                }
            }
            if self.questions[..i].iter().any(|q| q.id == question.id) {
                return Err(ConfigError::Invalid(format!(
                    "question {} is configured more than once",
                    question.id
                )));
            }
        }
        Ok(())
    }
}

/// Grouping algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GrouperType {
    /// Consecutive slices of the roster sorted by name.
    Alpha,

    /// Consecutive slices of a shuffled roster.
    Random,

    /// Greedy best-match assembly.
    #[default]
    Greedy,

    /// Sliding window local search.
    Window,
}

/// Scoring criterion for a question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionType {
    /// Reward similar answers.
    #[default]
    Homogeneous,

    /// Reward different answers.
    Heterogeneous,

    /// Reward groups where nobody answers alone.
    LonelyMember,
}

/// Scoring overrides for one question.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct QuestionConfig {
    /// Id of the question the overrides apply to.
    pub id: u32,

    /// Weight override.
    pub weight: Option<f64>,

    /// Criterion override.
    pub criterion: Option<CriterionType>,
}

impl QuestionConfig {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            weight: None,
            criterion: None,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_criterion(mut self, criterion: CriterionType) -> Self {
        self.criterion = Some(criterion);
        self
    }
}

#[cfg(test)]
mod tests;
