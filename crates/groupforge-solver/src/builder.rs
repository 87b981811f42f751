//! Builder module for constructing groupers from configuration
//!
//! This module provides the wiring between configuration types and
//! the grouping algorithms.

use groupforge_config::{GrouperConfig, GrouperType};
use groupforge_core::Result;
use tracing::debug;

use crate::grouper::{AlphaGrouper, GreedyGrouper, Grouper, RandomGrouper, WindowGrouper};

/// Builder for constructing groupers from configuration.
pub struct GrouperBuilder;

impl GrouperBuilder {
    /// Builds a grouper from configuration.
    ///
    /// A configured `random_seed` only affects the random grouper.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the configured group size is below 2.
    pub fn build(config: &GrouperConfig) -> Result<Box<dyn Grouper>> {
        let size = config.group_size;
        let grouper: Box<dyn Grouper> = match config.grouper_type {
            GrouperType::Alpha => Box::new(AlphaGrouper::new(size)?),

            GrouperType::Random => match config.random_seed {
                Some(seed) => Box::new(RandomGrouper::with_seed(size, seed)?),
                None => Box::new(RandomGrouper::new(size)?),
            },

            GrouperType::Greedy => Box::new(GreedyGrouper::new(size)?),

            GrouperType::Window => Box::new(WindowGrouper::new(size)?),
        };

        debug!(
            event = "grouper_built",
            grouper = grouper.grouper_type_name(),
            group_size = size,
        );
        Ok(grouper)
    }

    /// Creates an alphabetical grouper.
    pub fn alpha(group_size: usize) -> Result<AlphaGrouper> {
        AlphaGrouper::new(group_size)
    }

    /// Creates a random grouper with a fixed seed.
    pub fn random(group_size: usize, seed: u64) -> Result<RandomGrouper> {
        RandomGrouper::with_seed(group_size, seed)
    }

    /// Creates a greedy grouper.
    pub fn greedy(group_size: usize) -> Result<GreedyGrouper> {
        GreedyGrouper::new(group_size)
    }

    /// Creates a window grouper.
    pub fn window(group_size: usize) -> Result<WindowGrouper> {
        WindowGrouper::new(group_size)
    }
}

/// Builds a boxed grouper from configuration.
///
/// Shorthand for [`GrouperBuilder::build`].
pub fn build_grouper(config: &GrouperConfig) -> Result<Box<dyn Grouper>> {
    GrouperBuilder::build(config)
}

#[cfg(test)]
mod tests {
    use groupforge_core::GroupForgeError;
    use groupforge_scoring::Survey;
    use groupforge_test::{cooking_roster, yes_no_question};

    use super::*;

    #[test]
    fn test_build_each_type() {
        let cases = [
            (GrouperType::Alpha, "AlphaGrouper"),
            (GrouperType::Random, "RandomGrouper"),
            (GrouperType::Greedy, "GreedyGrouper"),
            (GrouperType::Window, "WindowGrouper"),
        ];

        for (grouper_type, name) in cases {
            let config = GrouperConfig::new()
                .with_grouper_type(grouper_type)
                .with_group_size(3);
            let grouper = GrouperBuilder::build(&config).unwrap();

            assert_eq!(grouper.grouper_type_name(), name);
            assert_eq!(grouper.group_size(), 3);
        }
    }

    #[test]
    fn test_default_config_builds_greedy_pairs() {
        let roster = cooking_roster();
        let survey = Survey::new([yes_no_question()]);

        let mut grouper = build_grouper(&GrouperConfig::default()).unwrap();
        let grouping = grouper.make_grouping(&roster, &survey).unwrap();

        assert_eq!(grouper.grouper_type_name(), "GreedyGrouper");
        assert_eq!(grouping.to_string(), "Amy Lisa\nKali May\n");
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let roster = cooking_roster();
        let survey = Survey::new([yes_no_question()]);
        let config = GrouperConfig::new()
            .with_grouper_type(GrouperType::Random)
            .with_random_seed(9);

        let first = build_grouper(&config)
            .unwrap()
            .make_grouping(&roster, &survey)
            .unwrap()
            .to_string();
        let second = build_grouper(&config)
            .unwrap()
            .make_grouping(&roster, &survey)
            .unwrap()
            .to_string();

        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_group_size() {
        let config = GrouperConfig::new().with_group_size(1);

        assert!(matches!(
            GrouperBuilder::build(&config),
            Err(GroupForgeError::Config(_))
        ));
    }
}
