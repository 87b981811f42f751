//! Random grouper.

use groupforge_core::{Grouping, Respondent, Result, Roster};
use groupforge_scoring::GroupScorer;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};

use super::{check_group_size, push_group, Grouper};

/// Groups respondents by repeatedly shuffling the ungrouped respondents and
/// taking the first `group_size` of them.
///
/// There is no quality objective; the scorer is never consulted. Use
/// [`with_seed`](Self::with_seed) for a reproducible grouping.
#[derive(Debug)]
pub struct RandomGrouper {
    group_size: usize,
    rng: StdRng,
}

impl RandomGrouper {
    /// Creates a random grouper seeded from the operating system.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if `group_size < 2`.
    pub fn new(group_size: usize) -> Result<Self> {
        Ok(Self {
            group_size: check_group_size(group_size)?,
            rng: StdRng::from_os_rng(),
        })
    }

    /// Creates a random grouper with a specific seed for reproducibility.
    pub fn with_seed(group_size: usize, seed: u64) -> Result<Self> {
        Ok(Self {
            group_size: check_group_size(group_size)?,
            rng: StdRng::seed_from_u64(seed),
        })
    }
}

impl Grouper for RandomGrouper {
    fn group_size(&self) -> usize {
        self.group_size
    }

    fn make_grouping<'r>(
        &mut self,
        roster: &'r Roster,
        _scorer: &dyn GroupScorer,
    ) -> Result<Grouping<'r>> {
        info!(
            event = "grouping_start",
            grouper = self.grouper_type_name(),
            respondents = roster.len(),
            group_size = self.group_size,
        );

        let mut ungrouped: Vec<&'r Respondent> = roster.respondents().iter().collect();
        let mut grouping = Grouping::new();
        while ungrouped.len() > self.group_size {
            ungrouped.shuffle(&mut self.rng);
            push_group(&mut grouping, ungrouped.drain(..self.group_size))?;
            debug!(event = "group_formed", members = self.group_size);
        }
        if !ungrouped.is_empty() {
            debug!(event = "group_formed", members = ungrouped.len());
            push_group(&mut grouping, ungrouped)?;
        }

        info!(
            event = "grouping_end",
            grouper = self.grouper_type_name(),
            groups = grouping.len(),
        );
        Ok(grouping)
    }

    fn grouper_type_name(&self) -> &'static str {
        "RandomGrouper"
    }
}

#[cfg(test)]
mod tests {
    use groupforge_scoring::Survey;
    use groupforge_test::{named_roster, swimming_roster};

    use super::*;

    fn ids(grouping: &Grouping<'_>) -> Vec<Vec<u32>> {
        grouping
            .iter()
            .map(|g| g.members().iter().map(|m| m.id()).collect())
            .collect()
    }

    #[test]
    fn test_partitions_roster() {
        let roster = swimming_roster();
        let mut grouper = RandomGrouper::with_seed(3, 7).unwrap();

        let grouping = grouper.make_grouping(&roster, &Survey::new([])).unwrap();

        assert_eq!(grouping.len(), 2);
        assert_eq!(grouping.groups()[0].len(), 3);
        assert_eq!(grouping.groups()[1].len(), 1);
        assert_eq!(grouping.respondent_count(), 4);
        for respondent in roster.respondents() {
            assert!(grouping.contains(respondent));
        }
    }

    #[test]
    fn test_same_seed_same_grouping() {
        let roster = named_roster(
            "Chess",
            &[(1, "A"), (2, "B"), (3, "C"), (4, "D"), (5, "E"), (6, "F"), (7, "G")],
        );
        let survey = Survey::new([]);

        let first = RandomGrouper::with_seed(2, 42)
            .unwrap()
            .make_grouping(&roster, &survey)
            .unwrap();
        let second = RandomGrouper::with_seed(2, 42)
            .unwrap()
            .make_grouping(&roster, &survey)
            .unwrap();

        assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn test_empty_roster() {
        let roster = Roster::new("Empty");
        let mut grouper = RandomGrouper::new(2).unwrap();

        let grouping = grouper.make_grouping(&roster, &Survey::new([])).unwrap();

        assert!(grouping.is_empty());
    }

    #[test]
    fn test_rejects_small_group_size() {
        assert!(RandomGrouper::new(1).is_err());
        assert!(RandomGrouper::with_seed(0, 1).is_err());
    }
}
