//! Alphabetical grouper.

use groupforge_core::{Grouping, Respondent, Result, Roster};
use groupforge_scoring::GroupScorer;
use tracing::{debug, info};

use super::{check_group_size, push_group, slice_list, Grouper};

/// Groups respondents in alphabetical order of their names.
///
/// The roster is stably sorted by name, so respondents sharing a name keep
/// their roster order, and then cut into consecutive slices. The scorer is
/// never consulted.
///
/// # Examples
///
/// ```
/// use groupforge_core::{Respondent, Roster};
/// use groupforge_scoring::Survey;
/// use groupforge_solver::{AlphaGrouper, Grouper};
///
/// let roster = Roster::new("Swimming")
///     .with_respondents([
///         Respondent::new(1, "Paul"),
///         Respondent::new(2, "Lily"),
///         Respondent::new(3, "Chris"),
///     ])
///     .unwrap();
///
/// let mut grouper = AlphaGrouper::new(2).unwrap();
/// let grouping = grouper.make_grouping(&roster, &Survey::new([])).unwrap();
/// assert_eq!(grouping.to_string(), "Chris Lily\nPaul\n");
/// ```
#[derive(Debug, Clone)]
pub struct AlphaGrouper {
    group_size: usize,
}

impl AlphaGrouper {
    /// Creates an alphabetical grouper.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if `group_size < 2`.
    pub fn new(group_size: usize) -> Result<Self> {
        Ok(Self {
            group_size: check_group_size(group_size)?,
        })
    }
}

impl Grouper for AlphaGrouper {
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

        let mut sorted: Vec<&'r Respondent> = roster.respondents().iter().collect();
        sorted.sort_by(|a, b| a.name().cmp(b.name()));

        let mut grouping = Grouping::new();
        for slice in slice_list(&sorted, self.group_size) {
            push_group(&mut grouping, slice.iter().copied())?;
            debug!(event = "group_formed", members = slice.len());
        }

        info!(
            event = "grouping_end",
            grouper = self.grouper_type_name(),
            groups = grouping.len(),
        );
        Ok(grouping)
    }

    fn grouper_type_name(&self) -> &'static str {
        "AlphaGrouper"
    }
}
