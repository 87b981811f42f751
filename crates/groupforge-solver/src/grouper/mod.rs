//! Grouping algorithms.
//!
//! A [`Grouper`] partitions a [`Roster`] into groups of a fixed target size.
//! Every algorithm guarantees the same shape: each respondent lands in
//! exactly one group, and every group holds `group_size` members except at
//! most one smaller remainder group.

mod alpha;
mod greedy;
mod random;
mod window;


use std::fmt::Debug;

use groupforge_core::{Group, GroupForgeError, Grouping, Respondent, Result, Roster};
use groupforge_scoring::GroupScorer;

pub use alpha::AlphaGrouper;
pub use greedy::{best_match, GreedyGrouper};
pub use random::RandomGrouper;
pub use window::{find_best_window, WindowGrouper};

/// Trait for partitioning a roster into groups.
///
/// Groupers read respondents only through the supplied [`GroupScorer`]. A
/// scorer error is never swallowed; it aborts the call and is returned to
/// the caller.
pub trait Grouper: Send + Debug {
    /// Target number of members per group.
    fn group_size(&self) -> usize;

    /// Partitions every respondent in `roster` into groups.
    fn make_grouping<'r>(
        &mut self,
        roster: &'r Roster,
        scorer: &dyn GroupScorer,
    ) -> Result<Grouping<'r>>;

    /// Returns the grouper type name for logging.
    fn grouper_type_name(&self) -> &'static str;
}

/// Cuts `items` into consecutive slices of `size`; the last may be shorter.
///
/// # Examples
///
/// ```
/// use groupforge_solver::slice_list;
///
/// assert_eq!(slice_list(&[3, 4, 6, 2, 3], 2), vec![&[3, 4][..], &[6, 2], &[3]]);
/// ```
pub fn slice_list<T>(items: &[T], size: usize) -> Vec<&[T]> {
    if size == 0 {
        return Vec::new();
    }
    items.chunks(size).collect()
}

/// Returns every contiguous run of `size` items, in order.
///
/// # Examples
///
/// ```
/// use groupforge_solver::windows;
///
/// assert_eq!(windows(&[3, 4, 6, 2, 3], 2), vec![&[3, 4][..], &[4, 6], &[6, 2], &[2, 3]]);
/// assert!(windows(&[1, 2], 3).is_empty());
/// ```
pub fn windows<T>(items: &[T], size: usize) -> Vec<&[T]> {
    if size == 0 {
        return Vec::new();
    }
    items.windows(size).collect()
}

pub(crate) fn check_group_size(group_size: usize) -> Result<usize> {
    if group_size < 2 {
        return Err(GroupForgeError::Config(format!(
            "group_size must be at least 2, got {}",
            group_size
        )));
    }
    Ok(group_size)
}

// Adds `members` to `grouping`; a refusal means a respondent was placed twice.
pub(crate) fn push_group<'r>(
    grouping: &mut Grouping<'r>,
    members: impl IntoIterator<Item = &'r Respondent>,
) -> Result<()> {
    let group = Group::new(members);
    let size = group.len();
    if !grouping.add(group) {
        return Err(GroupForgeError::InvalidRoster(format!(
            "group of {} overlaps an existing group",
            size
        )));
    }
    Ok(())
}
