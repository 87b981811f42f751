//! Group and Grouping containers.
//!
//! A [`Group`] borrows its members from a [`Roster`](crate::Roster) and never
//! holds two respondents with the same id. A [`Grouping`] collects groups
//! that are pairwise disjoint; [`Grouping::add`] is its only mutation and
//! refuses any group that would break that invariant.

use std::collections::HashSet;
use std::fmt;

use smallvec::SmallVec;

use crate::domain::{Respondent, RespondentId};


/// Inline capacity for group members; typical group sizes fit without
/// spilling to the heap.
type Members<'r> = SmallVec<[&'r Respondent; 4]>;

/// A group of respondents with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<'r> {
    members: Members<'r>,
}

impl<'r> Group<'r> {
    /// Creates a group from `members`, keeping the first occurrence of each id.
    pub fn new(members: impl IntoIterator<Item = &'r Respondent>) -> Self {
        let mut seen = HashSet::new();
        let members = members
            .into_iter()
            .filter(|m| seen.insert(m.id()))
            .collect();
        Self { members }
    }

    /// Returns the members in construction order.
    pub fn members(&self) -> &[&'r Respondent] {
        &self.members
    }

    /// Returns true iff some member shares `respondent`'s id.
    pub fn contains(&self, respondent: &Respondent) -> bool {
        self.members.iter().any(|m| m.id() == respondent.id())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn ids(&self) -> impl Iterator<Item = RespondentId> + '_ {
        self.members.iter().map(|m| m.id())
    }
}

impl fmt::Display for Group<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", member)?;
        }
        Ok(())
    }
}

/// A partition of (some of) a roster into disjoint groups.
#[derive(Debug, Clone, Default)]
pub struct Grouping<'r> {
    groups: Vec<Group<'r>>,
    assigned: HashSet<RespondentId>,
}

impl<'r> Grouping<'r> {
    /// Creates an empty grouping.
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
            assigned: HashSet::new(),
        }
    }

    /// Adds `group` and returns true.
    ///
    /// Returns false and leaves the grouping unchanged if `group` is empty
    /// or shares a member id with a group already added.
    pub fn add(&mut self, group: Group<'r>) -> bool {
        if group.is_empty() || group.ids().any(|id| self.assigned.contains(&id)) {
            return false;
        }
        self.assigned.extend(group.ids());
        self.groups.push(group);
        true
    }

    /// Returns the groups in the order they were added.
    pub fn groups(&self) -> &[Group<'r>] {
        &self.groups
    }

    /// Returns true iff `respondent` is a member of some group.
    pub fn contains(&self, respondent: &Respondent) -> bool {
        self.assigned.contains(&respondent.id())
    }

    /// Returns the total number of respondents across all groups.
    pub fn respondent_count(&self) -> usize {
        self.assigned.len()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Group<'r>> {
        self.groups.iter()
    }
}

impl<'a, 'r> IntoIterator for &'a Grouping<'r> {
    type Item = &'a Group<'r>;
    type IntoIter = std::slice::Iter<'a, Group<'r>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl fmt::Display for Grouping<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for group in &self.groups {
            writeln!(f, "{}", group)?;
        }
        Ok(())
    }
}
