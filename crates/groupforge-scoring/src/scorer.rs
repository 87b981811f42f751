// Group scorer trait definition.

use std::fmt::{self, Debug};

use groupforge_core::{Grouping, Respondent, Result};

// Evaluates the quality of a candidate set of respondents.
//
// Groupers only ever see respondents through this trait. Implementations
// must be pure: calling them any number of times, in any order, with the
// same members yields the same score.
//
// An `Err` from `score_members` is a configuration error on the caller's
// side; groupers do not swallow it.
pub trait GroupScorer {
    // Scores an arbitrary set of respondents.
    fn score_members(&self, members: &[&Respondent]) -> Result<f64>;

    // Scores a whole grouping as the mean of its groups' scores.
    //
    // Returns 0.0 for a grouping without groups.
    fn score_grouping(&self, grouping: &Grouping<'_>) -> Result<f64> {
        if grouping.is_empty() {
            return Ok(0.0);
        }
        let mut total = 0.0;
        for group in grouping {
            total += self.score_members(group.members())?;
        }
        Ok(total / grouping.len() as f64)
    }
}

impl<T: GroupScorer + ?Sized> GroupScorer for &T {
    fn score_members(&self, members: &[&Respondent]) -> Result<f64> {
        (**self).score_members(members)
    }

    fn score_grouping(&self, grouping: &Grouping<'_>) -> Result<f64> {
        (**self).score_grouping(grouping)
    }
}

// Adapts a closure into a `GroupScorer`.
pub struct FnScorer<F>
where
    F: Fn(&[&Respondent]) -> Result<f64>,
{
    score_fn: F,
}

impl<F> FnScorer<F>
where
    F: Fn(&[&Respondent]) -> Result<f64>,
{
    pub fn new(score_fn: F) -> Self {
        Self { score_fn }
    }
}

impl<F> Debug for FnScorer<F>
where
    F: Fn(&[&Respondent]) -> Result<f64>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnScorer").finish()
    }
}

impl<F> GroupScorer for FnScorer<F>
where
    F: Fn(&[&Respondent]) -> Result<f64>,
{
    fn score_members(&self, members: &[&Respondent]) -> Result<f64> {
        (self.score_fn)(members)
    }
}

#[cfg(test)]
mod tests {
    use groupforge_core::{Group, GroupForgeError};

    use super::*;

    #[test]
    fn test_fn_scorer_delegates() {
        let scorer = FnScorer::new(|members: &[&Respondent]| Ok(members.len() as f64));
        let amy = Respondent::new(1, "Amy");
        let lisa = Respondent::new(2, "Lisa");

        assert_eq!(scorer.score_members(&[&amy, &lisa]).unwrap(), 2.0);
    }

    #[test]
    fn test_default_score_grouping_is_mean() {
        let scorer = FnScorer::new(|members: &[&Respondent]| Ok(members.len() as f64));
        let people: Vec<Respondent> = (1..=3).map(|id| Respondent::new(id, "R")).collect();

        let mut grouping = Grouping::new();
        assert_eq!(scorer.score_grouping(&grouping).unwrap(), 0.0);

        grouping.add(Group::new([&people[0], &people[1]]));
        grouping.add(Group::new([&people[2]]));
        assert_eq!(scorer.score_grouping(&grouping).unwrap(), 1.5);
    }

    #[test]
    fn test_score_grouping_propagates_errors() {
        let scorer = FnScorer::new(|_: &[&Respondent]| {
            Err(GroupForgeError::Scoring("unavailable".to_string()))
        });
        let amy = Respondent::new(1, "Amy");
        let mut grouping = Grouping::new();
        grouping.add(Group::new([&amy]));

        assert!(scorer.score_grouping(&grouping).is_err());
    }
}
