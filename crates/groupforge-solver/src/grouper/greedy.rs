//! Greedy grouper.
//!
//! Groups are assembled one member at a time. Each step tries every
//! remaining candidate against the partial group and keeps the candidate
//! with the highest score, so the result is locally best per step but not
//! a globally optimal partition.

use groupforge_core::{Grouping, Respondent, Result, Roster};
use groupforge_scoring::GroupScorer;
use tracing::{debug, info};

use super::{check_group_size, push_group, Grouper};

/// Extends `partial` by the candidate that maximizes the scorer's score.
///
/// Candidates already in `partial` are skipped. Ties keep the first
/// candidate reaching the maximum. Returns `partial` unchanged if no
/// candidate is left.
///
/// # Errors
///
/// Propagates any error from the scorer.
///
/// # Examples
///
/// ```
/// use groupforge_core::{Question, Respondent};
/// use groupforge_scoring::Survey;
/// use groupforge_solver::best_match;
///
/// let q = Question::yes_no(0, "Yeah?");
/// let amy = Respondent::new(1, "Amy").with_answer(&q, true);
/// let lisa = Respondent::new(2, "Lisa").with_answer(&q, true);
/// let kali = Respondent::new(3, "Kali").with_answer(&q, false);
/// let survey = Survey::new([q]);
///
/// let group = best_match(&survey, &[&amy, &lisa, &kali], &[&amy]).unwrap();
/// assert_eq!(group, [&amy, &lisa]);
/// ```
pub fn best_match<'r>(
    scorer: &dyn GroupScorer,
    candidates: &[&'r Respondent],
    partial: &[&'r Respondent],
) -> Result<Vec<&'r Respondent>> {
    let mut trial: Vec<&'r Respondent> = Vec::with_capacity(partial.len() + 1);
    trial.extend_from_slice(partial);

    let mut best: Option<(&'r Respondent, f64)> = None;
    for &candidate in candidates {
        if partial.iter().any(|m| m.id() == candidate.id()) {
            continue;
        }

        trial.push(candidate);
        let score = scorer.score_members(&trial)?;
        trial.pop();

        let is_better = match best {
            None => true,
            Some((_, best_score)) => score > best_score,
        };
        if is_better {
            best = Some((candidate, score));
        }
    }

    if let Some((candidate, _)) = best {
        trial.push(candidate);
    }
    Ok(trial)
}

/// Groups respondents by greedy best-match assembly.
///
/// Each new group is seeded with the first ungrouped respondent in roster
/// order and extended with [`best_match`] until it is full. Once no more
/// than `group_size` respondents remain, they form the last group.
#[derive(Debug, Clone)]
pub struct GreedyGrouper {
    group_size: usize,
}

impl GreedyGrouper {
    /// Creates a greedy grouper.
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

impl Grouper for GreedyGrouper {
    fn group_size(&self) -> usize {
        self.group_size
    }

    fn make_grouping<'r>(
        &mut self,
        roster: &'r Roster,
        scorer: &dyn GroupScorer,
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
            let mut members = vec![ungrouped.remove(0)];
            while members.len() < self.group_size {
                let extended = best_match(scorer, &ungrouped, &members)?;
                if extended.len() == members.len() {
                    break;
                }
                members = extended;
            }

            ungrouped.retain(|r| !members.iter().any(|m| m.id() == r.id()));
            debug!(
                event = "group_formed",
                members = members.len(),
                remaining = ungrouped.len(),
            );
            push_group(&mut grouping, members)?;
        }
        if !ungrouped.is_empty() {
            debug!(event = "group_formed", members = ungrouped.len(), remaining = 0usize);
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
        "GreedyGrouper"
    }
}

#[cfg(test)]
mod tests {
    use groupforge_core::{GroupForgeError, Question};
    use groupforge_scoring::{FnScorer, Survey};
    use groupforge_test::{answered_roster, cooking_roster, yes_no_question};

    use super::*;

    fn names(grouping: &Grouping<'_>) -> Vec<Vec<String>> {
        grouping
            .iter()
            .map(|g| g.members().iter().map(|m| m.name().to_string()).collect())
            .collect()
    }

    fn names_of(members: &[&Respondent]) -> Vec<String> {
        members.iter().map(|m| m.name().to_string()).collect()
    }

    #[test]
    fn test_best_match_picks_highest_score() {
        let roster = cooking_roster();
        let survey = Survey::new([yes_no_question()]);
        let r = roster.respondents();
        let (amy, lisa, kali) = (&r[0], &r[1], &r[2]);

        let group = best_match(&survey, &[amy, lisa, kali], &[amy]).unwrap();

        assert_eq!(names_of(&group), ["Amy", "Lisa"]);
    }

    #[test]
    fn test_best_match_extends_larger_partial() {
        let roster = cooking_roster();
        let survey = Survey::new([yes_no_question()]);
        let r = roster.respondents();
        let (amy, lisa, kali, may) = (&r[0], &r[1], &r[2], &r[3]);

        let group = best_match(&survey, &[kali, may], &[amy, lisa]).unwrap();

        assert_eq!(names_of(&group), ["Amy", "Lisa", "May"]);
    }

    #[test]
    fn test_best_match_ties_keep_first() {
        let roster = cooking_roster();
        let flat = FnScorer::new(|_: &[&Respondent]| Ok(0.5));
        let r = roster.respondents();

        let group = best_match(&flat, &[&r[2], &r[1], &r[3]], &[&r[0]]).unwrap();

        assert_eq!(names_of(&group), ["Amy", "Kali"]);
    }

    #[test]
    fn test_best_match_without_candidates() {
        let roster = cooking_roster();
        let survey = Survey::new([yes_no_question()]);
        let amy = &roster.respondents()[0];

        let group = best_match(&survey, &[amy], &[amy]).unwrap();

        assert_eq!(names_of(&group), ["Amy"]);
    }

    #[test]
    fn test_make_grouping_cooking() {
        let roster = cooking_roster();
        let survey = Survey::new([yes_no_question()]);
        let mut grouper = GreedyGrouper::new(2).unwrap();

        let grouping = grouper.make_grouping(&roster, &survey).unwrap();

        assert_eq!(names(&grouping), [vec!["Amy", "Lisa"], vec!["Kali", "May"]]);
    }

    #[test]
    fn test_make_grouping_remainder() {
        let roster = answered_roster(
            "Baking",
            &[(1, "Amy", true), (2, "Lisa", true), (3, "Kali", false)],
        );
        let survey = Survey::new([yes_no_question()]);
        let mut grouper = GreedyGrouper::new(2).unwrap();

        let grouping = grouper.make_grouping(&roster, &survey).unwrap();

        assert_eq!(names(&grouping), [vec!["Amy", "Lisa"], vec!["Kali"]]);
    }

    #[test]
    fn test_make_grouping_groups_like_answers_together() {
        let roster = answered_roster(
            "Debate",
            &[
                (1, "Ada", true),
                (2, "Bo", false),
                (3, "Cy", true),
                (4, "Di", false),
                (5, "Ed", true),
                (6, "Fay", false),
            ],
        );
        let survey = Survey::new([yes_no_question()]);
        let mut grouper = GreedyGrouper::new(3).unwrap();

        let grouping = grouper.make_grouping(&roster, &survey).unwrap();

        assert_eq!(names(&grouping), [vec!["Ada", "Cy", "Ed"], vec!["Bo", "Di", "Fay"]]);
        assert_eq!(survey.score_grouping(&grouping), 1.0);
    }

    #[test]
    fn test_scorer_error_propagates() {
        let roster = cooking_roster();
        let failing = FnScorer::new(|_: &[&Respondent]| {
            Err(GroupForgeError::Scoring("no survey loaded".to_string()))
        });
        let mut grouper = GreedyGrouper::new(2).unwrap();

        let result = grouper.make_grouping(&roster, &failing);

        assert!(matches!(result, Err(GroupForgeError::Scoring(_))));
    }

    #[test]
    fn test_unanswered_roster_still_partitions() {
        let roster = answered_roster("Quiz", &[(1, "Amy", true), (2, "Lisa", false)]);
        let survey = Survey::new([Question::yes_no(9, "Unrelated?")]);
        let mut grouper = GreedyGrouper::new(2).unwrap();

        let grouping = grouper.make_grouping(&roster, &survey).unwrap();

        assert_eq!(grouping.len(), 1);
        assert_eq!(grouping.respondent_count(), 2);
    }
}
