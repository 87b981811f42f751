//! Window grouper.

use groupforge_core::{Grouping, Respondent, Result, Roster};
use groupforge_scoring::GroupScorer;
use tracing::{debug, info, warn};

use super::{check_group_size, push_group, windows, Grouper};

/// Returns the index of the first window scoring at least as high as the
/// window after it.
///
/// The scan is circular: the last window is compared with the first, and
/// at most two full passes are made. If no window qualifies, the highest
/// scoring window is chosen instead (first one on ties, NaN lowest).
/// Returns `None` only when `windows` is empty.
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
/// use groupforge_solver::{find_best_window, windows};
///
/// let q = Question::yes_no(0, "Yeah?");
/// let lily = Respondent::new(1, "Lily").with_answer(&q, true);
/// let mike = Respondent::new(2, "Mike").with_answer(&q, true);
/// let coco = Respondent::new(3, "Coco").with_answer(&q, false);
/// let survey = Survey::new([q]);
///
/// let respondents = [&lily, &mike, &coco];
/// let candidates = windows(&respondents, 2);
/// assert_eq!(find_best_window(&survey, &candidates).unwrap(), Some(0));
/// ```
pub fn find_best_window(
    scorer: &dyn GroupScorer,
    windows: &[&[&Respondent]],
) -> Result<Option<usize>> {
    if windows.is_empty() {
        return Ok(None);
    }

    let scores = windows
        .iter()
        .map(|window| scorer.score_members(window))
        .collect::<Result<Vec<f64>>>()?;

    let n = scores.len();
    for step in 0..2 * n {
        let i = step % n;
        if scores[i] >= scores[(i + 1) % n] {
            return Ok(Some(i));
        }
    }

    let best = highest_score(&scores);
    warn!(
        event = "window_fallback",
        windows = n,
        chosen = best,
        "No window scored at least as high as its successor, using the highest scoring window"
    );
    Ok(Some(best))
}

// First index of the maximum, with NaN below every number.
fn highest_score(scores: &[f64]) -> usize {
    let mut best = 0;
    for (i, &score) in scores.iter().enumerate().skip(1) {
        let current = scores[best];
        if score > current || (current.is_nan() && !score.is_nan()) {
            best = i;
        }
    }
    best
}

/// Groups respondents with a sliding window search.
///
/// While more than `group_size` respondents remain, every contiguous window
/// of the remaining respondents (in roster order) is scored and the window
/// chosen by [`find_best_window`] becomes the next group. The leftover
/// respondents form the last group.
#[derive(Debug, Clone)]
pub struct WindowGrouper {
    group_size: usize,
}

impl WindowGrouper {
    /// Creates a window grouper.
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

impl Grouper for WindowGrouper {
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
            let candidates = windows(&ungrouped, self.group_size);
            let Some(start) = find_best_window(scorer, &candidates)? else {
                break;
            };

            push_group(&mut grouping, ungrouped.drain(start..start + self.group_size))?;
            debug!(
                event = "group_formed",
                window = start,
                members = self.group_size,
                remaining = ungrouped.len(),
            );
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
        "WindowGrouper"
    }
}
