//! The survey scoring collaborator.
//!
//! A [`Survey`] owns a question set together with a weight and a
//! [`Criterion`] per question, and scores sets of respondents by averaging
//! the weighted criterion scores over its questions.

use std::collections::{HashMap, HashSet};
use std::fmt;

use groupforge_core::{
    is_valid_weight, Answer, GroupForgeError, Grouping, Question, QuestionId, Respondent, Result,
};
use tracing::debug;

use crate::criterion::Criterion;
use crate::scorer::GroupScorer;


pub use groupforge_core::DEFAULT_WEIGHT;

/// A weighted question set used to score groups of respondents.
///
/// # Examples
///
/// ```
/// use groupforge_core::{Question, Respondent};
/// use groupforge_scoring::{Criterion, Survey};
///
/// let q = Question::yes_no(0, "Yeah?");
/// let amy = Respondent::new(1, "Amy").with_answer(&q, true);
/// let kali = Respondent::new(2, "Kali").with_answer(&q, false);
///
/// let mut survey = Survey::new([q.clone()]);
/// assert_eq!(survey.score_students(&[&amy, &kali]), 0.0);
///
/// assert!(survey.set_criterion(Criterion::Heterogeneous, &q));
/// assert_eq!(survey.score_students(&[&amy, &kali]), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct Survey {
    questions: Vec<Question>,
    weights: HashMap<QuestionId, f64>,
    criteria: HashMap<QuestionId, Criterion>,
    default_weight: f64,
    default_criterion: Criterion,
}

impl Survey {
    /// Creates a survey from `questions`.
    ///
    /// Questions sharing an id collapse into the first one; order is kept.
    pub fn new(questions: impl IntoIterator<Item = Question>) -> Self {
        let mut seen = HashSet::new();
        let questions = questions
            .into_iter()
            .filter(|q| seen.insert(q.id()))
            .collect();
        Self {
            questions,
            weights: HashMap::new(),
            criteria: HashMap::new(),
            default_weight: DEFAULT_WEIGHT,
            default_criterion: Criterion::default(),
        }
    }

    /// Sets the weight used for questions without an explicit weight.
    ///
    /// # Panics
    ///
    /// Panics if `weight` is not a positive finite number. Use
    /// [`try_with_default_weight`](Self::try_with_default_weight) for
    /// weights that come from user input.
    pub fn with_default_weight(self, weight: f64) -> Self {
        match self.try_with_default_weight(weight) {
            Ok(survey) => survey,
            Err(_) => panic!("default weight must be positive and finite, got {weight}"),
        }
    }

    /// Fallible form of [`with_default_weight`](Self::with_default_weight).
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if `weight` is not a positive finite number.
    pub fn try_with_default_weight(mut self, weight: f64) -> Result<Self> {
        if !is_valid_weight(weight) {
            return Err(GroupForgeError::Config(format!(
                "default weight must be positive and finite, got {}",
                weight
            )));
        }
        self.default_weight = weight;
        Ok(self)
    }

    /// Sets the criterion used for questions without an explicit criterion.
    pub fn with_default_criterion(mut self, criterion: Criterion) -> Self {
        self.default_criterion = criterion;
        self
    }

    /// Returns the questions in survey order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Looks a question up by id.
    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Returns true iff a question with `question`'s id is in this survey.
    pub fn contains(&self, question: &Question) -> bool {
        self.question(question.id()).is_some()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn default_weight(&self) -> f64 {
        self.default_weight
    }

    pub fn default_criterion(&self) -> Criterion {
        self.default_criterion
    }

    /// Returns the weight applied to `question`.
    pub fn weight(&self, question: &Question) -> f64 {
        self.weights
            .get(&question.id())
            .copied()
            .unwrap_or(self.default_weight)
    }

    /// Returns the criterion applied to `question`.
    pub fn criterion(&self, question: &Question) -> Criterion {
        self.criteria
            .get(&question.id())
            .copied()
            .unwrap_or(self.default_criterion)
    }

    /// Sets the weight of `question`.
    ///
    /// Returns false, changing nothing, unless `weight` is positive and finite
    /// and `question` belongs to this survey.
    pub fn set_weight(&mut self, weight: f64, question: &Question) -> bool {
        if !is_valid_weight(weight) || !self.contains(question) {
            return false;
        }
        self.weights.insert(question.id(), weight);
        true
    }

    /// Sets the criterion of `question`.
    ///
    /// Returns false, changing nothing, unless `question` belongs to this survey.
    pub fn set_criterion(&mut self, criterion: Criterion, question: &Question) -> bool {
        if !self.contains(question) {
            return false;
        }
        self.criteria.insert(question.id(), criterion);
        true
    }

    /// Scores `respondents` as a prospective group.
    ///
    /// The score is the mean over all questions of `weight * criterion score`.
    /// Returns 0.0 when the survey has no questions, when `respondents` is
    /// empty, or when any respondent lacks a valid answer to any question.
    pub fn score_students(&self, respondents: &[&Respondent]) -> f64 {
        match self.try_score_students(respondents) {
            Ok(score) => score,
            Err(err) => {
                debug!(
                    error = %err,
                    respondents = respondents.len(),
                    "Scoring set contains an invalid answer, scoring 0.0"
                );
                0.0
            }
        }
    }

    /// Scores a grouping as the mean of [`score_students`](Self::score_students)
    /// over its groups, or 0.0 if it has none.
    pub fn score_grouping(&self, grouping: &Grouping<'_>) -> f64 {
        if grouping.is_empty() {
            return 0.0;
        }
        let total: f64 = grouping
            .iter()
            .map(|group| self.score_students(group.members()))
            .sum();
        total / grouping.len() as f64
    }

    fn try_score_students(&self, respondents: &[&Respondent]) -> Result<f64> {
        if self.questions.is_empty() || respondents.is_empty() {
            return Ok(0.0);
        }

        let mut total = 0.0;
        for question in &self.questions {
            let answers = answers_to(question, respondents)?;
            total += self.criterion(question).score(question, &answers)? * self.weight(question);
        }
        Ok(total / self.questions.len() as f64)
    }
}

// A missing answer is as unusable as an invalid one.
fn answers_to<'a>(question: &Question, respondents: &[&'a Respondent]) -> Result<Vec<&'a Answer>> {
    respondents
        .iter()
        .map(|r| {
            r.answer(question).ok_or(GroupForgeError::InvalidAnswer {
                question_id: question.id(),
            })
        })
        .collect()
}

impl GroupScorer for Survey {
    fn score_members(&self, members: &[&Respondent]) -> Result<f64> {
        Ok(self.score_students(members))
    }

    fn score_grouping(&self, grouping: &Grouping<'_>) -> Result<f64> {
        Ok(Survey::score_grouping(self, grouping))
    }
}

impl fmt::Display for Survey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for question in &self.questions {
            writeln!(f, "{}", question)?;
        }
        Ok(())
    }
}
