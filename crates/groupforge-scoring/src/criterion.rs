//! Criterion strategies.
//!
//! A criterion turns one question's answers from a set of respondents into a
//! quality score in `[0, 1]`. Criteria are stateless and pure: the same
//! question and answers always give the same score.

use groupforge_core::{Answer, GroupForgeError, Question, Result};
use serde::{Deserialize, Serialize};

/// How the answers to one question contribute to group quality.
///
/// Serialized in snake_case (`homogeneous`, `heterogeneous`, `lonely_member`),
/// matching [`name`](Self::name).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    /// Rewards similar answers: the mean pairwise similarity.
    #[default]
    Homogeneous,

    /// Rewards different answers: one minus the homogeneous score.
    Heterogeneous,

    /// Rewards groups where no member gives an answer nobody else gave.
    LonelyMember,
}

impl Criterion {
    /// Scores `answers` to `question`.
    ///
    /// Every answer is validated before anything is computed. An empty
    /// answer list scores 0.0.
    ///
    /// # Errors
    ///
    /// Returns [`GroupForgeError::InvalidAnswer`] if any answer is not valid
    /// for `question`.
    ///
    /// # Examples
    ///
    /// ```
    /// use groupforge_core::{Answer, Question};
    /// use groupforge_scoring::Criterion;
    ///
    /// let q = Question::yes_no(0, "Yeah?");
    /// let yes = Answer::from(true);
    /// let no = Answer::from(false);
    ///
    /// assert_eq!(Criterion::Homogeneous.score(&q, &[&yes, &yes]).unwrap(), 1.0);
    /// assert_eq!(Criterion::Heterogeneous.score(&q, &[&yes, &no]).unwrap(), 1.0);
    /// assert_eq!(Criterion::LonelyMember.score(&q, &[&yes, &yes, &no]).unwrap(), 0.0);
    /// ```
    pub fn score(&self, question: &Question, answers: &[&Answer]) -> Result<f64> {
        if answers.iter().any(|a| !a.is_valid(question)) {
            return Err(GroupForgeError::InvalidAnswer {
                question_id: question.id(),
            });
        }
        if answers.is_empty() {
            return Ok(0.0);
        }

        let score = match self {
            Criterion::Homogeneous => mean_pairwise_similarity(question, answers),
            Criterion::Heterogeneous if answers.len() == 1 => 0.0,
            Criterion::Heterogeneous => 1.0 - mean_pairwise_similarity(question, answers),
            Criterion::LonelyMember => {
                if has_lonely_member(answers) {
                    0.0
                } else {
                    1.0
                }
            }
        };
        Ok(score)
    }

    /// Returns the snake_case name of this criterion.
    pub fn name(&self) -> &'static str {
        match self {
            Criterion::Homogeneous => "homogeneous",
            Criterion::Heterogeneous => "heterogeneous",
            Criterion::LonelyMember => "lonely_member",
        }
    }
}

// Mean similarity over all unordered pairs; a lone answer is fully self-similar.
fn mean_pairwise_similarity(question: &Question, answers: &[&Answer]) -> f64 {
    if answers.len() == 1 {
        return 1.0;
    }

    let mut total = 0.0;
    let mut pairs = 0usize;
    for (i, first) in answers.iter().enumerate() {
        for second in &answers[i + 1..] {
            total += question.similarity(first, second);
            pairs += 1;
        }
    }
    total / pairs as f64
}

// True if some answer's content appears nowhere else in the list.
fn has_lonely_member(answers: &[&Answer]) -> bool {
    answers.iter().enumerate().any(|(i, answer)| {
        !answers
            .iter()
            .enumerate()
            .any(|(j, other)| i != j && other.content() == answer.content())
    })
}
