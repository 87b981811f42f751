//! The roster of respondents a grouping is made from.

use std::collections::HashSet;

use super::question::Question;
use super::respondent::Respondent;
use crate::error::{GroupForgeError, Result};

/// A named roster of respondents with unique ids.
///
/// Members are kept sorted by ascending id, which is the canonical order
/// every grouper enumerates them in.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    name: String,
    respondents: Vec<Respondent>,
}

impl Roster {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            respondents: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Enrolls every respondent in `respondents`, or none of them.
    ///
    /// # Errors
    ///
    /// Returns [`GroupForgeError::InvalidRoster`] if any respondent has an
    /// empty name, is already enrolled, or shares an id with another
    /// respondent in the same batch.
    pub fn enroll(&mut self, respondents: impl IntoIterator<Item = Respondent>) -> Result<()> {
        let batch: Vec<Respondent> = respondents.into_iter().collect();
        let mut ids: HashSet<_> = self.respondents.iter().map(Respondent::id).collect();

        for respondent in &batch {
            if respondent.name().is_empty() {
                return Err(GroupForgeError::InvalidRoster(format!(
                    "respondent {} has an empty name",
                    respondent.id()
                )));
            }
            if !ids.insert(respondent.id()) {
                return Err(GroupForgeError::InvalidRoster(format!(
                    "duplicate respondent id {}",
                    respondent.id()
                )));
            }
        }

        self.respondents.extend(batch);
        self.respondents.sort_by_key(Respondent::id);
        Ok(())
    }

    /// Builder form of [`enroll`](Self::enroll).
    pub fn with_respondents(
        mut self,
        respondents: impl IntoIterator<Item = Respondent>,
    ) -> Result<Self> {
        self.enroll(respondents)?;
        Ok(self)
    }

    /// Returns the enrolled respondents in ascending id order.
    pub fn respondents(&self) -> &[Respondent] {
        &self.respondents
    }

    /// Returns true iff every respondent has a valid answer to every question.
    pub fn all_answered(&self, questions: &[Question]) -> bool {
        self.respondents
            .iter()
            .all(|r| questions.iter().all(|q| r.has_answer(q)))
    }

    pub fn len(&self) -> usize {
        self.respondents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.respondents.is_empty()
    }
}
