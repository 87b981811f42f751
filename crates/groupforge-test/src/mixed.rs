//! A survey with one question of every kind.

use groupforge_core::{Answer, Question, Respondent};

/// One question of each kind.
#[derive(Debug, Clone)]
pub struct MixedQuestions {
    pub multiple: Question,
    pub numeric: Question,
    pub yes_no: Question,
    pub checkbox: Question,
}

impl MixedQuestions {
    /// Returns the questions in declaration order.
    pub fn all(&self) -> Vec<Question> {
        vec![
            self.multiple.clone(),
            self.numeric.clone(),
            self.yes_no.clone(),
            self.checkbox.clone(),
        ]
    }

    /// Creates a respondent answering every question.
    pub fn respondent(
        &self,
        id: u32,
        name: &str,
        choice: &str,
        number: i64,
        yes: bool,
        checked: &[&str],
    ) -> Respondent {
        Respondent::new(id, name)
            .with_answer(&self.multiple, choice)
            .with_answer(&self.numeric, number)
            .with_answer(&self.yes_no, yes)
            .with_answer(&self.checkbox, Answer::selection(checked.iter().copied()))
    }
}

pub fn mixed_questions() -> MixedQuestions {
    MixedQuestions {
        multiple: Question::multiple_choice(11, "A or B", ["A", "B"]),
        numeric: Question::numeric(22, "1-3", 1, 3),
        yes_no: Question::yes_no(33, "T or F"),
        checkbox: Question::checkbox(44, "A or B", ["A", "B"]),
    }
}
