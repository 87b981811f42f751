//! Survey data file format.
//!
//! A data file names the roster, lists the questions, and lists every
//! respondent with their answers:
//!
//! ```toml
//! name = "Cooking club"
//!
//! [[questions]]
//! kind = "numeric"
//! id = 3
//! text = "How spicy do you like it?"
//! min = 1
//! max = 5
//!
//! [[respondents]]
//! id = 1
//! name = "Amy"
//! answers = [{ question = 3, value = 2 }]
//! ```

use std::path::Path;

use groupforge::{Answer, AnswerContent, GroupForgeError, Question, Respondent, Roster};
use serde::Deserialize;

use crate::DemoError;

#[derive(Debug, Deserialize)]
pub struct SurveyData {
    pub name: String,
    #[serde(default)]
    pub questions: Vec<QuestionData>,
    #[serde(default)]
    pub respondents: Vec<RespondentData>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionData {
    MultipleChoice {
        id: u32,
        text: String,
        options: Vec<String>,
    },
    Numeric {
        id: u32,
        text: String,
        min: i64,
        max: i64,
    },
    YesNo {
        id: u32,
        text: String,
    },
    Checkbox {
        id: u32,
        text: String,
        options: Vec<String>,
    },
}

#[derive(Debug, Deserialize)]
pub struct RespondentData {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub answers: Vec<AnswerData>,
}

#[derive(Debug, Deserialize)]
pub struct AnswerData {
    pub question: u32,
    pub value: AnswerValue,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Boolean(bool),
    Integer(i64),
    Text(String),
    Selection(Vec<String>),
}

impl From<AnswerValue> for Answer {
    fn from(value: AnswerValue) -> Self {
        Answer::new(match value {
            AnswerValue::Boolean(b) => AnswerContent::Boolean(b),
            AnswerValue::Integer(n) => AnswerContent::Integer(n),
            AnswerValue::Text(s) => AnswerContent::Text(s),
            AnswerValue::Selection(options) => AnswerContent::Selection(options),
        })
    }
}

impl From<QuestionData> for Question {
    fn from(data: QuestionData) -> Self {
        match data {
            QuestionData::MultipleChoice { id, text, options } => {
                Question::multiple_choice(id, text, options)
            }
            QuestionData::Numeric { id, text, min, max } => Question::numeric(id, text, min, max),
            QuestionData::YesNo { id, text } => Question::yes_no(id, text),
            QuestionData::Checkbox { id, text, options } => Question::checkbox(id, text, options),
        }
    }
}

impl SurveyData {
    /// Reads a data file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DemoError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Converts the file contents into questions and an enrolled roster.
    ///
    /// Answers naming an unknown question are rejected.
    pub fn into_domain(self) -> Result<(Vec<Question>, Roster), DemoError> {
        let questions: Vec<Question> = self.questions.into_iter().map(Question::from).collect();

        let mut respondents = Vec::with_capacity(self.respondents.len());
        for data in self.respondents {
            let mut respondent = Respondent::new(data.id, data.name);
            for answer in data.answers {
                let question = questions
                    .iter()
                    .find(|q| q.id() == answer.question)
                    .ok_or_else(|| {
                        GroupForgeError::InvalidRoster(format!(
                            "respondent {} answers unknown question {}",
                            data.id, answer.question
                        ))
                    })?;
                respondent.set_answer(question, answer.value);
            }
            respondents.push(respondent);
        }

        let roster = Roster::new(self.name).with_respondents(respondents)?;
        Ok((questions, roster))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_convert() {
        let data: SurveyData = toml::from_str(
            r#"
            name = "Tiny"

            [[questions]]
            kind = "yes_no"
            id = 1
            text = "Tea?"

            [[questions]]
            kind = "checkbox"
            id = 2
            text = "Days"
            options = ["Mon", "Tue"]

            [[respondents]]
            id = 2
            name = "Bo"
            answers = [{ question = 1, value = false }, { question = 2, value = ["Tue"] }]

            [[respondents]]
            id = 1
            name = "Ada"
            answers = [{ question = 1, value = true }]
            "#,
        )
        .unwrap();

        let (questions, roster) = data.into_domain().unwrap();

        assert_eq!(questions.len(), 2);
        assert_eq!(roster.name(), "Tiny");
        assert_eq!(roster.respondents()[0].name(), "Ada");
        assert!(roster.respondents()[1].has_answer(&questions[1]));
        assert!(!roster.respondents()[0].has_answer(&questions[1]));
    }

    #[test]
    fn test_unknown_question_is_rejected() {
        let data: SurveyData = toml::from_str(
            r#"
            name = "Tiny"

            [[respondents]]
            id = 1
            name = "Ada"
            answers = [{ question = 9, value = true }]
            "#,
        )
        .unwrap();

        assert!(data.into_domain().is_err());
    }
}
