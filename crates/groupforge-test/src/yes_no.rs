//! Rosters answering a single yes/no question.

use groupforge_core::{Question, Respondent, RespondentId, Roster};

/// The question every roster in this module answers.
pub fn yes_no_question() -> Question {
    Question::yes_no(0, "True or False")
}

/// Builds a roster where each entry answers [`yes_no_question`].
///
/// Panics on duplicate ids; fixtures are expected to be well formed.
pub fn answered_roster(name: &str, entries: &[(RespondentId, &str, bool)]) -> Roster {
    let question = yes_no_question();
    let respondents = entries
        .iter()
        .map(|&(id, who, answer)| Respondent::new(id, who).with_answer(&question, answer));
    Roster::new(name)
        .with_respondents(respondents)
        .expect("fixture roster ids are unique")
}

/// Builds a roster of respondents without any answers.
pub fn named_roster(name: &str, entries: &[(RespondentId, &str)]) -> Roster {
    Roster::new(name)
        .with_respondents(entries.iter().map(|&(id, who)| Respondent::new(id, who)))
        .expect("fixture roster ids are unique")
}

/// Paul, Lily, Chris and Icy with ids 1-4 and no answers.
pub fn swimming_roster() -> Roster {
    named_roster(
        "Swimming",
        &[(1, "Paul"), (2, "Lily"), (3, "Chris"), (4, "Icy")],
    )
}

/// Amy, Lisa and May answer true; Kali answers false.
pub fn cooking_roster() -> Roster {
    answered_roster(
        "Cooking",
        &[
            (1, "Amy", true),
            (2, "Lisa", true),
            (3, "Kali", false),
            (4, "May", true),
        ],
    )
}

/// Lily and Mike answer true; Coco answers false.
pub fn window_roster() -> Roster {
    answered_roster(
        "Windows",
        &[(1, "Lily", true), (2, "Mike", true), (3, "Coco", false)],
    )
}
