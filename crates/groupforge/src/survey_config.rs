//! Pushes configured scoring overrides into a survey.

use groupforge_config::{CriterionType, GrouperConfig};
use groupforge_core::{GroupForgeError, Result};
use groupforge_scoring::{Criterion, Survey};
use tracing::debug;

/// Maps a configured criterion onto its scoring strategy.
pub fn criterion_for(criterion: CriterionType) -> Criterion {
    match criterion {
        CriterionType::Homogeneous => Criterion::Homogeneous,
        CriterionType::Heterogeneous => Criterion::Heterogeneous,
        CriterionType::LonelyMember => Criterion::LonelyMember,
    }
}

/// Applies the default weight and criterion, then every per-question
/// override in `config`, to `survey`.
///
/// # Errors
///
/// Returns a `Config` error if `config` fails validation or an override
/// names a question that is not in the survey.
///
/// # Examples
///
/// ```
/// use groupforge::{apply_to_survey, Criterion, CriterionType, GrouperConfig, QuestionConfig, Question, Survey};
///
/// let q = Question::yes_no(7, "Vegetarian?");
/// let config = GrouperConfig::new()
///     .with_question(QuestionConfig::new(7).with_criterion(CriterionType::LonelyMember));
///
/// let survey = apply_to_survey(&config, Survey::new([q.clone()])).unwrap();
/// assert_eq!(survey.criterion(&q), Criterion::LonelyMember);
/// ```
pub fn apply_to_survey(config: &GrouperConfig, survey: Survey) -> Result<Survey> {
    config
        .validate()
        .map_err(|err| GroupForgeError::Config(err.to_string()))?;

    let mut survey = survey
        .try_with_default_weight(config.default_weight)?
        .with_default_criterion(criterion_for(config.default_criterion));

    for overrides in &config.questions {
        let Some(question) = survey.question(overrides.id).cloned() else {
            return Err(GroupForgeError::Config(format!(
                "question {} is not part of the survey",
                overrides.id
            )));
        };

        // The weight was validated and the question looked up above.
        if let Some(weight) = overrides.weight {
            let accepted = survey.set_weight(weight, &question);
            debug_assert!(accepted, "weight {} refused for question {}", weight, overrides.id);
        }
        if let Some(criterion) = overrides.criterion {
            let accepted = survey.set_criterion(criterion_for(criterion), &question);
            debug_assert!(accepted, "criterion refused for question {}", overrides.id);
        }
        debug!(
            event = "question_configured",
            question = question.id(),
            weight = survey.weight(&question),
            criterion = survey.criterion(&question).name(),
        );
    }

    Ok(survey)
}

#[cfg(test)]
mod tests {
    use groupforge_config::QuestionConfig;
    use groupforge_test::mixed_questions;

    use super::*;

    #[test]
    fn test_criterion_mapping() {
        assert_eq!(criterion_for(CriterionType::Homogeneous), Criterion::Homogeneous);
        assert_eq!(criterion_for(CriterionType::Heterogeneous), Criterion::Heterogeneous);
        assert_eq!(criterion_for(CriterionType::LonelyMember), Criterion::LonelyMember);
    }

    #[test]
    fn test_defaults_and_overrides() {
        let q = mixed_questions();
        let mut config = GrouperConfig::new()
            .with_question(QuestionConfig::new(22).with_weight(3.0))
            .with_question(QuestionConfig::new(44).with_criterion(CriterionType::LonelyMember));
        config.default_weight = 0.5;
        config.default_criterion = CriterionType::Heterogeneous;

        let survey = apply_to_survey(&config, Survey::new(q.all())).unwrap();

        assert_eq!(survey.weight(&q.multiple), 0.5);
        assert_eq!(survey.criterion(&q.multiple), Criterion::Heterogeneous);
        assert_eq!(survey.weight(&q.numeric), 3.0);
        assert_eq!(survey.criterion(&q.numeric), Criterion::Heterogeneous);
        assert_eq!(survey.weight(&q.checkbox), 0.5);
        assert_eq!(survey.criterion(&q.checkbox), Criterion::LonelyMember);
    }

    #[test]
    fn test_unknown_question_is_rejected() {
        let q = mixed_questions();
        let config = GrouperConfig::new().with_question(QuestionConfig::new(99).with_weight(2.0));

        let result = apply_to_survey(&config, Survey::new(q.all()));

        assert!(matches!(result, Err(GroupForgeError::Config(_))));
    }

    #[test]
    fn test_every_override_lands_on_its_question() {
        let q = mixed_questions();
        let config = q.all().iter().fold(GrouperConfig::new(), |config, question| {
            config.with_question(
                QuestionConfig::new(question.id())
                    .with_weight(f64::from(question.id()))
                    .with_criterion(CriterionType::LonelyMember),
            )
        });

        let survey = apply_to_survey(&config, Survey::new(q.all())).unwrap();

        for question in q.all() {
            assert_eq!(survey.weight(&question), f64::from(question.id()));
            assert_eq!(survey.criterion(&question), Criterion::LonelyMember);
        }
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let q = mixed_questions();
        for bad in [-1.0, 0.0, f64::NAN, f64::INFINITY] {
            let mut config = GrouperConfig::new();
            config.default_weight = bad;

            let result = apply_to_survey(&config, Survey::new(q.all()));

            assert!(matches!(result, Err(GroupForgeError::Config(_))));
        }
    }
}
