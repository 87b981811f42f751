//! Tests for grouper configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        grouper_type = "random"
        group_size = 4
        random_seed = 42
        default_weight = 0.5
        default_criterion = "heterogeneous"

        [[questions]]
        id = 1
        weight = 2.0

        [[questions]]
        id = 2
        criterion = "lonely_member"
    "#;

    let config = GrouperConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.grouper_type, GrouperType::Random);
    assert_eq!(config.group_size, 4);
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.default_weight, 0.5);
    assert_eq!(config.default_criterion, CriterionType::Heterogeneous);
    assert_eq!(config.questions.len(), 2);
    assert_eq!(config.questions[0].weight, Some(2.0));
    assert_eq!(config.questions[0].criterion, None);
    assert_eq!(config.questions[1].criterion, Some(CriterionType::LonelyMember));
    config.validate().unwrap();
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        grouper_type: alpha
        group_size: 3
        questions:
          - id: 7
            criterion: homogeneous
    "#;

    let config = GrouperConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.grouper_type, GrouperType::Alpha);
    assert_eq!(config.group_size, 3);
    assert_eq!(config.questions[0].id, 7);
}

#[test]
fn test_defaults_from_empty_document() {
    let config = GrouperConfig::from_toml_str("").unwrap();

    assert_eq!(config, GrouperConfig::default());
    assert_eq!(config.grouper_type, GrouperType::Greedy);
    assert_eq!(config.group_size, DEFAULT_GROUP_SIZE);
    assert_eq!(config.default_weight, DEFAULT_WEIGHT);
    assert_eq!(config.default_criterion, CriterionType::Homogeneous);
}

#[test]
fn test_unknown_grouper_type_is_rejected() {
    let result = GrouperConfig::from_toml_str(r#"grouper_type = "optimal""#);

    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn test_builder() {
    let config = GrouperConfig::new()
        .with_grouper_type(GrouperType::Window)
        .with_group_size(5)
        .with_random_seed(123)
        .with_question(QuestionConfig::new(1).with_weight(3.0))
        .with_question(QuestionConfig::new(2).with_criterion(CriterionType::Heterogeneous));

    assert_eq!(config.grouper_type, GrouperType::Window);
    assert_eq!(config.group_size, 5);
    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.questions.len(), 2);
    config.validate().unwrap();
}

#[test]
fn test_validate_group_size() {
    let config = GrouperConfig::new().with_group_size(1);

    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_validate_weights() {
    let mut config = GrouperConfig::new();
    config.default_weight = 0.0;
    assert!(config.validate().is_err());

    let config = GrouperConfig::new().with_question(QuestionConfig::new(1).with_weight(-2.0));
    assert!(config.validate().is_err());

    let mut config = GrouperConfig::new();
    config.default_weight = f64::INFINITY;
    assert!(config.validate().is_err());

    let config = GrouperConfig::new().with_question(QuestionConfig::new(1).with_weight(f64::NAN));
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_duplicate_questions() {
    let config = GrouperConfig::new()
        .with_question(QuestionConfig::new(1).with_weight(2.0))
        .with_question(QuestionConfig::new(1).with_criterion(CriterionType::LonelyMember));

    assert!(config.validate().is_err());
}

#[test]
fn test_load_missing_file() {
    let result = GrouperConfig::load("/nonexistent/grouper.toml");

    assert!(matches!(result, Err(ConfigError::Io(_))));
}
