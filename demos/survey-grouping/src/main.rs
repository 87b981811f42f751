//! Survey Grouping Example
//!
//! Reads a roster and its survey answers from a TOML data file, groups the
//! respondents with the configured grouper, and prints the groups together
//! with their scores.
//!
//! Run with: cargo run -p survey-grouping -- data/cooking-club.toml --config data/grouper.toml

mod data;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use groupforge::prelude::*;
use groupforge::{console, ConfigError, GroupForgeError};
use owo_colors::OwoColorize;
use thiserror::Error;

use data::SurveyData;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("data file parse error: {0}")]
    Data(#[from] toml::de::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Grouping(#[from] GroupForgeError),
}

/// Partition survey respondents into groups.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Survey data file (TOML).
    data: PathBuf,

    /// Grouper configuration (TOML or YAML); defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overrides the configured grouper type.
    #[arg(short, long, value_parser = parse_grouper_type)]
    grouper: Option<GrouperType>,

    /// Overrides the configured group size.
    #[arg(short = 's', long)]
    group_size: Option<usize>,
}

fn parse_grouper_type(s: &str) -> Result<GrouperType, String> {
    match s {
        "alpha" => Ok(GrouperType::Alpha),
        "random" => Ok(GrouperType::Random),
        "greedy" => Ok(GrouperType::Greedy),
        "window" => Ok(GrouperType::Window),
        other => Err(format!(
            "unknown grouper '{}', expected alpha, random, greedy or window",
            other
        )),
    }
}

fn load_config(args: &Args) -> Result<GrouperConfig, DemoError> {
    let mut config = match &args.config {
        Some(path) if matches!(path.extension().and_then(|e| e.to_str()), Some("yaml" | "yml")) => {
            GrouperConfig::from_yaml_file(path)?
        }
        Some(path) => GrouperConfig::from_toml_file(path)?,
        None => GrouperConfig::default(),
    };
    if let Some(grouper_type) = args.grouper {
        config = config.with_grouper_type(grouper_type);
    }
    if let Some(group_size) = args.group_size {
        config = config.with_group_size(group_size);
    }
    config.validate()?;
    Ok(config)
}

fn run(args: &Args) -> Result<(), DemoError> {
    let config = load_config(args)?;
    let (questions, roster) = SurveyData::load(&args.data)?.into_domain()?;
    let survey = apply_to_survey(&config, Survey::new(questions))?;

    println!(
        "{} {} │ {} respondents │ {} questions",
        "▸".bright_green(),
        roster.name().bright_cyan().bold(),
        roster.len(),
        survey.len()
    );
    if !roster.all_answered(survey.questions()) {
        println!(
            "{} some respondents did not answer every question; their groups score 0",
            "!".bright_yellow().bold()
        );
    }

    let grouping = run_grouping(&roster, &survey, &config)?;

    println!();
    for (i, group) in grouping.iter().enumerate() {
        println!(
            "  {} {:<40} {:.3}",
            format!("Group {}", i + 1).white().bold(),
            group.to_string(),
            survey.score_students(group.members())
        );
    }
    println!(
        "\n{} Overall score {:.3}",
        "■".bright_cyan(),
        survey.score_grouping(&grouping)
    );
    Ok(())
}

fn main() -> ExitCode {
    console::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".bright_red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
