//! Grouping entry point that hides the grouper wiring.

use groupforge_config::GrouperConfig;
use groupforge_core::{GroupForgeError, Grouping, Result, Roster};
use groupforge_scoring::Survey;
use groupforge_solver::build_grouper;
use tracing::info;

/// Groups `roster` with the grouper described by `config`, scoring with
/// `survey`.
///
/// Logs the grouping's overall score once it is formed.
///
/// # Errors
///
/// Returns a `Config` error if `config` fails validation.
pub fn run_grouping<'r>(
    roster: &'r Roster,
    survey: &Survey,
    config: &GrouperConfig,
) -> Result<Grouping<'r>> {
    config
        .validate()
        .map_err(|err| GroupForgeError::Config(err.to_string()))?;

    let mut grouper = build_grouper(config)?;
    let grouping = grouper.make_grouping(roster, survey)?;

    info!(
        event = "grouping_scored",
        grouper = grouper.grouper_type_name(),
        groups = grouping.len(),
        score = survey.score_grouping(&grouping),
    );
    Ok(grouping)
}
