//! Dry-run validation for `santa check`.

use std::path::Path;

use anyhow::Result;

use crate::core::feasibility::{self, FeasibilityOptions};
use crate::core::matcher::candidate_lists;
use crate::core::rules::PairingRules;
use crate::core::types::MatchError;
use crate::io::config::load_config;

/// Feasibility pre-check result, for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrecheckOutcome {
    /// Pre-check disabled or roster above the participant limit.
    Skipped,
    /// No violation within the configured subset cap. Not a proof that the
    /// draw is solvable.
    Passed,
    /// Proof that no valid assignment exists: these givers share too few
    /// valid receivers.
    Infeasible { givers: Vec<String> },
}

/// High-level check outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub participants: usize,
    /// Giver with the fewest valid receivers, as `(key, count)`. The
    /// tightest spot in the roster, useful when loosening constraints.
    pub tightest_giver: Option<(String, usize)>,
    pub precheck: PrecheckOutcome,
}

/// Load and validate the config, then run the feasibility pre-check without
/// drawing or writing anything.
pub fn check_config(config_path: &Path) -> Result<CheckOutcome> {
    let config = load_config(config_path)?;

    let keys = config.roster.keys();
    if keys.len() < 2 {
        return Err(MatchError::InsufficientParticipants { count: keys.len() }.into());
    }

    let rules = PairingRules::new(&config.roster, config.matching.allow_self_assignment);
    let candidates = candidate_lists(&keys, &rules);

    let tightest_giver = candidates
        .iter()
        .enumerate()
        .min_by_key(|(_, receivers)| receivers.len())
        .map(|(giver, receivers)| (keys[giver].to_string(), receivers.len()));

    let options = FeasibilityOptions {
        max_subset: config.matching.precheck_max_subset,
        participant_limit: config.matching.precheck_participant_limit,
    };
    let precheck = if options.max_subset == 0 || keys.len() > options.participant_limit {
        PrecheckOutcome::Skipped
    } else {
        match feasibility::find_violation(&candidates, &options) {
            Some(violation) => PrecheckOutcome::Infeasible {
                givers: violation
                    .into_iter()
                    .map(|giver| keys[giver].to_string())
                    .collect(),
            },
            None => PrecheckOutcome::Passed,
        }
    };

    Ok(CheckOutcome {
        participants: keys.len(),
        tightest_giver,
        precheck,
    })
}
