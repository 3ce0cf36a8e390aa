//! Draw configuration stored in `santa.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::matcher::MatchOptions;
use crate::roster::Roster;

/// Draw configuration (TOML).
///
/// This file is intended to be edited by humans. The roster tables are
/// required; the `[matching]` block and the event name default to sensible
/// values when omitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SantaConfig {
    /// Event name rendered into notifications (e.g. "Office Secret Santa").
    #[serde(default = "default_event")]
    pub event: String,

    #[serde(flatten)]
    pub roster: Roster,

    #[serde(default)]
    pub matching: MatchingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MatchingConfig {
    /// Allow participants to draw themselves.
    pub allow_self_assignment: bool,

    /// Largest giver subset the feasibility pre-check enumerates.
    /// 0 disables the pre-check; infeasible rosters then surface as
    /// search exhaustion instead of a pre-check proof.
    pub precheck_max_subset: usize,

    /// Skip the pre-check for rosters with more participants than this.
    pub precheck_participant_limit: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            allow_self_assignment: false,
            precheck_max_subset: 3,
            precheck_participant_limit: 24,
        }
    }
}

impl MatchingConfig {
    pub fn to_options(&self) -> MatchOptions {
        MatchOptions {
            allow_self_assignment: self.allow_self_assignment,
            precheck_max_subset: self.precheck_max_subset,
            precheck_participant_limit: self.precheck_participant_limit,
        }
    }
}

fn default_event() -> String {
    "Secret Santa".to_string()
}

impl SantaConfig {
    pub fn validate(&self) -> Result<()> {
        if self.event.trim().is_empty() {
            return Err(anyhow!("event must not be empty"));
        }
        let errors = self.roster.validate();
        if !errors.is_empty() {
            return Err(anyhow!("invalid roster:\n- {}", errors.join("\n- ")));
        }
        Ok(())
    }
}

/// Load and validate config from a TOML file.
///
/// Unlike defaults-only settings files, a missing roster cannot be invented,
/// so a missing file is an error.
pub fn load_config(path: &Path) -> Result<SantaConfig> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let config: SantaConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    config.validate()?;
    Ok(config)
}
