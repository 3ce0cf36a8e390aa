//! Orchestration for `santa draw`: load, match, write artifacts.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::matcher::draw_assignment;
use crate::io::config::load_config;
use crate::io::init::SantaPaths;
use crate::io::notify::write_notifications;
use crate::io::report::write_reports;

/// What a completed draw produced, for CLI reporting.
#[derive(Debug, Clone)]
pub struct DrawSummary {
    pub event: String,
    pub participants: usize,
    pub notifications: Vec<PathBuf>,
    pub summary_path: PathBuf,
    pub audit_path: PathBuf,
}

/// Run a full draw: load config, produce an assignment, write all artifacts.
///
/// The matching engine returns either a complete assignment or a typed
/// failure before any writer runs, so output-stage errors can never leave a
/// partially drawn exchange behind. Matching failures carry
/// [`crate::core::types::MatchError`] in the error chain for exit-code
/// mapping.
pub fn run_draw(config_path: &Path, out_dir: &Path) -> Result<DrawSummary> {
    let config = load_config(config_path)?;
    debug!(
        participants = config.roster.participants.len(),
        forbidden = config.roster.forbidden.len(),
        groups = config.roster.groups.len(),
        "loaded config"
    );

    let options = config.matching.to_options();
    let assignment = draw_assignment(&config.roster, &options, &mut rand::thread_rng())?;
    info!(edges = assignment.len(), "drew assignment");

    let paths = SantaPaths::new(out_dir);
    let notifications = write_notifications(&paths, &config.event, &config.roster, &assignment)
        .context("write notifications")?;
    write_reports(&paths, &config.roster, &assignment).context("write reports")?;

    Ok(DrawSummary {
        event: config.event,
        participants: config.roster.participants.len(),
        notifications,
        summary_path: paths.summary_path,
        audit_path: paths.audit_path,
    })
}
