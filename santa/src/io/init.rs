//! Config scaffolding and output path layout.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

/// Canonical output paths for one draw under an output directory.
#[derive(Debug, Clone)]
pub struct SantaPaths {
    pub out_dir: PathBuf,
    /// One notification per giver lands in here, named `<key>.txt`.
    pub notifications_dir: PathBuf,
    /// Organizer-only giver -> receiver listing.
    pub summary_path: PathBuf,
    /// Every edge with contact info, for the organizer's records.
    pub audit_path: PathBuf,
}

impl SantaPaths {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        let out_dir = out_dir.into();
        let notifications_dir = out_dir.join("notifications");
        Self {
            notifications_dir,
            summary_path: out_dir.join("summary.txt"),
            audit_path: out_dir.join("audit.txt"),
            out_dir,
        }
    }

    /// Notification artifact path for one giver.
    pub fn notification_path(&self, giver_key: &str) -> PathBuf {
        self.notifications_dir.join(format!("{giver_key}.txt"))
    }
}

/// Options for `init_config`.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// If true, overwrite an existing config file.
    pub force: bool,
}

/// Write a commented sample `santa.toml` at `path`.
///
/// Fails if the file already exists unless `options.force` is set.
pub fn init_config(path: &Path, options: &InitOptions) -> Result<()> {
    if path.exists() && !options.force {
        return Err(anyhow!(
            "santa init: {} already exists (use --force to overwrite)",
            path.display()
        ));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
    }
    fs::write(path, SAMPLE_CONFIG).with_context(|| format!("write {}", path.display()))
}

pub(crate) const SAMPLE_CONFIG: &str = r#"# Secret-gift draw configuration.
#
# Every participant needs a unique key (used for constraint references and
# artifact file names), a display name, and optionally a contact address that
# only appears in the organizer audit file.

event = "Secret Santa"

[[participants]]
key = "alice"
name = "Alice Adams"
email = "alice@example.com"

[[participants]]
key = "bob"
name = "Bob Brown"
email = "bob@example.com"

[[participants]]
key = "carol"
name = "Carol Clark"

# Forbidden pairs block the edge in both directions.
#
# [[forbidden]]
# giver = "alice"
# receiver = "bob"

# No two members of a group ever draw each other.
#
# [[groups]]
# name = "household-adams"
# members = ["alice", "carol"]

[matching]
# Allow participants to draw themselves (off = classic derangement draw).
allow_self_assignment = false
# Feasibility pre-check: enumerate giver subsets up to this size looking for a
# set with too few valid receivers. 0 disables the check. Passing the capped
# check does not prove the draw is solvable; the full search settles that.
precheck_max_subset = 3
# Skip the pre-check for rosters larger than this.
precheck_participant_limit = 24
"#;
