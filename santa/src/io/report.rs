//! Organizer-facing report artifacts.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::types::Assignment;
use crate::io::init::SantaPaths;
use crate::roster::Roster;

/// Write the full-disclosure summary and the audit file.
///
/// Both artifacts list edges in roster order to keep output stable across
/// runs with the same assignment. The summary shows display names only; the
/// audit additionally carries contact addresses.
pub fn write_reports(paths: &SantaPaths, roster: &Roster, assignment: &Assignment) -> Result<()> {
    fs::create_dir_all(&paths.out_dir)
        .with_context(|| format!("create output directory {}", paths.out_dir.display()))?;
    write_text(&paths.summary_path, &render_summary(roster, assignment))?;
    write_text(&paths.audit_path, &render_audit(roster, assignment))?;
    Ok(())
}

/// Giver -> receiver lines, display names, organizer's eyes only.
pub fn render_summary(roster: &Roster, assignment: &Assignment) -> String {
    let mut out = String::new();
    for pair in assignment.pairs() {
        let giver = display_name(roster, &pair.giver);
        let receiver = display_name(roster, &pair.receiver);
        let _ = writeln!(out, "{giver} -> {receiver}");
    }
    out
}

/// Every edge with keys and contact addresses, for the organizer's records.
pub fn render_audit(roster: &Roster, assignment: &Assignment) -> String {
    let mut out = String::new();
    for pair in assignment.pairs() {
        let giver = display_name(roster, &pair.giver);
        let receiver = display_name(roster, &pair.receiver);
        let contact = roster
            .participant(&pair.giver)
            .and_then(|participant| participant.email.as_deref())
            .unwrap_or("-");
        let _ = writeln!(
            out,
            "{} ({}, {}) -> {} ({})",
            giver, pair.giver, contact, receiver, pair.receiver
        );
    }
    out
}

fn display_name<'a>(roster: &'a Roster, key: &'a str) -> &'a str {
    roster
        .participant(key)
        .map(|participant| participant.name.as_str())
        .unwrap_or(key)
}

fn write_text(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))
}
