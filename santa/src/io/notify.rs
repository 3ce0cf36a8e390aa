//! Per-giver notification artifacts.
//!
//! Each giver gets one text file, named after their key, telling them who
//! they drew. Nothing else from the assignment leaks into the file, so
//! notifications can be handed out individually without spoiling the draw.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use minijinja::{Environment, context};

use crate::core::types::Assignment;
use crate::io::init::SantaPaths;
use crate::roster::{Participant, Roster};

const NOTIFICATION_TEMPLATE: &str = include_str!("templates/notification.txt");

/// Template engine wrapper around minijinja.
struct NotificationEngine {
    env: Environment<'static>,
}

impl NotificationEngine {
    fn new() -> Self {
        let mut env = Environment::new();
        env.add_template("notification", NOTIFICATION_TEMPLATE)
            .expect("notification template should be valid");
        Self { env }
    }

    fn render(&self, event: &str, giver: &Participant, receiver: &Participant) -> Result<String> {
        let template = self.env.get_template("notification")?;
        let rendered = template.render(context! {
            event => event,
            giver => giver,
            receiver => receiver,
        })?;
        Ok(rendered)
    }
}

/// Render one notification per giver and write them under
/// `paths.notifications_dir`.
///
/// The assignment is complete by construction, so either every notification
/// is rendered or the first I/O error aborts the batch; no partial-draw state
/// exists to leak. Returns the written paths in roster order.
pub fn write_notifications(
    paths: &SantaPaths,
    event: &str,
    roster: &Roster,
    assignment: &Assignment,
) -> Result<Vec<PathBuf>> {
    let engine = NotificationEngine::new();
    fs::create_dir_all(&paths.notifications_dir).with_context(|| {
        format!(
            "create notifications directory {}",
            paths.notifications_dir.display()
        )
    })?;

    let mut written = Vec::with_capacity(assignment.len());
    for pair in assignment.pairs() {
        let giver = lookup(roster, &pair.giver)?;
        let receiver = lookup(roster, &pair.receiver)?;
        let contents = engine.render(event, giver, receiver)?;
        let path = paths.notification_path(&giver.key);
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

fn lookup<'a>(roster: &'a Roster, key: &str) -> Result<&'a Participant> {
    roster
        .participant(key)
        .ok_or_else(|| anyhow!("assignment references unknown participant '{key}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::matcher::{MatchOptions, draw_assignment};
    use crate::test_support::{participant, roster_of};

    #[test]
    fn render_includes_event_and_names() {
        let engine = NotificationEngine::new();
        let giver = participant("alice");
        let receiver = participant("bob");

        let rendered = engine
            .render("Office Exchange", &giver, &receiver)
            .expect("render");
        assert!(rendered.contains("Hello alice name!"));
        assert!(rendered.contains("Office Exchange"));
        assert!(rendered.contains("bob name"));
    }

    #[test]
    fn writes_one_file_per_giver() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = SantaPaths::new(temp.path().join("out"));
        let roster = roster_of(&["alice", "bob", "carol"]);
        let assignment = draw_assignment(
            &roster,
            &MatchOptions::default(),
            &mut rand::thread_rng(),
        )
        .expect("draw");

        let written = write_notifications(&paths, "Secret Santa", &roster, &assignment)
            .expect("write notifications");

        assert_eq!(written.len(), 3);
        for key in ["alice", "bob", "carol"] {
            let path = paths.notification_path(key);
            let contents = fs::read_to_string(&path).expect("read notification");
            let receiver = assignment.receiver_for(key).expect("receiver");
            assert!(contents.contains(&format!("{receiver} name")));
        }
    }
}
