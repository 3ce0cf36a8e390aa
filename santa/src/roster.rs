//! Participant roster: the immutable input to a draw.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A single member of the gift exchange.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Participant {
    /// Unique key used in constraints and artifact file names.
    pub key: String,
    /// Display name used in notifications and reports.
    pub name: String,
    /// Optional contact address, shown only in the organizer audit file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A giver/receiver pair that must never appear as an assignment edge.
///
/// The block is symmetric: listing `(a, b)` also forbids `b -> a`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForbiddenPair {
    pub giver: String,
    pub receiver: String,
}

/// A set of participants who must not gift each other in either direction.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub members: Vec<String>,
}

/// Full constraint input for one draw. Loaded once, consumed read-only.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Roster {
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub forbidden: Vec<ForbiddenPair>,
    #[serde(default)]
    pub groups: Vec<Group>,
}

impl Roster {
    /// Check referential invariants not expressible in the TOML structure:
    /// - participant keys are unique and non-empty
    /// - forbidden pairs reference known keys and are not self-referential
    /// - group members reference known keys; groups have at least 2 members
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let mut seen = HashSet::new();
        for participant in &self.participants {
            if participant.key.trim().is_empty() {
                errors.push(format!(
                    "participant '{}' has an empty key",
                    participant.name
                ));
            }
            if !seen.insert(participant.key.as_str()) {
                errors.push(format!("duplicate participant key '{}'", participant.key));
            }
        }

        for pair in &self.forbidden {
            for key in [&pair.giver, &pair.receiver] {
                if !seen.contains(key.as_str()) {
                    errors.push(format!("forbidden pair references unknown key '{key}'"));
                }
            }
            if pair.giver == pair.receiver {
                errors.push(format!(
                    "forbidden pair '{}' references itself (use the self-assignment policy instead)",
                    pair.giver
                ));
            }
        }

        for group in &self.groups {
            if group.members.len() < 2 {
                errors.push(format!("group '{}' needs at least 2 members", group.name));
            }
            let mut group_seen = HashSet::new();
            for key in &group.members {
                if !seen.contains(key.as_str()) {
                    errors.push(format!(
                        "group '{}' references unknown key '{}'",
                        group.name, key
                    ));
                }
                if !group_seen.insert(key.as_str()) {
                    errors.push(format!("group '{}' lists '{}' twice", group.name, key));
                }
            }
        }

        errors
    }

    /// Participant keys in roster order.
    pub fn keys(&self) -> Vec<&str> {
        self.participants
            .iter()
            .map(|participant| participant.key.as_str())
            .collect()
    }

    /// Look up a participant by key.
    pub fn participant(&self, key: &str) -> Option<&Participant> {
        self.participants
            .iter()
            .find(|participant| participant.key == key)
    }
}
