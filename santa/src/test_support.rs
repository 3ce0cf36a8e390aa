//! Test-only helpers for constructing rosters and constraints.

use crate::roster::{ForbiddenPair, Group, Participant, Roster};

/// Create a participant whose display fields are derived from the key.
pub fn participant(key: &str) -> Participant {
    Participant {
        key: key.to_string(),
        name: format!("{key} name"),
        email: Some(format!("{key}@example.com")),
    }
}

/// Create a roster of participants with no constraints.
pub fn roster_of(keys: &[&str]) -> Roster {
    Roster {
        participants: keys.iter().map(|key| participant(key)).collect(),
        forbidden: Vec::new(),
        groups: Vec::new(),
    }
}

/// Create a forbidden pair.
pub fn forbidden(giver: &str, receiver: &str) -> ForbiddenPair {
    ForbiddenPair {
        giver: giver.to_string(),
        receiver: receiver.to_string(),
    }
}

/// Create a named group.
pub fn group(name: &str, members: &[&str]) -> Group {
    Group {
        name: name.to_string(),
        members: members.iter().map(|member| member.to_string()).collect(),
    }
}
