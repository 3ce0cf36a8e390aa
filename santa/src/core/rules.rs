//! Pairing constraint evaluation.

use std::collections::{HashMap, HashSet};

use crate::roster::Roster;

/// Evaluates whether a candidate (giver, receiver) edge is allowed.
///
/// Built once per draw from the roster; evaluation is a pure lookup with no
/// side effects. Forbidden pairs block both directions, and any two members
/// of the same group block each other.
#[derive(Debug, Clone)]
pub struct PairingRules {
    allow_self_assignment: bool,
    /// Symmetric blocked set: both orientations of every forbidden pair.
    blocked: HashSet<(String, String)>,
    /// Group indexes per participant key.
    group_memberships: HashMap<String, Vec<usize>>,
}

impl PairingRules {
    pub fn new(roster: &Roster, allow_self_assignment: bool) -> Self {
        let mut blocked = HashSet::new();
        for pair in &roster.forbidden {
            blocked.insert((pair.giver.clone(), pair.receiver.clone()));
            blocked.insert((pair.receiver.clone(), pair.giver.clone()));
        }

        let mut group_memberships: HashMap<String, Vec<usize>> = HashMap::new();
        for (index, group) in roster.groups.iter().enumerate() {
            for member in &group.members {
                group_memberships
                    .entry(member.clone())
                    .or_default()
                    .push(index);
            }
        }

        Self {
            allow_self_assignment,
            blocked,
            group_memberships,
        }
    }

    /// True when `giver` may be assigned to gift `receiver`.
    pub fn is_valid_pairing(&self, giver: &str, receiver: &str) -> bool {
        if giver == receiver {
            return self.allow_self_assignment;
        }
        if self
            .blocked
            .contains(&(giver.to_string(), receiver.to_string()))
        {
            return false;
        }
        !self.share_group(giver, receiver)
    }

    fn share_group(&self, giver: &str, receiver: &str) -> bool {
        let (Some(giver_groups), Some(receiver_groups)) = (
            self.group_memberships.get(giver),
            self.group_memberships.get(receiver),
        ) else {
            return false;
        };
        giver_groups
            .iter()
            .any(|index| receiver_groups.contains(index))
    }
}
