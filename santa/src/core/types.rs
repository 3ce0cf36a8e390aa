//! Shared contract types between the matching engine and its callers.
//!
//! These types define stable contracts between core components. They should
//! not depend on external state or I/O.

use thiserror::Error;

/// One assignment edge: `giver` gifts `receiver`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub giver: String,
    pub receiver: String,
}

/// A complete draw result: a bijection from givers to receivers.
///
/// Only the matching engine constructs values of this type, and only from a
/// fully assigned search state, so an `Assignment` is always complete. Edges
/// are kept in roster order to keep report output stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pairs: Vec<Pair>,
}

impl Assignment {
    pub(crate) fn new(pairs: Vec<Pair>) -> Self {
        Self { pairs }
    }

    /// Edges in roster order.
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// Receiver assigned to `giver`, if `giver` is part of the draw.
    pub fn receiver_for(&self, giver: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|pair| pair.giver == giver)
            .map(|pair| pair.receiver.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Typed failure signal from the matching engine.
///
/// `Infeasible` and `Exhausted` are kept distinct so callers can tell a
/// pre-check proof apart from a completed search. Under the backtracking
/// engine both mean no valid assignment exists; the pre-check variant names
/// the givers that pinned the proof down.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Fewer than 2 participants is a configuration problem, not an
    /// unsolvable instance. Never triggers a search.
    #[error("need at least 2 participants, got {count}")]
    InsufficientParticipants { count: usize },

    /// The feasibility pre-check proved no valid assignment can exist:
    /// the named givers have fewer valid receivers between them than
    /// their own number.
    #[error("no valid assignment exists: givers [{}] share too few valid receivers", .givers.join(", "))]
    Infeasible { givers: Vec<String> },

    /// The full search completed without finding a valid assignment.
    #[error("search exhausted without finding a valid assignment")]
    Exhausted,
}
