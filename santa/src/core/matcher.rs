//! Backtracking matching engine.
//!
//! Strategy: feasibility-gated randomized backtracking. Givers are processed
//! in roster order; at each branch point the giver's candidate receivers are
//! freshly shuffled, so a uniformly random valid assignment is reachable and
//! the search carries no bias toward lexicographically-first solutions. The
//! search is complete: if a valid assignment exists it will be found, and
//! [`MatchError::Exhausted`] is a definitive no-solution answer.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::core::feasibility::{self, FeasibilityOptions};
use crate::core::rules::PairingRules;
use crate::core::types::{Assignment, MatchError, Pair};
use crate::roster::Roster;

/// Immutable per-draw knobs, threaded into each invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// Allow a participant to draw themselves (permutation instead of
    /// derangement).
    pub allow_self_assignment: bool,
    /// Largest giver subset the feasibility pre-check enumerates. 0 disables
    /// the pre-check.
    pub precheck_max_subset: usize,
    /// Skip the pre-check for rosters larger than this.
    pub precheck_participant_limit: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            allow_self_assignment: false,
            precheck_max_subset: 3,
            precheck_participant_limit: 24,
        }
    }
}

/// Draw one complete assignment, or report why none was produced.
///
/// The roster is consumed read-only; all search state is local to the call,
/// so concurrent draws on distinct inputs need no coordination. The result is
/// complete-or-absent: no partial assignment ever escapes.
pub fn draw_assignment<R: Rng>(
    roster: &Roster,
    options: &MatchOptions,
    rng: &mut R,
) -> Result<Assignment, MatchError> {
    let keys = roster.keys();
    if keys.len() < 2 {
        return Err(MatchError::InsufficientParticipants { count: keys.len() });
    }

    let rules = PairingRules::new(roster, options.allow_self_assignment);
    let candidates = candidate_lists(&keys, &rules);

    let feasibility_options = FeasibilityOptions {
        max_subset: options.precheck_max_subset,
        participant_limit: options.precheck_participant_limit,
    };
    if let Some(violation) = feasibility::find_violation(&candidates, &feasibility_options) {
        let givers = violation
            .into_iter()
            .map(|giver| keys[giver].to_string())
            .collect();
        return Err(MatchError::Infeasible { givers });
    }

    let mut search = Search {
        candidates: &candidates,
        taken: vec![false; keys.len()],
        chosen: vec![0; keys.len()],
        rng,
    };
    if !search.solve(0) {
        return Err(MatchError::Exhausted);
    }

    let pairs = search
        .chosen
        .iter()
        .enumerate()
        .map(|(giver, &receiver)| Pair {
            giver: keys[giver].to_string(),
            receiver: keys[receiver].to_string(),
        })
        .collect();
    Ok(Assignment::new(pairs))
}

/// Valid receiver indexes per giver, in roster order.
pub fn candidate_lists(keys: &[&str], rules: &PairingRules) -> Vec<Vec<usize>> {
    keys.iter()
        .map(|giver| {
            keys.iter()
                .enumerate()
                .filter(|(_, receiver)| rules.is_valid_pairing(giver, receiver))
                .map(|(index, _)| index)
                .collect()
        })
        .collect()
}

struct Search<'a, R: Rng> {
    candidates: &'a [Vec<usize>],
    taken: Vec<bool>,
    chosen: Vec<usize>,
    rng: &'a mut R,
}

impl<R: Rng> Search<'_, R> {
    /// Assign givers `giver..` depth-first; true once every giver has a
    /// receiver. Shuffles the candidate order at every branch point.
    fn solve(&mut self, giver: usize) -> bool {
        if giver == self.candidates.len() {
            return true;
        }
        let mut order = self.candidates[giver].clone();
        order.shuffle(self.rng);
        for receiver in order {
            if self.taken[receiver] {
                continue;
            }
            self.taken[receiver] = true;
            self.chosen[giver] = receiver;
            if self.solve(giver + 1) {
                return true;
            }
            self.taken[receiver] = false;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::test_support::{forbidden, group, roster_of};

    fn draw(roster: &Roster, options: &MatchOptions) -> Result<Assignment, MatchError> {
        draw_assignment(roster, options, &mut rand::thread_rng())
    }

    /// Verifies the bijection property: each participant appears exactly once
    /// as giver and exactly once as receiver.
    #[test]
    fn assignment_is_a_bijection() {
        let roster = roster_of(&["a", "b", "c", "d", "e", "f"]);
        let assignment = draw(&roster, &MatchOptions::default()).expect("draw");

        let givers: HashSet<&str> = assignment
            .pairs()
            .iter()
            .map(|pair| pair.giver.as_str())
            .collect();
        let receivers: HashSet<&str> = assignment
            .pairs()
            .iter()
            .map(|pair| pair.receiver.as_str())
            .collect();
        let keys: HashSet<&str> = roster.keys().into_iter().collect();
        assert_eq!(givers, keys);
        assert_eq!(receivers, keys);
    }

    #[test]
    fn every_edge_satisfies_the_rules() {
        let mut roster = roster_of(&["a", "b", "c", "d", "e"]);
        roster.forbidden.push(forbidden("a", "b"));
        roster.groups.push(group("family", &["c", "d"]));
        let options = MatchOptions::default();

        let assignment = draw(&roster, &options).expect("draw");
        let rules = PairingRules::new(&roster, options.allow_self_assignment);
        for pair in assignment.pairs() {
            assert!(
                rules.is_valid_pairing(&pair.giver, &pair.receiver),
                "invalid edge {} -> {}",
                pair.giver,
                pair.receiver
            );
        }
    }

    #[test]
    fn too_few_participants_is_a_config_error() {
        let empty = roster_of(&[]);
        let single = roster_of(&["a"]);
        assert_eq!(
            draw(&empty, &MatchOptions::default()),
            Err(MatchError::InsufficientParticipants { count: 0 })
        );
        assert_eq!(
            draw(&single, &MatchOptions::default()),
            Err(MatchError::InsufficientParticipants { count: 1 })
        );
    }

    /// With all non-self pairs forbidden among 3 participants every giver has
    /// zero legal receivers; the pre-check proves infeasibility.
    #[test]
    fn fully_forbidden_trio_is_infeasible() {
        let mut roster = roster_of(&["a", "b", "c"]);
        roster.forbidden.push(forbidden("a", "b"));
        roster.forbidden.push(forbidden("a", "c"));
        roster.forbidden.push(forbidden("b", "c"));

        let result = draw(&roster, &MatchOptions::default());
        assert_eq!(
            result,
            Err(MatchError::Infeasible {
                givers: vec!["a".to_string()]
            })
        );
    }

    /// Same instance with the pre-check disabled: the full search still fails,
    /// now with the exhaustion signal.
    #[test]
    fn fully_forbidden_trio_exhausts_without_precheck() {
        let mut roster = roster_of(&["a", "b", "c"]);
        roster.forbidden.push(forbidden("a", "b"));
        roster.forbidden.push(forbidden("a", "c"));
        roster.forbidden.push(forbidden("b", "c"));
        let options = MatchOptions {
            precheck_max_subset: 0,
            ..MatchOptions::default()
        };

        assert_eq!(draw(&roster, &options), Err(MatchError::Exhausted));
    }

    /// Scenario from the requirements: forbidden (a,b) plus group (c,d) still
    /// leaves valid assignments; the draw must succeed.
    #[test]
    fn constrained_quartet_succeeds() {
        let mut roster = roster_of(&["a", "b", "c", "d"]);
        roster.forbidden.push(forbidden("a", "b"));
        roster.groups.push(group("household", &["c", "d"]));
        let options = MatchOptions::default();

        let assignment = draw(&roster, &options).expect("draw");
        let rules = PairingRules::new(&roster, options.allow_self_assignment);
        assert_eq!(assignment.len(), 4);
        for pair in assignment.pairs() {
            assert!(rules.is_valid_pairing(&pair.giver, &pair.receiver));
        }
    }

    /// Fairness: repeated draws over an unconstrained roster must not keep
    /// producing one permutation. 5 participants have 44 derangements, so 10
    /// identical draws in a row would be a (1/44)^9 fluke.
    #[test]
    fn repeated_draws_vary() {
        let roster = roster_of(&["a", "b", "c", "d", "e"]);
        let mut distinct = HashSet::new();
        for _ in 0..10 {
            let assignment = draw(&roster, &MatchOptions::default()).expect("draw");
            let receivers: Vec<String> = assignment
                .pairs()
                .iter()
                .map(|pair| pair.receiver.clone())
                .collect();
            distinct.insert(receivers);
        }
        assert!(distinct.len() > 1, "10 draws produced a single permutation");
    }

    #[test]
    fn seeded_rng_gives_reproducible_draws() {
        let roster = roster_of(&["a", "b", "c", "d", "e"]);
        let options = MatchOptions::default();
        let first = draw_assignment(&roster, &options, &mut StdRng::seed_from_u64(7));
        let second = draw_assignment(&roster, &options, &mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
    }

    #[test]
    fn self_assignment_allowed_permits_fixed_points() {
        // Everyone-but-self forbidden: only the identity permutation remains.
        let mut roster = roster_of(&["a", "b"]);
        roster.forbidden.push(forbidden("a", "b"));
        let options = MatchOptions {
            allow_self_assignment: true,
            ..MatchOptions::default()
        };

        let assignment = draw(&roster, &options).expect("draw");
        assert_eq!(assignment.receiver_for("a"), Some("a"));
        assert_eq!(assignment.receiver_for("b"), Some("b"));
    }

    /// A tight instance with exactly one valid assignment: the search must
    /// find it for every seed rather than give up on dead ends.
    #[test]
    fn single_solution_instance_is_found() {
        // The only allowed edges are a-b and c-d, so the sole valid
        // derangement is the double swap a<->b, c<->d.
        let mut roster = roster_of(&["a", "b", "c", "d"]);
        roster.forbidden.push(forbidden("a", "c"));
        roster.forbidden.push(forbidden("a", "d"));
        roster.forbidden.push(forbidden("b", "c"));
        roster.forbidden.push(forbidden("b", "d"));
        let options = MatchOptions::default();

        for seed in 0..20 {
            let assignment = draw_assignment(&roster, &options, &mut StdRng::seed_from_u64(seed))
                .expect("draw");
            assert_eq!(assignment.receiver_for("a"), Some("b"));
            assert_eq!(assignment.receiver_for("b"), Some("a"));
            assert_eq!(assignment.receiver_for("c"), Some("d"));
            assert_eq!(assignment.receiver_for("d"), Some("c"));
        }
    }
}
