//! Hall-type feasibility pre-check for the matching engine.
//!
//! For a perfect matching to exist, every subset of givers must have at least
//! as many valid receivers (union of candidates) as the subset has members.
//! Checking all subsets is exponential, so the check is capped: subset sizes
//! up to `max_subset`, and only when the roster is small enough to make the
//! enumeration cheap. A violation within the cap is a proof of infeasibility;
//! passing the capped check proves nothing, and the full search may still
//! come up empty.

/// Bounds for the pre-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeasibilityOptions {
    /// Largest giver subset size to enumerate. 0 disables the check.
    pub max_subset: usize,
    /// Skip the check entirely for rosters larger than this.
    pub participant_limit: usize,
}

/// Search giver subsets up to the configured cap for a Hall violation.
///
/// `candidates[g]` holds the receiver indexes giver `g` may be assigned to.
/// Returns the first violating subset (giver indexes, ascending), or `None`
/// when no violation was found within the bounds.
pub fn find_violation(
    candidates: &[Vec<usize>],
    options: &FeasibilityOptions,
) -> Option<Vec<usize>> {
    let giver_count = candidates.len();
    if options.max_subset == 0 || giver_count > options.participant_limit {
        return None;
    }

    for size in 1..=options.max_subset.min(giver_count) {
        let mut subset = Vec::with_capacity(size);
        if let Some(found) = violating_subset(candidates, size, 0, &mut subset) {
            return Some(found);
        }
    }
    None
}

/// Depth-first enumeration of giver subsets of exactly `size` members.
fn violating_subset(
    candidates: &[Vec<usize>],
    size: usize,
    start: usize,
    subset: &mut Vec<usize>,
) -> Option<Vec<usize>> {
    if subset.len() == size {
        return union_too_small(candidates, subset).then(|| subset.clone());
    }
    for giver in start..candidates.len() {
        subset.push(giver);
        if let Some(found) = violating_subset(candidates, size, giver + 1, subset) {
            return Some(found);
        }
        subset.pop();
    }
    None
}

fn union_too_small(candidates: &[Vec<usize>], subset: &[usize]) -> bool {
    let mut seen = vec![false; candidates.len()];
    let mut union_size = 0;
    for &giver in subset {
        for &receiver in &candidates[giver] {
            if !seen[receiver] {
                seen[receiver] = true;
                union_size += 1;
                if union_size >= subset.len() {
                    return false;
                }
            }
        }
    }
    union_size < subset.len()
}
