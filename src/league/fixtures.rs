//! Round-robin fixture generation.
//!
//! Standard circle method: pin the first slot, rotate the rest by one
//! each round, pair opposite ends. An odd entrant count is padded with a
//! bye that produces no pairing. Fixtures are index pairs into whatever
//! team list the caller holds; no team references are captured.

/// Generate round-robin rounds for `count` entrants.
///
/// Returns one pairing list per round, each pairing `(i, j)` indexing
/// the caller's entrant list. `count` even yields `count - 1` rounds;
/// odd yields `count` rounds with one entrant resting per round. Fewer
/// than two entrants yields no rounds.
#[must_use]
pub fn round_robin_rounds(count: usize) -> Vec<Vec<(usize, usize)>> {
    if count < 2 {
        return Vec::new();
    }

    // Pad with a bye slot when odd.
    let mut slots: Vec<Option<usize>> = (0..count).map(Some).collect();
    if count % 2 == 1 {
        slots.push(None);
    }

    let n = slots.len();
    let half = n / 2;
    let mut rounds = Vec::with_capacity(n - 1);

    for _ in 0..n - 1 {
        let mut matches = Vec::with_capacity(half);
        for i in 0..half {
            if let (Some(t1), Some(t2)) = (slots[i], slots[n - 1 - i]) {
                matches.push((t1, t2));
            }
        }
        rounds.push(matches);

        // Rotate everything but the first slot.
        let last = slots.pop().expect("at least two slots");
        slots.insert(1, last);
    }

    rounds
}
