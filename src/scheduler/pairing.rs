//! The pool of company pairings still waiting for a meeting.

use std::collections::BTreeSet;

/// An unordered pair of roster positions, stored with `first < second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Pairing {
    /// Position of the earlier company in the roster.
    pub first: usize,
    /// Position of the later company in the roster.
    pub second: usize,
}

impl Pairing {
    /// `true` if neither side is in `busy`.
    #[must_use]
    pub fn is_free(&self, busy: &BTreeSet<usize>) -> bool {
        !busy.contains(&self.first) && !busy.contains(&self.second)
    }
}

/// Ordered pool of pairings not yet scheduled.
///
/// Iteration order is the order pairs were generated in, `(0,1), (0,2),
/// …, (1,2), …`, and taking a pairing removes it for good, so a pair is
/// never handed out twice.
#[derive(Debug, Clone, Default)]
pub struct PairingPool {
    pending: Vec<Pairing>,
}

impl PairingPool {
    /// Every 2-subset of a roster of `size` companies, `n·(n-1)/2` pairs.
    #[must_use]
    pub fn round_robin(size: usize) -> Self {
        let pending = (0..size)
            .flat_map(|first| (first + 1..size).map(move |second| Pairing { first, second }))
            .collect();
        Self { pending }
    }

    /// Number of pairings still waiting.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// `true` once every pairing has been taken.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Removes and returns the first pairing whose companies are both
    /// free, or `None` if every remaining pairing conflicts with `busy`.
    pub fn take_first_eligible(&mut self, busy: &BTreeSet<usize>) -> Option<Pairing> {
        let index = self.pending.iter().position(|p| p.is_free(busy))?;
        Some(self.pending.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(first: usize, second: usize) -> Pairing {
        Pairing { first, second }
    }

    #[test]
    fn round_robin_enumerates_all_pairs_in_order() {
        let pool = PairingPool::round_robin(4);
        assert_eq!(
            pool.pending,
            vec![pair(0, 1), pair(0, 2), pair(0, 3), pair(1, 2), pair(1, 3), pair(2, 3)]
        );
    }

    #[test]
    fn small_rosters_have_no_pairs() {
        assert!(PairingPool::round_robin(0).is_empty());
        assert!(PairingPool::round_robin(1).is_empty());
        assert_eq!(PairingPool::round_robin(2).len(), 1);
        assert_eq!(PairingPool::round_robin(10).len(), 45);
    }

    #[test]
    fn take_skips_busy_companies_and_removes() {
        let mut pool = PairingPool::round_robin(4);
        let mut busy = BTreeSet::new();

        assert_eq!(pool.take_first_eligible(&busy), Some(pair(0, 1)));
        busy.extend([0, 1]);
        assert_eq!(pool.take_first_eligible(&busy), Some(pair(2, 3)));
        busy.extend([2, 3]);
        assert_eq!(pool.take_first_eligible(&busy), None);
        assert_eq!(pool.len(), 4);

        busy.clear();
        assert_eq!(pool.take_first_eligible(&busy), Some(pair(0, 2)));
    }
}
