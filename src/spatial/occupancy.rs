//! Per-frame occupancy of the render lattice.
//!
//! Cleared at the start of every tick; the first agent (by index) to claim a
//! cell wins it for that frame.
//!
//! Small lattices use one bit per cell. Once the lattice outgrows the agent
//! count only claimed cells are kept, so memory and the per-frame clear are
//! bounded by the number of agents, not by the viewport area.

use std::collections::HashSet;

/// Dense bitset words allowed per claimable agent (64 cells each).
const DENSE_WORDS_PER_CLAIM: u64 = 1;
/// Lattices up to this many words always stay dense.
const MIN_DENSE_WORDS: u64 = 64;

enum Claims {
    Dense(Vec<u64>),
    Sparse(HashSet<u64>),
}

pub struct OccupancyMask {
    claims: Claims,
    len: u64,
}

impl OccupancyMask {
    /// Mask over `len` lattice cells, of which at most `max_claims` are
    /// claimed per frame.
    pub fn new(len: u64, max_claims: usize) -> Self {
        let words = len.div_ceil(64);
        let dense_limit = (max_claims as u64 * DENSE_WORDS_PER_CLAIM).max(MIN_DENSE_WORDS);
        let claims = if words <= dense_limit {
            Claims::Dense(vec![0u64; words as usize])
        } else {
            Claims::Sparse(HashSet::with_capacity(max_claims))
        };
        Self { claims, len }
    }

    #[inline]
    pub fn len(&self) -> u64 {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when backed by one bit per cell.
    #[inline]
    pub fn is_dense(&self) -> bool {
        matches!(self.claims, Claims::Dense(_))
    }

    /// Reset for a new frame - memory stays allocated.
    #[inline]
    pub fn clear(&mut self) {
        match &mut self.claims {
            Claims::Dense(bits) => bits.fill(0),
            Claims::Sparse(set) => set.clear(),
        }
    }

    #[inline(always)]
    pub fn is_set(&self, idx: u64) -> bool {
        if idx >= self.len {
            return false;
        }
        match &self.claims {
            Claims::Dense(bits) => (bits[(idx >> 6) as usize] & (1u64 << (idx & 63))) != 0,
            Claims::Sparse(set) => set.contains(&idx),
        }
    }

    /// Mark `idx` occupied. Returns false if it was already taken (or out of range).
    #[inline(always)]
    pub fn try_claim(&mut self, idx: u64) -> bool {
        if idx >= self.len {
            return false;
        }
        match &mut self.claims {
            Claims::Dense(bits) => {
                let word = (idx >> 6) as usize;
                let mask = 1u64 << (idx & 63);
                let current = *fast!(bits, [word]);
                if current & mask != 0 {
                    return false;
                }
                fast!(bits, [word] = current | mask);
                true
            }
            Claims::Sparse(set) => set.insert(idx),
        }
    }

    pub fn count(&self) -> usize {
        match &self.claims {
            Claims::Dense(bits) => bits.iter().map(|w| w.count_ones() as usize).sum(),
            Claims::Sparse(set) => set.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_claim_wins() {
        let mut mask = OccupancyMask::new(130, 10);
        assert!(mask.is_dense());
        assert!(mask.try_claim(129));
        assert!(!mask.try_claim(129));
        assert!(mask.is_set(129));
        assert_eq!(mask.count(), 1);
    }

    #[test]
    fn out_of_range_is_rejected() {
        let mut mask = OccupancyMask::new(10, 10);
        assert!(!mask.try_claim(10));
        assert!(!mask.is_set(64));
    }

    #[test]
    fn clear_releases_all_cells() {
        let mut mask = OccupancyMask::new(70, 70);
        for i in 0..70 {
            assert!(mask.try_claim(i));
        }
        mask.clear();
        assert_eq!(mask.count(), 0);
        assert!(mask.try_claim(0));
    }

    #[test]
    fn huge_lattice_only_stores_claimed_cells() {
        let len = 10_000_000u64 * 10_000_000;
        let mut mask = OccupancyMask::new(len, 100);
        assert!(!mask.is_dense());
        assert_eq!(mask.len(), len);

        assert!(mask.try_claim(len - 1));
        assert!(!mask.try_claim(len - 1));
        assert!(mask.try_claim(12_345));
        assert!(mask.is_set(12_345));
        assert!(!mask.try_claim(len));
        assert_eq!(mask.count(), 2);

        mask.clear();
        assert_eq!(mask.count(), 0);
        assert!(!mask.is_set(12_345));
    }
}
