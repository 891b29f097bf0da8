//! Fixed-capacity bitset over token positions.
//!
//! The traversal keeps one `PositionSet` of still-unused positions for the
//! whole run and flips bits as it descends and backtracks, instead of
//! rebuilding a "remaining tokens" list at every step.
//!
//! ```text
//! tokens:  ["ab", "", "ba", None]
//! initial: 0b0101   (positions 0 and 2; empty/absent never enter the set)
//! ```

const WORD_BITS: usize = u64::BITS as usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PositionSet {
    words: Vec<u64>,
    len: usize,
}

impl PositionSet {
    /// Empty set able to hold positions `0..capacity`.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        PositionSet { words: vec![0; capacity.div_ceil(WORD_BITS)], len: 0 }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn contains(&self, pos: usize) -> bool {
        self.words.get(pos / WORD_BITS).is_some_and(|w| *w & (1u64 << (pos % WORD_BITS)) != 0)
    }

    /// Add `pos`. Positions beyond the capacity are ignored.
    pub(crate) fn insert(&mut self, pos: usize) {
        let Some(word) = self.words.get_mut(pos / WORD_BITS) else {
            return;
        };
        let bit = 1u64 << (pos % WORD_BITS);
        if *word & bit == 0 {
            *word |= bit;
            self.len += 1;
        }
    }

    pub(crate) fn remove(&mut self, pos: usize) {
        let Some(word) = self.words.get_mut(pos / WORD_BITS) else {
            return;
        };
        let bit = 1u64 << (pos % WORD_BITS);
        if *word & bit != 0 {
            *word &= !bit;
            self.len -= 1;
        }
    }

    /// Smallest member `>= start`, if any.
    pub(crate) fn next_from(&self, start: usize) -> Option<usize> {
        let mut idx = start / WORD_BITS;
        let mut word = *self.words.get(idx)? & (u64::MAX << (start % WORD_BITS));
        loop {
            if word != 0 {
                return Some(idx * WORD_BITS + word.trailing_zeros() as usize);
            }
            idx += 1;
            word = *self.words.get(idx)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_remove_and_scan() {
        let mut set = PositionSet::with_capacity(130);
        assert!(set.is_empty());

        for pos in [0, 3, 64, 129] {
            set.insert(pos);
        }
        set.insert(3);
        assert_eq!(set.len(), 4);
        assert!(set.contains(64));
        assert!(!set.contains(65));

        assert_eq!(set.next_from(0), Some(0));
        assert_eq!(set.next_from(1), Some(3));
        assert_eq!(set.next_from(4), Some(64));
        assert_eq!(set.next_from(65), Some(129));
        assert_eq!(set.next_from(130), None);

        set.remove(64);
        set.remove(64);
        assert_eq!(set.len(), 3);
        assert_eq!(set.next_from(4), Some(129));
    }

    #[test]
    fn out_of_range_positions_are_ignored() {
        let mut set = PositionSet::with_capacity(2);
        set.insert(500);
        assert!(set.is_empty());
        assert!(!set.contains(500));
        assert_eq!(set.next_from(500), None);
    }

    #[test]
    fn zero_capacity_set_is_empty() {
        let set = PositionSet::with_capacity(0);
        assert!(set.is_empty());
        assert_eq!(set.next_from(0), None);
    }
}
