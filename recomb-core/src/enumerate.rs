//! Lazy combination enumeration
//!
//! Produces every ordered tuple of `width` keys drawn with repetition from a
//! key list, i.e. the Cartesian power `keys^width`. Tuples come out in
//! lexicographic order of key positions: the tuple is read as a `width`-digit
//! number in base `keys.len()` and the leftmost digit varies slowest.
//!
//! Only the current digit vector is kept alive, so memory stays at
//! O(width) on top of the borrowed key list no matter how large the power is.

use crate::types::IndexKey;

#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    keys: &'a [IndexKey],
    digits: Vec<usize>,
    exhausted: bool,
}

impl<'a> Combinations<'a> {
    pub fn new(keys: &'a [IndexKey], width: usize) -> Self {
        Self {
            keys,
            digits: vec![0; width],
            exhausted: keys.is_empty() || width == 0,
        }
    }

    pub fn width(&self) -> usize {
        self.digits.len()
    }

    /// Size of the full Cartesian power, `None` if it overflows `u128`.
    pub fn total(&self) -> Option<u128> {
        let width = u32::try_from(self.digits.len()).ok()?;
        if self.keys.is_empty() || width == 0 {
            return Some(0);
        }
        (self.keys.len() as u128).checked_pow(width)
    }

    /// Rewind to the first tuple.
    pub fn reset(&mut self) {
        self.digits.iter_mut().for_each(|d| *d = 0);
        self.exhausted = self.keys.is_empty() || self.digits.is_empty();
    }

    /// Tuples not yet yielded, `None` if the count overflows `u128`.
    fn remaining(&self) -> Option<u128> {
        if self.exhausted {
            return Some(0);
        }
        let base = self.keys.len() as u128;
        let consumed = self
            .digits
            .iter()
            .try_fold(0u128, |acc, &d| acc.checked_mul(base)?.checked_add(d as u128))?;
        Some(self.total()? - consumed)
    }

    /// Odometer step: bump the rightmost digit and carry leftwards.
    fn advance(&mut self) {
        let base = self.keys.len();
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < base {
                return;
            }
            *digit = 0;
        }
        self.exhausted = true;
    }

    fn current(&self) -> Vec<IndexKey> {
        self.digits.iter().map(|&d| self.keys[d]).collect()
    }
}

impl Iterator for Combinations<'_> {
    type Item = Vec<IndexKey>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let tuple = self.current();
        self.advance();
        Some(tuple)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining().and_then(|r| usize::try_from(r).ok()) {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl std::iter::FusedIterator for Combinations<'_> {}
