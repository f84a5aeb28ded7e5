//! Recombinant assembly
//!
//! Turns an accepted combination into an output record. Segment `i` of the
//! recombinant runs from just after breakpoint `i-1` (or position 1) through
//! breakpoint `i`, taken from the sequence named by element `i`. The last
//! segment runs to the end of its own sequence, so a recombinant can be
//! longer than the shortest input.

use crate::breakpoints::BreakpointSet;
use crate::index::SequenceIndex;
use crate::types::{Combination, Position, Recombinant};

pub const SEGMENT_SEPARATOR: char = '|';
pub const BREAKPOINT_MARKER: char = '@';

#[derive(Debug, Clone, Copy)]
pub struct Assembler<'a> {
    index: &'a SequenceIndex,
    breakpoints: &'a BreakpointSet,
}

impl<'a> Assembler<'a> {
    pub fn new(index: &'a SequenceIndex, breakpoints: &'a BreakpointSet) -> Self {
        Self { index, breakpoints }
    }

    /// Build the recombinant for `combination`.
    ///
    /// # Panics
    /// Panics if the combination length is not `breakpoints + 1` or if a key
    /// does not resolve in the index. Both mean the combination did not come
    /// from this index and breakpoint set.
    pub fn assemble(&self, combination: &Combination) -> Recombinant {
        assert_eq!(
            combination.len(),
            self.breakpoints.segments(),
            "combination width does not match breakpoint count"
        );
        Recombinant {
            id: self.recombinant_id(combination),
            data: self.recombinant_data(combination),
        }
    }

    /// `id_0|@b_0|id_1|...|@b_{K-1}|id_K`
    pub fn recombinant_id(&self, combination: &Combination) -> String {
        let (first, rest) = match combination.split_first() {
            Some(split) => split,
            None => return String::new(),
        };
        rest.iter()
            .zip(self.breakpoints)
            .fold(self.index.resolve(*first).id.clone(), |mut id, (key, position)| {
                id.push(SEGMENT_SEPARATOR);
                id.push(BREAKPOINT_MARKER);
                id.push_str(&position.to_string());
                id.push(SEGMENT_SEPARATOR);
                id.push_str(&self.index.resolve(*key).id);
                id
            })
    }

    pub fn recombinant_data(&self, combination: &Combination) -> Vec<u8> {
        let (last, body) = match combination.split_last() {
            Some(split) => split,
            None => return Vec::new(),
        };

        let capacity = self.breakpoints.positions().last().copied().unwrap_or(0) as usize
            + self.index.resolve(*last).length as usize;

        let (mut data, cursor) = body.iter().zip(self.breakpoints).fold(
            (Vec::with_capacity(capacity), 1 as Position),
            |(mut data, cursor), (key, &position)| {
                data.extend_from_slice(self.index.resolve(*key).slice(cursor, position));
                (data, position + 1)
            },
        );

        data.extend_from_slice(self.index.resolve(*last).suffix(cursor));
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Grouping;
    use crate::types::{IndexKey, Sequence};

    fn index(specs: &[(&str, &str)]) -> SequenceIndex {
        let seqs = specs
            .iter()
            .map(|(id, bases)| Sequence::new(*id, bases.as_bytes().to_vec()))
            .collect();
        SequenceIndex::build(vec![seqs], Grouping::Flat).unwrap()
    }

    fn k(seq: usize) -> IndexKey {
        IndexKey::new(0, seq)
    }

    #[test]
    fn test_two_segment_assembly() {
        let index = index(&[("A", "AAAA"), ("B", "BBBB")]);
        let bps = BreakpointSet::new([2], &index).unwrap();
        let assembler = Assembler::new(&index, &bps);

        let rec = assembler.assemble(&[k(0), k(1)]);
        assert_eq!(rec.id, "A|@2|B");
        assert_eq!(rec.data, b"AABB");

        let rec = assembler.assemble(&[k(1), k(0)]);
        assert_eq!(rec.id, "B|@2|A");
        assert_eq!(rec.data, b"BBAA");
    }

    #[test]
    fn test_id_format_with_multiple_breakpoints() {
        let index = index(&[
            ("foo", &"F".repeat(300)),
            ("bar", &"B".repeat(300)),
            ("baz", &"Z".repeat(300)),
        ]);
        let bps = BreakpointSet::new([242, 113], &index).unwrap();
        let assembler = Assembler::new(&index, &bps);
        assert_eq!(assembler.recombinant_id(&[k(0), k(1), k(2)]), "foo|@113|bar|@242|baz");
    }

    #[test]
    fn test_segments_follow_breakpoints() {
        let index = index(&[("x", "abcdefgh"), ("y", "ABCDEFGH"), ("z", "12345678")]);
        let bps = BreakpointSet::new([2, 5], &index).unwrap();
        let rec = Assembler::new(&index, &bps).assemble(&[k(0), k(1), k(2)]);
        assert_eq!(rec.data, b"abCDE678");
        assert_eq!(rec.len(), 8);
    }

    #[test]
    fn test_final_segment_uses_its_own_length() {
        let index = index(&[("short", "aaa"), ("long", "bbbbbbbbbb")]);
        let bps = BreakpointSet::new([2], &index).unwrap();
        let assembler = Assembler::new(&index, &bps);

        let rec = assembler.assemble(&[k(0), k(1)]);
        assert_eq!(rec.data, b"aabbbbbbbb");

        let rec = assembler.assemble(&[k(1), k(0)]);
        assert_eq!(rec.data, b"bba");
    }

    #[test]
    fn test_no_breakpoints_copies_sequence() {
        let index = index(&[("only", "ACGT")]);
        let bps = BreakpointSet::default();
        let rec = Assembler::new(&index, &bps).assemble(&[k(0)]);
        assert_eq!(rec.id, "only");
        assert_eq!(rec.data, b"ACGT");
    }

    #[test]
    #[should_panic(expected = "combination width")]
    fn test_width_mismatch_panics() {
        let index = index(&[("A", "AAAA"), ("B", "BBBB")]);
        let bps = BreakpointSet::new([2], &index).unwrap();
        Assembler::new(&index, &bps).assemble(&[k(0)]);
    }
}
