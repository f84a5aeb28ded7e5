use std::fmt;

/// 1-based residue position within a sequence
pub type Position = u64;

/// An input sequence as loaded from FASTA. Never mutated after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    pub id: String,
    pub data: Vec<u8>,
    pub length: Position,
}

impl Sequence {
    pub fn new(id: impl Into<String>, data: Vec<u8>) -> Self {
        let length = data.len() as Position;
        Self {
            id: id.into(),
            data,
            length,
        }
    }

    /// Residues from `start` through `end`, both 1-based and inclusive.
    ///
    /// # Panics
    /// Panics if the range falls outside the sequence.
    pub fn slice(&self, start: Position, end: Position) -> &[u8] {
        &self.data[(start - 1) as usize..end as usize]
    }

    /// Residues from `start` (1-based) through the end of the sequence.
    pub fn suffix(&self, start: Position) -> &[u8] {
        &self.data[(start - 1) as usize..]
    }
}

/// Location of one sequence inside a [`SequenceIndex`](crate::index::SequenceIndex).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexKey {
    pub group: usize,
    pub seq: usize,
}

impl IndexKey {
    pub const fn new(group: usize, seq: usize) -> Self {
        Self { group, seq }
    }
}

impl fmt::Display for IndexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.seq)
    }
}

/// One output segment per element, left to right.
pub type Combination = [IndexKey];

/// A spliced output record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recombinant {
    pub id: String,
    pub data: Vec<u8>,
}

impl Recombinant {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
