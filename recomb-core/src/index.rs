//! Sequence index
//!
//! Holds every loaded sequence addressed by an [`IndexKey`]. Whether input
//! sources are flattened into one group or kept as separate groups is decided
//! here, once, through [`Grouping`]; downstream stages only ask the index.

use crate::error::{RecombError, RecombResult};
use crate::types::{IndexKey, Position, Sequence};

/// How input sources map onto groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Grouping {
    /// All sources concatenated into a single group.
    #[default]
    Flat,
    /// One group per input source; pieces of a recombinant must come from
    /// distinct groups.
    BySource,
}

impl From<bool> for Grouping {
    fn from(group_by_file: bool) -> Self {
        if group_by_file {
            Grouping::BySource
        } else {
            Grouping::Flat
        }
    }
}

#[derive(Debug, Clone)]
pub struct SequenceIndex {
    groups: Vec<Vec<Sequence>>,
    grouping: Grouping,
    total: usize,
    min_length: Position,
}

impl SequenceIndex {
    /// Build an index from one collection per input source.
    pub fn build(sources: Vec<Vec<Sequence>>, grouping: Grouping) -> RecombResult<Self> {
        let source_count = sources.len();
        let total: usize = sources.iter().map(Vec::len).sum();

        if total == 0 {
            return Err(RecombError::EmptyInput);
        }
        if grouping == Grouping::BySource && source_count < 2 {
            return Err(RecombError::InsufficientGroups {
                sources: source_count,
            });
        }

        let min_length = sources
            .iter()
            .flatten()
            .map(|s| s.length)
            .min()
            .unwrap_or(0);

        let groups = match grouping {
            Grouping::Flat => vec![sources.into_iter().flatten().collect()],
            Grouping::BySource => sources,
        };

        log::debug!(
            "Indexed {} sequences in {} group(s) from {} source(s), shortest length {}",
            total,
            groups.len(),
            source_count,
            min_length
        );

        Ok(Self {
            groups,
            grouping,
            total,
            min_length,
        })
    }

    /// Total number of sequences across all groups.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn min_length(&self) -> Position {
        self.min_length
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn grouping(&self) -> Grouping {
        self.grouping
    }

    /// True when the intra-group exclusivity rule applies.
    pub fn is_grouped(&self) -> bool {
        self.groups.len() > 1
    }

    /// Upper bound on the number of breakpoints this index can support.
    pub fn max_breakpoints(&self) -> usize {
        match self.grouping {
            Grouping::Flat => self.total,
            Grouping::BySource => self.groups.len(),
        }
    }

    pub fn groups(&self) -> &[Vec<Sequence>] {
        &self.groups
    }

    /// Every key, group ascending then position ascending.
    pub fn keys(&self) -> impl Iterator<Item = IndexKey> + '_ {
        self.groups.iter().enumerate().flat_map(|(group, seqs)| {
            (0..seqs.len()).map(move |seq| IndexKey::new(group, seq))
        })
    }

    pub fn get(&self, key: IndexKey) -> Option<&Sequence> {
        self.groups.get(key.group).and_then(|g| g.get(key.seq))
    }

    /// Resolve a key issued by this index.
    ///
    /// # Panics
    /// Panics if the key does not belong to this index; that can only happen
    /// when keys from a different index are mixed in.
    pub fn resolve(&self, key: IndexKey) -> &Sequence {
        match self.get(key) {
            Some(seq) => seq,
            None => panic!("index key {} does not resolve in this sequence index", key),
        }
    }
}
