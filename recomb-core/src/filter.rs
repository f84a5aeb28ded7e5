//! Structural filtering of candidate combinations
//!
//! Two rules decide whether a tuple denotes a real recombinant:
//!
//! * **self-adjacency**: two consecutive segments from the same sequence make
//!   the breakpoint between them a no-op;
//! * **intra-group**: with more than one group, no group may contribute two
//!   segments to the same recombinant, adjacent or not.
//!
//! Rejection is silent. It is reported through [`Verdict`] so callers can
//! keep statistics, never as an error.

use crate::index::SequenceIndex;
use crate::types::{Combination, IndexKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    SelfAdjacent,
    IntraGroup,
}

impl Verdict {
    pub fn is_accept(self) -> bool {
        self == Verdict::Accept
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombinationFilter {
    exclusive_groups: bool,
}

impl CombinationFilter {
    pub fn for_index(index: &SequenceIndex) -> Self {
        Self {
            exclusive_groups: index.is_grouped(),
        }
    }

    /// Filter that only applies the self-adjacency rule.
    pub fn ungrouped() -> Self {
        Self {
            exclusive_groups: false,
        }
    }

    pub fn exclusive_groups(&self) -> bool {
        self.exclusive_groups
    }

    /// Self-adjacency is checked first, so a tuple breaking both rules is
    /// reported as [`Verdict::SelfAdjacent`].
    pub fn check(&self, combination: &Combination) -> Verdict {
        if has_self_adjacency(combination) {
            Verdict::SelfAdjacent
        } else if self.exclusive_groups && has_repeated_group(combination) {
            Verdict::IntraGroup
        } else {
            Verdict::Accept
        }
    }

    pub fn accepts(&self, combination: &Combination) -> bool {
        self.check(combination).is_accept()
    }
}

fn has_self_adjacency(combination: &[IndexKey]) -> bool {
    combination.windows(2).any(|pair| pair[0] == pair[1])
}

fn has_repeated_group(combination: &[IndexKey]) -> bool {
    combination
        .iter()
        .enumerate()
        .any(|(i, a)| combination[i + 1..].iter().any(|b| a.group == b.group))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Grouping;
    use crate::types::Sequence;

    fn k(group: usize, seq: usize) -> IndexKey {
        IndexKey::new(group, seq)
    }

    fn grouped_filter() -> CombinationFilter {
        let source = |ids: &[&str]| -> Vec<Sequence> {
            ids.iter().map(|id| Sequence::new(*id, b"ACGT".to_vec())).collect()
        };
        let index = SequenceIndex::build(
            vec![source(&["a"]), source(&["b", "c"]), source(&["d"])],
            Grouping::BySource,
        )
        .unwrap();
        CombinationFilter::for_index(&index)
    }

    #[test]
    fn test_self_adjacent_rejected() {
        let filter = CombinationFilter::ungrouped();
        assert_eq!(filter.check(&[k(0, 0), k(0, 0)]), Verdict::SelfAdjacent);
        assert_eq!(filter.check(&[k(0, 1), k(0, 2), k(0, 2)]), Verdict::SelfAdjacent);
    }

    #[test]
    fn test_non_consecutive_repeat_allowed_without_groups() {
        let filter = CombinationFilter::ungrouped();
        assert_eq!(filter.check(&[k(0, 0), k(0, 1), k(0, 0)]), Verdict::Accept);
        assert!(filter.accepts(&[k(0, 1), k(0, 0)]));
    }

    #[test]
    fn test_single_segment_always_accepted() {
        assert!(CombinationFilter::ungrouped().accepts(&[k(0, 0)]));
        assert!(grouped_filter().accepts(&[k(1, 1)]));
    }

    #[test]
    fn test_intra_group_rejected_when_grouped() {
        let filter = grouped_filter();
        assert!(filter.exclusive_groups());
        assert_eq!(filter.check(&[k(1, 0), k(1, 1)]), Verdict::IntraGroup);
        assert_eq!(filter.check(&[k(0, 0), k(1, 0), k(0, 0)]), Verdict::IntraGroup);
        assert_eq!(filter.check(&[k(0, 0), k(1, 1), k(2, 0)]), Verdict::Accept);
    }

    #[test]
    fn test_self_adjacency_reported_first() {
        let filter = grouped_filter();
        assert_eq!(filter.check(&[k(1, 0), k(1, 0)]), Verdict::SelfAdjacent);
    }

    #[test]
    fn test_single_group_index_skips_group_rule() {
        let index = SequenceIndex::build(
            vec![vec![Sequence::new("a", b"AA".to_vec()), Sequence::new("b", b"BB".to_vec())]],
            Grouping::Flat,
        )
        .unwrap();
        let filter = CombinationFilter::for_index(&index);
        assert!(!filter.exclusive_groups());
        assert!(filter.accepts(&[k(0, 0), k(0, 1)]));
    }
}
