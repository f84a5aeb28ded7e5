//! Enumerate → filter → assemble, one recombinant at a time.

use std::fmt;

use crate::assemble::Assembler;
use crate::breakpoints::BreakpointSet;
use crate::enumerate::Combinations;
use crate::error::RecombResult;
use crate::filter::{CombinationFilter, Verdict};
use crate::index::{Grouping, SequenceIndex};
use crate::types::{IndexKey, Recombinant, Sequence};

/// Counters collected while streaming combinations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecombinationStats {
    pub candidates: u64,
    pub accepted: u64,
    pub self_adjacent: u64,
    pub intra_group: u64,
}

impl RecombinationStats {
    fn record(&mut self, verdict: Verdict) {
        self.candidates += 1;
        match verdict {
            Verdict::Accept => self.accepted += 1,
            Verdict::SelfAdjacent => self.self_adjacent += 1,
            Verdict::IntraGroup => self.intra_group += 1,
        }
    }

    pub fn rejected(&self) -> u64 {
        self.self_adjacent + self.intra_group
    }
}

impl fmt::Display for RecombinationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} candidates, {} accepted, {} rejected ({} self-adjacent, {} intra-group)",
            self.candidates,
            self.accepted,
            self.rejected(),
            self.self_adjacent,
            self.intra_group
        )
    }
}

/// Validated inputs for one run.
#[derive(Debug, Clone)]
pub struct Recombiner {
    index: SequenceIndex,
    breakpoints: BreakpointSet,
    keys: Vec<IndexKey>,
}

impl Recombiner {
    pub fn new(index: SequenceIndex, breakpoints: BreakpointSet) -> Self {
        let keys = index.keys().collect();
        Self {
            index,
            breakpoints,
            keys,
        }
    }

    /// Validate everything up front: the index first, then the breakpoints
    /// against it. Nothing is enumerated until this has succeeded.
    pub fn from_sources<S: AsRef<str>>(
        sources: Vec<Vec<Sequence>>,
        grouping: Grouping,
        breakpoint_tokens: &[S],
    ) -> RecombResult<Self> {
        let index = SequenceIndex::build(sources, grouping)?;
        let breakpoints = BreakpointSet::parse(breakpoint_tokens, &index)?;
        log::info!(
            "Loaded {} sequence(s) in {} group(s); breakpoints {:?}",
            index.len(),
            index.group_count(),
            breakpoints.positions()
        );
        Ok(Self::new(index, breakpoints))
    }

    pub fn index(&self) -> &SequenceIndex {
        &self.index
    }

    pub fn breakpoints(&self) -> &BreakpointSet {
        &self.breakpoints
    }

    pub fn filter(&self) -> CombinationFilter {
        CombinationFilter::for_index(&self.index)
    }

    pub fn combinations(&self) -> Combinations<'_> {
        Combinations::new(&self.keys, self.breakpoints.segments())
    }

    /// Size of the raw candidate space, `None` if it overflows `u128`.
    pub fn candidate_count(&self) -> Option<u128> {
        self.combinations().total()
    }

    pub fn recombinants(&self) -> Recombinants<'_> {
        match self.candidate_count() {
            Some(total) => log::debug!("Enumerating {} candidate combinations", total),
            None => log::warn!("Candidate space exceeds 2^128 combinations"),
        }
        Recombinants {
            combinations: self.combinations(),
            filter: self.filter(),
            assembler: Assembler::new(&self.index, &self.breakpoints),
            stats: RecombinationStats::default(),
        }
    }

    /// Run the filter over every candidate without assembling sequences.
    pub fn count(&self) -> RecombinationStats {
        let filter = self.filter();
        self.combinations()
            .fold(RecombinationStats::default(), |mut stats, combination| {
                stats.record(filter.check(&combination));
                stats
            })
    }
}

/// Streaming iterator over accepted recombinants.
pub struct Recombinants<'a> {
    combinations: Combinations<'a>,
    filter: CombinationFilter,
    assembler: Assembler<'a>,
    stats: RecombinationStats,
}

impl Recombinants<'_> {
    /// Counters for everything pulled so far.
    pub fn stats(&self) -> RecombinationStats {
        self.stats
    }
}

impl Iterator for Recombinants<'_> {
    type Item = Recombinant;

    fn next(&mut self) -> Option<Self::Item> {
        for combination in self.combinations.by_ref() {
            let verdict = self.filter.check(&combination);
            self.stats.record(verdict);
            if verdict.is_accept() {
                return Some(self.assembler.assemble(&combination));
            }
            log::trace!("Rejected {:?}: {:?}", combination, verdict);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.combinations.size_hint().1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecombError;

    fn source(specs: &[(&str, &str)]) -> Vec<Sequence> {
        specs
            .iter()
            .map(|(id, bases)| Sequence::new(*id, bases.as_bytes().to_vec()))
            .collect()
    }

    #[test]
    fn test_stream_and_stats() {
        let recombiner = Recombiner::from_sources(
            vec![source(&[("A", "AAAA"), ("B", "BBBB")])],
            Grouping::Flat,
            &["2"],
        )
        .unwrap();

        let mut stream = recombiner.recombinants();
        let ids: Vec<String> = stream.by_ref().map(|r| r.id).collect();
        assert_eq!(ids, vec!["A|@2|B", "B|@2|A"]);

        let stats = stream.stats();
        assert_eq!(stats.candidates, 4);
        assert_eq!(stats.accepted, 2);
        assert_eq!(stats.self_adjacent, 2);
        assert_eq!(stats.intra_group, 0);
        assert_eq!(recombiner.count(), stats);
    }

    #[test]
    fn test_validation_order_index_before_breakpoints() {
        let err = Recombiner::from_sources(Vec::new(), Grouping::Flat, &["x"]).unwrap_err();
        assert_eq!(err, RecombError::EmptyInput);
    }

    #[test]
    fn test_zero_survivors_is_not_an_error() {
        // Two groups cannot fill three segments without repeating a group.
        let recombiner = Recombiner::from_sources(
            vec![source(&[("a", "AAAA")]), source(&[("b", "BBBB")])],
            Grouping::BySource,
            &["1,2"],
        )
        .unwrap();
        assert_eq!(recombiner.recombinants().count(), 0);
        let stats = recombiner.count();
        assert_eq!(stats.candidates, 8);
        assert_eq!(stats.accepted, 0);
    }

    #[test]
    fn test_candidate_count() {
        let recombiner = Recombiner::from_sources(
            vec![source(&[("a", "AAAA"), ("b", "BBBB"), ("c", "CCCC")])],
            Grouping::Flat,
            &["1", "3"],
        )
        .unwrap();
        assert_eq!(recombiner.candidate_count(), Some(27));
        assert_eq!(recombiner.count().accepted, 12);
    }

    #[test]
    fn test_stats_display() {
        let stats = RecombinationStats {
            candidates: 9,
            accepted: 4,
            self_adjacent: 3,
            intra_group: 2,
        };
        assert_eq!(
            stats.to_string(),
            "9 candidates, 4 accepted, 5 rejected (3 self-adjacent, 2 intra-group)"
        );
    }
}
