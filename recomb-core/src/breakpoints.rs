//! Breakpoint parsing and validation
//!
//! A breakpoint is a 1-based position after which a cut happens. Tokens come
//! straight from the command line and may be single integers or comma-joined
//! lists (`-b 100 -b 200,300`).

use std::collections::BTreeSet;
use std::num::IntErrorKind;

use crate::error::{RecombError, RecombResult};
use crate::index::SequenceIndex;
use crate::types::Position;

/// Parse raw tokens into positions. Order and duplicates are preserved.
pub fn parse_breakpoint_tokens<S: AsRef<str>>(tokens: &[S]) -> RecombResult<Vec<Position>> {
    let mut positions = Vec::new();
    for token in tokens {
        for item in token.as_ref().split(',') {
            positions.push(parse_position(item)?);
        }
    }
    Ok(positions)
}

fn parse_position(item: &str) -> RecombResult<Position> {
    let trimmed = item.trim();
    let invalid = || RecombError::InvalidBreakpoint {
        token: item.to_string(),
    };

    // Digits only: rejects signs, fractions and exponents before parsing.
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    // Too large to represent is still a position; the range check rejects it.
    match trimmed.parse::<Position>() {
        Ok(0) => Err(invalid()),
        Ok(position) => Ok(position),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(Position::MAX),
        Err(_) => Err(invalid()),
    }
}

/// Sorted, deduplicated breakpoints validated against a [`SequenceIndex`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BreakpointSet {
    positions: Vec<Position>,
}

impl BreakpointSet {
    /// Parse tokens and validate the result against `index`.
    pub fn parse<S: AsRef<str>>(tokens: &[S], index: &SequenceIndex) -> RecombResult<Self> {
        let positions = parse_breakpoint_tokens(tokens)?;
        Self::new(positions, index)
    }

    pub fn new(positions: impl IntoIterator<Item = Position>, index: &SequenceIndex) -> RecombResult<Self> {
        let unique: BTreeSet<Position> = positions.into_iter().collect();

        if let Some(&zero) = unique.iter().find(|&&p| p == 0) {
            return Err(RecombError::InvalidBreakpoint {
                token: zero.to_string(),
            });
        }

        let max = index.max_breakpoints();
        if unique.len() > max {
            return Err(RecombError::TooManyBreakpoints {
                count: unique.len(),
                max,
            });
        }

        let min_length = index.min_length();
        if let Some(&position) = unique.iter().next_back().filter(|&&p| p >= min_length) {
            return Err(RecombError::BreakpointOutOfRange { position, min_length });
        }

        let positions: Vec<Position> = unique.into_iter().collect();
        log::debug!("Validated {} breakpoint(s): {:?}", positions.len(), positions);
        Ok(Self { positions })
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of segments in every recombinant.
    pub fn segments(&self) -> usize {
        self.positions.len() + 1
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.positions.iter()
    }
}

impl<'a> IntoIterator for &'a BreakpointSet {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
