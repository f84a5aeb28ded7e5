//! Recomb Core Library
//!
//! Exhaustive naive recombinant generation: validate breakpoints against a
//! sequence index, enumerate every ordered choice of source sequences, drop
//! the structurally invalid ones and splice the rest.

pub mod types;
pub mod error;
pub mod io;
pub mod index;
pub mod breakpoints;
pub mod enumerate;
pub mod filter;
pub mod assemble;
pub mod pipeline;

// Re-export commonly used types and functions
pub use types::{Combination, IndexKey, Position, Recombinant, Sequence};
pub use error::{RecombError, RecombResult};
pub use index::{Grouping, SequenceIndex};
pub use breakpoints::{parse_breakpoint_tokens, BreakpointSet};
pub use enumerate::Combinations;
pub use filter::{CombinationFilter, Verdict};
pub use assemble::Assembler;
pub use pipeline::{RecombinationStats, Recombinants, Recombiner};
pub use io::{FastaParser, FastaWriter, InputSource};

/// Version information for the recomb core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
