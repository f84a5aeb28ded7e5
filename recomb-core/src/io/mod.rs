//! File format I/O for recomb
//!
//! Only FASTA is supported: sequences in, recombinants out.

pub mod fasta;

pub use fasta::{FastaError, FastaParser, FastaWriter, InputSource};

use anyhow::Result;

use crate::types::Sequence;

/// Load every source in order, one collection per source.
pub fn load_sources(sources: &[InputSource]) -> Result<Vec<Vec<Sequence>>> {
    sources.iter().map(FastaParser::parse_source).collect()
}
