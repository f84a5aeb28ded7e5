//! FASTA sequence input and recombinant output
//!
//! Parsing goes through the needletail library. Inputs are read fully into
//! memory first: every source has to be loaded and validated before a single
//! recombinant is written anyway. Gzipped files are recognised by their
//! `.gz` extension.
//!
//! Whitespace before the first record and inside sequence lines is dropped.
//! FASTQ input is rejected.

use std::fmt;
use std::fs::File;
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use needletail::parse_fastx_reader;
use needletail::parser::Format;
use thiserror::Error;

use crate::types::{Recombinant, Sequence};

#[derive(Debug, Error)]
pub enum FastaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Where one group of input sequences comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    Path(PathBuf),
}

impl InputSource {
    /// `-` names standard input, anything else is a file path.
    pub fn from_arg(arg: impl Into<PathBuf>) -> Self {
        let path = arg.into();
        if path.as_os_str() == "-" {
            InputSource::Stdin
        } else {
            InputSource::Path(path)
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// FASTA parser for reading sequence data
pub struct FastaParser;

impl FastaParser {
    pub fn parse_source(source: &InputSource) -> Result<Vec<Sequence>> {
        let sequences = match source {
            InputSource::Stdin => Self::parse_stdin(),
            InputSource::Path(path) => Self::parse_file(path),
        }
        .with_context(|| format!("Failed to read sequences from {}", source))?;

        log::info!("Read {} sequence(s) from {}", sequences.len(), source);
        Ok(sequences)
    }

    /// Parse a FASTA file, gunzipping it first if the name ends in `.gz`.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<Sequence>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(FastaError::Io)?;

        if path.to_string_lossy().ends_with(".gz") {
            Self::parse_reader(GzDecoder::new(file))
        } else {
            Self::parse_reader(file)
        }
    }

    pub fn parse_stdin() -> Result<Vec<Sequence>> {
        Self::parse_reader(std::io::stdin().lock())
    }

    /// Parse FASTA data from any readable source. An input without records
    /// yields an empty collection rather than an error.
    pub fn parse_reader<R: Read>(mut reader: R) -> Result<Vec<Sequence>> {
        let mut buffer = Vec::new();
        reader.read_to_end(&mut buffer).map_err(FastaError::Io)?;

        let start = match buffer.iter().position(|b| !b.is_ascii_whitespace()) {
            Some(start) => start,
            None => return Ok(Vec::new()),
        };
        buffer.drain(..start);

        let mut sequences = Vec::new();
        let mut fastx_reader = parse_fastx_reader(Cursor::new(buffer))
            .map_err(|e| FastaError::Parse(e.to_string()))?;

        while let Some(record) = fastx_reader.next() {
            let record = record.map_err(|e| FastaError::Parse(e.to_string()))?;
            if record.format() == Format::Fastq {
                return Err(FastaError::Parse(format!(
                    "expected FASTA but found a FASTQ record ({})",
                    sequence_name(record.id())
                ))
                .into());
            }
            let residues: Vec<u8> = record
                .seq()
                .iter()
                .copied()
                .filter(|b| !b.is_ascii_whitespace())
                .collect();
            sequences.push(Sequence::new(sequence_name(record.id()), residues));
        }

        Ok(sequences)
    }
}

/// Sequence id is the header up to the first whitespace.
fn sequence_name(header: &[u8]) -> String {
    let header = String::from_utf8_lossy(header);
    header
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Writes recombinants as FASTA records.
pub struct FastaWriter<W: Write> {
    inner: W,
    line_width: usize,
    records: u64,
}

impl<W: Write> FastaWriter<W> {
    /// `line_width` of 0 writes each sequence on a single line.
    pub fn new(inner: W, line_width: usize) -> Self {
        Self {
            inner,
            line_width,
            records: 0,
        }
    }

    pub fn write_record(&mut self, id: &str, data: &[u8]) -> Result<(), FastaError> {
        writeln!(self.inner, ">{}", id)?;
        if self.line_width == 0 {
            self.inner.write_all(data)?;
            self.inner.write_all(b"\n")?;
        } else {
            for chunk in data.chunks(self.line_width) {
                self.inner.write_all(chunk)?;
                self.inner.write_all(b"\n")?;
            }
        }
        self.records += 1;
        Ok(())
    }

    pub fn write_recombinant(&mut self, recombinant: &Recombinant) -> Result<(), FastaError> {
        self.write_record(&recombinant.id, &recombinant.data)
    }

    pub fn records_written(&self) -> u64 {
        self.records
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> Result<W, FastaError> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
