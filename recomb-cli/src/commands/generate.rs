//! Generate command implementation - load sequences, validate, stream recombinants

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use recomb_core::io::load_sources;
use recomb_core::{FastaWriter, Grouping, InputSource, Recombiner};

use crate::config::Config;
use crate::error::CliError;

/// Map positional arguments onto input sources; no arguments means stdin.
pub fn resolve_inputs(inputs: &[PathBuf]) -> Result<Vec<InputSource>> {
    if inputs.is_empty() {
        log::debug!("No input files given, reading from stdin");
        return Ok(vec![InputSource::Stdin]);
    }

    inputs
        .iter()
        .map(|path| match InputSource::from_arg(path.clone()) {
            InputSource::Path(path) if !path.exists() => {
                Err(CliError::file_not_found(path).into())
            }
            source => Ok(source),
        })
        .collect()
}

pub fn execute(
    config: &Config,
    inputs: &[PathBuf],
    output: Option<PathBuf>,
    count_only: bool,
) -> Result<()> {
    let sources = resolve_inputs(inputs)?;
    let grouping = Grouping::from(config.general.group_by_file);
    log::info!("Reading {} input source(s), grouping {:?}", sources.len(), grouping);

    let loaded = load_sources(&sources)?;
    let recombiner = Recombiner::from_sources(loaded, grouping, &config.general.breakpoints)?;

    match recombiner.candidate_count() {
        Some(total) => log::info!("Candidate combinations: {}", total),
        None => log::warn!("Candidate combinations exceed 2^128; enumeration will not finish"),
    }

    // Everything is validated; only now is the output sink opened.
    let mut sink = open_output(output.as_ref())?;

    if count_only {
        let stats = recombiner.count();
        writeln!(sink, "{}", stats.accepted).context("Failed to write count")?;
        sink.flush().context("Failed to flush output")?;
        log::info!("{}", stats);
        return Ok(());
    }

    let mut writer = FastaWriter::new(sink, config.output.line_width);
    let mut stream = recombiner.recombinants();
    for recombinant in stream.by_ref() {
        writer
            .write_recombinant(&recombinant)
            .context("Failed to write recombinant")?;
    }
    let written = writer.records_written();
    writer.finish().context("Failed to flush output")?;

    let stats = stream.stats();
    log::info!("Wrote {} recombinant(s): {}", written, stats);
    if written == 0 {
        log::warn!("No combination passed the filters; output is empty");
    }
    Ok(())
}

fn open_output(output: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            log::info!("Writing to {}", path.display());
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}
