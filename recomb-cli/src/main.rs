use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod config;
mod error;
mod commands;

use config::{CliOverrides, Config};
use error::{classify, print_error_and_exit};

#[derive(Parser)]
#[command(name = "recomb")]
#[command(about = "recomb - exhaustive naive recombinant generator")]
#[command(version)]
#[command(long_about = "
recomb cuts every input sequence at the given breakpoints and splices the
pieces back together in every valid order, writing one FASTA record per
recombinant. Adjacent pieces never come from the same sequence; with
--group-by-file, no two pieces come from the same input file.

Output records are named <id0>|@<bp0>|<id1>|@<bp1>|...|<idK>.

Examples:
  recomb -b 113 -b 242 sequences.fa > recombinants.fa
  recomb --breakpoint=100,200 --group-by-file subtypeA.fa subtypeB.fa subtypeC.fa
  cat sequences.fa | recomb -b 50 --count
")]
pub struct Cli {
    /// Input FASTA files (plain or .gz); reads stdin when none are given
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Breakpoint position, repeatable; a comma-separated list is also accepted
    #[arg(short = 'b', long = "breakpoint", value_name = "N")]
    pub breakpoints: Vec<String>,

    /// Never combine two pieces from the same input file
    #[arg(long)]
    pub group_by_file: bool,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Residues per output line, 0 for unwrapped
    #[arg(long)]
    pub line_width: Option<usize>,

    /// Print the number of recombinants instead of the sequences
    #[arg(long)]
    pub count: bool,

    /// Configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print an example configuration file and exit
    #[arg(long)]
    pub print_config: bool,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    pub quiet: bool,
}

fn setup_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    if cli.print_config {
        print!("{}", Config::example_toml()?);
        return Ok(());
    }

    let mut config = Config::load(cli.config.as_deref())?;
    config.merge_cli_args(CliOverrides {
        breakpoints: cli.breakpoints,
        group_by_file: cli.group_by_file,
        line_width: cli.line_width,
    });

    commands::generate::execute(&config, &cli.inputs, cli.output, cli.count)
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    if let Err(err) = run(cli) {
        print_error_and_exit(&classify(err));
    }
}
