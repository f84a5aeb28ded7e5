//! Error handling for the recomb CLI

use recomb_core::RecombError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for recomb CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Input/Output error: {message}")]
    Io { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid format: {message}")]
    InvalidFormat { message: String },

    #[error(transparent)]
    Recombination(#[from] RecombError),
}

impl CliError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into() }
    }

    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io { message: message.into() }
    }

    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    pub fn invalid_format<S: Into<String>>(message: S) -> Self {
        Self::InvalidFormat { message: message.into() }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        Self::config(format!("TOML parsing error: {}", err))
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Sort an `anyhow` error coming out of the run into a [`CliError`].
pub fn classify(err: anyhow::Error) -> CliError {
    if let Some(recomb) = err.downcast_ref::<RecombError>() {
        return CliError::Recombination(recomb.clone());
    }
    if err.root_cause().downcast_ref::<recomb_core::io::FastaError>().is_some() {
        return CliError::invalid_format(format!("{:#}", err));
    }
    match err.downcast::<CliError>() {
        Ok(cli) => cli,
        Err(other) => CliError::io(format!("{:#}", other)),
    }
}

/// Provide helpful error messages and suggestions
pub fn format_error_with_suggestions(error: &CliError) -> String {
    let mut message = error.to_string();

    match error {
        CliError::FileNotFound { path } => {
            message.push_str(&format!(
                "\n\nSuggestions:\n\
                 • Check that the file path is correct: {}\n\
                 • Ensure you have read permissions for the file\n\
                 • Gzipped inputs must use the .gz extension",
                path.display()
            ));
        }

        CliError::InvalidFormat { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Inputs must be FASTA: '>' header lines followed by residues\n\
                 • Ensure the file is not corrupted or truncated",
            );
        }

        CliError::Config { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Check your recomb.toml configuration file\n\
                 • Use 'recomb --print-config' to generate a sample configuration",
            );
        }

        CliError::Recombination(RecombError::TooManyBreakpoints { .. }) => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Each breakpoint needs another sequence (or, with --group-by-file, another input file)\n\
                 • Duplicate breakpoints are merged and do not count twice",
            );
        }

        CliError::Recombination(RecombError::BreakpointOutOfRange { .. }) => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Breakpoints are bounded by the shortest input sequence\n\
                 • Remove or trim unusually short sequences from the input",
            );
        }

        CliError::Recombination(RecombError::InsufficientGroups { .. }) => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Pass one FASTA file per group when using --group-by-file\n\
                 • Drop --group-by-file to recombine all sequences freely",
            );
        }

        _ => {}
    }

    message
}

/// Print error with helpful suggestions and exit
pub fn print_error_and_exit(error: &CliError) -> ! {
    eprintln!("Error: {}", format_error_with_suggestions(error));
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_error_creation() {
        let err = CliError::config("test message");
        assert!(matches!(err, CliError::Config { .. }));
        assert_eq!(err.to_string(), "Configuration error: test message");
    }

    #[test]
    fn test_error_suggestions() {
        let err = CliError::file_not_found(PathBuf::from("test.fa"));
        let formatted = format_error_with_suggestions(&err);
        assert!(formatted.contains("Suggestions:"));
        assert!(formatted.contains("Check that the file path is correct"));
    }

    #[test]
    fn test_recombination_error_is_transparent() {
        let err: CliError = RecombError::EmptyInput.into();
        assert_eq!(err.to_string(), "No input sequences were found");

        let err: CliError = RecombError::TooManyBreakpoints { count: 3, max: 2 }.into();
        assert!(format_error_with_suggestions(&err).contains("Duplicate breakpoints"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let cli_err: CliError = io_err.into();
        assert!(matches!(cli_err, CliError::Io { .. }));
    }

    #[test]
    fn test_classify_recomb_error() {
        let err = anyhow::Error::new(RecombError::InsufficientGroups { sources: 1 });
        assert!(matches!(
            classify(err),
            CliError::Recombination(RecombError::InsufficientGroups { sources: 1 })
        ));
    }

    #[test]
    fn test_classify_missing_file() {
        let err = std::fs::read("/nonexistent/recomb/input.fa")
            .context("Failed to read sequences from /nonexistent/recomb/input.fa")
            .unwrap_err();
        let classified = classify(err);
        assert!(matches!(classified, CliError::Io { .. }));
        assert!(classified.to_string().contains("/nonexistent/recomb/input.fa"));
    }
}
