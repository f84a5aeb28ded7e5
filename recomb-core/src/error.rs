//! Validation errors raised before enumeration starts.

use thiserror::Error;

use crate::types::Position;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecombError {
    #[error("Invalid breakpoint '{token}': breakpoints must be positive integers")]
    InvalidBreakpoint { token: String },

    #[error("Too many breakpoints: {count} requested but at most {max} allowed")]
    TooManyBreakpoints { count: usize, max: usize },

    #[error("Breakpoint {position} is out of range: must be less than the shortest sequence length ({min_length})")]
    BreakpointOutOfRange { position: Position, min_length: Position },

    #[error("No input sequences were found")]
    EmptyInput,

    #[error("Grouping by file requires at least 2 input sources, got {sources}")]
    InsufficientGroups { sources: usize },
}

pub type RecombResult<T> = Result<T, RecombError>;
