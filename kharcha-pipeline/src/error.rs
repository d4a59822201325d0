//! Failure types for expense extraction

use thiserror::Error;

/// Expected outcomes when a phrase does not describe a usable expense.
/// These are results, not faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseFailure {
    #[error("Empty text provided")]
    EmptyInput,

    #[error("No expense-related action found in the text")]
    NoActionDetected,

    #[error("Could not extract valid amount from the text")]
    NoAmountFound,
}

impl ParseFailure {
    /// Stable machine-readable tag
    pub fn code(&self) -> &'static str {
        match self {
            ParseFailure::EmptyInput => "empty_input",
            ParseFailure::NoActionDetected => "no_action_detected",
            ParseFailure::NoAmountFound => "no_amount_found",
        }
    }
}

/// Lower-level faults, kept apart from [`ParseFailure`]
#[derive(Debug, Error)]
pub enum KharchaError {
    #[error("invalid amount pattern #{index}: {source}")]
    Pattern {
        index: usize,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, KharchaError>;
