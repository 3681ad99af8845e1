//! Error types for scaffold generation.
//!
//! Every builder validates its own input and returns a [`ScaffoldError`]
//! instead of an error-shaped document. The binary translates each variant
//! into a one-line usage hint and exit status 1, so all three modes fail the
//! same way.

use thiserror::Error;

use crate::scaffold::content::{
    USAGE_CONTRADICTION, USAGE_MATRIX, USAGE_NON_NUMERIC, USAGE_SCORE,
};

/// Input validation failures for the three scaffold operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaffoldError {
    /// Matrix mode was invoked without any hypothesis labels
    #[error("no hypotheses given")]
    EmptyHypotheses,

    /// Score mode was invoked without any scores
    #[error("no scores given")]
    EmptyScores,

    /// A score argument could not be read as a finite number
    #[error("score is not a number: {value:?}")]
    NonNumericScore { value: String },

    /// Contradiction mode needs two claims
    #[error("contradiction analysis needs two claims, got {given}")]
    MissingClaims { given: usize },
}

/// Broad category of a [`ScaffoldError`], used for log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingArguments,
    NonNumeric,
}

impl ScaffoldError {
    /// Create a non-numeric score error for the offending argument.
    pub fn non_numeric(value: impl Into<String>) -> Self {
        Self::NonNumericScore {
            value: value.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyHypotheses | Self::EmptyScores | Self::MissingClaims { .. } => {
                ErrorKind::MissingArguments
            }
            Self::NonNumericScore { .. } => ErrorKind::NonNumeric,
        }
    }

    /// The one-line hint shown to the user on stdout before exiting.
    pub fn usage_hint(&self) -> &'static str {
        match self {
            Self::EmptyHypotheses => USAGE_MATRIX,
            Self::EmptyScores => USAGE_SCORE,
            Self::NonNumericScore { .. } => USAGE_NON_NUMERIC,
            Self::MissingClaims { .. } => USAGE_CONTRADICTION,
        }
    }

    /// Process exit status for this error. All input errors share status 1.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Result type alias using the scaffold error type
pub type Result<T> = std::result::Result<T, ScaffoldError>;
