//! Numeric and structural scaffolds for multi-agent reasoning.
//!
//! Reasoning agents call this tool to get JSON documents they then fill in or
//! act on. No semantic judgment happens here.
//!
//! ```
//! use deep_solver_verify::scaffold::{aggregate_confidence, Interpretation};
//!
//! let result = aggregate_confidence(vec![0.8, 0.6, 0.9, 0.3]).unwrap();
//! assert_eq!(result.agreement_level, 0.542);
//! assert_eq!(result.interpretation, Interpretation::PartialAgreement);
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod observability;
pub mod output;
pub mod scaffold;

// Re-export commonly used types
pub use crate::cli::Mode;
pub use crate::commands::{handle_generate, run, GenerateStatus, Operation};
pub use crate::config::{JsonStyle, LogConfig, OutputTarget, RunConfig};
pub use crate::errors::{Result, ScaffoldError};
pub use crate::scaffold::{
    aggregate_confidence, consistency_matrix, detect_contradiction, AggregationResult,
    ConsistencyMatrix, ContradictionTemplate, Interpretation, Scaffold,
};
