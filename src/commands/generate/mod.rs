//! Scaffold generation command.
//!
//! # Module Structure
//!
//! - `operation` - Pure dispatch from mode and arguments to a document
//! - `io` - I/O operations (writing the document, printing usage hints)
//!
//! # Architecture
//!
//! "Pure Core, Imperative Shell". [`handle_generate`] is a thin shell that:
//! 1. Resolves the mode and arguments into an [`Operation`] (pure)
//! 2. Builds the document (pure)
//! 3. Writes the document, or the usage hint on rejection (I/O)
//!
//! # Examples
//!
//! ```no_run
//! use deep_solver_verify::cli::Mode;
//! use deep_solver_verify::commands::generate::handle_generate;
//! use deep_solver_verify::config::RunConfig;
//!
//! let config = RunConfig::new(Mode::Score, vec!["0.8".into(), "0.6".into()]);
//! let status = handle_generate(&config).unwrap();
//! assert!(status.is_success());
//! ```

mod io;
mod operation;

pub use operation::{run, Operation};

use anyhow::Result;

use crate::config::RunConfig;
use crate::errors::ScaffoldError;

/// How an invocation ended. Output I/O failures are reported separately as errors.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateStatus {
    /// The document was written
    Written,
    /// Input was rejected and the usage hint printed
    Rejected(ScaffoldError),
}

impl GenerateStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Written)
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Written => 0,
            Self::Rejected(err) => err.exit_code(),
        }
    }
}

// =============================================================================
// Public API
// =============================================================================

/// I/O Shell: generate the requested scaffold and write it out.
pub fn handle_generate(config: &RunConfig) -> Result<GenerateStatus> {
    match run(config) {
        Ok(document) => {
            io::write_document(&document, config)?;
            Ok(GenerateStatus::Written)
        }
        Err(err) => {
            tracing::info!(mode = ?config.mode, kind = ?err.kind(), error = %err, "Rejected input");
            io::print_usage_hint(&err)?;
            Ok(GenerateStatus::Rejected(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_exit_codes() {
        assert_eq!(GenerateStatus::Written.exit_code(), 0);
        assert!(GenerateStatus::Written.is_success());

        let rejected = GenerateStatus::Rejected(ScaffoldError::EmptyScores);
        assert_eq!(rejected.exit_code(), 1);
        assert!(!rejected.is_success());
    }
}
