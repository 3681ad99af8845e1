//! Pure dispatch from a mode selector to a scaffold document.

use crate::cli::Mode;
use crate::config::RunConfig;
use crate::errors::Result;
use crate::scaffold::{
    aggregate_confidence, claims_from_args, consistency_matrix, detect_contradiction, parse_scores,
    Scaffold,
};

/// A validated request, one variant per mode.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Matrix { hypotheses: Vec<String> },
    Score { scores: Vec<f64> },
    Contradiction { claim_a: String, claim_b: String },
}

impl Operation {
    /// Pure: interpret positional arguments for a mode.
    ///
    /// Score arguments are parsed here; emptiness is left to the builders,
    /// which own that check.
    pub fn from_args(mode: Mode, args: &[String]) -> Result<Self> {
        match mode {
            Mode::Matrix => Ok(Self::Matrix {
                hypotheses: args.to_vec(),
            }),
            Mode::Score => Ok(Self::Score {
                scores: parse_scores(args)?,
            }),
            Mode::Contradiction => {
                let (claim_a, claim_b) = claims_from_args(args)?;
                Ok(Self::Contradiction { claim_a, claim_b })
            }
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Self::Matrix { .. } => Mode::Matrix,
            Self::Score { .. } => Mode::Score,
            Self::Contradiction { .. } => Mode::Contradiction,
        }
    }

    /// Pure: build the document for this operation.
    pub fn execute(self) -> Result<Scaffold> {
        match self {
            Self::Matrix { hypotheses } => consistency_matrix(hypotheses).map(Scaffold::from),
            Self::Score { scores } => aggregate_confidence(scores).map(Scaffold::from),
            Self::Contradiction { claim_a, claim_b } => {
                Ok(Scaffold::from(detect_contradiction(claim_a, claim_b)))
            }
        }
    }
}

/// Pure: resolve and execute a run configuration.
pub fn run(config: &RunConfig) -> Result<Scaffold> {
    let operation = Operation::from_args(config.mode, &config.args)?;
    tracing::info!(mode = ?operation.mode(), args = config.args.len(), "Generating scaffold");
    operation.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ScaffoldError;
    use pretty_assertions::assert_eq;

    fn config(mode: Mode, args: &[&str]) -> RunConfig {
        RunConfig::new(mode, args.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_empty_args_rejected_in_every_mode() {
        assert_eq!(
            run(&config(Mode::Matrix, &[])),
            Err(ScaffoldError::EmptyHypotheses)
        );
        assert_eq!(run(&config(Mode::Score, &[])), Err(ScaffoldError::EmptyScores));
        assert_eq!(
            run(&config(Mode::Contradiction, &[])),
            Err(ScaffoldError::MissingClaims { given: 0 })
        );
    }

    #[test]
    fn test_non_numeric_score_rejected() {
        assert_eq!(
            run(&config(Mode::Score, &["0.5", "abc"])),
            Err(ScaffoldError::non_numeric("abc"))
        );
    }

    #[test]
    fn test_from_args_parses_scores() {
        let args = vec!["0.8".to_string(), "-1".to_string()];
        let operation = Operation::from_args(Mode::Score, &args).unwrap();
        assert_eq!(
            operation,
            Operation::Score {
                scores: vec![0.8, -1.0]
            }
        );
        assert_eq!(operation.mode(), Mode::Score);
    }

    #[test]
    fn test_run_dispatches_by_mode() {
        assert!(matches!(
            run(&config(Mode::Matrix, &["A", "B"])),
            Ok(Scaffold::Matrix(_))
        ));
        assert!(matches!(
            run(&config(Mode::Score, &["0.5"])),
            Ok(Scaffold::Aggregation(_))
        ));
        assert!(matches!(
            run(&config(Mode::Contradiction, &["A", "B"])),
            Ok(Scaffold::Contradiction(_))
        ));
    }

    #[test]
    fn test_untagged_scaffold_serializes_inner_document() {
        let document = run(&config(Mode::Contradiction, &["A", "B"])).unwrap();
        let value = serde_json::to_value(&document).unwrap();
        assert_eq!(value["claim_a"], "A");
        assert_eq!(value["claim_b"], "B");
        assert!(value.get("Contradiction").is_none());
    }
}
