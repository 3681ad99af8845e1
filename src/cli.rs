use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Scaffold selected by `--mode`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Empty pairwise consistency matrix for a list of hypotheses
    Matrix,
    /// Aggregate per-agent confidence scores
    Score,
    /// Contradiction analysis template for two claims
    Contradiction,
}

#[derive(Parser, Debug)]
#[command(name = "verify-consistency")]
#[command(
    about = "Consistency scaffolds for multi-agent reasoning",
    long_about = "Generates JSON scaffolds that reasoning agents fill in or act on: \
                  an empty pairwise consistency matrix, an aggregate of per-agent \
                  confidence scores, and a contradiction analysis template."
)]
#[command(version)]
pub struct Cli {
    /// Scaffold to generate
    #[arg(long, value_enum)]
    pub mode: Mode,

    /// Mode arguments: hypothesis labels, scores, or two claims
    #[arg(allow_negative_numbers = true)]
    pub args: Vec<String>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit single-line JSON instead of pretty-printed output
    #[arg(long)]
    pub compact: bool,

    /// Increase log verbosity on stderr (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Suppress all log output
    #[arg(short, long, conflicts_with = "verbosity")]
    pub quiet: bool,
}

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_scores_are_positional() {
        let cli = Cli::try_parse_from(["verify-consistency", "--mode", "score", "-0.5", "0.2"])
            .unwrap();
        assert_eq!(cli.args, vec!["-0.5".to_string(), "0.2".to_string()]);
    }

    #[test]
    fn test_flags_after_positional_args() {
        let cli = Cli::try_parse_from(["verify-consistency", "--mode", "matrix", "A", "--compact"])
            .unwrap();
        assert_eq!(cli.args, vec!["A".to_string()]);
        assert!(cli.compact);
    }

    #[test]
    fn test_mode_is_required() {
        assert!(Cli::try_parse_from(["verify-consistency", "A"]).is_err());
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(Cli::try_parse_from(["verify-consistency", "--mode", "vote"]).is_err());
    }

    #[test]
    fn test_mode_without_args_parses() {
        let cli = Cli::try_parse_from(["verify-consistency", "--mode", "contradiction"]).unwrap();
        assert_eq!(cli.mode, Mode::Contradiction);
        assert!(cli.args.is_empty());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
