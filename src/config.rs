//! Runtime configuration for a single invocation.
//!
//! There are no configuration files. Everything is supplied on the command
//! line and collected into a [`RunConfig`] before any work happens, so the
//! scaffold builders never see clap types.

use std::path::PathBuf;

use crate::cli::{Cli, Mode};

/// Where the JSON document goes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputTarget {
    #[default]
    Stdout,
    File(PathBuf),
}

/// JSON layout of the emitted document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// Two-space indented (default)
    #[default]
    Pretty,
    /// Single line
    Compact,
}

/// Logging settings derived from `-v` and `--quiet`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogConfig {
    pub verbosity: u8,
    pub quiet: bool,
}

impl LogConfig {
    /// Default filter directive for the tracing subscriber.
    ///
    /// `RUST_LOG` takes precedence when it is set.
    pub fn filter_directive(&self) -> &'static str {
        if self.quiet {
            return "off";
        }
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Everything one invocation needs
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub mode: Mode,
    pub args: Vec<String>,
    pub output: OutputTarget,
    pub style: JsonStyle,
    pub log: LogConfig,
}

impl RunConfig {
    /// Configuration for library callers: stdout, pretty JSON, default logging.
    pub fn new(mode: Mode, args: Vec<String>) -> Self {
        Self {
            mode,
            args,
            output: OutputTarget::default(),
            style: JsonStyle::default(),
            log: LogConfig::default(),
        }
    }
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        Self {
            mode: cli.mode,
            args: cli.args,
            output: cli.output.map(OutputTarget::File).unwrap_or_default(),
            style: if cli.compact {
                JsonStyle::Compact
            } else {
                JsonStyle::Pretty
            },
            log: LogConfig {
                verbosity: cli.verbosity,
                quiet: cli.quiet,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_filter_directive_by_verbosity() {
        let directive = |verbosity| {
            LogConfig {
                verbosity,
                quiet: false,
            }
            .filter_directive()
        };
        assert_eq!(directive(0), "warn");
        assert_eq!(directive(1), "info");
        assert_eq!(directive(2), "debug");
        assert_eq!(directive(7), "trace");
    }

    #[test]
    fn test_quiet_overrides_verbosity() {
        let log = LogConfig {
            verbosity: 3,
            quiet: true,
        };
        assert_eq!(log.filter_directive(), "off");
    }

    #[test]
    fn test_run_config_from_cli_defaults() {
        let cli = Cli::try_parse_from(["verify-consistency", "--mode", "score", "0.5"]).unwrap();
        let config = RunConfig::from(cli);
        assert_eq!(config.mode, Mode::Score);
        assert_eq!(config.args, vec!["0.5".to_string()]);
        assert_eq!(config.output, OutputTarget::Stdout);
        assert_eq!(config.style, JsonStyle::Pretty);
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn test_run_config_from_cli_with_options() {
        let cli = Cli::try_parse_from([
            "verify-consistency",
            "--mode",
            "matrix",
            "--compact",
            "-vv",
            "--output",
            "out/matrix.json",
            "A",
            "B",
        ])
        .unwrap();
        let config = RunConfig::from(cli);
        assert_eq!(config.mode, Mode::Matrix);
        assert_eq!(config.args, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(
            config.output,
            OutputTarget::File(PathBuf::from("out/matrix.json"))
        );
        assert_eq!(config.style, JsonStyle::Compact);
        assert_eq!(config.log.verbosity, 2);
    }
}
