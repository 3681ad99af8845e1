//! CLI command implementations.
//!
//! The tool has a single command: generate one scaffold document for the
//! mode selected with `--mode`.

pub mod generate;

pub use generate::{handle_generate, run, GenerateStatus, Operation};
