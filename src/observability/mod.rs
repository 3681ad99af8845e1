//! Observability for the scaffold generator.
//!
//! Only structured logging is provided: a `tracing` subscriber writing to
//! stderr, with its level taken from `-v`/`--quiet` or `RUST_LOG`.
//!
//! ```ignore
//! use deep_solver_verify::config::LogConfig;
//! use deep_solver_verify::observability::init_tracing;
//!
//! init_tracing(&LogConfig { verbosity: 1, quiet: false });
//! ```

pub mod tracing;

pub use self::tracing::{build_filter, init_tracing};
