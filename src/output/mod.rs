//! Output rendering for scaffold documents.

pub mod format;
pub mod json;

pub use format::round_stat;
pub use json::{format_json, output_json};
