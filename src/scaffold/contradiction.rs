//! Contradiction analysis template for a pair of claims.

use serde::Serialize;

use super::content::{
    ABSTRACTION_MISMATCH_QUESTION, LOGICAL_CONTRADICTION_QUESTION, RESOLUTION_STRATEGIES,
    SCOPE_DIFFERENCE_QUESTION,
};
use crate::errors::{Result, ScaffoldError};

/// Questions an agent answers when two claims appear to conflict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisTemplate {
    pub logical_contradiction: &'static str,
    pub scope_difference: &'static str,
    pub abstraction_mismatch: &'static str,
    pub resolution_strategies: [&'static str; 4],
}

impl AnalysisTemplate {
    pub const STANDARD: AnalysisTemplate = AnalysisTemplate {
        logical_contradiction: LOGICAL_CONTRADICTION_QUESTION,
        scope_difference: SCOPE_DIFFERENCE_QUESTION,
        abstraction_mismatch: ABSTRACTION_MISMATCH_QUESTION,
        resolution_strategies: RESOLUTION_STRATEGIES,
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContradictionTemplate {
    pub claim_a: String,
    pub claim_b: String,
    pub analysis_template: AnalysisTemplate,
}

/// Pure: wrap two claims in the standard analysis template.
pub fn detect_contradiction(
    claim_a: impl Into<String>,
    claim_b: impl Into<String>,
) -> ContradictionTemplate {
    ContradictionTemplate {
        claim_a: claim_a.into(),
        claim_b: claim_b.into(),
        analysis_template: AnalysisTemplate::STANDARD,
    }
}

/// Pure: take the first two claims from positional arguments.
///
/// Arguments beyond the second are ignored.
pub fn claims_from_args(args: &[String]) -> Result<(String, String)> {
    match args {
        [claim_a, claim_b, rest @ ..] => {
            if !rest.is_empty() {
                tracing::debug!(ignored = rest.len(), "Ignoring extra claims");
            }
            Ok((claim_a.clone(), claim_b.clone()))
        }
        _ => Err(ScaffoldError::MissingClaims { given: args.len() }),
    }
}
