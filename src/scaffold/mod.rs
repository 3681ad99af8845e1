//! Scaffold builders.
//!
//! Three independent, stateless operations. Each validates its own input and
//! returns a serializable document; none of them performs I/O.
//!
//! - `matrix` - empty pairwise consistency matrix
//! - `aggregate` - confidence statistics across agents
//! - `contradiction` - analysis template for two claims
//! - `content` - static text placed into the documents

pub mod aggregate;
pub mod content;
pub mod contradiction;
pub mod matrix;

use serde::Serialize;

pub use aggregate::{
    aggregate_confidence, parse_score, parse_scores, AggregationResult, ConfidenceStats,
    Interpretation,
};
pub use contradiction::{
    claims_from_args, detect_contradiction, AnalysisTemplate, ContradictionTemplate,
};
pub use matrix::{consistency_matrix, ConsistencyMatrix};

/// Any document the tool can emit. Serializes as the inner document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scaffold {
    Matrix(ConsistencyMatrix),
    Aggregation(AggregationResult),
    Contradiction(ContradictionTemplate),
}

impl From<ConsistencyMatrix> for Scaffold {
    fn from(matrix: ConsistencyMatrix) -> Self {
        Self::Matrix(matrix)
    }
}

impl From<AggregationResult> for Scaffold {
    fn from(result: AggregationResult) -> Self {
        Self::Aggregation(result)
    }
}

impl From<ContradictionTemplate> for Scaffold {
    fn from(template: ContradictionTemplate) -> Self {
        Self::Contradiction(template)
    }
}
