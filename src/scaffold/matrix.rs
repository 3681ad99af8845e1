//! Pairwise consistency matrix template.
//!
//! The builder only shapes data: every off-diagonal cell is left empty for
//! the calling agent to score.

use serde::Serialize;

use super::content::MATRIX_INSTRUCTIONS;
use crate::errors::{Result, ScaffoldError};

/// Score of a hypothesis against itself
pub const SELF_CONSISTENCY: f64 = 1.0;

/// N×N grid of pairwise consistency scores awaiting assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsistencyMatrix {
    pub hypotheses: Vec<String>,
    /// `matrix[i][j]` scores hypothesis `i` against `j`; `None` is unscored
    pub matrix: Vec<Vec<Option<f64>>>,
    pub instructions: String,
}

impl ConsistencyMatrix {
    pub fn size(&self) -> usize {
        self.hypotheses.len()
    }
}

/// Pure: build an empty consistency matrix with a filled diagonal.
pub fn consistency_matrix(hypotheses: Vec<String>) -> Result<ConsistencyMatrix> {
    if hypotheses.is_empty() {
        return Err(ScaffoldError::EmptyHypotheses);
    }

    let n = hypotheses.len();
    let matrix = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| (i == j).then_some(SELF_CONSISTENCY))
                .collect()
        })
        .collect();

    tracing::debug!(size = n, "Built consistency matrix");

    Ok(ConsistencyMatrix {
        hypotheses,
        matrix,
        instructions: MATRIX_INSTRUCTIONS.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_hypotheses_rejected() {
        assert_eq!(
            consistency_matrix(Vec::new()),
            Err(ScaffoldError::EmptyHypotheses)
        );
    }

    #[test]
    fn test_single_hypothesis() {
        let result = consistency_matrix(labels(&["only"])).unwrap();
        assert_eq!(result.matrix, vec![vec![Some(1.0)]]);
        assert_eq!(result.size(), 1);
    }

    #[test]
    fn test_three_hypotheses_diagonal_only() {
        let result = consistency_matrix(labels(&["A", "B", "C"])).unwrap();
        assert_eq!(
            result.matrix,
            vec![
                vec![Some(1.0), None, None],
                vec![None, Some(1.0), None],
                vec![None, None, Some(1.0)],
            ]
        );
    }

    #[test]
    fn test_labels_and_instructions_preserved() {
        let result = consistency_matrix(labels(&["仮説A", "仮説B"])).unwrap();
        assert_eq!(result.hypotheses, labels(&["仮説A", "仮説B"]));
        assert_eq!(result.instructions, MATRIX_INSTRUCTIONS);
        assert!(result.instructions.contains("0.5"));
    }

    #[test]
    fn test_duplicate_labels_kept_in_order() {
        let result = consistency_matrix(labels(&["x", "x"])).unwrap();
        assert_eq!(result.hypotheses, labels(&["x", "x"]));
        assert_eq!(result.size(), 2);
    }

    #[test]
    fn test_serializes_unscored_cells_as_null() {
        let result = consistency_matrix(labels(&["A", "B"])).unwrap();
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["matrix"][0][0], serde_json::json!(1.0));
        assert!(value["matrix"][0][1].is_null());
        assert!(value["matrix"][1][0].is_null());
    }
}
