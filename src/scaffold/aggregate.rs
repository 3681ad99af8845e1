//! Confidence aggregation across agents.
//!
//! A plain mean hides disagreement, so the integrated confidence is the mean
//! scaled by an agreement factor derived from the population standard
//! deviation:
//!
//! ```text
//! agreement  = max(0, 1 - 2 * std_dev)
//! integrated = mean * agreement
//! ```
//!
//! A standard deviation of 0.5 or more (two camps at opposite ends of the
//! scale) drives agreement to exactly zero. Scores outside [0, 1] are accepted
//! unchanged.

use serde::{Serialize, Serializer};

use super::content::{
    INTERPRETATION_HIGH_CONFIDENCE, INTERPRETATION_HIGH_DISAGREEMENT,
    INTERPRETATION_LOW_CONFIDENCE, INTERPRETATION_MODERATE_CONFIDENCE,
    INTERPRETATION_PARTIAL_AGREEMENT, INTERPRETATION_VERY_HIGH_CONFIDENCE,
};
use crate::errors::{Result, ScaffoldError};
use crate::output::round_stat;

/// Penalty applied per unit of standard deviation when computing agreement
pub const DISPERSION_PENALTY: f64 = 2.0;

// ============================================================================
// Interpretation thresholds
// ============================================================================

/// Below this agreement the agents are considered split
pub const DISAGREEMENT_THRESHOLD: f64 = 0.3;
/// Below this agreement only partial consensus exists
pub const PARTIAL_AGREEMENT_THRESHOLD: f64 = 0.6;
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 0.3;
pub const MODERATE_CONFIDENCE_THRESHOLD: f64 = 0.6;
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.8;

/// Full-precision statistics over a set of scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceStats {
    pub mean: f64,
    pub std_dev: f64,
    pub agreement: f64,
    pub integrated: f64,
}

impl ConfidenceStats {
    /// Pure: compute statistics for a non-empty score slice.
    pub fn from_scores(scores: &[f64]) -> Result<Self> {
        if scores.is_empty() {
            return Err(ScaffoldError::EmptyScores);
        }

        let (mean, std_dev) = match population_moments(scores) {
            (mean, std_dev) if mean.is_finite() && std_dev.is_finite() => (mean, std_dev),
            overflowed => scaled_moments(scores).unwrap_or(overflowed),
        };
        let agreement = agreement_from_std_dev(std_dev);

        Ok(Self {
            mean,
            std_dev,
            agreement,
            integrated: mean * agreement,
        })
    }

    pub fn interpretation(&self) -> Interpretation {
        Interpretation::classify(self.integrated, self.agreement)
    }
}

/// Pure: mean and population standard deviation (÷N, zero for one score).
fn population_moments(scores: &[f64]) -> (f64, f64) {
    let n = scores.len() as f64;
    let mean = scores.iter().sum::<f64>() / n;
    let variance = if scores.len() > 1 {
        scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n
    } else {
        0.0
    };
    (mean, variance.sqrt())
}

/// Pure: moments computed on scores divided by the largest magnitude.
///
/// Used when the direct sums overflow. Scaled scores lie in [-1, 1], so the
/// scaled mean and deviation are at most 1 and scaling back stays finite.
fn scaled_moments(scores: &[f64]) -> Option<(f64, f64)> {
    if !scores.iter().all(|s| s.is_finite()) {
        return None;
    }
    let scale = scores.iter().fold(0.0f64, |max, s| max.max(s.abs()));
    if scale == 0.0 {
        return None;
    }
    let scaled: Vec<f64> = scores.iter().map(|s| s / scale).collect();
    let (mean, std_dev) = population_moments(&scaled);
    tracing::debug!(scale, "Rescaled scores to avoid overflow");
    Some((mean * scale, std_dev * scale))
}

/// Pure: linear agreement penalty on dispersion, floored at zero.
#[inline]
pub fn agreement_from_std_dev(std_dev: f64) -> f64 {
    (1.0 - DISPERSION_PENALTY * std_dev).max(0.0)
}

/// Reading of an aggregated confidence, checked in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpretation {
    HighDisagreement,
    PartialAgreement,
    LowConfidence,
    ModerateConfidence,
    HighConfidence,
    /// Unanimous high confidence may indicate confirmation bias
    VeryHighConfidence,
}

impl Interpretation {
    /// Pure: pick the bucket. Agreement is checked before confidence.
    pub fn classify(integrated: f64, agreement: f64) -> Self {
        if agreement < DISAGREEMENT_THRESHOLD {
            Self::HighDisagreement
        } else if agreement < PARTIAL_AGREEMENT_THRESHOLD {
            Self::PartialAgreement
        } else if integrated < LOW_CONFIDENCE_THRESHOLD {
            Self::LowConfidence
        } else if integrated < MODERATE_CONFIDENCE_THRESHOLD {
            Self::ModerateConfidence
        } else if integrated < HIGH_CONFIDENCE_THRESHOLD {
            Self::HighConfidence
        } else {
            Self::VeryHighConfidence
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::HighDisagreement => INTERPRETATION_HIGH_DISAGREEMENT,
            Self::PartialAgreement => INTERPRETATION_PARTIAL_AGREEMENT,
            Self::LowConfidence => INTERPRETATION_LOW_CONFIDENCE,
            Self::ModerateConfidence => INTERPRETATION_MODERATE_CONFIDENCE,
            Self::HighConfidence => INTERPRETATION_HIGH_CONFIDENCE,
            Self::VeryHighConfidence => INTERPRETATION_VERY_HIGH_CONFIDENCE,
        }
    }
}

impl Serialize for Interpretation {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.message())
    }
}

/// Aggregated confidence as emitted to agents. Statistics are rounded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregationResult {
    pub individual_scores: Vec<f64>,
    pub mean_confidence: f64,
    pub std_deviation: f64,
    pub agreement_level: f64,
    pub integrated_confidence: f64,
    pub interpretation: Interpretation,
}

/// Pure: aggregate per-agent confidence scores.
pub fn aggregate_confidence(scores: Vec<f64>) -> Result<AggregationResult> {
    let stats = ConfidenceStats::from_scores(&scores)?;

    let out_of_range = scores.iter().filter(|s| !(0.0..=1.0).contains(*s)).count();
    if out_of_range > 0 {
        tracing::warn!(out_of_range, "Scores outside [0, 1] accepted without clamping");
    }
    tracing::debug!(
        count = scores.len(),
        mean = stats.mean,
        std_dev = stats.std_dev,
        agreement = stats.agreement,
        integrated = stats.integrated,
        "Aggregated confidence"
    );

    Ok(AggregationResult {
        interpretation: stats.interpretation(),
        individual_scores: scores,
        mean_confidence: round_stat(stats.mean),
        std_deviation: round_stat(stats.std_dev),
        agreement_level: round_stat(stats.agreement),
        integrated_confidence: round_stat(stats.integrated),
    })
}

/// Pure: read one score argument.
///
/// Surrounding whitespace is ignored. NaN and infinities parse as floats but
/// have no JSON representation, so they are rejected like any other
/// non-numeric input.
pub fn parse_score(raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ScaffoldError::non_numeric(raw))
}

/// Pure: read all score arguments, failing on the first bad one.
pub fn parse_scores<S: AsRef<str>>(args: &[S]) -> Result<Vec<f64>> {
    args.iter().map(|arg| parse_score(arg.as_ref())).collect()
}
