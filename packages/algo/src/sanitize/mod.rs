//! Data Sanitization
//!
//! Numerical guards shared by the pipeline stages.
//!
//! Functions:
//! - Guarded ratios and means
//! - Range clamping with NaN/Inf replacement
//! - Output record sanitization

use crate::types::{ConfidenceScores, DimensionScores, NEUTRAL_SCORE};

/// `value` if finite, otherwise `fallback`
pub fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// `numerator / denominator`, or `fallback` when the denominator is zero or the result is not finite
pub fn safe_ratio(numerator: f64, denominator: f64, fallback: f64) -> f64 {
    if denominator == 0.0 {
        return fallback;
    }
    finite_or(numerator / denominator, fallback)
}

/// Arithmetic mean, `None` for an empty input
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Clamp into `[min, max]`; NaN/Inf collapse to `fallback`
pub fn clamp_finite(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    finite_or(value, fallback).clamp(min, max)
}

pub fn clamp_unit(value: f64) -> f64 {
    clamp_finite(value, 0.0, 1.0, NEUTRAL_SCORE)
}

pub fn sanitize_scores(scores: &mut DimensionScores) {
    scores.visual_analytical = clamp_unit(scores.visual_analytical);
    scores.fast_methodical = clamp_unit(scores.fast_methodical);
    scores.conceptual_detail = clamp_unit(scores.conceptual_detail);
}

pub fn sanitize_confidence(confidence: &mut ConfidenceScores, max: f64) {
    confidence.visual_analytical = clamp_finite(confidence.visual_analytical, 0.0, max, 0.0);
    confidence.fast_methodical = clamp_finite(confidence.fast_methodical, 0.0, max, 0.0);
    confidence.conceptual_detail = clamp_finite(confidence.conceptual_detail, 0.0, max, 0.0);
    confidence.overall = clamp_finite(confidence.overall, 0.0, max, 0.0);
}
