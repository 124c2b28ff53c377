//! Dimension scoring.
//!
//! Each axis starts at the configured baseline, takes bounded additive
//! adjustments from the aggregated metrics and is clamped to [0, 1]. The
//! three axes never read each other.

use crate::config::ScoringWeights;
use crate::metrics::DiagnosticMetrics;
use crate::sanitize::clamp_unit;
use crate::types::{DiagnosticCategory, DimensionScores};

pub fn score_dimensions(metrics: &DiagnosticMetrics, weights: &ScoringWeights) -> DimensionScores {
    DimensionScores {
        visual_analytical: visual_analytical(metrics, weights),
        fast_methodical: fast_methodical(metrics, weights),
        conceptual_detail: conceptual_detail(metrics, weights),
    }
}

/// 0 = visual, 1 = analytical
pub fn visual_analytical(metrics: &DiagnosticMetrics, w: &ScoringWeights) -> f64 {
    let analytical = metrics.accuracy_or(DiagnosticCategory::AnalyticalLogic, w.missing_category_default);
    let visual = metrics.accuracy_or(DiagnosticCategory::VisualPattern, w.missing_category_default);

    let mut score = w.baseline + w.category_difference_weight * (analytical - visual);

    let ratio = metrics.visual_vs_text_performance;
    if ratio > w.visual_strength_ratio {
        score -= w.modality_adjustment;
    } else if ratio < w.text_strength_ratio {
        score += w.modality_adjustment;
    }

    clamp_unit(score)
}

/// 0 = fast-paced, 1 = methodical
pub fn fast_methodical(metrics: &DiagnosticMetrics, w: &ScoringWeights) -> f64 {
    let mut score = w.baseline;

    if let Some(ratio) = metrics.pace_ratio() {
        if ratio < w.fast_pace_ratio {
            score -= w.pace_adjustment;
        } else if ratio > w.slow_pace_ratio {
            score += w.pace_adjustment;
        }
    }

    score += w.hesitation_weight * metrics.hesitation_pattern;
    score += w.answer_change_weight * metrics.changed_answer_rate;

    // Missing speed_test data reads as the neutral default and falls between the bands.
    let speed = metrics.accuracy_or(DiagnosticCategory::SpeedTest, w.missing_category_default);
    if speed > w.speed_test_high {
        score -= w.speed_test_adjustment;
    } else if speed < w.speed_test_low {
        score += w.speed_test_adjustment;
    }

    clamp_unit(score)
}

/// 0 = conceptual, 1 = detail-oriented
pub fn conceptual_detail(metrics: &DiagnosticMetrics, w: &ScoringWeights) -> f64 {
    let detail = metrics.accuracy_or(DiagnosticCategory::DetailFocus, w.missing_category_default);
    let conceptual = metrics.accuracy_or(DiagnosticCategory::ConceptualReasoning, w.missing_category_default);

    let mut score = w.baseline + w.category_difference_weight * (detail - conceptual);

    let reading = metrics.accuracy_or(DiagnosticCategory::ReadingComprehension, w.missing_category_default);
    if reading > w.reading_threshold {
        score += w.reading_bonus;
    }

    score += w.elimination_weight * metrics.elimination_usage;

    clamp_unit(score)
}
