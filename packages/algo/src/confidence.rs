//! Confidence estimation from sample size and signal availability.

use crate::config::ConfidenceParams;
use crate::metrics::DiagnosticMetrics;
use crate::sanitize::sanitize_confidence;
use crate::types::{ConfidenceScores, DiagnosticCategory, Dimension};

/// Sample-size confidence: `floor` for a single attempt rising linearly to
/// `max` at `full_sample_size` attempts; 0 for no attempts at all.
pub fn sample_confidence(total_attempts: usize, params: &ConfidenceParams) -> f64 {
    if total_attempts == 0 {
        return 0.0;
    }
    let span = params.max - params.floor;
    let credit = total_attempts as f64 / params.full_sample_size as f64 * span;
    (credit + params.floor).min(params.max)
}

/// How many of a dimension's contributing signals carry learner-specific data
pub fn signals_present(metrics: &DiagnosticMetrics, dimension: Dimension) -> usize {
    let signals = match dimension {
        Dimension::VisualAnalytical => [
            metrics.has_category(DiagnosticCategory::VisualPattern),
            metrics.has_category(DiagnosticCategory::AnalyticalLogic),
            metrics.has_modality_data,
        ],
        Dimension::FastMethodical => [
            metrics.pace_ratio().is_some(),
            metrics.hesitation_pattern > 0.0 || metrics.changed_answer_rate > 0.0,
            metrics.has_category(DiagnosticCategory::SpeedTest),
        ],
        Dimension::ConceptualDetail => [
            metrics.has_category(DiagnosticCategory::DetailFocus),
            metrics.has_category(DiagnosticCategory::ConceptualReasoning),
            metrics.has_category(DiagnosticCategory::ReadingComprehension)
                || metrics.elimination_usage > 0.0,
        ],
    };
    signals.iter().filter(|present| **present).count()
}

pub fn estimate(metrics: &DiagnosticMetrics, params: &ConfidenceParams) -> ConfidenceScores {
    let base = sample_confidence(metrics.total_attempts, params);
    let per_dimension = |dimension| {
        let present = signals_present(metrics, dimension).min(params.signals_per_dimension);
        base * present as f64 / params.signals_per_dimension as f64
    };

    let visual_analytical = per_dimension(Dimension::VisualAnalytical);
    let fast_methodical = per_dimension(Dimension::FastMethodical);
    let conceptual_detail = per_dimension(Dimension::ConceptualDetail);

    let mut confidence = ConfidenceScores {
        visual_analytical,
        fast_methodical,
        conceptual_detail,
        overall: (visual_analytical + fast_methodical + conceptual_detail) / 3.0,
    };
    sanitize_confidence(&mut confidence, params.max);
    confidence
}
