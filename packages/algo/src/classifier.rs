//! Classification pipeline: metrics → scores → confidence → style → guidance.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::ClassifierConfig;
use crate::confidence;
use crate::metrics::{self, DiagnosticMetrics};
use crate::recommendations;
use crate::sanitize::{finite_or, sanitize_scores};
use crate::scoring;
use crate::style::{self, StyleResolution};
use crate::types::{
    ConfidenceScores, DataPoints, DiagnosticAttempt, DiagnosticQuestion, DimensionScores,
    LearningStyleAnalysis, ANALYSIS_VERSION,
};

/// One learner's completed diagnostic session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRequest {
    pub attempts: Vec<DiagnosticAttempt>,
    pub questions: Vec<DiagnosticQuestion>,
}

/// Classify with the default tuning.
pub fn classify(
    attempts: &[DiagnosticAttempt],
    questions: &[DiagnosticQuestion],
) -> LearningStyleAnalysis {
    classify_with_config(attempts, questions, &ClassifierConfig::default())
}

pub fn classify_with_config(
    attempts: &[DiagnosticAttempt],
    questions: &[DiagnosticQuestion],
    config: &ClassifierConfig,
) -> LearningStyleAnalysis {
    let metrics = metrics::aggregate(attempts, questions);

    if metrics.unresolved_attempts > 0 {
        tracing::warn!(
            unresolved = metrics.unresolved_attempts,
            total = metrics.total_attempts,
            "attempts reference unknown diagnostic questions"
        );
    }

    let analysis = if metrics.total_attempts == 0 {
        degenerate_analysis()
    } else {
        analyze(&metrics, config)
    };

    tracing::debug!(
        attempts = metrics.total_attempts,
        primary = %analysis.primary_style,
        secondary = ?analysis.secondary_style.map(|k| k.to_string()),
        overall_confidence = analysis.confidence.overall,
        "learning style classified"
    );

    analysis
}

/// Classify independent sessions in parallel; output order follows input order.
pub fn classify_batch(
    requests: &[ClassificationRequest],
    config: &ClassifierConfig,
) -> Vec<LearningStyleAnalysis> {
    requests
        .par_iter()
        .map(|request| classify_with_config(&request.attempts, &request.questions, config))
        .collect()
}

fn analyze(metrics: &DiagnosticMetrics, config: &ClassifierConfig) -> LearningStyleAnalysis {
    let mut scores = scoring::score_dimensions(metrics, &config.scoring);
    sanitize_scores(&mut scores);

    let confidence = confidence::estimate(metrics, &config.confidence);
    let StyleResolution {
        primary, secondary, ..
    } = style::resolve(&scores, config.ambiguity_threshold);
    let guidance = recommendations::generate(primary, metrics, &config.recommendations);

    LearningStyleAnalysis {
        primary_style: primary,
        secondary_style: secondary,
        scores,
        confidence,
        recommendations: guidance.recommendations,
        strengths: guidance.strengths,
        data_points: DataPoints {
            total_questions: metrics.total_attempts,
            avg_response_time: finite_or(metrics.avg_response_time, 0.0),
            accuracy_variance: finite_or(metrics.accuracy_variance(), 0.0),
        },
        version: ANALYSIS_VERSION,
    }
}

/// Result for an empty session: neutral scores, zero confidence, no guidance.
fn degenerate_analysis() -> LearningStyleAnalysis {
    let scores = DimensionScores::default();
    LearningStyleAnalysis {
        primary_style: style::primary_style(&scores),
        secondary_style: None,
        scores,
        confidence: ConfidenceScores::default(),
        recommendations: Vec::new(),
        strengths: Vec::new(),
        data_points: DataPoints::default(),
        version: ANALYSIS_VERSION,
    }
}
