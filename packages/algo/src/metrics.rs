//! Metrics aggregation over raw diagnostic attempts.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::sanitize::{mean, safe_ratio};
use crate::types::{DiagnosticAttempt, DiagnosticCategory, DiagnosticQuestion, MAX_CONFIDENCE_LEVEL};

/// Minimum attempts per response-time quartile before the speed/accuracy
/// tradeoff is reported
pub const MIN_QUARTILE_SIZE: usize = 4;

/// Neutral speed/accuracy tradeoff for samples too small to split
pub const NEUTRAL_TRADEOFF: f64 = 0.5;

/// Neutral visual/text performance ratio
pub const NEUTRAL_MODALITY_RATIO: f64 = 1.0;

/// Default confidence pattern when no attempt carries a self-report
pub const DEFAULT_CONFIDENCE_PATTERN: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticMetrics {
    pub total_attempts: usize,
    /// Attempts whose question id did not resolve
    pub unresolved_attempts: usize,
    pub avg_response_time: f64,
    /// Population standard deviation of response times
    pub response_time_variance: f64,
    pub accuracy_by_category: BTreeMap<DiagnosticCategory, f64>,
    pub hesitation_pattern: f64,
    pub elimination_usage: f64,
    pub changed_answer_rate: f64,
    pub confidence_pattern: f64,
    pub visual_vs_text_performance: f64,
    /// Both visual and text-heavy questions received resolved attempts
    #[serde(default)]
    pub has_modality_data: bool,
    pub speed_accuracy_tradeoff: f64,
    /// Mean expected response time over resolved attempts
    pub avg_expected_response_time: Option<f64>,
}

impl Default for DiagnosticMetrics {
    fn default() -> Self {
        Self {
            total_attempts: 0,
            unresolved_attempts: 0,
            avg_response_time: 0.0,
            response_time_variance: 0.0,
            accuracy_by_category: BTreeMap::new(),
            hesitation_pattern: 0.0,
            elimination_usage: 0.0,
            changed_answer_rate: 0.0,
            confidence_pattern: DEFAULT_CONFIDENCE_PATTERN,
            visual_vs_text_performance: NEUTRAL_MODALITY_RATIO,
            has_modality_data: false,
            speed_accuracy_tradeoff: NEUTRAL_TRADEOFF,
            avg_expected_response_time: None,
        }
    }
}

impl DiagnosticMetrics {
    pub fn accuracy(&self, category: DiagnosticCategory) -> Option<f64> {
        self.accuracy_by_category.get(&category).copied()
    }

    pub fn accuracy_or(&self, category: DiagnosticCategory, default: f64) -> f64 {
        self.accuracy(category).unwrap_or(default)
    }

    pub fn has_category(&self, category: DiagnosticCategory) -> bool {
        self.accuracy_by_category.contains_key(&category)
    }

    /// `avg_response_time / avg_expected_response_time`, `None` without a usable baseline
    pub fn pace_ratio(&self) -> Option<f64> {
        match self.avg_expected_response_time {
            Some(expected) if expected > 0.0 => Some(self.avg_response_time / expected),
            _ => None,
        }
    }

    /// Population variance of the per-category accuracies
    pub fn accuracy_variance(&self) -> f64 {
        let values: Vec<f64> = self.accuracy_by_category.values().copied().collect();
        if values.len() < 2 {
            return 0.0;
        }
        let avg = values.iter().sum::<f64>() / values.len() as f64;
        values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64
    }
}

#[derive(Default)]
struct Tally {
    correct: usize,
    total: usize,
}

impl Tally {
    fn record(&mut self, is_correct: bool) {
        self.total += 1;
        if is_correct {
            self.correct += 1;
        }
    }

    fn accuracy(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.correct as f64 / self.total as f64)
        }
    }
}

/// Reduce one learner's attempts into summary statistics.
///
/// Attempts whose question id is unknown still count toward timing and
/// behavioral-flag statistics but are left out of every per-category and
/// per-question figure.
pub fn aggregate(attempts: &[DiagnosticAttempt], questions: &[DiagnosticQuestion]) -> DiagnosticMetrics {
    if attempts.is_empty() {
        return DiagnosticMetrics::default();
    }

    let mut index: HashMap<&str, &DiagnosticQuestion> = HashMap::with_capacity(questions.len());
    for question in questions {
        index.entry(question.id.as_str()).or_insert(question);
    }

    let n = attempts.len() as f64;
    let avg_response_time = attempts.iter().map(|a| a.response_time as f64).sum::<f64>() / n;
    let response_time_variance = (attempts
        .iter()
        .map(|a| (a.response_time as f64 - avg_response_time).powi(2))
        .sum::<f64>()
        / n)
        .sqrt();

    let fraction = |flag: fn(&DiagnosticAttempt) -> bool| {
        attempts.iter().filter(|a| flag(a)).count() as f64 / n
    };
    let hesitation_pattern = fraction(|a| a.showed_hesitation);
    let elimination_usage = fraction(|a| a.used_elimination);
    let changed_answer_rate = fraction(|a| a.changed_answer);

    let confidence_pattern = mean(attempts.iter().filter_map(|a| {
        a.confidence_level
            .map(|level| level.clamp(1, MAX_CONFIDENCE_LEVEL) as f64 / MAX_CONFIDENCE_LEVEL as f64)
    }))
    .unwrap_or(DEFAULT_CONFIDENCE_PATTERN);

    let mut by_category: BTreeMap<DiagnosticCategory, Tally> = BTreeMap::new();
    let mut visual = Tally::default();
    let mut text = Tally::default();
    let mut expected_times = Vec::with_capacity(attempts.len());
    let mut unresolved_attempts = 0;

    for attempt in attempts {
        let Some(question) = index.get(attempt.diagnostic_question_id.as_str()) else {
            unresolved_attempts += 1;
            continue;
        };

        by_category
            .entry(question.diagnostic_category)
            .or_default()
            .record(attempt.is_correct);
        if question.complexity_indicators.visual_elements {
            visual.record(attempt.is_correct);
        }
        if question.complexity_indicators.text_heavy {
            text.record(attempt.is_correct);
        }
        expected_times.push(question.expected_response_time as f64);
    }

    let accuracy_by_category = by_category
        .into_iter()
        .filter_map(|(category, tally)| tally.accuracy().map(|acc| (category, acc)))
        .collect();

    let visual_vs_text_performance = match (visual.accuracy(), text.accuracy()) {
        (Some(v), Some(t)) => safe_ratio(v, t, NEUTRAL_MODALITY_RATIO),
        _ => NEUTRAL_MODALITY_RATIO,
    };

    DiagnosticMetrics {
        total_attempts: attempts.len(),
        unresolved_attempts,
        avg_response_time,
        response_time_variance,
        accuracy_by_category,
        hesitation_pattern,
        elimination_usage,
        changed_answer_rate,
        confidence_pattern,
        visual_vs_text_performance,
        has_modality_data: visual.total > 0 && text.total > 0,
        speed_accuracy_tradeoff: speed_accuracy_tradeoff(attempts),
        avg_expected_response_time: mean(expected_times),
    }
}

/// Slowest-quartile accuracy over fastest-quartile accuracy.
pub fn speed_accuracy_tradeoff(attempts: &[DiagnosticAttempt]) -> f64 {
    let quartile = attempts.len() / 4;
    if quartile < MIN_QUARTILE_SIZE {
        return NEUTRAL_TRADEOFF;
    }

    let mut sorted: Vec<&DiagnosticAttempt> = attempts.iter().collect();
    sorted.sort_by_key(|a| a.response_time);

    let accuracy = |slice: &[&DiagnosticAttempt]| {
        slice.iter().filter(|a| a.is_correct).count() as f64 / slice.len() as f64
    };
    let fast = accuracy(&sorted[..quartile]);
    let slow = accuracy(&sorted[sorted.len() - quartile..]);

    safe_ratio(slow, fast, NEUTRAL_MODALITY_RATIO)
}
