#![allow(dead_code)]

use diagnostic_style_algo::{
    ComplexityIndicators, DiagnosticAttempt, DiagnosticCategory, DiagnosticQuestion,
};

pub const EXPECTED_MS: u64 = 4000;

pub fn question(id: &str, category: DiagnosticCategory) -> DiagnosticQuestion {
    DiagnosticQuestion {
        id: id.to_string(),
        diagnostic_category: category,
        expected_response_time: EXPECTED_MS,
        complexity_indicators: ComplexityIndicators::default(),
    }
}

pub fn attempt(question_id: &str, response_time: u64, is_correct: bool) -> DiagnosticAttempt {
    DiagnosticAttempt {
        diagnostic_question_id: question_id.to_string(),
        response_time,
        is_correct,
        showed_hesitation: false,
        used_elimination: false,
        changed_answer: false,
        confidence_level: None,
    }
}

/// One question per category, id = category name
pub fn question_bank() -> Vec<DiagnosticQuestion> {
    DiagnosticCategory::ALL
        .iter()
        .map(|c| question(c.as_str(), *c))
        .collect()
}

/// `total` attempts on `category` with exactly `correct` of them right,
/// all at the expected response time
pub fn category_attempts(
    category: DiagnosticCategory,
    total: usize,
    correct: usize,
) -> Vec<DiagnosticAttempt> {
    (0..total)
        .map(|i| attempt(category.as_str(), EXPECTED_MS, i < correct))
        .collect()
}
