//! Strict input checks.
//!
//! Classification itself tolerates every problem listed here. These checks
//! are for collection layers that want to reject malformed sessions instead
//! of degrading silently.

use std::collections::HashSet;

use crate::types::{DiagnosticAttempt, DiagnosticQuestion, MAX_CONFIDENCE_LEVEL};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("duplicate question id: {0}")]
    DuplicateQuestion(String),
    #[error("attempt {index} has confidence level {level}, expected 1..=5")]
    ConfidenceOutOfRange { index: usize, level: u8 },
    #[error("attempt {index} references unknown question {question_id}")]
    UnresolvedQuestion { index: usize, question_id: String },
}

pub fn validate_input(
    attempts: &[DiagnosticAttempt],
    questions: &[DiagnosticQuestion],
) -> Result<(), InputError> {
    let mut ids = HashSet::with_capacity(questions.len());
    for question in questions {
        if !ids.insert(question.id.as_str()) {
            return Err(InputError::DuplicateQuestion(question.id.clone()));
        }
    }

    for (index, attempt) in attempts.iter().enumerate() {
        if let Some(level) = attempt.confidence_level {
            if !(1..=MAX_CONFIDENCE_LEVEL).contains(&level) {
                return Err(InputError::ConfidenceOutOfRange { index, level });
            }
        }
        if !ids.contains(attempt.diagnostic_question_id.as_str()) {
            return Err(InputError::UnresolvedQuestion {
                index,
                question_id: attempt.diagnostic_question_id.clone(),
            });
        }
    }

    Ok(())
}
