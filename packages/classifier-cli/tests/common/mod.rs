#![allow(dead_code)]

use std::path::PathBuf;

use serde_json::{json, Value};
use tempfile::TempDir;

use diagnostic_style_cli::RunArgs;

pub fn session_json(visual_correct: usize, analytical_correct: usize) -> Value {
    let mut attempts = Vec::new();
    for i in 0..10 {
        attempts.push(json!({
            "diagnostic_question_id": "v1",
            "response_time": 3000,
            "is_correct": i < visual_correct,
        }));
        attempts.push(json!({
            "diagnostic_question_id": "a1",
            "response_time": 3000,
            "is_correct": i < analytical_correct,
            "showed_hesitation": i == 0,
            "confidence_level": 4,
        }));
    }

    json!({
        "attempts": attempts,
        "questions": [
            {
                "id": "v1",
                "diagnostic_category": "visual_pattern",
                "expected_response_time": 3000,
                "complexity_indicators": { "visual_elements": true }
            },
            {
                "id": "a1",
                "diagnostic_category": "analytical_logic",
                "expected_response_time": 3000
            }
        ]
    })
}

pub fn write_file(dir: &TempDir, name: &str, value: &Value) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
    path
}

pub fn run_args(input: PathBuf) -> RunArgs {
    RunArgs {
        input,
        output: None,
        config: None,
        pretty: false,
        strict: false,
    }
}
