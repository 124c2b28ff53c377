mod common;

use serde_json::json;
use tempfile::TempDir;

use common::{run_args, session_json, write_file};
use diagnostic_style_cli::commands::{batch_file, classify_file, read_json, write_json};
use diagnostic_style_cli::{load_classifier_config, CliError};
use diagnostic_style_algo::{ConfigError, InputError, LearningStyleAnalysis};

#[test]
fn classify_reads_session_file() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "session.json", &session_json(9, 5));

    let analysis = classify_file(&run_args(input)).unwrap();

    assert_eq!(analysis.data_points.total_questions, 20);
    assert!(analysis.scores.visual_analytical < 0.5);
    assert!(analysis.primary_style.to_string().starts_with("visual-"));
}

#[test]
fn classify_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "session.json", &session_json(9, 5));
    let output = dir.path().join("analysis.json");

    let analysis = classify_file(&run_args(input)).unwrap();
    write_json(&analysis, Some(&output), true).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains("\"primaryStyle\""));
    assert!(written.ends_with('\n'));
    let back: LearningStyleAnalysis = read_json(&output).unwrap();
    assert_eq!(back, analysis);
}

#[test]
fn batch_preserves_session_order() {
    let dir = TempDir::new().unwrap();
    let sessions = json!([
        session_json(9, 5),
        { "attempts": [], "questions": [] },
        session_json(3, 10),
    ]);
    let input = write_file(&dir, "batch.json", &sessions);

    let analyses = batch_file(&run_args(input)).unwrap();

    assert_eq!(analyses.len(), 3);
    assert!(analyses[0].scores.visual_analytical < 0.5);
    assert_eq!(analyses[1].data_points.total_questions, 0);
    assert!(analyses[1].recommendations.is_empty());
    assert!(analyses[2].scores.visual_analytical > 0.5);
}

#[test]
fn missing_input_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = classify_file(&run_args(dir.path().join("absent.json"))).unwrap_err();
    assert!(matches!(err, CliError::Io { .. }));
    assert_eq!(err.exit_code(), 74);
}

#[test]
fn malformed_input_is_json_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ \"attempts\": [ ").unwrap();

    let err = classify_file(&run_args(path.clone())).unwrap_err();
    match err {
        CliError::Json { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn strict_mode_rejects_unknown_question() {
    let dir = TempDir::new().unwrap();
    let mut session = session_json(9, 5);
    session["attempts"]
        .as_array_mut()
        .unwrap()
        .push(json!({ "diagnostic_question_id": "gone", "response_time": 100, "is_correct": true }));
    let input = write_file(&dir, "session.json", &session);

    // lenient mode still classifies
    assert!(classify_file(&run_args(input.clone())).is_ok());

    let mut args = run_args(input);
    args.strict = true;
    let err = classify_file(&args).unwrap_err();
    match err {
        CliError::Input { session, source } => {
            assert_eq!(session, 0);
            assert!(matches!(source, InputError::UnresolvedQuestion { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn strict_batch_reports_offending_session() {
    let dir = TempDir::new().unwrap();
    let mut bad = session_json(5, 5);
    bad["attempts"][1]["confidence_level"] = json!(9);
    let input = write_file(&dir, "batch.json", &json!([session_json(9, 5), bad]));

    let mut args = run_args(input);
    args.strict = true;
    let err = batch_file(&args).unwrap_err();
    match err {
        CliError::Input { session, source } => {
            assert_eq!(session, 1);
            assert!(matches!(source, InputError::ConfidenceOutOfRange { level: 9, .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn config_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let config_path = write_file(
        &dir,
        "config.json",
        &json!({ "ambiguity_threshold": 0.45, "recommendations": { "weak_category_threshold": 0.3 } }),
    );

    let config = load_classifier_config(Some(&config_path)).unwrap();
    assert_eq!(config.ambiguity_threshold, 0.45);
    assert_eq!(config.recommendations.weak_category_threshold, 0.3);
    assert_eq!(config.recommendations.strong_category_threshold, 0.8);
    assert_eq!(config.scoring.fast_pace_ratio, 0.8);
}

#[test]
fn config_file_is_validated() {
    let dir = TempDir::new().unwrap();
    let config_path = write_file(
        &dir,
        "config.json",
        &json!({ "scoring": { "fast_pace_ratio": 1.5, "slow_pace_ratio": 1.2 } }),
    );
    let input = write_file(&dir, "session.json", &session_json(9, 5));

    let mut args = run_args(input);
    args.config = Some(config_path);
    let err = classify_file(&args).unwrap_err();
    assert!(matches!(err, CliError::Config(ConfigError::Validation(_))));
    assert_eq!(err.exit_code(), 78);
}

#[test]
fn loose_threshold_from_config_file_adds_secondary() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "session.json", &session_json(9, 5));
    let config_path = write_file(&dir, "config.json", &json!({ "ambiguity_threshold": 0.5 }));

    let mut args = run_args(input);
    args.config = Some(config_path);
    let analysis = classify_file(&args).unwrap();

    let secondary = analysis.secondary_style.expect("every axis is ambiguous at 0.5");
    assert_eq!(analysis.primary_style.differing_dimensions(&secondary).len(), 1);
}
