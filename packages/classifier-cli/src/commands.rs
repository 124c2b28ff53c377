use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use diagnostic_style_algo::{
    classify_batch, classify_with_config, style_profile, validate_input, ClassificationRequest,
    ClassifierConfig, LearningStyleAnalysis, StyleKey,
};

use crate::cli::{Command, RunArgs};
use crate::config::load_classifier_config;
use crate::error::CliError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleEntry {
    pub key: StyleKey,
    pub name: &'static str,
    pub description: &'static str,
}

pub fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Classify(args) => {
            let analysis = classify_file(&args)?;
            write_json(&analysis, args.output.as_deref(), args.pretty)
        }
        Command::Batch(args) => {
            let analyses = batch_file(&args)?;
            write_json(&analyses, args.output.as_deref(), args.pretty)
        }
        Command::Styles { json } => {
            let entries = style_entries();
            if json {
                write_json(&entries, None, true)
            } else {
                print_styles(&entries)
            }
        }
    }
}

pub fn classify_file(args: &RunArgs) -> Result<LearningStyleAnalysis, CliError> {
    let config = load_classifier_config(args.config.as_deref())?;
    let request: ClassificationRequest = read_json(&args.input)?;
    if args.strict {
        check_request(0, &request)?;
    }

    tracing::info!(
        input = %args.input.display(),
        attempts = request.attempts.len(),
        questions = request.questions.len(),
        "classifying session"
    );
    Ok(classify_with_config(
        &request.attempts,
        &request.questions,
        &config,
    ))
}

pub fn batch_file(args: &RunArgs) -> Result<Vec<LearningStyleAnalysis>, CliError> {
    let config = load_classifier_config(args.config.as_deref())?;
    let requests: Vec<ClassificationRequest> = read_json(&args.input)?;
    if args.strict {
        for (session, request) in requests.iter().enumerate() {
            check_request(session, request)?;
        }
    }

    tracing::info!(
        input = %args.input.display(),
        sessions = requests.len(),
        "classifying batch"
    );
    Ok(run_batch(&requests, &config))
}

fn run_batch(
    requests: &[ClassificationRequest],
    config: &ClassifierConfig,
) -> Vec<LearningStyleAnalysis> {
    let analyses = classify_batch(requests, config);
    let ambiguous = analyses
        .iter()
        .filter(|a| a.secondary_style.is_some())
        .count();
    tracing::info!(sessions = analyses.len(), ambiguous, "batch classified");
    analyses
}

fn check_request(session: usize, request: &ClassificationRequest) -> Result<(), CliError> {
    validate_input(&request.attempts, &request.questions)
        .map_err(|source| CliError::Input { session, source })
}

pub fn style_entries() -> Vec<StyleEntry> {
    StyleKey::ALL
        .iter()
        .map(|&key| {
            let profile = style_profile(key);
            StyleEntry {
                key,
                name: profile.name,
                description: profile.description,
            }
        })
        .collect()
}

fn print_styles(entries: &[StyleEntry]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for entry in entries {
        writeln!(out, "{:<32} {}", entry.key.to_string(), entry.name)
            .map_err(stdout_error)?;
    }
    Ok(())
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_json<T: Serialize>(
    value: &T,
    output: Option<&Path>,
    pretty: bool,
) -> Result<(), CliError> {
    let mut encoded = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    encoded.push('\n');

    match output {
        Some(path) => {
            std::fs::write(path, encoded).map_err(|source| CliError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::debug!(output = %path.display(), "analysis written");
            Ok(())
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            out.write_all(encoded.as_bytes()).map_err(stdout_error)?;
            out.flush().map_err(stdout_error)
        }
    }
}

fn stdout_error(source: std::io::Error) -> CliError {
    CliError::Io {
        path: PathBuf::from("<stdout>"),
        source,
    }
}
