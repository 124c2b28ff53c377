use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Classify learning styles from diagnostic quiz sessions
#[derive(Debug, Parser)]
#[command(name = "style-classify", version)]
#[command(about = "Classify learning styles from diagnostic quiz attempts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify one session: {"attempts": [...], "questions": [...]}
    Classify(RunArgs),
    /// Classify a JSON array of sessions in parallel
    Batch(RunArgs),
    /// List the eight style keys with their display names
    Styles {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// Input JSON file
    pub input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Classifier tuning as JSON; missing fields keep their defaults
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Reject duplicate question ids, confidence levels outside 1-5 and
    /// attempts that reference unknown questions
    #[arg(long)]
    pub strict: bool,
}
