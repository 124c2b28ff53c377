//! Command-line host for `diagnostic-style-algo`: environment config,
//! logging and JSON file in/out around the classifier.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use cli::{Cli, Command, RunArgs};
pub use config::{load_classifier_config, CliConfig};
pub use error::CliError;
