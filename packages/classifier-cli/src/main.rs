use clap::Parser;

use diagnostic_style_cli::cli::Cli;
use diagnostic_style_cli::commands;
use diagnostic_style_cli::config::CliConfig;
use diagnostic_style_cli::logging;

fn main() {
    let _ = dotenvy::dotenv();
    let config = CliConfig::from_env();
    let log_guard = logging::init_tracing(&config);

    let cli = Cli::parse();

    if let Err(err) = commands::run(cli.command) {
        tracing::error!(error = %err, "style-classify failed");
        // process::exit skips destructors; flush the file log first
        drop(log_guard);
        std::process::exit(err.exit_code());
    }
}
