use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;

use fsaudit::cli::args::{Cli, OutputFormat};
use fsaudit::cli::output;
use fsaudit::scanner;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("fsaudit=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let config = cli.scan_config();
    let stdout_color = !cli.no_color && std::io::stdout().is_terminal();
    let stderr_color = !cli.no_color && std::io::stderr().is_terminal();

    let outcome = scanner::scan_directory_with(&config, |diag| {
        output::print_diagnostic(diag, stderr_color)
    })?;

    match cli.format {
        OutputFormat::Human => output::print_report(&outcome.result, &config, stdout_color),
        OutputFormat::Json => {
            output::print_report_json(&outcome.result, &config, &outcome.diagnostics)
                .context("Failed to serialize scan results")?
        }
    }

    Ok(())
}
