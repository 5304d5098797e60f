//! CLI entrypoint for vulnmend
//!
//! Wires the layers together with dependency injection: config and
//! arguments come in here, the OpenRouter gateway and file store are
//! constructed here, and the use case does the rest.

mod cli;
mod progress;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use progress::ConsoleProgress;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vulnmend_application::ports::progress::{NoProgress, ProgressNotifier};
use vulnmend_application::{RunRemediationInput, RunRemediationUseCase};
use vulnmend_domain::{Model, Technique, Vulnerability};
use vulnmend_infrastructure::{ConfigLoader, FileResultStore, OpenRouterGateway};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("An error has occurred: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    // Provider credentials may live in a .env file.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting vulnmend");

    // Re-validate arguments here even though clap pre-screens them: the
    // domain parsers are the authoritative check.
    let model: Model = cli.model.parse()?;
    let technique: Technique = cli.technique.parse()?;
    let vulnerability = Vulnerability::new(cli.vulnerability.as_str())?;

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    let timeout_secs = cli.timeout.unwrap_or(config.gateway.timeout_secs);
    let output_dir = cli.output.clone().unwrap_or(config.output.dir);

    // === Dependency Injection ===
    let gateway = Arc::new(
        OpenRouterGateway::with_base_url(config.gateway.base_url).with_timeout(timeout_secs),
    );
    let store = Arc::new(FileResultStore::new(output_dir));

    let use_case = RunRemediationUseCase::new(gateway, store);
    let input = RunRemediationInput::new(model, technique, vulnerability);

    let progress: &dyn ProgressNotifier = if cli.quiet {
        &NoProgress
    } else {
        &ConsoleProgress
    };

    let output = use_case.execute(input, progress).await?;

    if !cli.quiet {
        println!(
            "Correction patch generated in {:.2}s",
            output.record.elapsed_secs()
        );
        println!("Results saved to {}", output.saved_to.display());
    }

    Ok(())
}
