//! CLI entrypoint for pet-duel
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use duel_application::{FetchProgressNotifier, NoProgress, TriggerController};
use duel_domain::OutputFormat;
use duel_infrastructure::{ConfigLoader, FileConfig, ReqwestFetcher};
use duel_presentation::{Cli, Command, ConsoleDisplay, ConsoleFormatter, DuelRepl, ProgressReporter};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. The returned guard flushes the log file on drop.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let Some(path) = log_file else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
        return Ok(None);
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();
    Ok(Some(guard))
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())?
    };

    let mut fatal = Vec::new();
    for issue in config.validate() {
        if issue.is_error() {
            fatal.push(issue.to_string());
        } else {
            warn!("{}", issue.message);
        }
    }
    if !fatal.is_empty() {
        bail!("invalid configuration:\n  {}", fatal.join("\n  "));
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    info!("Starting pet-duel");

    let config = load_config(&cli)?;
    if !config.output.color {
        colored::control::set_override(false);
    }

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    // === Dependency Injection ===
    let mut fetcher = ReqwestFetcher::builder().timeout(config.http.timeout());
    if let Some(agent) = &config.http.user_agent {
        fetcher = fetcher.user_agent(agent);
    }
    let fetcher = Arc::new(fetcher.build()?);

    let display = Arc::new(ConsoleDisplay::new(format));

    // Spinners would interleave with machine-readable output
    let progress: Arc<dyn FetchProgressNotifier> = if cli.quiet || format == OutputFormat::Json {
        Arc::new(NoProgress)
    } else {
        Arc::new(ProgressReporter::new())
    };

    let controller = Arc::new(
        TriggerController::with_config(
            fetcher,
            Arc::clone(&display),
            config.to_catalog(),
            config.session_config(),
        )
        .with_progress(progress),
    );

    let outcome = match cli.command() {
        Command::Duel { vote } => match controller.on_trigger().await {
            Ok(_) => {
                if let Some(vote) = vote {
                    let receipt = controller.on_vote(vote.into());
                    info!("Voted {} ({} total)", receipt.side, receipt.count);
                    receipt.clear_task.await?;
                }
                Ok(())
            }
            Err(e) => Err(e),
        },
        Command::Cat => controller.on_generate_cat().await.map(|_| ()),
        Command::Jumbotron => controller.on_load_text().await.map(|_| ()),
        Command::Play => {
            DuelRepl::new(Arc::clone(&controller), display).run().await?;
            Ok(())
        }
    };

    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("{}", ConsoleFormatter::format_error(&e));
            Ok(ExitCode::FAILURE)
        }
    }
}
