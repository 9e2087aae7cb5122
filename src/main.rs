use anyhow::{Context, Result};
use ats_client::config::AppConfig;
use ats_client::core::ServiceClient;
use ats_client::view::TerminalSurface;
use ats_client::{SubmissionController, SubmissionForm, UiState};
use clap::Parser;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

#[derive(Parser)]
#[command(name = "ats-evaluator")]
#[command(about = "Evaluate a resume against a job description")]
struct Cli {
    /// Job description text
    #[arg(long, conflicts_with = "jd_file")]
    jd: Option<String>,

    /// Read the job description from a file
    #[arg(long)]
    jd_file: Option<PathBuf>,

    /// Resume file to upload (PDF or Word)
    #[arg(long)]
    resume: Option<PathBuf>,

    /// Evaluation service base URL
    #[arg(long)]
    server: Option<String>,

    /// YAML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the evaluation as JSON
    #[arg(long)]
    json: bool,
}

fn init_logging(config: &AppConfig) -> Result<()> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")));

    let file_layer = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true) // Clear file on startup
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;

            Some(
                fmt::layer()
                    .json()
                    .with_writer(file)
                    .with_current_span(false)
                    .with_span_list(false)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?.with_service_url(cli.server.clone());
    init_logging(&config)?;

    info!("Loaded configuration for environment: {}", AppConfig::environment());
    info!("Evaluation service: {}", config.service_url);

    let form = SubmissionForm::from_inputs(
        cli.jd.clone(),
        cli.jd_file.as_deref(),
        cli.resume.as_deref(),
    )
    .await?;
    let client = ServiceClient::new(&config.service_url, config.request_timeout_secs)?;

    let surface = TerminalSurface::new(std::io::stdout(), std::io::stderr());
    let surface = if cli.json {
        surface.without_results()
    } else {
        surface
    };

    let mut controller = SubmissionController::new(client, surface);

    let state = controller.submit(form).await;
    if let UiState::Success(result) = state {
        if cli.json {
            let json = result
                .to_pretty_json()
                .context("Failed to serialize evaluation")?;
            println!("{}", json);
        }
    }

    Ok(ExitCode::from(state.exit_status()))
}
