//! Resume ranker: score resumes against a job description and collect AI advice

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use resume_ranker::cli::{Cli, RunMode};
use resume_ranker::config::Config;
use resume_ranker::error::{Result, ResumeRankerError};
use resume_ranker::input::InputManager;
use resume_ranker::llm::GeminiClient;
use resume_ranker::output::ConsoleFormatter;
use resume_ranker::processing::{BatchRanker, ResumeAnalyzer, StopWords};
use resume_ranker::web;
use std::path::Path;
use std::process;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let mut config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };
    cli.apply_overrides(&mut config);

    if let Err(e) = run(cli.run_mode(), config).await {
        error!("{}", e);
        process::exit(1);
    }
}

async fn run(mode: RunMode, config: Config) -> Result<()> {
    if !config.has_api_key() {
        warn!("GEMINI_API_KEY is not set; suggestions and advice will show an error placeholder");
    }

    let client = GeminiClient::new(&config.llm).map_err(|e| {
        ResumeRankerError::Configuration(format!("Cannot create Gemini client: {}", e))
    })?;
    info!("Using model {}", config.llm.model);

    let analyzer = ResumeAnalyzer::new(Arc::new(StopWords::english()), Arc::new(client), &config.processing);
    let ranker = BatchRanker::new(analyzer, config.processing.max_concurrency);

    match mode {
        RunMode::Batch { resume_folder, job } => run_batch(&ranker, &resume_folder, &job, &config).await,
        RunMode::Interactive => web::serve(Arc::new(ranker), &config.server).await,
    }
}

async fn run_batch(ranker: &BatchRanker, resume_folder: &Path, job: &Path, config: &Config) -> Result<()> {
    let input = InputManager::new();
    let job_description = input.read_job_description(job).await?;
    let resumes = input.scan_folder(resume_folder).await?;
    info!("Found {} resume(s) in {}", resumes.len(), resume_folder.display());

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Analysing {} resume(s)...", resumes.len()));
    spinner.enable_steady_tick(Duration::from_millis(120));

    let batch = ranker.rank(&resumes, &job_description).await;
    spinner.finish_and_clear();

    let formatter = ConsoleFormatter::new(config.output.color_output);
    print!("{}", formatter.format_batch(&batch));
    Ok(())
}
