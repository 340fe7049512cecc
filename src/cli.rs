//! CLI interface for the resume ranker

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "resume-ranker")]
#[command(about = "AI Resume Ranking")]
#[command(long_about = "Rank resumes against a job description using TF-IDF similarity, keyword gaps and Gemini advice. \
Runs the local interactive page unless --cli is given together with --resume_folder and --job.")]
pub struct Cli {
    /// Run in CLI mode
    #[arg(long)]
    pub cli: bool,

    /// Folder containing resume files (PDF, DOCX)
    #[arg(long = "resume_folder", value_name = "PATH")]
    pub resume_folder: Option<PathBuf>,

    /// Path to job description text file
    #[arg(long, value_name = "PATH")]
    pub job: Option<PathBuf>,

    /// Number of top keywords extracted per document
    #[arg(short, long)]
    pub keywords: Option<usize>,

    /// Resumes analysed at the same time
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Interactive page bind address
    #[arg(long)]
    pub host: Option<String>,

    /// Interactive page port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Disable coloured console output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// What the binary should do after argument parsing
#[derive(Debug, Clone, PartialEq)]
pub enum RunMode {
    Batch { resume_folder: PathBuf, job: PathBuf },
    Interactive,
}

impl Cli {
    /// Batch mode needs all three of `--cli`, `--resume_folder` and `--job`.
    pub fn run_mode(&self) -> RunMode {
        match (self.cli, &self.resume_folder, &self.job) {
            (true, Some(resume_folder), Some(job)) => RunMode::Batch {
                resume_folder: resume_folder.clone(),
                job: job.clone(),
            },
            _ => RunMode::Interactive,
        }
    }

    /// Fold command-line overrides into the loaded configuration
    pub fn apply_overrides(&self, config: &mut crate::config::Config) {
        if let Some(n) = self.keywords {
            config.processing.num_keywords = n;
        }
        if let Some(n) = self.concurrency {
            config.processing.max_concurrency = n.max(1);
        }
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if self.no_color {
            config.output.color_output = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_batch_mode_requires_all_flags() {
        let cli = Cli::parse_from(["resume-ranker", "--cli", "--resume_folder", "resumes", "--job", "job.txt"]);
        assert_eq!(
            cli.run_mode(),
            RunMode::Batch {
                resume_folder: PathBuf::from("resumes"),
                job: PathBuf::from("job.txt"),
            }
        );

        let cli = Cli::parse_from(["resume-ranker", "--cli", "--job", "job.txt"]);
        assert_eq!(cli.run_mode(), RunMode::Interactive);

        let cli = Cli::parse_from(["resume-ranker", "--resume_folder", "resumes", "--job", "job.txt"]);
        assert_eq!(cli.run_mode(), RunMode::Interactive);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "resume-ranker", "--keywords", "20", "--concurrency", "0", "--port", "9000", "--no-color",
        ]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.processing.num_keywords, 20);
        assert_eq!(config.processing.max_concurrency, 1);
        assert_eq!(config.server.port, 9000);
        assert!(!config.output.color_output);
    }
}
