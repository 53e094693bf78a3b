//! Command-line interface

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use crate::config::{Config, PathsConfig};
use crate::error::Result;
use crate::evaluator::Evaluator;
use crate::interactive::{resolve_paths, PathPrompt, TerminalPrompt};
use crate::report::{ReportFormat, RunReport};
use crate::sources::CorpusTexts;
use crate::trainer::Trainer;

#[derive(Parser, Debug)]
#[command(name = "bayes-spam-filter")]
#[command(version)]
#[command(about = "Train and evaluate a Bernoulli Naive Bayes spam filter", long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "spam-filter.toml")]
    pub config: PathBuf,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train on the training corpora and classify the test corpora
    Run {
        /// Spam training corpus
        #[arg(long)]
        train_spam: Option<PathBuf>,

        /// Ham training corpus
        #[arg(long)]
        train_ham: Option<PathBuf>,

        /// Spam test corpus
        #[arg(long)]
        test_spam: Option<PathBuf>,

        /// Ham test corpus
        #[arg(long)]
        test_ham: Option<PathBuf>,

        /// Report format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<ReportFormat>,

        /// Also write the report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail instead of prompting for missing corpus paths
        #[arg(long)]
        no_prompt: bool,
    },

    /// Generate example configuration file
    InitConfig {
        /// Path to create config file
        #[arg(short, long, default_value = "spam-filter.toml")]
        output: PathBuf,

        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },
}

/// Spinner-based progress reporting on stderr
pub struct ProgressReporter {
    spinner_style: ProgressStyle,
}

impl ProgressReporter {
    pub fn new() -> Self {
        let spinner_style = ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed:>6}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ");

        Self { spinner_style }
    }

    pub fn add_spinner(&self, msg: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(self.spinner_style.clone());
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    /// Finish a spinner and leave a one-line summary on stderr
    pub fn finish_spinner(&self, pb: &ProgressBar, msg: &str) {
        pb.finish_and_clear();
        eprintln!("  ✓ {}", msg);
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Options of the `run` subcommand
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Corpus paths given on the command line
    pub paths: PathsConfig,
    pub format: Option<ReportFormat>,
    pub output: Option<PathBuf>,
    pub no_prompt: bool,
}

/// Finished run plus where and how to present it
#[derive(Debug)]
pub struct PipelineOutcome {
    pub report: RunReport,
    pub format: ReportFormat,
    pub output: Option<PathBuf>,
}

/// Train on the training texts and evaluate on the test texts
pub fn run_with_texts(config: &Config, texts: &CorpusTexts) -> Result<RunReport> {
    let parser = config.corpus.parser()?;

    let model = Trainer::new(parser.clone()).train(&texts.train_spam, &texts.train_ham)?;
    let evaluation = Evaluator::new(parser).evaluate(&texts.test_spam, &texts.test_ham, &model);

    Ok(RunReport::new(&model, evaluation))
}

/// Orchestrates a complete run:
/// 1. Load configuration
/// 2. Resolve the four corpus paths (flags, then config, then prompt)
/// 3. Read the corpora
/// 4. Train and evaluate
pub async fn run_pipeline(config_path: &Path, options: &RunOptions) -> Result<PipelineOutcome> {
    let reporter = ProgressReporter::new();

    let config = Config::load(config_path).await?;

    let paths = {
        let terminal = TerminalPrompt;
        let prompt: Option<&dyn PathPrompt> = if options.no_prompt {
            None
        } else {
            Some(&terminal)
        };
        resolve_paths(&options.paths, &config.paths, prompt)?
    };

    let load_spinner = reporter.add_spinner("Reading corpora...");
    let texts = paths.load().await?;
    reporter.finish_spinner(&load_spinner, "Corpora loaded");

    let run_spinner = reporter.add_spinner("Training and evaluating...");
    let report = run_with_texts(&config, &texts)?;
    reporter.finish_spinner(
        &run_spinner,
        &format!(
            "Classified {} test documents with a {}-word vocabulary",
            report.evaluation.total_documents, report.model.vocabulary_size
        ),
    );

    info!("Run {} complete", report.run_id);

    Ok(PipelineOutcome {
        report,
        format: options.format.unwrap_or(config.output.format),
        output: options
            .output
            .clone()
            .or_else(|| config.output.report_path.clone()),
    })
}
