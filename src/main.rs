use anyhow::Result;
use bayes_spam_filter::cli::{self, Cli, Commands, RunOptions};
use bayes_spam_filter::config::{Config, PathsConfig};
use bayes_spam_filter::error::SpamFilterError;
use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Exit with proper code on error
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);

        // Input errors get a hint and exit code 2
        let code = match e.downcast_ref::<SpamFilterError>() {
            Some(err) => err.exit_code(),
            None => 1,
        };
        if code == 2 {
            eprintln!("\nCheck the corpus files and configuration, or run: bayes-spam-filter --help");
        }
        process::exit(code);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with level based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("bayes_spam_filter=debug,info"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("bayes_spam_filter=info,warn"))
    };

    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    match cli.command {
        Commands::Run {
            train_spam,
            train_ham,
            test_spam,
            test_ham,
            format,
            output,
            no_prompt,
        } => {
            tracing::info!("Starting training and evaluation run");

            let options = RunOptions {
                paths: PathsConfig {
                    train_spam,
                    train_ham,
                    test_spam,
                    test_ham,
                },
                format,
                output,
                no_prompt,
            };

            let outcome = cli::run_pipeline(&cli.config, &options).await?;
            let rendered = outcome.report.render(outcome.format)?;
            print!("{}", rendered);

            if let Some(path) = outcome.output {
                outcome.report.save(&path, outcome.format).await?;
                eprintln!("Report saved to: {:?}", path);
            }

            Ok(())
        }

        Commands::InitConfig { output, force } => {
            tracing::info!("Generating example configuration file");

            if output.exists() && !force {
                return Err(SpamFilterError::ConfigError(format!(
                    "Configuration file already exists at {:?}. Use --force to overwrite.",
                    output
                ))
                .into());
            }

            Config::create_example(&output).await?;

            println!("Created example configuration file at: {:?}", output);
            println!("\nPlease edit this file to customize your settings.");
            println!("Key settings to review:");
            println!("  - paths.*: Corpus files (prompted for when left unset)");
            println!("  - corpus.subject_marker / corpus.body_marker: Email delimiters");
            println!("  - output.format: 'text', 'markdown', or 'json'");

            Ok(())
        }
    }
}
