//! Resume matcher: keyword match scoring between a resume and a job description

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use resume_matcher::cli::{self, Cli, Commands, ConfigAction, JobSource};
use resume_matcher::config::{Config, OutputFormat};
use resume_matcher::error::{Result, ResumeMatcherError};
use resume_matcher::input::InputManager;
use resume_matcher::output::formatter::{save_report_to_file, ReportGenerator};
use resume_matcher::output::report::MatchReport;
use resume_matcher::processing::{Analyzer, KeywordExtractor};
use std::path::Path;
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level)
    ).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            seniority,
            output,
            save,
            detailed,
            no_color,
        } => {
            cli::validate_file_extension(&resume, &["pdf", "txt", "md", "markdown"])
                .map_err(|e| ResumeMatcherError::InvalidInput(format!("Resume file: {}", e)))?;

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(ResumeMatcherError::InvalidInput)?,
                None => config.output.format,
            };
            let seniority = cli::parse_seniority(&seniority).map_err(ResumeMatcherError::InvalidInput)?;

            let mut input_manager = InputManager::from_config(&config.input);
            let (job_text, job_source) = read_job_description(&mut input_manager, &job).await?;

            info!("Analyzing {} against {}", resume.display(), job_source);
            let resume_text = extract_resume(&mut input_manager, &resume, output_format).await?;

            let analyzer = Analyzer::new(&config.keywords)?;
            let analysis = analyzer.analyze(&resume_text, &job_text);

            let report = MatchReport::from_analysis(
                &analysis,
                seniority,
                config.output.include_tips,
                resume.display().to_string(),
                job_source,
            );

            let use_colors = config.output.color_output && !no_color && save.is_none();
            let generator = ReportGenerator::with_options(
                use_colors,
                detailed || config.output.detailed,
                true,
                true,
                true,
            );
            let rendered = generator.generate_report(&report, &output_format)?;

            match save {
                Some(path) => {
                    save_report_to_file(&rendered, &path)?;
                    println!("{}", report.summary.summary_line());
                    println!("Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Keywords { job } => {
            let mut input_manager = InputManager::from_config(&config.input);
            let (job_text, _) = read_job_description(&mut input_manager, &job).await?;

            let analyzer = Analyzer::new(&config.keywords)?;
            for keyword in analyzer.keywords(&job_text).iter() {
                println!("{}", keyword);
            }
        }

        Commands::Phrases => {
            let extractor = KeywordExtractor::from_config(&config.keywords)?;
            for phrase in extractor.phrases().iter() {
                println!("{}", phrase);
            }
        }

        Commands::Config { action } => {
            match action {
                Some(ConfigAction::Show) | None => {
                    let content = toml::to_string_pretty(&config)
                        .map_err(|e| ResumeMatcherError::Configuration(format!("Failed to serialize config: {}", e)))?;
                    println!("# {}", config_path.display());
                    println!("{}", content);
                }

                Some(ConfigAction::Reset) => {
                    Config::default().save_to(config_path)?;
                    println!("Configuration reset: {}", config_path.display());
                }

                Some(ConfigAction::Path) => {
                    println!("{}", config_path.display());
                }
            }
        }
    }

    Ok(())
}

/// Resolve the job description from a file or inline text, rejecting blank input.
async fn read_job_description(input_manager: &mut InputManager, source: &JobSource) -> Result<(String, String)> {
    let (text, label) = match (&source.job, &source.job_text) {
        (Some(path), _) => {
            cli::validate_file_extension(path, &["txt", "md", "markdown"])
                .map_err(|e| ResumeMatcherError::InvalidInput(format!("Job description file: {}", e)))?;
            (input_manager.extract_text(path).await?, path.display().to_string())
        }
        (None, Some(text)) => (text.clone(), "inline text".to_string()),
        (None, None) => {
            return Err(ResumeMatcherError::InvalidInput(
                "Provide a job description with --job or --job-text".to_string(),
            ))
        }
    };

    if text.trim().is_empty() {
        return Err(ResumeMatcherError::EmptyInput("Please provide a job description".to_string()));
    }

    Ok((text, label))
}

async fn extract_resume(input_manager: &mut InputManager, resume: &Path, format: OutputFormat) -> Result<String> {
    if format != OutputFormat::Console {
        return input_manager.extract_text(resume).await;
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Reading {}", resume.display()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = input_manager.extract_text(resume).await;
    spinner.finish_and_clear();
    result
}
