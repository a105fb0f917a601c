//! PaperCheck CLI - drive the upload flow against local files
//!
//! ```bash
//! papercheck stage paper.pdf scan.png      # Check which files would be staged
//! papercheck submit paper.pdf scan.png     # Stage, simulate submission, print results
//! papercheck results --json                # Print the sample grading result
//! papercheck config                        # Print the effective configuration
//! ```

use clap::{Parser, Subcommand};
use futures::StreamExt;
use papercheck::{
    format_megabytes, simulate, AppConfig, GradingBackend, GradingResult, LocalFile, Notice,
    SampleGrading, StageReport, SubmissionState, UploadEffect, UploadSession,
};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "papercheck")]
#[command(about = "Stage exam papers and simulate checking them", long_about = None)]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show which files would be accepted
    Stage {
        /// Candidate files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Stage files, simulate the submission and print the result
    Submit {
        /// Candidate files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the sample grading result
    Results {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration
    Config,
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto);

    let result = match AppConfig::from_env() {
        Ok(config) => match cli.command {
            Commands::Stage { files } => cmd_stage(&config, files),
            Commands::Submit { files, json } => cmd_submit(&config, files, json).await,
            Commands::Results { json } => cmd_results(json),
            Commands::Config => cmd_config(&config),
        },
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn load_files(paths: Vec<PathBuf>) -> Result<Vec<LocalFile>, Box<dyn std::error::Error>> {
    paths
        .into_iter()
        .map(|p| {
            LocalFile::from_path(&p)
                .map_err(|e| Box::<dyn std::error::Error>::from(format!("{}: {}", p.display(), e)))
        })
        .collect()
}

fn print_report(session: &UploadSession<LocalFile, ()>, report: &StageReport) {
    for file in session.files() {
        eprintln!("   ✅ {} ({}, {})", file.name(), file.mime_type(), file.size_label());
    }
    for rejection in &report.rejected {
        let notice = Notice::from(rejection);
        eprintln!("   ⚠️  {}: {}", notice.title, notice.description);
    }
}

fn cmd_stage(config: &AppConfig, paths: Vec<PathBuf>) -> CliResult {
    let files = load_files(paths)?;
    eprintln!("📄 Checking {} file(s)", files.len());

    let mut session: UploadSession<LocalFile, ()> = UploadSession::new(config.upload.clone());
    let report = session.offer(files, |_| None)?;
    print_report(&session, &report);

    eprintln!(
        "\n📊 {} accepted, {} rejected",
        report.accepted.len(),
        report.rejected.len()
    );
    Ok(())
}

async fn cmd_submit(config: &AppConfig, paths: Vec<PathBuf>, json: bool) -> CliResult {
    let files = load_files(paths)?;
    let mut session: UploadSession<LocalFile, ()> = UploadSession::new(config.upload.clone());
    let report = session.offer(files, |_| None)?;
    print_report(&session, &report);

    let submission = session.submit().map_err(|e| {
        let notice = Notice::from(&e);
        format!("{} - {}", notice.title, notice.description)
    })?;

    let grading = SampleGrading::new();
    let ticket = grading.submit(&submission.batch)?;
    eprintln!(
        "\n📤 Submitting {} file(s), {} (job {})",
        submission.batch.len(),
        format_megabytes(submission.batch.total_size()),
        ticket
    );

    let (mut events, _handle) = simulate(&config.timing, tokio::time::sleep);
    let mut shown = false;
    while let Some(event) = events.next().await {
        match session.apply(submission.attempt, event) {
            Some(UploadEffect::Notify(notice)) => {
                draw_progress(session.progress());
                eprintln!("\n✨ {}", notice.title);
                eprintln!("   {}", notice.description);
            }
            Some(UploadEffect::ShowResults(_)) => {
                shown = true;
                break;
            }
            None => {
                if let SubmissionState::InProgress { progress } = session.state() {
                    draw_progress(progress);
                }
            }
        }
    }

    if !shown {
        return Err("submission ended before the results were ready".into());
    }

    let result = grading.result(&ticket)?;
    print_result(&result, json)
}

fn draw_progress(progress: u8) {
    let filled = usize::from(progress / 5);
    eprint!(
        "\r   [{}{}] {:>3}% complete",
        "█".repeat(filled),
        "░".repeat(20 - filled),
        progress
    );
    let _ = std::io::stderr().flush();
}

fn cmd_results(json: bool) -> CliResult {
    print_result(&GradingResult::sample(), json)
}

fn print_result(result: &GradingResult, json: bool) -> CliResult {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    println!("\n📋 {} ({})", result.paper_title, result.subject);
    println!(
        "   Score: {}/{}  •  {}%  •  Grade {}",
        result.achieved_marks, result.total_marks, result.percentage, result.grade
    );

    let counts = result.status_counts();
    println!(
        "   Correct: {}  Partial: {}  Incorrect: {}\n",
        counts.correct, counts.partial, counts.incorrect
    );

    for q in &result.questions {
        let icon = match q.status {
            papercheck::QuestionStatus::Correct => "✅",
            papercheck::QuestionStatus::Partial => "⚠️ ",
            papercheck::QuestionStatus::Incorrect => "❌",
        };
        println!(
            "  {} Question {:<5} {:>2}/{:<2} marks",
            icon, q.question_number, q.achieved_marks, q.max_marks
        );
        println!("     {}", q.feedback);
    }
    Ok(())
}

fn cmd_config(config: &AppConfig) -> CliResult {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
