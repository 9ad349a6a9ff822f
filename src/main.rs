//! CLI entry point for the gradebook report tool.
//!
//! Loads the roster, assignment, and submission files, then either runs the
//! interactive menu or answers a single query given as a subcommand.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use gradebook_report::analyzers::report::ClassReport;
use gradebook_report::config::DataConfig;
use gradebook_report::gradebook::Gradebook;
use gradebook_report::menu::{
    assignment_graph_text, assignment_statistics_text, run_menu, student_grade_text,
};
use gradebook_report::output::{print_pretty, to_json, write_csv, write_csv_to, write_json};
use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "gradebook_report")]
#[command(about = "Student grades and assignment statistics from flat gradebook files", long_about = None)]
struct Cli {
    #[command(flatten)]
    data: DataConfig,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (the default when no subcommand is given)
    Menu,
    /// Print a student's overall percentage grade
    Grade {
        #[arg(value_name = "STUDENT_NAME")]
        name: String,
    },
    /// Print min, average and max score of an assignment
    Stats {
        #[arg(value_name = "ASSIGNMENT_NAME")]
        name: String,
    },
    /// Print the score histogram of an assignment
    Histogram {
        #[arg(value_name = "ASSIGNMENT_NAME")]
        name: String,
    },
    /// Report every student's grade and every assignment's statistics
    Report {
        /// File to write to; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = ReportFormat::Csv)]
        format: ReportFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportFormat {
    Csv,
    Json,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + optional JSON rolling log file
    let (json_writer, _file_guard) = match std::env::var("LOG_FILE_PATH") {
        Ok(log_file_path) => {
            let log_dir = Path::new(&log_file_path)
                .parent()
                .unwrap_or(Path::new("logs"));
            let log_file_name = Path::new(&log_file_path)
                .file_name()
                .unwrap_or(OsStr::new("gradebook.log"));
            let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
            let (writer, guard) = tracing_appender::non_blocking(file_appender);
            (Some(writer), Some(guard))
        }
        Err(_) => (None, None),
    };

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse()?));

    let json_layer = match json_writer {
        Some(writer) => Some(
            fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(writer)
                .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?)),
        ),
        None => None,
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let book = Gradebook::load(&cli.data)?;

    let result = match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = io::stdin();
            run_menu(&book, &mut stdin.lock(), &mut io::stdout())
        }
        Commands::Grade { name } => {
            student_grade_text(&book, &name).map_err(anyhow::Error::from).and_then(print_line)
        }
        Commands::Stats { name } => print_line(assignment_statistics_text(&book, &name)),
        Commands::Histogram { name } => print_line(assignment_graph_text(&book, &name)),
        Commands::Report { output, format } => report(&book, output.as_deref(), format),
    };

    if let Err(e) = &result {
        error!(error = %e, "Query failed");
    }
    result
}

fn print_line(text: String) -> Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{text}")?;
    stdout.flush()?;
    Ok(())
}

/// Builds the class report and writes it to `output`, or stdout.
#[tracing::instrument(skip(book, format))]
fn report(book: &Gradebook, output: Option<&Path>, format: ReportFormat) -> Result<()> {
    let report = ClassReport::build(book)?;
    print_pretty(&report);

    info!(
        students = report.students.len(),
        assignments = report.assignments.len(),
        "Class report built"
    );

    match (output, format) {
        (Some(path), ReportFormat::Csv) => write_csv(path, &report),
        (Some(path), ReportFormat::Json) => write_json(path, &report),
        (None, ReportFormat::Csv) => write_csv_to(io::stdout().lock(), &report),
        (None, ReportFormat::Json) => print_line(to_json(&report)?),
    }
}
