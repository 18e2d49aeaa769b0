//! CLI entry point for the student marks tool.
//!
//! Provides an interactive roster menu, a listing of the subject catalog,
//! and a batch report over a CSV marks sheet.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::Path;
use student_marks::{
    analyzers::aggregate::{class_performance, rank_roster},
    analyzers::types::{ClassPerformance, StudentSummary},
    chart::{
        ChartRenderer, JsonChartWriter, LogChartRenderer, class_overall_chart, class_subject_chart,
    },
    config::SubjectCatalog,
    menu::run_menu,
    output::{NO_RECORDS, render_class_performance, render_roster, to_json},
    roster::{InMemoryRoster, RosterStore},
    sheet::{build_roster, load_sheet},
};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "student_marks")]
#[command(about = "Record exam marks and report weighted grades", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args, Clone, Default)]
struct CommonArgs {
    /// JSON file listing the subject catalog (defaults to the built-in subjects)
    #[arg(long, global = true, value_name = "FILE")]
    subjects: Option<String>,

    /// Directory to write chart specifications to as JSON
    #[arg(long, global = true, value_name = "DIR")]
    chart_dir: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive roster menu (default)
    Run,
    /// Print the subject catalog in use
    Catalog,
    /// Load a CSV marks sheet and print the roster and class performance
    Report {
        /// CSV file with one row per student and subject
        #[arg(short, long, value_name = "CSV")]
        marks: String,

        /// Print JSON instead of tables
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: quiet stderr (the menu owns stdout) + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/student_marks.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("student_marks.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let catalog = match &cli.common.subjects {
        Some(path) => SubjectCatalog::load(path)?,
        None => SubjectCatalog::default(),
    };
    info!(subjects = catalog.len(), "Subject catalog ready");

    let charts: Box<dyn ChartRenderer> = match &cli.common.chart_dir {
        Some(dir) => Box::new(JsonChartWriter::new(dir)?),
        None => Box::new(LogChartRenderer),
    };

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let mut store = InMemoryRoster::new();
            let stdin = io::stdin();
            let mut reader = stdin.lock();
            let mut writer = io::stdout();
            run_menu(&mut store, &catalog, charts.as_ref(), &mut reader, &mut writer)?;
            info!(students = store.len(), "Session ended");
        }
        Commands::Catalog => {
            let mut out = io::stdout();
            for (i, subject) in catalog.subjects().iter().enumerate() {
                writeln!(out, "{}. {}", i + 1, subject)?;
            }
        }
        Commands::Report { marks, json } => {
            report(&marks, json, &catalog, charts.as_ref())?;
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct ReportPayload<'a> {
    students: &'a [StudentSummary],
    class: &'a ClassPerformance,
}

/// Builds a roster from a marks sheet and prints the roster table and class
/// performance.
#[tracing::instrument(skip(catalog, charts))]
fn report(marks: &str, json: bool, catalog: &SubjectCatalog, charts: &dyn ChartRenderer) -> Result<()> {
    let mut store = InMemoryRoster::new();
    build_roster(&mut store, catalog, load_sheet(marks)?)?;

    let mut out = io::stdout();
    if store.is_empty() {
        writeln!(out, "{NO_RECORDS}")?;
        return Ok(());
    }

    let records = store.all();
    let ranking = rank_roster(&records);
    let class = class_performance(&records, catalog);

    if json {
        let payload = ReportPayload {
            students: &ranking,
            class: &class,
        };
        writeln!(out, "{}", to_json(&payload)?)?;
    } else {
        write!(out, "{}", render_roster(&ranking))?;
        write!(out, "{}", render_class_performance(&class))?;
    }

    charts.render(&class_subject_chart(&class))?;
    charts.render(&class_overall_chart(&class))?;

    Ok(())
}
