//! Line-chart projections of percentage series over the semester.
//!
//! [`ChartSpec`] describes a chart independently of how it is drawn.
//! [`ChartRenderer`] consumes specs; [`JsonChartWriter`] writes them to disk
//! and [`LogChartRenderer`] records them in the log.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::analyzers::aggregate::{class_timeline, student_timeline};
use crate::analyzers::types::ClassPerformance;
use crate::marks::{StudentRecord, TIME_ORDER};

/// Colour of the aggregate line drawn alongside per-subject lines.
pub const AGGREGATE_COLOR: &str = "black";

/// One plotted line: a label and one percentage per component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLine {
    pub label: String,
    pub points: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A line chart over the semester's components.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    /// File-name friendly identifier.
    pub id: String,
    pub title: String,
    pub x_label: String,
    pub x_axis: Vec<String>,
    pub y_label: String,
    pub y_range: (f64, f64),
    pub show_legend: bool,
    pub lines: Vec<ChartLine>,
    pub generated_at: DateTime<Utc>,
}

impl ChartSpec {
    fn new(id: &str, title: &str, y_label: &str, lines: Vec<ChartLine>, show_legend: bool) -> Self {
        ChartSpec {
            id: id.to_string(),
            title: title.to_string(),
            x_label: "Exam".to_string(),
            x_axis: TIME_ORDER.iter().map(|c| c.label().to_string()).collect(),
            y_label: y_label.to_string(),
            y_range: (0.0, 100.0),
            show_legend,
            lines,
            generated_at: Utc::now(),
        }
    }
}

/// Each subject's component scores as percentages of their maxima.
pub fn student_subject_chart(record: &StudentRecord) -> ChartSpec {
    let lines = record
        .subjects()
        .iter()
        .map(|entry| ChartLine {
            label: entry.subject.clone(),
            points: TIME_ORDER.iter().map(|&c| entry.marks.percent(c)).collect(),
            color: None,
        })
        .collect();

    ChartSpec::new(
        &format!("student_{}_subjects", record.roll()),
        "Individual Subject Performance Over Time (Percentage)",
        "Percentage",
        lines,
        true,
    )
}

/// The student's mean component percentage across subjects.
pub fn student_overall_chart(record: &StudentRecord) -> ChartSpec {
    let line = ChartLine {
        label: record.name().to_string(),
        points: student_timeline(record),
        color: Some(AGGREGATE_COLOR.to_string()),
    };

    ChartSpec::new(
        &format!("student_{}_overall", record.roll()),
        "Overall Performance Over Semester (Percentage)",
        "Average Percentage",
        vec![line],
        false,
    )
}

/// Class component averages per subject, as percentages of maxima.
pub fn class_subject_chart(class: &ClassPerformance) -> ChartSpec {
    let lines = class
        .subjects
        .iter()
        .map(|subject| ChartLine {
            label: subject.subject.clone(),
            points: TIME_ORDER.iter().map(|&c| subject.averages.percent(c)).collect(),
            color: None,
        })
        .collect();

    ChartSpec::new(
        "class_subjects",
        "Class Average per Subject Over Semester (Percentage)",
        "Average Percentage",
        lines,
        true,
    )
}

/// Class component averages, averaged again across subjects.
pub fn class_overall_chart(class: &ClassPerformance) -> ChartSpec {
    let line = ChartLine {
        label: "Class".to_string(),
        points: class_timeline(class),
        color: Some(AGGREGATE_COLOR.to_string()),
    };

    ChartSpec::new(
        "class_overall",
        "Class Overall Average Over Semester (Percentage)",
        "Average Percentage",
        vec![line],
        false,
    )
}

/// Draws (or otherwise publishes) chart specs. Nothing is returned to the
/// caller beyond success or failure.
pub trait ChartRenderer {
    fn render(&self, chart: &ChartSpec) -> Result<()>;
}

/// Writes each chart as `<id>.json` into a directory.
pub struct JsonChartWriter {
    dir: PathBuf,
}

impl JsonChartWriter {
    /// Creates the directory if it does not already exist.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn path_for(&self, chart: &ChartSpec) -> PathBuf {
        let file_name: String = chart
            .id
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
            .collect();
        self.dir.join(format!("{file_name}.json"))
    }
}

impl ChartRenderer for JsonChartWriter {
    fn render(&self, chart: &ChartSpec) -> Result<()> {
        let path = self.path_for(chart);
        std::fs::write(&path, serde_json::to_string_pretty(chart)?)?;
        info!(path = %path.display(), title = %chart.title, "Chart written");
        Ok(())
    }
}

/// Records charts in the debug log only.
#[derive(Default)]
pub struct LogChartRenderer;

impl ChartRenderer for LogChartRenderer {
    fn render(&self, chart: &ChartSpec) -> Result<()> {
        debug!(
            id = %chart.id,
            title = %chart.title,
            lines = chart.lines.len(),
            "Chart projected"
        );
        Ok(())
    }
}
