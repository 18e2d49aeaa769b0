//! Text rendering of student, roster and class reports.
//!
//! Supports fixed-width tables for the terminal and JSON for scripting.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::analyzers::grade::Letter;
use crate::analyzers::types::{ClassPerformance, StudentReport, StudentSummary};
use crate::marks::Component;
use crate::table::{ColumnLayout, Fixed2, render};

/// Message shown whenever a view needs at least one student.
pub const NO_RECORDS: &str = "No student records available.";

/// Message shown when class performance is asked of an empty roster.
pub const NO_CLASS_RECORDS: &str = "No student records to calculate class performance.";

#[derive(Tabled)]
struct SubjectRow {
    #[tabled(rename = "Subject")]
    subject: String,
    #[tabled(rename = "CAT1")]
    cat1: Fixed2,
    #[tabled(rename = "Gr1")]
    cat1_grade: Letter,
    #[tabled(rename = "CAT2")]
    cat2: Fixed2,
    #[tabled(rename = "Gr2")]
    cat2_grade: Letter,
    #[tabled(rename = "FAT")]
    fat: Fixed2,
    #[tabled(rename = "FATGr")]
    fat_grade: Letter,
    #[tabled(rename = "Internal")]
    internal_total: Fixed2,
    #[tabled(rename = "Grade")]
    grade: Letter,
    #[tabled(rename = "Tot%")]
    percentage: Fixed2,
}

const SUBJECT_LAYOUT: [ColumnLayout; 10] = [
    ColumnLayout::text(30),
    ColumnLayout::number(6),
    ColumnLayout::text(3),
    ColumnLayout::number(6),
    ColumnLayout::text(3),
    ColumnLayout::number(7),
    ColumnLayout::text(3),
    ColumnLayout::number(8),
    ColumnLayout::text(5),
    ColumnLayout::number(6),
];

#[derive(Tabled)]
struct RosterRow {
    #[tabled(rename = "Roll Number")]
    roll: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Total Marks")]
    total_marks: Fixed2,
    #[tabled(rename = "Avg %")]
    percentage: Fixed2,
    #[tabled(rename = "Grade")]
    grade: Letter,
}

const ROSTER_LAYOUT: [ColumnLayout; 5] = [
    ColumnLayout::text(10),
    ColumnLayout::text(28),
    ColumnLayout::number(12),
    ColumnLayout::number(7),
    ColumnLayout::text(5),
];

#[derive(Tabled)]
struct ComponentAverageRow {
    #[tabled(rename = "Subject")]
    subject: String,
    #[tabled(rename = "CAT1 Avg")]
    cat1: Fixed2,
    #[tabled(rename = "CAT2 Avg")]
    cat2: Fixed2,
    #[tabled(rename = "FAT Avg")]
    fat: Fixed2,
    #[tabled(rename = "Cumulative Internals Avg")]
    internals: Fixed2,
}

const COMPONENT_LAYOUT: [ColumnLayout; 5] = [
    ColumnLayout::text(30),
    ColumnLayout::number(10),
    ColumnLayout::number(10),
    ColumnLayout::number(10),
    ColumnLayout::number(24),
];

#[derive(Tabled)]
struct SubjectPercentRow {
    #[tabled(rename = "Subject")]
    subject: String,
    #[tabled(rename = "Avg %")]
    percentage: Fixed2,
}

const PERCENT_LAYOUT: [ColumnLayout; 2] = [ColumnLayout::text(30), ColumnLayout::number(8)];

/// Per-subject breakdown of one student followed by the overall result.
pub fn render_student_report(report: &StudentReport) -> String {
    let rows: Vec<SubjectRow> = report
        .subjects
        .iter()
        .map(|row| SubjectRow {
            subject: row.subject.clone(),
            cat1: row.cat1.into(),
            cat1_grade: row.cat1_grade,
            cat2: row.cat2.into(),
            cat2_grade: row.cat2_grade,
            fat: row.fat.into(),
            fat_grade: row.fat_grade,
            internal_total: row.internal_total.into(),
            grade: row.grade,
            percentage: row.percentage.into(),
        })
        .collect();

    format!(
        "\nDetails for {} (Roll: {}):\n\n{}\nOverall Percentage (All Subjects): {:.2}%\nOverall Grade: {}\n",
        report.name,
        report.roll,
        render(&rows, &SUBJECT_LAYOUT),
        report.overall.percentage,
        report.overall.grade,
    )
}

/// The roster table, in the order given (already ranked by the caller).
pub fn render_roster(rows: &[StudentSummary]) -> String {
    if rows.is_empty() {
        return format!("{NO_RECORDS}\n");
    }

    let rows: Vec<RosterRow> = rows
        .iter()
        .map(|row| RosterRow {
            roll: row.roll.clone(),
            name: row.name.clone(),
            total_marks: row.total_marks.into(),
            percentage: row.overall.percentage.into(),
            grade: row.overall.grade,
        })
        .collect();

    format!("\n{}\n", render(&rows, &ROSTER_LAYOUT))
}

/// Class component averages, per-subject class percentages and the
/// semester average.
pub fn render_class_performance(class: &ClassPerformance) -> String {
    let components: Vec<ComponentAverageRow> = class
        .subjects
        .iter()
        .map(|subject| ComponentAverageRow {
            subject: subject.subject.clone(),
            cat1: subject.averages.get(Component::Cat1).into(),
            cat2: subject.averages.get(Component::Cat2).into(),
            fat: subject.averages.get(Component::Fat).into(),
            internals: subject.averages.internal_total().into(),
        })
        .collect();

    let percents: Vec<SubjectPercentRow> = class
        .subjects
        .iter()
        .map(|subject| SubjectPercentRow {
            subject: subject.subject.clone(),
            percentage: subject.percentage.into(),
        })
        .collect();

    format!(
        "\nClass Performance:\n{}\nOverall Average per Subject (in %):\n{}\nOverall Semester Average: {:.2}%\n",
        render(&components, &COMPONENT_LAYOUT),
        render(&percents, &PERCENT_LAYOUT),
        class.semester_average,
    )
}

/// Serializes any report payload as pretty JSON.
pub fn to_json<T: Serialize>(payload: &T) -> Result<String> {
    let json = serde_json::to_string_pretty(payload)?;
    debug!(bytes = json.len(), "Serialized report payload");
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::aggregate::{class_performance, rank_roster, student_report};
    use crate::config::SubjectCatalog;
    use crate::marks::{StudentRecord, SubjectEntry, SubjectMarks};

    fn record(roll: &str, name: &str, fat: f64) -> StudentRecord {
        let marks = SubjectMarks::new(8.0, 40.0, 8.0, 40.0, 8.0, fat).unwrap();
        StudentRecord::new(
            roll,
            name,
            vec![
                SubjectEntry {
                    subject: "Physics".into(),
                    marks,
                },
                SubjectEntry {
                    subject: "Chemistry".into(),
                    marks,
                },
            ],
        )
    }

    fn catalog() -> SubjectCatalog {
        SubjectCatalog::new(vec!["Physics".into(), "Chemistry".into()]).unwrap()
    }

    #[test]
    fn test_render_student_report() {
        let rendered = render_student_report(&student_report(&record("21BCE7", "Asha", 64.0)));

        assert!(rendered.contains("Details for Asha (Roll: 21BCE7):"));
        assert!(rendered.contains("Tot%"));
        assert!(rendered.contains("Overall Percentage (All Subjects): 80.00%"));
        assert!(rendered.contains("Overall Grade: A"));

        let physics = rendered.lines().find(|l| l.starts_with("Physics")).unwrap();
        assert!(physics.contains("40.00"));
        assert!(physics.contains("24.00"));
        assert!(physics.ends_with("80.00"));
    }

    #[test]
    fn test_render_roster_order_and_values() {
        let a = record("r1", "Low", 40.0);
        let b = record("r2", "High", 80.0);
        let rendered = render_roster(&rank_roster(&[&a, &b]));

        let high = rendered.find("High").unwrap();
        let low = rendered.find("Low").unwrap();
        assert!(high < low);
        assert!(rendered.contains("Roll Number"));
        assert!(rendered.contains("Total Marks"));
    }

    #[test]
    fn test_render_roster_empty() {
        assert_eq!(render_roster(&[]), format!("{NO_RECORDS}\n"));
    }

    #[test]
    fn test_render_class_performance() {
        let a = record("r1", "A", 64.0);
        let rendered = render_class_performance(&class_performance(&[&a], &catalog()));

        assert!(rendered.contains("Class Performance:"));
        assert!(rendered.contains("Cumulative Internals Avg"));
        assert!(rendered.contains("Overall Average per Subject (in %):"));
        assert!(rendered.contains("Overall Semester Average: 80.00%"));
    }

    #[test]
    fn test_to_json() {
        let json = to_json(&student_report(&record("r1", "A", 64.0))).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["roll"], "r1");
        assert_eq!(value["overall"]["grade"], "A");
        assert_eq!(value["subjects"].as_array().unwrap().len(), 2);
    }
}
