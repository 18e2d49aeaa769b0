use crate::analyzers::grade::grade;
use crate::analyzers::score::{component_grade, score_subject, weighted_percentage};
use crate::analyzers::types::{
    ClassPerformance, ComponentAverages, OverallAggregate, StudentReport, StudentSummary,
    SubjectClassAverage, SubjectDetail,
};
use crate::analyzers::utility::{guarded_mean, mean};
use crate::config::SubjectCatalog;
use crate::marks::{Component, StudentRecord, TIME_ORDER};

/// Unweighted mean of the student's subject percentages, so every subject
/// counts equally regardless of its raw marks.
pub fn overall_for(record: &StudentRecord) -> OverallAggregate {
    let percents: Vec<f64> = record
        .subjects()
        .iter()
        .map(|entry| score_subject(&entry.marks).percentage)
        .collect();
    let percentage = mean(&percents);

    OverallAggregate {
        percentage,
        grade: grade(percentage),
    }
}

/// Roster-table row for one student.
pub fn summarize_student(record: &StudentRecord) -> StudentSummary {
    StudentSummary {
        roll: record.roll().to_string(),
        name: record.name().to_string(),
        total_marks: record.total_marks(),
        overall: overall_for(record),
    }
}

/// Per-subject breakdown plus overall result for one student.
pub fn student_report(record: &StudentRecord) -> StudentReport {
    let subjects = record
        .subjects()
        .iter()
        .map(|entry| {
            let marks = &entry.marks;
            let score = score_subject(marks);
            SubjectDetail {
                subject: entry.subject.clone(),
                cat1: marks.get(Component::Cat1),
                cat1_grade: component_grade(marks, Component::Cat1),
                cat2: marks.get(Component::Cat2),
                cat2_grade: component_grade(marks, Component::Cat2),
                fat: marks.get(Component::Fat),
                fat_grade: component_grade(marks, Component::Fat),
                internal_total: marks.internal_total(),
                grade: score.grade,
                percentage: score.percentage,
            }
        })
        .collect();

    StudentReport {
        roll: record.roll().to_string(),
        name: record.name().to_string(),
        subjects,
        overall: overall_for(record),
    }
}

/// Summaries sorted by descending overall percentage. The sort is stable,
/// so students with equal percentages keep the order they were given in.
pub fn rank_roster(records: &[&StudentRecord]) -> Vec<StudentSummary> {
    let mut rows: Vec<StudentSummary> = records.iter().map(|r| summarize_student(r)).collect();
    rows.sort_by(|a, b| b.overall.percentage.total_cmp(&a.overall.percentage));
    rows
}

/// Class-wide averages for every subject of the catalog.
///
/// Each component is averaged across the roster first and the weighted
/// formula is then applied to those averages, without the FAT pass gate.
/// Callers report an empty roster themselves; with no records every
/// average comes out as zero.
pub fn class_performance(records: &[&StudentRecord], catalog: &SubjectCatalog) -> ClassPerformance {
    let subjects: Vec<SubjectClassAverage> = catalog
        .subjects()
        .iter()
        .map(|subject| {
            let mut sums = [0.0; 6];
            let mut count = 0usize;

            for record in records {
                let Some(marks) = record.subject(subject) else {
                    continue;
                };
                count += 1;
                for (slot, (_, value)) in sums.iter_mut().zip(marks.iter()) {
                    *slot += value;
                }
            }

            let averages = ComponentAverages {
                values: sums.map(|sum| guarded_mean(sum, count)),
            };

            SubjectClassAverage {
                subject: subject.clone(),
                averages,
                percentage: weighted_percentage(|component| averages.get(component)),
            }
        })
        .collect();

    let percents: Vec<f64> = subjects.iter().map(|s| s.percentage).collect();

    ClassPerformance {
        student_count: records.len(),
        semester_average: mean(&percents),
        subjects,
    }
}

/// Mean over a student's subjects of each component's percentage of
/// maximum, in [`TIME_ORDER`].
pub fn student_timeline(record: &StudentRecord) -> Vec<f64> {
    TIME_ORDER
        .iter()
        .map(|&component| {
            let percents: Vec<f64> = record
                .subjects()
                .iter()
                .map(|entry| entry.marks.percent(component))
                .collect();
            mean(&percents)
        })
        .collect()
}

/// Mean over subjects of each class component average as a percentage of
/// maximum, in [`TIME_ORDER`].
pub fn class_timeline(class: &ClassPerformance) -> Vec<f64> {
    TIME_ORDER
        .iter()
        .map(|&component| {
            let percents: Vec<f64> = class
                .subjects
                .iter()
                .map(|s| s.averages.percent(component))
                .collect();
            mean(&percents)
        })
        .collect()
}
