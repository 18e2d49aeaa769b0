//! Data types produced by the aggregation pipeline.

use crate::analyzers::grade::Letter;
use crate::marks::{Component, TIME_ORDER};
use serde::Serialize;

/// Overall percentage and letter grade across a student's subjects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverallAggregate {
    pub percentage: f64,
    pub grade: Letter,
}

/// One row of the roster table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentSummary {
    pub roll: String,
    pub name: String,
    /// Sum of every raw component score over all subjects.
    pub total_marks: f64,
    pub overall: OverallAggregate,
}

/// One subject row of a student's detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectDetail {
    pub subject: String,
    pub cat1: f64,
    pub cat1_grade: Letter,
    pub cat2: f64,
    pub cat2_grade: Letter,
    pub fat: f64,
    pub fat_grade: Letter,
    pub internal_total: f64,
    pub grade: Letter,
    pub percentage: f64,
}

/// Everything shown for a single student.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentReport {
    pub roll: String,
    pub name: String,
    pub subjects: Vec<SubjectDetail>,
    pub overall: OverallAggregate,
}

/// Mean raw score of each component, indexed like [`TIME_ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComponentAverages {
    pub(crate) values: [f64; 6],
}

impl ComponentAverages {
    pub fn get(&self, component: Component) -> f64 {
        TIME_ORDER
            .iter()
            .position(|&c| c == component)
            .map(|i| self.values[i])
            .unwrap_or(0.0)
    }

    /// Average as a percentage of the component's maximum.
    pub fn percent(&self, component: Component) -> f64 {
        self.get(component) / component.max() * 100.0
    }

    /// `avg(Internal1) + avg(Internal2) + avg(Internal3)`.
    pub fn internal_total(&self) -> f64 {
        self.get(Component::Internal1) + self.get(Component::Internal2) + self.get(Component::Internal3)
    }
}

/// Class-wide averages for one subject.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectClassAverage {
    pub subject: String,
    pub averages: ComponentAverages,
    /// Weighted percentage of the averaged components. The FAT pass gate
    /// does not apply to class averages.
    pub percentage: f64,
}

/// Class performance across the whole roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassPerformance {
    pub student_count: usize,
    pub subjects: Vec<SubjectClassAverage>,
    /// Unweighted mean of the per-subject class percentages.
    pub semester_average: f64,
}
