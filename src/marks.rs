//! Raw marks as entered for a student: exam components, per-subject marks
//! and the student record that owns them.

use crate::error::ScoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six assessed components of a subject, in the order they are
/// sat during the semester.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Component {
    Internal1,
    #[serde(rename = "CAT1")]
    Cat1,
    Internal2,
    #[serde(rename = "CAT2")]
    Cat2,
    Internal3,
    #[serde(rename = "FAT")]
    Fat,
}

/// Components in semester order. Charts use this as their x axis and input
/// prompts follow it.
pub const TIME_ORDER: [Component; 6] = [
    Component::Internal1,
    Component::Cat1,
    Component::Internal2,
    Component::Cat2,
    Component::Internal3,
    Component::Fat,
];

impl Component {
    /// Maximum raw score for the component.
    pub fn max(self) -> f64 {
        match self {
            Component::Internal1 | Component::Internal2 | Component::Internal3 => 10.0,
            Component::Cat1 | Component::Cat2 => 50.0,
            Component::Fat => 80.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Component::Internal1 => "Internal1",
            Component::Cat1 => "CAT1",
            Component::Internal2 => "Internal2",
            Component::Cat2 => "CAT2",
            Component::Internal3 => "Internal3",
            Component::Fat => "FAT",
        }
    }

    /// Position of the component within [`TIME_ORDER`].
    fn index(self) -> usize {
        match self {
            Component::Internal1 => 0,
            Component::Cat1 => 1,
            Component::Internal2 => 2,
            Component::Cat2 => 3,
            Component::Internal3 => 4,
            Component::Fat => 5,
        }
    }

    /// Checks that `value` lies within `[0, max]` for this component.
    pub fn check(self, value: f64) -> Result<f64, ScoreError> {
        if value.is_finite() && (0.0..=self.max()).contains(&value) {
            Ok(value)
        } else {
            Err(ScoreError::OutOfRange {
                component: self,
                value,
                max: self.max(),
            })
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// All six component scores of one subject for one student.
///
/// Every score is within its component's bound; the only way to build one
/// is through [`SubjectMarks::new`] or [`SubjectMarks::from_scores`], which
/// both check the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubjectMarks {
    scores: [f64; 6],
}

impl SubjectMarks {
    /// Builds marks from scores given in [`TIME_ORDER`]:
    /// Internal1, CAT1, Internal2, CAT2, Internal3, FAT.
    pub fn new(
        internal1: f64,
        cat1: f64,
        internal2: f64,
        cat2: f64,
        internal3: f64,
        fat: f64,
    ) -> Result<Self, ScoreError> {
        Self::from_scores([internal1, cat1, internal2, cat2, internal3, fat])
    }

    /// Builds marks from an array in [`TIME_ORDER`].
    pub fn from_scores(scores: [f64; 6]) -> Result<Self, ScoreError> {
        for (component, value) in TIME_ORDER.iter().zip(scores) {
            component.check(value)?;
        }
        Ok(Self { scores })
    }

    pub fn get(&self, component: Component) -> f64 {
        self.scores[component.index()]
    }

    /// Score as a percentage of the component's maximum.
    pub fn percent(&self, component: Component) -> f64 {
        self.get(component) / component.max() * 100.0
    }

    /// Sum of the three internal checkpoints (out of 30).
    pub fn internal_total(&self) -> f64 {
        self.get(Component::Internal1) + self.get(Component::Internal2) + self.get(Component::Internal3)
    }

    /// Sum of every raw component score, with no normalization.
    pub fn raw_total(&self) -> f64 {
        self.scores.iter().sum()
    }

    /// Iterates over `(component, score)` in [`TIME_ORDER`].
    pub fn iter(&self) -> impl Iterator<Item = (Component, f64)> + '_ {
        TIME_ORDER.iter().copied().zip(self.scores.iter().copied())
    }
}

/// Marks for one subject of a student's catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectEntry {
    pub subject: String,
    pub marks: SubjectMarks,
}

/// A student on the roster. The roll number never changes once the record
/// exists; updates replace the subject marks wholesale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRecord {
    roll: String,
    name: String,
    subjects: Vec<SubjectEntry>,
}

impl StudentRecord {
    pub fn new(roll: impl Into<String>, name: impl Into<String>, subjects: Vec<SubjectEntry>) -> Self {
        Self {
            roll: roll.into(),
            name: name.into(),
            subjects,
        }
    }

    pub fn roll(&self) -> &str {
        &self.roll
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Subjects in catalog order.
    pub fn subjects(&self) -> &[SubjectEntry] {
        &self.subjects
    }

    pub fn subject(&self, name: &str) -> Option<&SubjectMarks> {
        self.subjects
            .iter()
            .find(|entry| entry.subject == name)
            .map(|entry| &entry.marks)
    }

    /// Replaces every subject's marks, keeping roll number and name.
    pub fn replace_subjects(&mut self, subjects: Vec<SubjectEntry>) {
        self.subjects = subjects;
    }

    /// Sum of all raw scores across all subjects.
    pub fn total_marks(&self) -> f64 {
        self.subjects.iter().map(|entry| entry.marks.raw_total()).sum()
    }
}
