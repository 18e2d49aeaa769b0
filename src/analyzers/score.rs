use crate::analyzers::grade::{Letter, grade};
use crate::marks::{Component, SubjectMarks};
use serde::Serialize;

/// Percentage points each component contributes to a subject when scored
/// at its maximum. Summed in this order.
pub const WEIGHTS: [(Component, u32); 6] = [
    (Component::Cat1, 15),
    (Component::Cat2, 15),
    (Component::Fat, 40),
    (Component::Internal1, 10),
    (Component::Internal2, 10),
    (Component::Internal3, 10),
];

const fn weight_total() -> u32 {
    let mut total = 0;
    let mut i = 0;
    while i < WEIGHTS.len() {
        total += WEIGHTS[i].1;
        i += 1;
    }
    total
}

// A subject scored at every maximum must come out at exactly 100%.
const _: () = assert!(weight_total() == 100);

/// Minimum FAT percentage for a subject to earn any credit.
pub const FAT_PASS_PERCENT: f64 = 50.0;

/// Letter grade and percentage for one subject.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubjectScore {
    pub grade: Letter,
    pub percentage: f64,
}

/// Weighted percentage of a set of (possibly averaged) component scores.
///
/// `score_of` supplies the raw score for each component. No pass gate is
/// applied here; see [`score_subject`].
pub fn weighted_percentage(score_of: impl Fn(Component) -> f64) -> f64 {
    WEIGHTS
        .iter()
        .map(|&(component, weight)| (score_of(component) / component.max()) * weight as f64)
        .sum()
}

/// Whether the FAT score clears the pass gate.
pub fn fat_passed(marks: &SubjectMarks) -> bool {
    marks.percent(Component::Fat) >= FAT_PASS_PERCENT
}

/// Scores one subject.
///
/// A FAT below half of its maximum fails the subject outright with 0%,
/// whatever the other five components hold.
pub fn score_subject(marks: &SubjectMarks) -> SubjectScore {
    if !fat_passed(marks) {
        return SubjectScore {
            grade: Letter::F,
            percentage: 0.0,
        };
    }

    let percentage = weighted_percentage(|component| marks.get(component));

    SubjectScore {
        grade: grade(percentage),
        percentage,
    }
}

/// Grade of a single component taken on its own, as shown next to the CAT
/// and FAT scores in a student's detail view. A FAT under the pass gate is
/// always `F`.
pub fn component_grade(marks: &SubjectMarks, component: Component) -> Letter {
    if component == Component::Fat && !fat_passed(marks) {
        return Letter::F;
    }
    grade(marks.percent(component))
}
