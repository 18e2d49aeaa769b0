//! Roster commands and their display payloads.
//!
//! Each [`Command`] runs against an injected [`RosterStore`] and returns an
//! [`Outcome`] describing what to show. Failed commands leave the store
//! untouched.

use tracing::info;

use crate::analyzers::aggregate::{class_performance, rank_roster, student_report};
use crate::analyzers::types::{ClassPerformance, StudentReport, StudentSummary};
use crate::config::SubjectCatalog;
use crate::error::RosterError;
use crate::marks::{StudentRecord, SubjectEntry};
use crate::roster::RosterStore;

/// Everything the menu can ask of the roster.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add {
        roll: String,
        name: String,
        subjects: Vec<SubjectEntry>,
    },
    ViewOne {
        roll: String,
    },
    ViewAll,
    Update {
        roll: String,
        subjects: Vec<SubjectEntry>,
    },
    Delete {
        roll: String,
    },
    ClassPerformance,
    Exit,
}

/// What a successful command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Added { roll: String },
    Student { record: StudentRecord, report: StudentReport },
    Roster(Vec<StudentSummary>),
    Updated { roll: String, name: String },
    Deleted { roll: String },
    Class(ClassPerformance),
    Exit,
}

/// Orders `subjects` by the catalog, requiring each catalog subject exactly
/// once and nothing else.
pub fn match_catalog(
    roll: &str,
    catalog: &SubjectCatalog,
    mut subjects: Vec<SubjectEntry>,
) -> Result<Vec<SubjectEntry>, RosterError> {
    let mismatch = |reason: String| RosterError::CatalogMismatch {
        roll: roll.to_string(),
        reason,
    };

    if let Some(extra) = subjects.iter().find(|e| !catalog.contains(&e.subject)) {
        return Err(mismatch(format!("unknown subject `{}`", extra.subject)));
    }

    let mut ordered = Vec::with_capacity(catalog.len());
    for subject in catalog.subjects() {
        let matches = subjects.iter().filter(|e| &e.subject == subject).count();
        if matches == 0 {
            return Err(mismatch(format!("missing subject `{subject}`")));
        }
        if matches > 1 {
            return Err(mismatch(format!("subject `{subject}` given {matches} times")));
        }
        if let Some(pos) = subjects.iter().position(|e| &e.subject == subject) {
            ordered.push(subjects.swap_remove(pos));
        }
    }

    Ok(ordered)
}

/// Runs one command against the roster.
pub fn execute<S: RosterStore>(
    store: &mut S,
    catalog: &SubjectCatalog,
    command: Command,
) -> Result<Outcome, RosterError> {
    match command {
        Command::Add {
            roll,
            name,
            subjects,
        } => {
            if store.contains(&roll) {
                return Err(RosterError::DuplicateRoll { roll });
            }
            let subjects = match_catalog(&roll, catalog, subjects)?;
            store.put(StudentRecord::new(roll.clone(), name, subjects));
            info!(roll = %roll, students = store.len(), "Student added");
            Ok(Outcome::Added { roll })
        }
        Command::ViewOne { roll } => {
            if store.is_empty() {
                return Err(RosterError::EmptyRoster);
            }
            let record = store
                .get(&roll)
                .ok_or(RosterError::UnknownRoll { roll: roll.clone() })?;
            Ok(Outcome::Student {
                report: student_report(record),
                record: record.clone(),
            })
        }
        Command::ViewAll => {
            if store.is_empty() {
                return Err(RosterError::EmptyRoster);
            }
            Ok(Outcome::Roster(rank_roster(&store.all())))
        }
        Command::Update { roll, subjects } => {
            let Some(existing) = store.get(&roll) else {
                return Err(RosterError::UnknownRoll { roll });
            };
            let subjects = match_catalog(&roll, catalog, subjects)?;
            let mut record = existing.clone();
            record.replace_subjects(subjects);
            let name = record.name().to_string();
            store.put(record);
            info!(roll = %roll, "Student marks updated");
            Ok(Outcome::Updated { roll, name })
        }
        Command::Delete { roll } => {
            if !store.delete(&roll) {
                return Err(RosterError::UnknownRoll { roll });
            }
            info!(roll = %roll, students = store.len(), "Student deleted");
            Ok(Outcome::Deleted { roll })
        }
        Command::ClassPerformance => {
            if store.is_empty() {
                return Err(RosterError::EmptyRoster);
            }
            let class = class_performance(&store.all(), catalog);
            info!(
                students = class.student_count,
                semester_average = class.semester_average,
                "Class performance computed"
            );
            Ok(Outcome::Class(class))
        }
        Command::Exit => Ok(Outcome::Exit),
    }
}
