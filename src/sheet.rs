//! Batch loading of a marks sheet (CSV) into a roster.
//!
//! One row per student and subject:
//!
//! ```text
//! roll,name,subject,internal1,cat1,internal2,cat2,internal3,fat
//! 21BCE001,Asha,Physics,8,41,9,38,10,66
//! ```

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use tracing::{debug, info};

use crate::commands::{Command, execute, match_catalog};
use crate::error::RosterError;
use crate::config::SubjectCatalog;
use crate::marks::{SubjectEntry, SubjectMarks};
use crate::roster::RosterStore;

/// A single row deserialized from a marks sheet.
#[derive(Debug, Clone, Deserialize)]
pub struct MarksRow {
    pub roll: String,
    pub name: String,
    pub subject: String,
    pub internal1: f64,
    pub cat1: f64,
    pub internal2: f64,
    pub cat2: f64,
    pub internal3: f64,
    pub fat: f64,
}

impl MarksRow {
    fn marks(&self) -> Result<SubjectMarks> {
        Ok(SubjectMarks::new(
            self.internal1,
            self.cat1,
            self.internal2,
            self.cat2,
            self.internal3,
            self.fat,
        )?)
    }
}

/// Reads every row of a marks sheet.
pub fn read_sheet<R: Read>(reader: R) -> Result<Vec<MarksRow>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut rows = Vec::new();

    for (i, result) in rdr.deserialize().enumerate() {
        // Line 1 is the header.
        let record: MarksRow = result.with_context(|| format!("malformed row at line {}", i + 2))?;
        rows.push(record);
    }

    Ok(rows)
}

/// Reads a marks sheet from a file.
pub fn load_sheet(path: &str) -> Result<Vec<MarksRow>> {
    let file = File::open(path).with_context(|| format!("cannot open marks sheet {path}"))?;
    read_sheet(file)
}

struct PendingStudent {
    roll: String,
    name: String,
    subjects: Vec<SubjectEntry>,
}

/// Adds one student per roll number found in `rows`, in order of first
/// appearance. Every student is checked before the first is added, so the
/// store is untouched when any row or student is rejected.
pub fn build_roster<S: RosterStore>(store: &mut S, catalog: &SubjectCatalog, rows: Vec<MarksRow>) -> Result<usize> {
    let mut pending: Vec<PendingStudent> = Vec::new();

    for (i, row) in rows.into_iter().enumerate() {
        let line = i + 2;
        let marks = row
            .marks()
            .with_context(|| format!("invalid score for `{}` at line {line}", row.roll))?;

        match pending.iter_mut().find(|p| p.roll == row.roll) {
            Some(student) => {
                if student.name != row.name {
                    bail!(
                        "line {line}: roll `{}` is named both `{}` and `{}`",
                        row.roll,
                        student.name,
                        row.name
                    );
                }
                student.subjects.push(SubjectEntry {
                    subject: row.subject,
                    marks,
                });
            }
            None => pending.push(PendingStudent {
                roll: row.roll,
                name: row.name,
                subjects: vec![SubjectEntry {
                    subject: row.subject,
                    marks,
                }],
            }),
        }
    }

    for student in &mut pending {
        if store.contains(&student.roll) {
            return Err(RosterError::DuplicateRoll {
                roll: student.roll.clone(),
            }
            .into());
        }
        let subjects = std::mem::take(&mut student.subjects);
        student.subjects = match_catalog(&student.roll, catalog, subjects)?;
    }

    let added = pending.len();
    for student in pending {
        debug!(roll = %student.roll, subjects = student.subjects.len(), "Adding student from sheet");
        execute(
            store,
            catalog,
            Command::Add {
                roll: student.roll,
                name: student.name,
                subjects: student.subjects,
            },
        )?;
    }

    info!(students = added, "Marks sheet loaded");
    Ok(added)
}
