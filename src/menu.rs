//! Interactive numbered menu over the roster.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

use crate::chart::{
    ChartRenderer, ChartSpec, class_overall_chart, class_subject_chart, student_overall_chart,
    student_subject_chart,
};
use crate::commands::{Command, Outcome, execute};
use crate::config::SubjectCatalog;
use crate::error::RosterError;
use crate::input::{prompt_line, read_subject_marks};
use crate::marks::SubjectEntry;
use crate::output::{
    NO_CLASS_RECORDS, NO_RECORDS, render_class_performance, render_roster, render_student_report,
};
use crate::roster::RosterStore;

const MENU: &str = "\n--- Student Marks Management ---
1. Add Student
2. View Individual Student Details
3. View All Students
4. Update Student Marks
5. Delete Student Record
6. Class Performance
7. Exit";

/// Runs the menu until the user exits or input ends.
pub fn run_menu<S, R, W>(
    store: &mut S,
    catalog: &SubjectCatalog,
    charts: &dyn ChartRenderer,
    reader: &mut R,
    writer: &mut W,
) -> Result<()>
where
    S: RosterStore,
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(writer, "{MENU}")?;
        let choice = match prompt_line(reader, writer, "Enter your choice (1-7): ") {
            Ok(choice) => choice,
            Err(e) => {
                info!(error = %e, "Input ended, leaving menu");
                return Ok(());
            }
        };
        debug!(choice = %choice, "Menu choice");

        let Some(command) = read_command(store, catalog, &choice, reader, writer)? else {
            continue;
        };

        match execute(store, catalog, command) {
            Ok(Outcome::Exit) => {
                writeln!(writer, "Exiting.")?;
                return Ok(());
            }
            Ok(outcome) => present(&outcome, charts, writer)?,
            Err(e) => report_error(&e, writer)?,
        }
    }
}

/// Collects whatever the chosen command needs. `None` means the choice was
/// already handled (invalid choice or an early rejection).
fn read_command<S, R, W>(
    store: &S,
    catalog: &SubjectCatalog,
    choice: &str,
    reader: &mut R,
    writer: &mut W,
) -> Result<Option<Command>>
where
    S: RosterStore,
    R: BufRead,
    W: Write,
{
    let command = match choice {
        "1" => {
            let roll = prompt_line(reader, writer, "Enter Roll Number: ")?;
            if roll.is_empty() {
                writeln!(writer, "Roll number cannot be empty.")?;
                return Ok(None);
            }
            // Reject before asking for every subject's marks.
            if store.contains(&roll) {
                report_error(&RosterError::DuplicateRoll { roll }, writer)?;
                return Ok(None);
            }
            let name = prompt_line(reader, writer, "Enter Name: ")?;
            let subjects = read_all_subjects(catalog, reader, writer)?;
            Command::Add {
                roll,
                name,
                subjects,
            }
        }
        "2" => {
            if store.is_empty() {
                report_error(&RosterError::EmptyRoster, writer)?;
                return Ok(None);
            }
            let roll = prompt_line(reader, writer, "Enter the student's Roll Number: ")?;
            Command::ViewOne { roll }
        }
        "3" => Command::ViewAll,
        "4" => {
            let roll = prompt_line(reader, writer, "Enter Roll Number to update: ")?;
            let Some(record) = store.get(&roll) else {
                report_error(&RosterError::UnknownRoll { roll }, writer)?;
                return Ok(None);
            };
            writeln!(writer, "Updating marks for student: {}", record.name())?;
            let subjects = read_all_subjects(catalog, reader, writer)?;
            Command::Update { roll, subjects }
        }
        "5" => {
            let roll = prompt_line(reader, writer, "Enter Roll Number to delete: ")?;
            Command::Delete { roll }
        }
        "6" => {
            if store.is_empty() {
                writeln!(writer, "{NO_CLASS_RECORDS}")?;
                return Ok(None);
            }
            Command::ClassPerformance
        }
        "7" => Command::Exit,
        _ => {
            writeln!(writer, "Invalid choice. Try again.")?;
            return Ok(None);
        }
    };
    Ok(Some(command))
}

fn read_all_subjects<R: BufRead, W: Write>(
    catalog: &SubjectCatalog,
    reader: &mut R,
    writer: &mut W,
) -> Result<Vec<SubjectEntry>> {
    let mut subjects = Vec::with_capacity(catalog.len());
    for subject in catalog.subjects() {
        subjects.push(SubjectEntry {
            subject: subject.clone(),
            marks: read_subject_marks(reader, writer, subject)?,
        });
    }
    Ok(subjects)
}

fn present<W: Write>(outcome: &Outcome, charts: &dyn ChartRenderer, writer: &mut W) -> Result<()> {
    match outcome {
        Outcome::Added { .. } => writeln!(writer, "Student added successfully.")?,
        Outcome::Student { record, report } => {
            write!(writer, "{}", render_student_report(report))?;
            draw(charts, &[student_subject_chart(record), student_overall_chart(record)]);
        }
        Outcome::Roster(rows) => write!(writer, "{}", render_roster(rows))?,
        Outcome::Updated { .. } => writeln!(writer, "Marks updated successfully.")?,
        Outcome::Deleted { .. } => writeln!(writer, "Student record deleted.")?,
        Outcome::Class(class) => {
            write!(writer, "{}", render_class_performance(class))?;
            draw(charts, &[class_subject_chart(class), class_overall_chart(class)]);
        }
        Outcome::Exit => {}
    }
    Ok(())
}

/// Chart failures are logged; the menu carries on.
fn draw(charts: &dyn ChartRenderer, specs: &[ChartSpec]) {
    for spec in specs {
        if let Err(e) = charts.render(spec) {
            warn!(chart = %spec.id, error = %e, "Chart rendering failed");
        }
    }
}

fn report_error<W: Write>(error: &RosterError, writer: &mut W) -> Result<()> {
    debug!(error = %error, "Command rejected");
    match error {
        RosterError::UnknownRoll { .. } => writeln!(writer, "Student not found!")?,
        RosterError::DuplicateRoll { .. } => writeln!(writer, "Student already exists!")?,
        RosterError::EmptyRoster => writeln!(writer, "{NO_RECORDS}")?,
        RosterError::CatalogMismatch { .. } => writeln!(writer, "{error}")?,
    }
    Ok(())
}
