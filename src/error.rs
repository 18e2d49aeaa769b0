//! Error kinds surfaced at the input boundary and by roster commands.
//!
//! Scoring and aggregation never fail; everything here comes from raw input
//! or from a lookup against the roster.

use crate::marks::Component;
use thiserror::Error;

/// A raw score that cannot be accepted for a component.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoreError {
    #[error("`{raw}` is not a valid number")]
    NotNumeric { raw: String },

    #[error("{component} score should be between 0 and {max}, got {value}")]
    OutOfRange {
        component: Component,
        value: f64,
        max: f64,
    },
}

/// Failures of roster commands. The roster is left unchanged whenever one
/// of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Student not found: {roll}")]
    UnknownRoll { roll: String },

    #[error("Student already exists: {roll}")]
    DuplicateRoll { roll: String },

    #[error("No student records available.")]
    EmptyRoster,

    #[error("Marks for `{roll}` do not match the subject catalog: {reason}")]
    CatalogMismatch { roll: String, reason: String },
}

/// An unusable subject catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("subject catalog is empty")]
    Empty,

    #[error("subject catalog lists `{0}` more than once")]
    Duplicate(String),

    #[error("subject catalog contains a blank name")]
    BlankName,
}
