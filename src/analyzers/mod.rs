//! Grading and aggregation.
//!
//! This module turns raw component marks into subject percentages, assigns
//! letter grades, and aggregates results per student and across the class.

pub mod aggregate;
pub mod grade;
pub mod score;
pub mod types;
pub mod utility;
