//! In-memory roster storage keyed by roll number.

use crate::marks::StudentRecord;
use std::collections::HashMap;

/// Storage the roster commands operate on.
pub trait RosterStore {
    fn get(&self, roll: &str) -> Option<&StudentRecord>;

    /// Inserts the record under its roll number, replacing any existing one.
    fn put(&mut self, record: StudentRecord);

    /// Removes the record; returns whether one was present.
    fn delete(&mut self, roll: &str) -> bool;

    /// Every record, in the order the rolls were first added.
    fn all(&self) -> Vec<&StudentRecord>;

    fn contains(&self, roll: &str) -> bool {
        self.get(roll).is_some()
    }

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A session-scoped roster held entirely in memory.
#[derive(Debug, Default)]
pub struct InMemoryRoster {
    records: HashMap<String, StudentRecord>,
    order: Vec<String>,
}

impl InMemoryRoster {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RosterStore for InMemoryRoster {
    fn get(&self, roll: &str) -> Option<&StudentRecord> {
        self.records.get(roll)
    }

    fn put(&mut self, record: StudentRecord) {
        let roll = record.roll().to_string();
        if self.records.insert(roll.clone(), record).is_none() {
            self.order.push(roll);
        }
    }

    fn delete(&mut self, roll: &str) -> bool {
        if self.records.remove(roll).is_none() {
            return false;
        }
        self.order.retain(|r| r != roll);
        true
    }

    fn all(&self) -> Vec<&StudentRecord> {
        self.order
            .iter()
            .filter_map(|roll| self.records.get(roll))
            .collect()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
