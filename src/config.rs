//! Subject catalog configuration.

use crate::error::CatalogError;
use anyhow::Result;
use std::collections::HashSet;

/// Subjects taken when no catalog file is given.
pub const DEFAULT_SUBJECTS: [&str; 5] = [
    "Multivariable Calculus and Differential Equations",
    "Applied Chemistry",
    "Computation Structures",
    "Basic Engineering",
    "Problem Solving using Python",
];

/// The fixed, ordered list of subjects every student on the roster takes.
///
/// Stored on disk as a plain JSON array:
/// ```json
/// ["Physics", "Chemistry", "Mathematics"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectCatalog {
    subjects: Vec<String>,
}

impl SubjectCatalog {
    /// Builds a catalog, rejecting empty lists, blank names and duplicates.
    pub fn new(subjects: Vec<String>) -> Result<Self, CatalogError> {
        if subjects.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen: HashSet<String> = HashSet::new();
        for subject in &subjects {
            if subject.trim().is_empty() {
                return Err(CatalogError::BlankName);
            }
            if !seen.insert(subject.clone()) {
                return Err(CatalogError::Duplicate(subject.clone()));
            }
        }

        Ok(Self { subjects })
    }

    /// Loads the catalog from a JSON file at `path`.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let subjects: Vec<String> = serde_json::from_str(&content)?;
        Ok(Self::new(subjects)?)
    }

    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    pub fn contains(&self, subject: &str) -> bool {
        self.subjects.iter().any(|s| s == subject)
    }
}

impl Default for SubjectCatalog {
    fn default() -> Self {
        Self {
            subjects: DEFAULT_SUBJECTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    #[test]
    fn test_default_catalog() {
        let catalog = SubjectCatalog::default();
        assert_eq!(catalog.len(), 5);
        assert!(catalog.contains("Applied Chemistry"));
    }

    #[test]
    fn test_new_rejects_bad_lists() {
        assert_eq!(SubjectCatalog::new(vec![]), Err(CatalogError::Empty));
        assert_eq!(
            SubjectCatalog::new(vec!["Physics".into(), "  ".into()]),
            Err(CatalogError::BlankName)
        );
        assert_eq!(
            SubjectCatalog::new(vec!["Physics".into(), "Physics".into()]),
            Err(CatalogError::Duplicate("Physics".into()))
        );
    }

    #[test]
    fn test_load_from_json() {
        let path = temp_path("student_marks_test_catalog.json");
        fs::write(&path, r#"["Physics", "Chemistry"]"#).unwrap();

        let catalog = SubjectCatalog::load(&path).unwrap();
        assert_eq!(catalog.subjects(), &["Physics".to_string(), "Chemistry".to_string()]);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_rejects_empty_json_array() {
        let path = temp_path("student_marks_test_catalog_empty.json");
        fs::write(&path, "[]").unwrap();

        assert!(SubjectCatalog::load(&path).is_err());

        fs::remove_file(&path).unwrap();
    }
}
