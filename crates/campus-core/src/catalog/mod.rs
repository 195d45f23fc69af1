//! The course catalog.
//!
//! A [`Catalog`] is built once at startup and never changes afterwards, so it can be
//! shared across request handlers behind an `Arc` without locking.

mod seed;

use crate::error::{CampusError, Result};
use crate::models::Course;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Immutable, ordered list of courses with unique ids.
#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    /// The six sample courses.
    pub fn seeded() -> Self {
        Self {
            courses: seed::seed_courses(),
        }
    }

    /// Build a catalog from an explicit list, rejecting zero or duplicate ids.
    pub fn from_courses(courses: Vec<Course>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(courses.len());
        for course in &courses {
            if course.id == 0 {
                return Err(CampusError::Catalog {
                    message: format!("course '{}' has id 0; ids must be positive", course.title),
                });
            }
            if !seen.insert(course.id) {
                return Err(CampusError::Catalog {
                    message: format!("duplicate course id {}", course.id),
                });
            }
        }
        Ok(Self { courses })
    }

    /// Load a catalog from a JSON array of course records.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| CampusError::io_with_path(e, path))?;
        let courses: Vec<Course> = serde_json::from_str(&raw)?;
        let catalog = Self::from_courses(courses)?;
        info!(
            "Loaded {} courses from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// All courses in storage order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_seeded_catalog() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.courses()[0].title, "Computer Science & Engineering");
        assert_eq!(catalog.courses()[5].tuition_fee, "$14,000/year");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut courses = Catalog::seeded().courses().to_vec();
        courses[1].id = 1;
        let err = Catalog::from_courses(courses).unwrap_err();
        assert!(err.to_string().contains("duplicate course id 1"));
    }

    #[test]
    fn test_zero_id_rejected() {
        let mut courses = Catalog::seeded().courses().to_vec();
        courses[0].id = 0;
        assert!(Catalog::from_courses(courses).is_err());
    }

    #[test]
    fn test_from_json_file() {
        let seeded = Catalog::seeded();
        let courses = &seeded.courses()[..2];
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(courses).unwrap().as_bytes())
            .unwrap();

        let catalog = Catalog::from_json_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.courses()[1].title, "Business Administration");
    }

    #[test]
    fn test_from_missing_file() {
        let err = Catalog::from_json_file("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, CampusError::Io { path: Some(_), .. }));
    }
}
