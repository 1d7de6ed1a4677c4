//! Class section model.
//!
//! A class section is a cohort that receives a weekly timetable. Its
//! subject list may be given explicitly; when it is empty the section is
//! associated with subjects per run, never persisted.

use serde::{Deserialize, Serialize};

use super::Subject;

/// Default cohort size when none is given.
pub const DEFAULT_STRENGTH: u32 = 30;

/// A class section (cohort) to be timetabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSection {
    /// Unique class identifier.
    pub id: String,
    /// Section name (e.g., "CSE 3rd Year A").
    pub name: String,
    /// Owning department.
    pub department: String,
    /// Subjects to schedule. May be empty; see [`ClassSection::subjects_for_run`].
    pub subjects: Vec<Subject>,
    /// Cohort size. Informational only.
    pub strength: u32,
}

impl ClassSection {
    /// Creates a new class section with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            department: String::new(),
            subjects: Vec::new(),
            strength: DEFAULT_STRENGTH,
        }
    }

    /// Sets the section name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the owning department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Adds a subject to the explicit list.
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.push(subject);
        self
    }

    /// Sets the cohort size.
    pub fn with_strength(mut self, strength: u32) -> Self {
        self.strength = strength;
        self
    }

    /// Resolves the subjects this section should be scheduled for.
    ///
    /// An explicit subject list wins. Otherwise a subject is associated
    /// when its department equals the section's, or its name appears as a
    /// case-insensitive substring of the section name. When neither rule
    /// matches anything, every known subject is used.
    pub fn subjects_for_run(&self, all_subjects: &[Subject]) -> Vec<Subject> {
        if !self.subjects.is_empty() {
            return self.subjects.clone();
        }

        let class_name = self.name.to_lowercase();
        let related: Vec<Subject> = all_subjects
            .iter()
            .filter(|s| {
                s.department == self.department || class_name.contains(&s.name.to_lowercase())
            })
            .cloned()
            .collect();

        if related.is_empty() {
            all_subjects.to_vec()
        } else {
            related
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubjectType;

    fn subject(id: &str, name: &str, dept: &str) -> Subject {
        Subject::new(id, SubjectType::Theory)
            .with_name(name)
            .with_department(dept)
            .with_credits(3)
    }

    #[test]
    fn test_explicit_subjects_win() {
        let math = subject("S1", "Mathematics", "Science");
        let class = ClassSection::new("C1")
            .with_department("Arts")
            .with_subject(math.clone());

        let resolved = class.subjects_for_run(&[subject("S2", "History", "Arts")]);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id, "S1");
    }

    #[test]
    fn test_department_association() {
        let class = ClassSection::new("C1")
            .with_name("Science 1st Year")
            .with_department("Science");
        let subjects = [
            subject("S1", "Mathematics", "Science"),
            subject("S2", "History", "Arts"),
        ];

        let resolved = class.subjects_for_run(&subjects);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id, "S1");
    }

    #[test]
    fn test_name_substring_association() {
        // Subject name embedded in the class name, different department
        let class = ClassSection::new("C1")
            .with_name("B.Sc Chemistry Honours")
            .with_department("Science");
        let subjects = [subject("S1", "Chemistry", "Chemical")];

        let resolved = class.subjects_for_run(&subjects);
        assert_eq!(resolved.len(), 1);
    }

    #[test]
    fn test_fallback_to_all_subjects() {
        let class = ClassSection::new("C1")
            .with_name("Unrelated")
            .with_department("Nowhere");
        let subjects = [
            subject("S1", "Mathematics", "Science"),
            subject("S2", "History", "Arts"),
        ];

        let resolved = class.subjects_for_run(&subjects);
        assert_eq!(resolved.len(), 2);
    }

    #[test]
    fn test_default_strength() {
        assert_eq!(ClassSection::new("C1").strength, DEFAULT_STRENGTH);
    }
}
