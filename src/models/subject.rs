//! Subject model.
//!
//! A subject's weekly hour demand is derived from its credits and type:
//! lab and practical subjects need contact hours beyond their credit
//! value, theory and field work map one-to-one.

use serde::{Deserialize, Serialize};

/// Subject delivery format.
///
/// Drives the weekly-hours derivation: `Lab` and `Practical` subjects
/// require twice their credit value in weekly slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubjectType {
    Theory,
    Practical,
    Lab,
    #[serde(rename = "Field Work")]
    FieldWork,
}

impl SubjectType {
    /// Weekly hours implied by a credit value for this subject type.
    pub fn weekly_hours(self, credits: u32) -> u32 {
        match self {
            SubjectType::Lab | SubjectType::Practical => credits * 2,
            SubjectType::Theory | SubjectType::FieldWork => credits,
        }
    }

    /// Display label, matching the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            SubjectType::Theory => "Theory",
            SubjectType::Practical => "Practical",
            SubjectType::Lab => "Lab",
            SubjectType::FieldWork => "Field Work",
        }
    }
}

/// A subject offered to one or more class sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: String,
    /// Subject name (e.g., "Database Management Systems").
    pub name: String,
    /// Catalogue code (e.g., "CS301").
    pub code: String,
    /// Owning department.
    pub department: String,
    /// Credit value (positive).
    pub credits: u32,
    /// Delivery format.
    pub subject_type: SubjectType,
}

impl Subject {
    /// Creates a new subject with the given ID and type.
    pub fn new(id: impl Into<String>, subject_type: SubjectType) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            code: String::new(),
            department: String::new(),
            credits: 1,
            subject_type,
        }
    }

    /// Sets the subject name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the catalogue code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the owning department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Sets the credit value.
    pub fn with_credits(mut self, credits: u32) -> Self {
        self.credits = credits;
        self
    }

    /// Weekly slots this subject must receive.
    ///
    /// Derived from credits and type; never stored.
    #[inline]
    pub fn weekly_hours(&self) -> u32 {
        self.subject_type.weekly_hours(self.credits)
    }
}
