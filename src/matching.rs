//! Teacher-subject compatibility policy.
//!
//! Compatibility is a boolean relation computed on demand, never stored.
//! It is the OR of five tiers: declared subject match, exact department
//! match, department alias clusters, topic keyword groups, and a
//! universal fallback for general subjects. The cluster and fallback
//! tiers are deliberately permissive (a "Chemistry" cluster reaches into
//! engineering departments); the tables are plain data on
//! [`CompatibilityPolicy`] so a tenant can tighten them without touching
//! the allocator.
//!
//! Also provides the compatibility matrix report used to debug data
//! quality: which subjects each teacher can take and why, and which
//! subjects no teacher can take at all.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{Subject, Teacher};

/// A cluster of department names treated as mutually compatible.
///
/// Matching is bidirectional: a subject in the canonical department can
/// be taught by a teacher from any alias department, and vice versa.
#[derive(Debug, Clone)]
pub struct DeptCluster {
    /// Canonical department name.
    pub canonical: String,
    /// Departments accepted as equivalent.
    pub aliases: Vec<String>,
}

impl DeptCluster {
    fn new(canonical: &str, aliases: &[&str]) -> Self {
        Self {
            canonical: canonical.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// A group of topic keywords. A subject and a teacher profile that both
/// hit the same group (case-insensitive substring) are compatible.
#[derive(Debug, Clone)]
pub struct KeywordGroup {
    /// Group label (e.g., "Database").
    pub name: String,
    /// Substrings that identify the topic.
    pub terms: Vec<String>,
}

impl KeywordGroup {
    fn new(name: &str, terms: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            terms: terms.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn hits(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.terms.iter().any(|t| text.contains(&t.to_lowercase()))
    }
}

/// The layered matching policy deciding whether a teacher can take a
/// subject.
///
/// [`CompatibilityPolicy::default`] carries the curated tables; pass a
/// hand-built policy to tighten matching for a tenant.
#[derive(Debug, Clone)]
pub struct CompatibilityPolicy {
    /// Bidirectional department alias clusters (tier 3).
    pub dept_clusters: Vec<DeptCluster>,
    /// Topic keyword groups (tier 4).
    pub keyword_groups: Vec<KeywordGroup>,
    /// Subject name fragments any teacher may take (tier 5).
    pub general_subjects: Vec<String>,
}

impl Default for CompatibilityPolicy {
    fn default() -> Self {
        Self {
            dept_clusters: vec![
                DeptCluster::new("Computer Science", &["CSE", "IT", "AIML", "IoT"]),
                DeptCluster::new(
                    "Chemistry",
                    &["Chemistry", "Science", "Chemical", "Mechanical", "Civil"],
                ),
                DeptCluster::new(
                    "Humanities",
                    &["English", "Humanities", "Liberal Arts", "Management"],
                ),
                DeptCluster::new("Mathematics", &["Math", "Science", "Applied Math"]),
                DeptCluster::new("Physics", &["Physics", "Science", "Applied Physics"]),
                DeptCluster::new("Management", &["MBA", "Business", "Management"]),
            ],
            keyword_groups: vec![
                KeywordGroup::new("Database", &["Database", "Data", "SQL", "DBMS"]),
                KeywordGroup::new("Chemistry", &["Chemistry", "Chemical", "Organic", "Inorganic"]),
                KeywordGroup::new(
                    "English",
                    &["English", "Communication", "Language", "Literature"],
                ),
                KeywordGroup::new("Mathematics", &["Math", "Statistics", "Calculus", "Algebra"]),
                KeywordGroup::new(
                    "Programming",
                    &["Programming", "Coding", "Software", "Development"],
                ),
            ],
            general_subjects: [
                "English Communication",
                "Basic Mathematics",
                "General Chemistry",
                "Physics Fundamentals",
                "Communication Skills",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl CompatibilityPolicy {
    /// A policy with no heuristic tables: only declared subjects and
    /// exact department equality match.
    pub fn strict() -> Self {
        Self {
            dept_clusters: Vec::new(),
            keyword_groups: Vec::new(),
            general_subjects: Vec::new(),
        }
    }

    /// Whether `teacher` may be assigned `subject`.
    ///
    /// Pure boolean gate; no tier is preferred over another.
    pub fn can_teach(&self, teacher: &Teacher, subject: &Subject) -> bool {
        // Tier 1: declared subject match
        if subject.name == teacher.primary_subject
            || teacher.other_subjects.iter().any(|s| *s == subject.name)
        {
            return true;
        }

        // Tier 2: exact department match
        if subject.department == teacher.department {
            return true;
        }

        // Tier 3: department alias clusters, either direction
        if self.departments_clustered(&subject.department, &teacher.department) {
            return true;
        }

        // Tier 4: a keyword group hitting both the subject name and the
        // teacher's declared subjects
        if self.keyword_match(teacher, subject) {
            return true;
        }

        // Tier 5: universal fallback for general subjects
        let subject_name = subject.name.to_lowercase();
        self.general_subjects
            .iter()
            .any(|g| subject_name.contains(&g.to_lowercase()))
    }

    fn departments_clustered(&self, a: &str, b: &str) -> bool {
        self.dept_clusters.iter().any(|c| {
            (c.canonical == a && c.aliases.iter().any(|x| x == b))
                || (c.canonical == b && c.aliases.iter().any(|x| x == a))
        })
    }

    fn keyword_match(&self, teacher: &Teacher, subject: &Subject) -> bool {
        self.keyword_groups.iter().any(|group| {
            group.hits(&subject.name)
                && (group.hits(&teacher.primary_subject)
                    || teacher.other_subjects.iter().any(|s| group.hits(s)))
        })
    }
}

/// Why a subject is compatible with a teacher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityReason {
    /// The teacher's primary subject.
    Primary,
    /// One of the teacher's other subjects.
    Secondary,
    /// Any heuristic tier (department, cluster, keyword, fallback).
    DepartmentMatch,
}

/// One subject a teacher can take, with the reason tag.
#[derive(Debug, Clone, Serialize)]
pub struct CompatibleSubject {
    pub subject_name: String,
    pub subject_department: String,
    pub reason: CompatibilityReason,
}

/// Per-teacher side of the compatibility matrix.
#[derive(Debug, Clone, Serialize)]
pub struct TeacherCompatibility {
    pub teacher_id: String,
    pub department: String,
    pub primary_subject: String,
    pub other_subjects: Vec<String>,
    pub compatible_subjects: Vec<CompatibleSubject>,
}

/// A subject no teacher in the snapshot can take.
#[derive(Debug, Clone, Serialize)]
pub struct OrphanedSubject {
    pub subject_name: String,
    pub department: String,
    pub subject_code: String,
}

/// Full teacher/subject compatibility matrix for one snapshot.
///
/// Keyed by teacher name for report readability; `BTreeMap` keeps the
/// serialized order stable.
#[derive(Debug, Clone, Serialize)]
pub struct CompatibilityMatrix {
    pub teachers: BTreeMap<String, TeacherCompatibility>,
    pub orphaned_subjects: Vec<OrphanedSubject>,
}

impl CompatibilityMatrix {
    /// Builds the matrix by evaluating the policy over every
    /// (teacher, subject) pair.
    pub fn build(
        policy: &CompatibilityPolicy,
        teachers: &[Teacher],
        subjects: &[Subject],
    ) -> Self {
        let mut by_teacher = BTreeMap::new();

        for teacher in teachers {
            let compatible: Vec<CompatibleSubject> = subjects
                .iter()
                .filter(|s| policy.can_teach(teacher, s))
                .map(|s| CompatibleSubject {
                    subject_name: s.name.clone(),
                    subject_department: s.department.clone(),
                    reason: if s.name == teacher.primary_subject {
                        CompatibilityReason::Primary
                    } else if teacher.other_subjects.iter().any(|o| *o == s.name) {
                        CompatibilityReason::Secondary
                    } else {
                        CompatibilityReason::DepartmentMatch
                    },
                })
                .collect();

            by_teacher.insert(
                teacher.name.clone(),
                TeacherCompatibility {
                    teacher_id: teacher.id.clone(),
                    department: teacher.department.clone(),
                    primary_subject: teacher.primary_subject.clone(),
                    other_subjects: teacher.other_subjects.clone(),
                    compatible_subjects: compatible,
                },
            );
        }

        let orphaned_subjects = subjects
            .iter()
            .filter(|s| !teachers.iter().any(|t| policy.can_teach(t, s)))
            .map(|s| OrphanedSubject {
                subject_name: s.name.clone(),
                department: s.department.clone(),
                subject_code: s.code.clone(),
            })
            .collect();

        Self {
            teachers: by_teacher,
            orphaned_subjects,
        }
    }
}
