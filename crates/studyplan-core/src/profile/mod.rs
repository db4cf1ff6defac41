//! Exam profile model.
//!
//! Two layers of types live here:
//!
//! - [`ExamProfileInput`] / [`SubjectProfileInput`]: the snapshot exactly as
//!   it arrives from the profile repository (JSON, camelCase). Numbers are
//!   loose and the exam date is still a string.
//! - [`ExamProfile`] / [`SubjectProfile`]: the validated form. An
//!   `ExamProfile` can only be obtained through [`validate_profile`], so
//!   holding one means every range check has passed.

mod validation;

pub use validation::{
    select_active, validate_profile, MAX_LEVEL, MAX_NAME_LEN, MAX_WEEKLY_HOURS, MAX_WEIGHT,
    MIN_WEEKLY_HOURS, MIN_WEIGHT,
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One subject of an exam profile, unvalidated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectProfileInput {
    pub subject: String,
    pub weight: f64,
    pub current_level: f64,
    pub goal_level: f64,
    #[serde(default)]
    pub position: i64,
}

/// Exam profile snapshot, unvalidated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamProfileInput {
    pub name: String,
    /// `YYYY-MM-DD` or an RFC 3339 timestamp
    pub exam_date: String,
    pub weekly_hours: f64,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub subjects: Vec<SubjectProfileInput>,
}

/// A validated subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectProfile {
    pub subject: String,
    /// Importance coefficient, 0.1 to 10
    pub weight: f64,
    /// Current proficiency, 0 to 10
    pub current_level: u8,
    /// Target proficiency, 0 to 10
    pub goal_level: u8,
    /// Display order
    pub position: u32,
}

impl SubjectProfile {
    /// Proficiency still to gain. A goal below the current level counts as zero.
    pub fn gap(&self) -> u8 {
        self.goal_level.saturating_sub(self.current_level)
    }
}

/// A validated exam profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamProfile {
    name: String,
    exam_date: NaiveDate,
    weekly_hours: f64,
    is_active: bool,
    subjects: Vec<SubjectProfile>,
}

impl ExamProfile {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn exam_date(&self) -> NaiveDate {
        self.exam_date
    }

    pub fn weekly_hours(&self) -> f64 {
        self.weekly_hours
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Subjects in input order. Never empty.
    pub fn subjects(&self) -> &[SubjectProfile] {
        &self.subjects
    }

    /// Subjects sorted by `position`, input order breaking ties.
    pub fn subjects_by_position(&self) -> Vec<&SubjectProfile> {
        let mut sorted: Vec<&SubjectProfile> = self.subjects.iter().collect();
        sorted.sort_by_key(|s| s.position);
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(name: &str, current: u8, goal: u8, position: u32) -> SubjectProfile {
        SubjectProfile {
            subject: name.to_string(),
            weight: 1.0,
            current_level: current,
            goal_level: goal,
            position,
        }
    }

    #[test]
    fn gap_is_clamped_at_zero() {
        assert_eq!(subject("Math", 3, 8, 0).gap(), 5);
        assert_eq!(subject("Math", 8, 8, 0).gap(), 0);
        assert_eq!(subject("Math", 9, 4, 0).gap(), 0);
    }

    #[test]
    fn input_deserializes_from_camel_case_json() {
        let json = r#"{
            "name": "Finals",
            "examDate": "2026-12-01",
            "weeklyHours": 20,
            "isActive": true,
            "subjects": [
                {"subject": "Math", "weight": 2, "currentLevel": 3, "goalLevel": 8, "position": 0}
            ]
        }"#;
        let input: ExamProfileInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.exam_date, "2026-12-01");
        assert_eq!(input.weekly_hours, 20.0);
        assert!(input.is_active);
        assert_eq!(input.subjects[0].goal_level, 8.0);
    }

    #[test]
    fn optional_fields_default() {
        let json = r#"{"name": "Quiz", "examDate": "2026-12-01", "weeklyHours": 5}"#;
        let input: ExamProfileInput = serde_json::from_str(json).unwrap();
        assert!(!input.is_active);
        assert!(input.subjects.is_empty());
    }

    #[test]
    fn subjects_by_position_orders_for_display() {
        let profile = ExamProfile {
            name: "Finals".to_string(),
            exam_date: NaiveDate::from_ymd_opt(2026, 12, 1).unwrap(),
            weekly_hours: 10.0,
            is_active: true,
            subjects: vec![subject("B", 0, 1, 2), subject("A", 0, 1, 0), subject("C", 0, 1, 1)],
        };
        let names: Vec<&str> = profile
            .subjects_by_position()
            .iter()
            .map(|s| s.subject.as_str())
            .collect();
        assert_eq!(names, vec!["A", "C", "B"]);
        assert_eq!(profile.subjects()[0].subject, "B");
    }
}
