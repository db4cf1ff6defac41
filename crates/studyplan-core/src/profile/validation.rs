//! Exam profile validation.
//!
//! Every check runs even after one fails so the caller can show all
//! problems together.

use chrono::{DateTime, NaiveDate};

use super::{ExamProfile, ExamProfileInput, SubjectProfile, SubjectProfileInput};
use crate::error::{FieldViolation, ValidationError};

pub const MAX_NAME_LEN: usize = 100;
pub const MIN_WEIGHT: f64 = 0.1;
pub const MAX_WEIGHT: f64 = 10.0;
pub const MAX_LEVEL: u8 = 10;
pub const MIN_WEEKLY_HOURS: f64 = 1.0;
pub const MAX_WEEKLY_HOURS: f64 = 168.0;

#[derive(Default)]
struct Violations(Vec<FieldViolation>);

impl Violations {
    fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldViolation::new(field, message));
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn into_error(self) -> ValidationError {
        ValidationError { violations: self.0 }
    }
}

/// Validate a profile snapshot.
///
/// # Errors
///
/// Returns a [`ValidationError`] listing every field that is missing,
/// malformed or out of range.
pub fn validate_profile(input: &ExamProfileInput) -> Result<ExamProfile, ValidationError> {
    let mut violations = Violations::default();

    check_name("name", &input.name, &mut violations);
    let exam_date = parse_exam_date(&input.exam_date, &mut violations);

    if !input.weekly_hours.is_finite()
        || input.weekly_hours < MIN_WEEKLY_HOURS
        || input.weekly_hours > MAX_WEEKLY_HOURS
    {
        violations.push(
            "weeklyHours",
            format!("must be between {MIN_WEEKLY_HOURS} and {MAX_WEEKLY_HOURS}"),
        );
    }

    if input.subjects.is_empty() {
        violations.push("subjects", "must contain at least one subject");
    }

    let subjects: Vec<Option<SubjectProfile>> = input
        .subjects
        .iter()
        .enumerate()
        .map(|(i, s)| validate_subject(i, s, &mut violations))
        .collect();

    // a bad date always records a violation, so the date is present here
    let result = match exam_date {
        Some(exam_date) if violations.is_empty() => Ok(ExamProfile {
            name: input.name.trim().to_string(),
            exam_date,
            weekly_hours: input.weekly_hours,
            is_active: input.is_active,
            subjects: subjects.into_iter().flatten().collect(),
        }),
        _ => Err(violations.into_error()),
    };

    match &result {
        Ok(profile) => tracing::debug!(
            name = profile.name(),
            subjects = profile.subjects().len(),
            "exam profile validated"
        ),
        Err(err) => tracing::debug!(violations = err.violations.len(), "exam profile rejected"),
    }
    result
}

/// Pick the active profile out of a collection.
///
/// When several profiles are flagged active the first one wins.
///
/// # Errors
///
/// Returns a [`ValidationError`] when the collection is empty or no profile
/// is flagged active.
pub fn select_active(profiles: &[ExamProfileInput]) -> Result<&ExamProfileInput, ValidationError> {
    if profiles.is_empty() {
        return Err(ValidationError::single("profiles", "no exam profiles supplied"));
    }
    let mut active = profiles.iter().filter(|p| p.is_active);
    let first = active
        .next()
        .ok_or_else(|| ValidationError::single("isActive", "no exam profile is marked active"))?;
    if active.next().is_some() {
        tracing::warn!(name = %first.name, "several exam profiles are active, using the first");
    }
    Ok(first)
}

fn validate_subject(
    index: usize,
    input: &SubjectProfileInput,
    violations: &mut Violations,
) -> Option<SubjectProfile> {
    let field = |name: &str| format!("subjects[{index}].{name}");

    check_name(&field("subject"), &input.subject, violations);

    let weight_ok =
        input.weight.is_finite() && input.weight >= MIN_WEIGHT && input.weight <= MAX_WEIGHT;
    if !weight_ok {
        violations.push(
            field("weight"),
            format!("must be between {MIN_WEIGHT} and {MAX_WEIGHT}"),
        );
    }

    let current_level = check_level(&field("currentLevel"), input.current_level, violations);
    let goal_level = check_level(&field("goalLevel"), input.goal_level, violations);

    let position = u32::try_from(input.position).ok();
    if position.is_none() {
        violations.push(field("position"), "must be zero or greater");
    }

    if !weight_ok {
        return None;
    }
    Some(SubjectProfile {
        subject: input.subject.trim().to_string(),
        weight: input.weight,
        current_level: current_level?,
        goal_level: goal_level?,
        position: position?,
    })
}

fn check_name(field: &str, value: &str, violations: &mut Violations) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        violations.push(field, "must not be blank");
    } else if trimmed.chars().count() > MAX_NAME_LEN {
        violations.push(field, format!("must be at most {MAX_NAME_LEN} characters"));
    }
}

fn check_level(field: &str, value: f64, violations: &mut Violations) -> Option<u8> {
    if !value.is_finite() || value.fract() != 0.0 {
        violations.push(field, "must be a whole number");
        return None;
    }
    if value < 0.0 || value > f64::from(MAX_LEVEL) {
        violations.push(field, format!("must be between 0 and {MAX_LEVEL}"));
        return None;
    }
    Some(value as u8)
}

fn parse_exam_date(value: &str, violations: &mut Violations) -> Option<NaiveDate> {
    let value = value.trim();
    let parsed = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()));
    if parsed.is_none() {
        violations.push("examDate", "must be a valid calendar date (YYYY-MM-DD)");
    }
    parsed
}
