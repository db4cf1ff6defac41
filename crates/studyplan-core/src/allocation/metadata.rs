//! Exam timeline: how many weeks remain and how many hours they hold.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// What to do with an exam date that is already behind us.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PastExamPolicy {
    /// Treat it as one week away, so allocation still produces a plan.
    #[default]
    Clamp,
    /// Reject the profile with a validation error on `examDate`.
    Reject,
}

/// Time budget derived from the exam date and weekly hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExamTimeline {
    /// Whole weeks until the exam, never below 1
    pub weeks_until_exam: u32,
    /// `weekly_hours * weeks_until_exam`
    pub total_available_hours: f64,
}

/// Whole weeks between `today` and `exam_date`, rounded up.
///
/// Same-day and past exams count as one week.
pub fn weeks_until_exam(exam_date: NaiveDate, today: NaiveDate) -> u32 {
    let days = (exam_date - today).num_days();
    if days <= 0 {
        return 1;
    }
    let weeks = (days + 6) / 7;
    u32::try_from(weeks).unwrap_or(u32::MAX)
}

/// Compute the timeline for an exam.
pub fn compute_timeline(exam_date: NaiveDate, weekly_hours: f64, today: NaiveDate) -> ExamTimeline {
    let weeks_until_exam = weeks_until_exam(exam_date, today);
    ExamTimeline {
        weeks_until_exam,
        total_available_hours: weekly_hours * f64::from(weeks_until_exam),
    }
}

/// Apply `policy` to an exam date.
///
/// # Errors
///
/// Under [`PastExamPolicy::Reject`], returns a [`ValidationError`] on
/// `examDate` when the exam is strictly before `today`.
pub fn check_exam_date(
    exam_date: NaiveDate,
    today: NaiveDate,
    policy: PastExamPolicy,
) -> Result<(), ValidationError> {
    if exam_date >= today {
        return Ok(());
    }
    match policy {
        PastExamPolicy::Clamp => {
            tracing::debug!(%exam_date, %today, "exam date is in the past, clamping to one week");
            Ok(())
        }
        PastExamPolicy::Reject => Err(ValidationError::single(
            "examDate",
            format!("must not be before {today}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn exam_today_is_one_week() {
        let today = date(2026, 10, 18);
        assert_eq!(weeks_until_exam(today, today), 1);
    }

    #[test]
    fn past_exam_is_one_week() {
        assert_eq!(weeks_until_exam(date(2026, 1, 1), date(2026, 10, 18)), 1);
    }

    #[test]
    fn partial_weeks_round_up() {
        let today = date(2026, 10, 18);
        assert_eq!(weeks_until_exam(date(2026, 10, 19), today), 1);
        assert_eq!(weeks_until_exam(date(2026, 10, 25), today), 1);
        assert_eq!(weeks_until_exam(date(2026, 10, 26), today), 2);
        assert_eq!(weeks_until_exam(date(2026, 11, 1), today), 2);
    }

    #[test]
    fn timeline_multiplies_weekly_hours() {
        let timeline = compute_timeline(date(2026, 11, 15), 12.5, date(2026, 10, 18));
        assert_eq!(timeline.weeks_until_exam, 4);
        assert_eq!(timeline.total_available_hours, 50.0);
    }

    #[test]
    fn clamp_policy_accepts_past_dates() {
        assert!(check_exam_date(date(2026, 1, 1), date(2026, 10, 18), PastExamPolicy::Clamp).is_ok());
    }

    #[test]
    fn reject_policy_refuses_past_dates_only() {
        let today = date(2026, 10, 18);
        let err = check_exam_date(date(2026, 10, 17), today, PastExamPolicy::Reject).unwrap_err();
        assert!(err.has_field("examDate"));
        assert!(check_exam_date(today, today, PastExamPolicy::Reject).is_ok());
    }

    #[test]
    fn policy_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&PastExamPolicy::Reject).unwrap(), "\"reject\"");
        let parsed: PastExamPolicy = serde_json::from_str("\"clamp\"").unwrap();
        assert_eq!(parsed, PastExamPolicy::Clamp);
    }
}
