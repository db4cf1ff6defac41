//! Allocation response payload.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::allocator::SubjectAllocation;
use super::metadata::ExamTimeline;
use super::normalizer::Normalization;
use crate::profile::ExamProfile;

/// Allocation for one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationResult {
    pub subject: String,
    pub total_hours: f64,
    pub hours_per_week: f64,
    pub gap: u8,
    pub percentage: u32,
}

/// Run-level figures shared by every result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationMetadata {
    pub weeks_until_exam: u32,
    pub total_available_hours: f64,
    pub weekly_hours: f64,
    pub exam_date: NaiveDate,
}

/// Full output of the allocation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationResponse {
    /// One entry per subject, in input order
    pub results: Vec<AllocationResult>,
    pub metadata: AllocationMetadata,
}

impl AllocationResponse {
    /// Find the result for a subject by name.
    pub fn result_for(&self, subject: &str) -> Option<&AllocationResult> {
        self.results.iter().find(|r| r.subject == subject)
    }

    /// One line per subject, suitable for terminal output.
    ///
    /// Hours are printed with `hour_decimals` places, matching the unit the
    /// allocation was rounded to.
    pub fn summary_lines(&self, hour_decimals: u8) -> Vec<String> {
        let decimals = usize::from(hour_decimals);
        let width = self
            .results
            .iter()
            .map(|r| r.subject.chars().count())
            .max()
            .unwrap_or(0);
        self.results
            .iter()
            .map(|r| {
                format!(
                    "{:<width$}  {:>6.*} h/week  {:>7.*} h total  {:>3}%  gap {}",
                    r.subject,
                    decimals,
                    r.hours_per_week,
                    decimals,
                    r.total_hours,
                    r.percentage,
                    r.gap,
                    width = width
                )
            })
            .collect()
    }
}

/// Zip subjects with their computed figures.
///
/// `normalization` and `allocations` must be parallel to the profile's
/// subjects.
pub fn build_response(
    profile: &ExamProfile,
    normalization: &Normalization,
    allocations: &[SubjectAllocation],
    timeline: &ExamTimeline,
) -> AllocationResponse {
    let results = profile
        .subjects()
        .iter()
        .zip(&normalization.subjects)
        .zip(allocations)
        .map(|((subject, normalized), allocation)| AllocationResult {
            subject: subject.subject.clone(),
            total_hours: allocation.total_hours,
            hours_per_week: allocation.hours_per_week,
            gap: normalized.gap,
            percentage: allocation.percentage,
        })
        .collect();

    AllocationResponse {
        results,
        metadata: AllocationMetadata {
            weeks_until_exam: timeline.weeks_until_exam,
            total_available_hours: timeline.total_available_hours,
            weekly_hours: profile.weekly_hours(),
            exam_date: profile.exam_date(),
        },
    }
}
