//! Exam study-time allocation.
//!
//! Turns an exam profile into hours per week, total hours and a percentage
//! share for each subject. The pipeline is a single pure function:
//!
//! ```text
//! validate -> timeline -> normalize -> allocate -> build response
//! ```
//!
//! `today` is always passed in; nothing here reads the clock.

pub mod allocator;
pub mod metadata;
pub mod normalizer;
pub mod response;

pub use allocator::{largest_remainder, HourAllocator, SubjectAllocation};
pub use metadata::{compute_timeline, weeks_until_exam, ExamTimeline, PastExamPolicy};
pub use normalizer::{normalize, Normalization, NormalizedSubject, ScoreBasis};
pub use response::{AllocationMetadata, AllocationResponse, AllocationResult};

use chrono::NaiveDate;

use crate::config::AllocationConfig;
use crate::error::AllocationError;
use crate::profile::{validate_profile, ExamProfile, ExamProfileInput};

/// Allocation pipeline bound to a configuration.
#[derive(Debug, Clone, Default)]
pub struct AllocationEngine {
    config: AllocationConfig,
}

impl AllocationEngine {
    pub fn new(config: AllocationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AllocationConfig {
        &self.config
    }

    /// Validate `input` and allocate its weekly hours.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError::Validation`] for malformed input and
    /// [`AllocationError::Invariant`] if rounding fails its own checks.
    pub fn allocate(
        &self,
        input: &ExamProfileInput,
        today: NaiveDate,
    ) -> Result<AllocationResponse, AllocationError> {
        let profile = validate_profile(input)?;
        self.allocate_profile(&profile, today)
    }

    /// Allocate an already validated profile.
    ///
    /// # Errors
    ///
    /// Same as [`AllocationEngine::allocate`]; validation errors can only
    /// come from the past-exam policy here.
    pub fn allocate_profile(
        &self,
        profile: &ExamProfile,
        today: NaiveDate,
    ) -> Result<AllocationResponse, AllocationError> {
        metadata::check_exam_date(profile.exam_date(), today, self.config.past_exam_policy)?;
        let timeline = compute_timeline(profile.exam_date(), profile.weekly_hours(), today);

        let normalization = normalize(profile.subjects());
        let shares: Vec<f64> = normalization.shares().collect();
        let positions: Vec<u32> = profile.subjects().iter().map(|s| s.position).collect();

        let allocations = HourAllocator::new(self.config.hour_decimals).allocate(
            profile.weekly_hours(),
            timeline.weeks_until_exam,
            &shares,
            &positions,
        )?;

        tracing::debug!(
            profile = profile.name(),
            basis = ?normalization.basis,
            weeks = timeline.weeks_until_exam,
            "allocated study hours"
        );
        Ok(response::build_response(profile, &normalization, &allocations, &timeline))
    }
}

/// Allocate with the default configuration.
///
/// # Errors
///
/// See [`AllocationEngine::allocate`].
pub fn allocate(
    input: &ExamProfileInput,
    today: NaiveDate,
) -> Result<AllocationResponse, AllocationError> {
    AllocationEngine::default().allocate(input, today)
}
