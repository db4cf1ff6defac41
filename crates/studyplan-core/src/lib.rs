//! # Studyplan Core Library
//!
//! Study-time planning for an upcoming exam. Given an exam profile (exam
//! date, weekly hour budget, subjects with a weight and a current/goal
//! proficiency level), the library works out how many hours each subject
//! should get per week and until the exam.
//!
//! ## Architecture
//!
//! - **Profile**: raw snapshot types and the validator that turns them into
//!   a checked [`ExamProfile`]
//! - **Allocation**: timeline, gap-weighted normalization and
//!   largest-remainder rounding, composed by [`AllocationEngine`]
//! - **Config**: TOML settings for rounding precision and past-exam handling
//!
//! Everything in the allocation path is pure and synchronous; the current
//! date is always an argument.

pub mod allocation;
pub mod config;
pub mod error;
pub mod profile;

pub use allocation::{
    allocate, AllocationEngine, AllocationMetadata, AllocationResponse, AllocationResult,
    PastExamPolicy, ScoreBasis,
};
pub use config::{AllocationConfig, Config};
pub use error::{
    AllocationError, ConfigError, CoreError, FieldViolation, InvariantViolation, ValidationError,
};
pub use profile::{
    select_active, validate_profile, ExamProfile, ExamProfileInput, SubjectProfile,
    SubjectProfileInput,
};
