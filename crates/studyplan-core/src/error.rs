//! Core error types for studyplan-core.
//!
//! Errors are grouped by where they originate: input validation, the
//! allocation arithmetic itself, and configuration loading. All of them
//! funnel into [`CoreError`] for callers that do not care about the split.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for studyplan-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Allocation pipeline errors
    #[error("Allocation error: {0}")]
    Allocation(#[from] AllocationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// A single problem with one field of an exam profile.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FieldViolation {
    /// Path to the offending field, e.g. `subjects[1].weight`
    pub field: String,
    /// Human-readable description of the problem
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every field-level problem found in an exam profile.
///
/// Validation never stops at the first problem, so `violations` holds the
/// complete list and is never empty.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid exam profile: {}", join_violations(.violations))]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Build an error holding a single violation.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            violations: vec![FieldViolation::new(field, message)],
        }
    }

    /// Whether any violation targets `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Rounded allocation does not add up to its target.
///
/// This is a defect in the rounding logic, never a problem with user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Allocation invariant violated: {quantity} sums to {actual} units, expected {expected}")]
pub struct InvariantViolation {
    /// Which quantity drifted (`hours_per_week` or `percentage`)
    pub quantity: &'static str,
    pub expected: u64,
    pub actual: u64,
}

/// Errors returned by the allocation pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AllocationError {
    /// The profile snapshot is malformed or out of range
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Internal rounding defect
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration schema
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

impl From<ValidationError> for CoreError {
    fn from(err: ValidationError) -> Self {
        CoreError::Allocation(AllocationError::Validation(err))
    }
}

impl From<String> for CoreError {
    fn from(message: String) -> Self {
        CoreError::Custom(message)
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
