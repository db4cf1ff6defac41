pub mod allocate;
pub mod config;
pub mod validate;

use std::path::Path;

use studyplan_core::error::Result;
use studyplan_core::{select_active, ExamProfileInput};

/// Read a profile file holding either one profile or an array of profiles.
///
/// For an array, the profile flagged `isActive` is used.
pub fn load_profile(path: &Path) -> Result<ExamProfileInput> {
    tracing::debug!(path = %path.display(), "reading exam profile");
    let content = std::fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;

    if value.is_array() {
        let profiles: Vec<ExamProfileInput> = serde_json::from_value(value)?;
        let active = select_active(&profiles)?;
        tracing::debug!(name = %active.name, total = profiles.len(), "selected active profile");
        Ok(active.clone())
    } else {
        Ok(serde_json::from_value(value)?)
    }
}
