//! Profile validation command.

use std::path::PathBuf;

use clap::Args;

use studyplan_core::error::Result;
use studyplan_core::{validate_profile, CoreError};

#[derive(Args)]
pub struct ValidateArgs {
    /// Exam profile JSON file
    pub profile: PathBuf,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let input = super::load_profile(&args.profile)?;

    match validate_profile(&input) {
        Ok(profile) => {
            let status = if profile.is_active() { "active" } else { "inactive" };
            println!(
                "Profile is valid: {} ({} subjects, {status})",
                profile.name(),
                profile.subjects().len()
            );
            Ok(())
        }
        Err(err) => {
            println!("Profile has {} problem(s):", err.violations.len());
            for violation in &err.violations {
                println!("  {violation}");
            }
            Err(CoreError::Custom("profile is invalid".to_string()))
        }
    }
}
