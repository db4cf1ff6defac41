//! Study-time allocation command.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Args;

use studyplan_core::error::Result;
use studyplan_core::{AllocationEngine, Config};

#[derive(Args)]
pub struct AllocateArgs {
    /// Exam profile JSON file (one profile, or an array with one active)
    pub profile: PathBuf,
    /// Date to plan from (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub today: Option<String>,
    /// Print the response as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: AllocateArgs) -> Result<()> {
    let today = match args.today.as_deref() {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| format!("Invalid date: '{s}'. Use YYYY-MM-DD"))?,
        None => Local::now().date_naive(),
    };

    let input = super::load_profile(&args.profile)?;
    let config = Config::load()?;
    let engine = AllocationEngine::new(config.allocation);
    let response = engine.allocate(&input, today)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let meta = &response.metadata;
    println!("{} (exam {})", input.name.trim(), meta.exam_date);
    println!(
        "  {} h/week for {} week(s), {} h available",
        meta.weekly_hours, meta.weeks_until_exam, meta.total_available_hours
    );
    println!();
    for line in response.summary_lines(engine.config().hour_decimals) {
        println!("  {line}");
    }

    Ok(())
}
