//! CLI smoke entry point.
//!
//! # Responsibility
//! - Build a store from environment config and verify core wiring.
//! - Print the seeded achievements and the dashboard summary as JSON.

use std::process::ExitCode;
use stride_core::{init_logging, CoreConfig, TrackerService};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("stride: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = CoreConfig::from_env()?;
    if let Some(log_dir) = config.log_dir.as_deref() {
        init_logging(config.log_level, log_dir)?;
    }

    println!("stride_core ping={}", stride_core::ping());
    println!("stride_core version={}", stride_core::core_version());

    let service = TrackerService::new(config.build_store());
    let achievements = service.list_achievements()?;
    println!("{}", serde_json::to_string_pretty(&achievements)?);

    let today = chrono::Utc::now().date_naive();
    let summary = service.dashboard(today)?;
    log::info!(
        "event=cli_summary module=cli status=ok achievements={}",
        achievements.len()
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
