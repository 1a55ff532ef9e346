//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `meeting_core` linkage with a deterministic probe.
//! - Walk one meeting through create, update, list and delete, printing JSON.

use chrono::NaiveDate;
use meeting_core::{MeetingCreate, MeetingPatch, MeetingStore};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("meeting_core ping={}", meeting_core::ping());
    println!("meeting_core version={}", meeting_core::core_version());

    match run_demo() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("demo failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_demo() -> Result<(), Box<dyn Error>> {
    let mut store = MeetingStore::new();
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("invalid demo date")?;

    let standup = store.create(MeetingCreate {
        title: "Standup".to_string(),
        date,
        start_time: "09:00".to_string(),
        end_time: "09:15".to_string(),
        attendees: vec!["alice".to_string(), "bob".to_string()],
        notes: String::new(),
        tags: vec!["daily".to_string()],
    })?;
    println!("created={}", serde_json::to_string(&standup)?);

    let updated = store.update(&standup.id, &MeetingPatch::new().title("Retro"));
    println!("updated={updated}");
    println!("all={}", serde_json::to_string_pretty(&store.get_all())?);

    println!("deleted={}", store.delete(&standup.id));
    println!("deleted_again={}", store.delete(&standup.id));
    println!("remaining={}", store.len());
    Ok(())
}
