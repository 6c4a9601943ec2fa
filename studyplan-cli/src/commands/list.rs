use anyhow::Result;
use owo_colors::OwoColorize;
use studyplan_core::Planner;
use studyplan_core::blob::BlobStore;

pub fn run<B: BlobStore>(planner: &Planner<B>) -> Result<()> {
    let mut entries = planner.schedule().list()?;

    if entries.is_empty() {
        println!("{}", "No schedules yet".dimmed());
        return Ok(());
    }

    entries.sort_by_key(|e| (e.day, e.start_time));

    for entry in &entries {
        println!(
            "{}  {:<9} {}-{} {:>8}  {}",
            entry.id.dimmed(),
            entry.day,
            entry.start_time,
            entry.end_time,
            format_duration(entry.duration_minutes()),
            entry.subject
        );
    }

    Ok(())
}

/// "1h30m", "45m", "2h".
fn format_duration(minutes: u16) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h{m:02}m"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studyplan_core::blob::MemoryBlobStore;
    use studyplan_core::{NewEntry, Weekday};

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(45), "45m");
        assert_eq!(format_duration(120), "2h");
        assert_eq!(format_duration(90), "1h30m");
        assert_eq!(format_duration(65), "1h05m");
    }

    #[test]
    fn test_list_runs_on_empty_and_filled() {
        let planner = Planner::new(MemoryBlobStore::new());
        run(&planner).unwrap();

        let entry = planner
            .add_entry(NewEntry::new(
                "Math",
                Weekday::Monday,
                "09:00".parse().unwrap(),
                "10:30".parse().unwrap(),
            ))
            .unwrap();
        assert_eq!(format_duration(entry.duration_minutes()), "1h30m");
        run(&planner).unwrap();
    }
}
