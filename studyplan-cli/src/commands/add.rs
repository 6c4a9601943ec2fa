use anyhow::Result;
use owo_colors::OwoColorize;
use studyplan_core::blob::BlobStore;
use studyplan_core::{NewEntry, Planner, PlannerError, ScheduleEntry, TimeOfDay, Weekday};

use crate::render::Render;
use crate::utils::tui;

pub fn run<B: BlobStore>(
    planner: &Planner<B>,
    subject: Option<String>,
    day: Weekday,
    start: TimeOfDay,
    end: TimeOfDay,
) -> Result<()> {
    let subject = match subject {
        Some(s) => s,
        None => pick_subject(planner)?,
    };

    let entry = match add(planner, subject, day, start, end) {
        Ok(entry) => entry,
        Err(e) => {
            if let Some(hint) = hint_for(&e) {
                eprintln!("{}", hint.dimmed());
            }
            return Err(e);
        }
    };

    println!("{} {}", "Added".green(), day.render());
    println!("   {}", entry.render());

    Ok(())
}

pub fn add<B: BlobStore>(
    planner: &Planner<B>,
    subject: String,
    day: Weekday,
    start: TimeOfDay,
    end: TimeOfDay,
) -> Result<ScheduleEntry> {
    let subject = subject.trim().to_string();
    if subject.is_empty() {
        anyhow::bail!("Subject must not be empty");
    }

    let entry = planner.add_entry(NewEntry::new(subject, day, start, end))?;
    Ok(entry)
}

/// Next step for errors the user can fix by picking another slot.
fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    err.downcast_ref::<PlannerError>()
        .filter(|e| e.is_validation())
        .map(|_| "Check free slots with `studyplan show --weekly`")
}

fn pick_subject<B: BlobStore>(planner: &Planner<B>) -> Result<String> {
    let mut names = planner.subjects().names()?;

    if names.is_empty() {
        anyhow::bail!(
            "No subjects yet.\n\n\
            Pass one directly with --subject, or add one with:\n  \
            studyplan subjects add <name>"
        );
    }

    let index = tui::select("  Subject", &names)?;
    Ok(names.swap_remove(index))
}
