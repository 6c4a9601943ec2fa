use anyhow::Result;
use owo_colors::OwoColorize;
use studyplan_core::blob::BlobStore;
use studyplan_core::{Planner, ScheduleEntry};

use super::resolve_id;
use crate::render::Render;
use crate::utils::tui;

pub fn run<B: BlobStore>(planner: &Planner<B>, id: &str, force: bool) -> Result<()> {
    let Some(entry) = find(planner, id)? else {
        println!("{}", format!("No schedule entry with id '{id}'").dimmed());
        return Ok(());
    };

    println!("{}", entry.day.render());
    println!("   {}", entry.render());

    if !tui::confirm("Delete this schedule?".to_string(), force)? {
        return Ok(());
    }

    planner.remove_entry(&entry.id)?;
    println!("{}", "Deleted".red());

    Ok(())
}

/// Look up an entry by full id or unique id prefix.
pub fn find<B: BlobStore>(planner: &Planner<B>, id: &str) -> Result<Option<ScheduleEntry>> {
    let entries = planner.schedule().list()?;

    let Some(resolved) = resolve_id(id, entries.iter().map(|e| &e.id))? else {
        return Ok(None);
    };

    Ok(entries.into_iter().find(|e| e.id == resolved))
}
