use anyhow::Result;
use owo_colors::OwoColorize;
use studyplan_core::Planner;
use studyplan_core::blob::BlobStore;

use crate::utils::tui;

pub fn run<B: BlobStore>(planner: &Planner<B>, force: bool) -> Result<()> {
    let schedule = planner.schedule();
    let count = schedule.list()?.len();

    if count == 0 {
        println!("{}", "Nothing to clear".dimmed());
        return Ok(());
    }

    let prompt = format!("Delete all {} {}?", count, tui::pluralize("schedule", count));
    if !tui::confirm(prompt, force)? {
        return Ok(());
    }

    schedule.clear()?;
    println!("Deleted {} {}", count, tui::pluralize("schedule", count));

    Ok(())
}
