use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use studyplan_core::Planner;
use studyplan_core::blob::BlobStore;
use studyplan_core::subject::{NewSubject, Priority};

use super::resolve_id;
use crate::render::Render;
use crate::utils::tui;

pub fn add<B: BlobStore>(
    planner: &Planner<B>,
    name: String,
    hours: u32,
    deadline: Option<NaiveDate>,
    priority: Priority,
) -> Result<()> {
    let name = name.trim().to_string();
    if name.is_empty() {
        anyhow::bail!("Subject name must not be empty");
    }

    let subject = planner.subjects().add(NewSubject {
        name,
        study_hours: hours,
        deadline,
        priority,
    })?;

    println!("{} {}", "Added".green(), subject.render());
    Ok(())
}

/// Subjects sorted by deadline, earliest first.
pub fn list<B: BlobStore>(planner: &Planner<B>) -> Result<()> {
    let subjects = planner.subjects().list_by_deadline()?;

    if subjects.is_empty() {
        println!("{}", "No subjects added yet!".dimmed());
        return Ok(());
    }

    for subject in &subjects {
        println!("{}", subject.render());
    }

    Ok(())
}

pub fn remove<B: BlobStore>(planner: &Planner<B>, id: &str, force: bool) -> Result<()> {
    let store = planner.subjects();
    let subjects = store.list()?;

    let Some(resolved) = resolve_id(id, subjects.iter().map(|s| &s.id))? else {
        println!("{}", format!("No subject with id '{id}'").dimmed());
        return Ok(());
    };

    if let Some(subject) = subjects.iter().find(|s| s.id == resolved) {
        println!("{}", subject.render());
    }

    if !tui::confirm("Delete this subject?".to_string(), force)? {
        return Ok(());
    }

    store.remove(&resolved)?;
    println!("{}", "Deleted".red());
    Ok(())
}

pub fn clear<B: BlobStore>(planner: &Planner<B>, force: bool) -> Result<()> {
    let store = planner.subjects();
    let count = store.list()?.len();

    if count == 0 {
        println!("{}", "Nothing to clear".dimmed());
        return Ok(());
    }

    let prompt = format!("Delete all {} {}?", count, tui::pluralize("subject", count));
    if !tui::confirm(prompt, force)? {
        return Ok(());
    }

    store.clear()?;
    println!("Deleted {} {}", count, tui::pluralize("subject", count));
    Ok(())
}
