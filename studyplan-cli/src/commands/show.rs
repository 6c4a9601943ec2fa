use anyhow::Result;
use studyplan_core::blob::BlobStore;
use studyplan_core::view::ViewMode;
use studyplan_core::{Planner, Weekday};

use crate::render::Render;

/// Print the daily view (of `day`, defaulting to today) or the weekly view.
pub fn run<B: BlobStore>(planner: &Planner<B>, weekly: bool, day: Option<Weekday>) -> Result<()> {
    let mode = if weekly {
        ViewMode::Weekly
    } else {
        ViewMode::Daily
    };
    let day = day.unwrap_or_else(Weekday::today);

    let view = planner.view(mode, day)?;
    println!("{}", view.render());

    Ok(())
}
