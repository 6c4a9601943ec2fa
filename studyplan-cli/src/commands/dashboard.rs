use anyhow::Result;
use studyplan_core::Planner;
use studyplan_core::blob::BlobStore;

use crate::render::Render;

pub fn run<B: BlobStore>(planner: &Planner<B>) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let dashboard = planner.dashboard(today)?;

    println!("{}", dashboard.render());

    Ok(())
}
