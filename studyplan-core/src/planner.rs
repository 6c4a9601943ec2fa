//! Validate-then-persist entry point used by front ends.

use chrono::NaiveDate;

use crate::blob::{BlobStore, FileBlobStore};
use crate::config::PlannerConfig;
use crate::conflict;
use crate::dashboard::Dashboard;
use crate::entry::{EntryId, NewEntry, ScheduleEntry};
use crate::error::PlannerResult;
use crate::store::ScheduleStore;
use crate::subject::SubjectStore;
use crate::view::{self, View, ViewMode};
use crate::weekday::Weekday;

/// Schedule and subject stores sharing one blob store.
pub struct Planner<B: BlobStore> {
    blobs: B,
}

impl Planner<FileBlobStore> {
    /// Planner backed by files in the configured data directory.
    pub fn open(config: &PlannerConfig) -> Self {
        Planner::new(FileBlobStore::new(config.data_path()))
    }
}

impl<B: BlobStore> Planner<B> {
    pub fn new(blobs: B) -> Self {
        Planner { blobs }
    }

    pub fn schedule(&self) -> ScheduleStore<&B> {
        ScheduleStore::new(&self.blobs)
    }

    pub fn subjects(&self) -> SubjectStore<&B> {
        SubjectStore::new(&self.blobs)
    }

    /// Validate `candidate` against the current snapshot and store it.
    ///
    /// Invalid ranges and conflicts are rejected before anything is written.
    pub fn add_entry(&self, candidate: NewEntry) -> PlannerResult<ScheduleEntry> {
        let schedule = self.schedule();
        conflict::validate(&schedule.list()?, &candidate)?;
        schedule.add(candidate)
    }

    pub fn remove_entry(&self, id: &EntryId) -> PlannerResult<bool> {
        self.schedule().remove(id)
    }

    pub fn view(&self, mode: ViewMode, today: Weekday) -> PlannerResult<View> {
        Ok(view::project(&self.schedule().list()?, mode, today))
    }

    pub fn dashboard(&self, today: NaiveDate) -> PlannerResult<Dashboard> {
        let subjects = self.subjects().list()?;
        let entries = self.schedule().list()?;
        Ok(Dashboard::compute(&subjects, &entries, today))
    }
}
