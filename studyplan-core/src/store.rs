//! The schedule store: canonical list of schedule entries.

use std::collections::HashSet;

use crate::blob::{self, BlobStore};
use crate::entry::{EntryId, NewEntry, ScheduleEntry};
use crate::error::PlannerResult;

/// Blob key holding the schedule entries.
pub const SCHEDULES_KEY: &str = "schedules";

/// Owns the persisted schedule entries.
///
/// Every read goes back to the blob, and every mutation rewrites it in full.
/// The store does not check for overlaps; see [`crate::conflict`].
pub struct ScheduleStore<B: BlobStore> {
    blobs: B,
}

impl<B: BlobStore> ScheduleStore<B> {
    pub fn new(blobs: B) -> Self {
        ScheduleStore { blobs }
    }

    /// Current snapshot of all entries.
    pub fn list(&self) -> PlannerResult<Vec<ScheduleEntry>> {
        blob::load_records(&self.blobs, SCHEDULES_KEY)
    }

    pub fn get(&self, id: &EntryId) -> PlannerResult<Option<ScheduleEntry>> {
        Ok(self.list()?.into_iter().find(|e| &e.id == id))
    }

    /// Assign an id to `candidate`, append it and persist.
    pub fn add(&self, candidate: NewEntry) -> PlannerResult<ScheduleEntry> {
        let mut records = blob::load::<ScheduleEntry, _>(&self.blobs, SCHEDULES_KEY)?;

        let taken: HashSet<&EntryId> = records.items.iter().map(|e| &e.id).collect();
        let id = loop {
            let id = EntryId::generate();
            if !taken.contains(&id) {
                break id;
            }
        };

        let entry = candidate.with_id(id);
        records.items.push(entry.clone());
        blob::save(&self.blobs, SCHEDULES_KEY, &records)?;

        tracing::debug!(id = %entry.id, day = %entry.day, "added schedule entry");
        Ok(entry)
    }

    /// Remove the entry with `id`. Returns whether anything was removed;
    /// an unknown id leaves the blob untouched.
    pub fn remove(&self, id: &EntryId) -> PlannerResult<bool> {
        let mut records = blob::load::<ScheduleEntry, _>(&self.blobs, SCHEDULES_KEY)?;
        let before = records.items.len();

        records.items.retain(|e| &e.id != id);
        if records.items.len() == before {
            return Ok(false);
        }

        blob::save(&self.blobs, SCHEDULES_KEY, &records)?;

        tracing::debug!(%id, "removed schedule entry");
        Ok(true)
    }

    /// Delete every entry.
    pub fn clear(&self) -> PlannerResult<()> {
        self.blobs.remove(SCHEDULES_KEY)
    }
}
