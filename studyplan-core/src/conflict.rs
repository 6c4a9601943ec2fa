//! Overlap detection and validation of candidate entries.
//!
//! Intervals are half-open: `[start, end)`. Two entries on the same day
//! conflict iff `s1 < e2 && s2 < e1`, so back-to-back sessions that share an
//! endpoint are allowed.

use crate::entry::{NewEntry, ScheduleEntry};
use crate::error::{PlannerError, PlannerResult};
use crate::time_of_day::TimeOfDay;
use crate::weekday::Weekday;

/// First existing entry on `day` that overlaps `[start, end)`.
pub fn find_conflict(
    existing: &[ScheduleEntry],
    day: Weekday,
    start: TimeOfDay,
    end: TimeOfDay,
) -> Option<&ScheduleEntry> {
    existing.iter().find(|e| e.overlaps(day, start, end))
}

/// True if any existing entry on `day` overlaps `[start, end)`.
pub fn conflicts(existing: &[ScheduleEntry], day: Weekday, start: TimeOfDay, end: TimeOfDay) -> bool {
    find_conflict(existing, day, start, end).is_some()
}

/// Check a candidate against a snapshot before it is stored.
///
/// Rejects ranges where the end is not strictly after the start (no
/// overnight ranges), then ranges that overlap an entry on the same day.
pub fn validate(existing: &[ScheduleEntry], candidate: &NewEntry) -> PlannerResult<()> {
    let (day, start, end) = (candidate.day, candidate.start_time, candidate.end_time);

    if start >= end {
        return Err(PlannerError::InvalidRange { start, end });
    }

    if let Some(existing) = find_conflict(existing, day, start, end) {
        return Err(PlannerError::Conflict {
            day,
            start,
            end,
            existing_subject: existing.subject.clone(),
            existing_start: existing.start_time,
            existing_end: existing.end_time,
        });
    }

    Ok(())
}
