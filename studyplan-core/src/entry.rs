//! Schedule entries: one study block for a subject on a weekday.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::time_of_day::TimeOfDay;
use crate::weekday::Weekday;

/// Opaque, immutable identifier assigned when an entry is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn generate() -> Self {
        EntryId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        EntryId(s.to_string())
    }
}

impl From<String> for EntryId {
    fn from(s: String) -> Self {
        EntryId(s)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stored schedule entry.
///
/// Field names are camelCase on disk (`startTime`, `endTime`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub id: EntryId,
    pub subject: String,
    pub day: Weekday,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

impl ScheduleEntry {
    /// True if this entry's `[start, end)` overlaps the given range on the given day.
    pub fn overlaps(&self, day: Weekday, start: TimeOfDay, end: TimeOfDay) -> bool {
        self.day == day && start < self.end_time && self.start_time < end
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end_time.minutes().saturating_sub(self.start_time.minutes())
    }
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.day, self.start_time, self.end_time, self.subject
        )
    }
}

/// A candidate entry submitted for insertion (no id yet).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub subject: String,
    pub day: Weekday,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

impl NewEntry {
    pub fn new(subject: impl Into<String>, day: Weekday, start_time: TimeOfDay, end_time: TimeOfDay) -> Self {
        NewEntry {
            subject: subject.into(),
            day,
            start_time,
            end_time,
        }
    }

    pub(crate) fn with_id(self, id: EntryId) -> ScheduleEntry {
        ScheduleEntry {
            id,
            subject: self.subject,
            day: self.day,
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(day: Weekday, start: &str, end: &str) -> ScheduleEntry {
        NewEntry::new("Math", day, start.parse().unwrap(), end.parse().unwrap())
            .with_id(EntryId::from("1"))
    }

    #[test]
    fn test_json_matches_stored_format() {
        let json = r#"{"id":"1712345678901","subject":"Physics","day":"Monday","startTime":"09:00","endTime":"10:30"}"#;
        let parsed: ScheduleEntry = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.id.as_str(), "1712345678901");
        assert_eq!(parsed.day, Weekday::Monday);
        assert_eq!(parsed.start_time.minutes(), 540);
        assert_eq!(parsed.duration_minutes(), 90);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), json);
    }

    #[test]
    fn test_overlaps_is_half_open() {
        let e = entry(Weekday::Monday, "09:00", "10:00");
        let t = |s: &str| s.parse::<TimeOfDay>().unwrap();

        assert!(e.overlaps(Weekday::Monday, t("09:30"), t("10:30")));
        assert!(e.overlaps(Weekday::Monday, t("08:00"), t("11:00")));
        assert!(!e.overlaps(Weekday::Monday, t("10:00"), t("11:00")));
        assert!(!e.overlaps(Weekday::Monday, t("08:00"), t("09:00")));
        assert!(!e.overlaps(Weekday::Tuesday, t("09:00"), t("10:00")));
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(EntryId::generate(), EntryId::generate());
    }
}
