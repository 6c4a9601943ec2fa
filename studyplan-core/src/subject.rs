//! Studied subjects and their store.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::blob::{self, BlobStore};
use crate::entry::EntryId;
use crate::error::{PlannerError, PlannerResult};

/// Blob key holding the subject list, as the browser planner named it.
pub const SUBJECTS_KEY: &str = "studyPlannerSubjects";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        };
        f.write_str(s)
    }
}

impl FromStr for Priority {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(PlannerError::InvalidPriority(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A subject with its weekly study budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: EntryId,
    pub name: String,
    #[serde(default, deserialize_with = "lenient_hours")]
    pub study_hours: u32,
    #[serde(default, deserialize_with = "lenient_date", skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub priority: Priority,
}

/// Subject fields submitted by the user (no id yet).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubject {
    pub name: String,
    pub study_hours: u32,
    pub deadline: Option<NaiveDate>,
    pub priority: Priority,
}

/// Hours may be stored as a number or as the raw form string ("3", "").
fn lenient_hours<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Hours {
        Number(u32),
        Text(String),
        Null(()),
    }

    Ok(match Hours::deserialize(deserializer)? {
        Hours::Number(n) => n,
        Hours::Text(s) => s.trim().parse().unwrap_or(0),
        Hours::Null(()) => 0,
    })
}

/// Deadlines are `YYYY-MM-DD`; an empty string means no deadline.
fn lenient_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

pub struct SubjectStore<B: BlobStore> {
    blobs: B,
}

impl<B: BlobStore> SubjectStore<B> {
    pub fn new(blobs: B) -> Self {
        SubjectStore { blobs }
    }

    pub fn list(&self) -> PlannerResult<Vec<Subject>> {
        blob::load_records(&self.blobs, SUBJECTS_KEY)
    }

    /// Subjects ordered by deadline, earliest first. Subjects without a deadline come last.
    pub fn list_by_deadline(&self) -> PlannerResult<Vec<Subject>> {
        let mut subjects = self.list()?;
        subjects.sort_by_key(|s| (s.deadline.is_none(), s.deadline));
        Ok(subjects)
    }

    /// Subject names, for picking the subject of a new schedule entry.
    pub fn names(&self) -> PlannerResult<Vec<String>> {
        Ok(self.list()?.into_iter().map(|s| s.name).collect())
    }

    pub fn add(&self, new: NewSubject) -> PlannerResult<Subject> {
        let mut records = blob::load::<Subject, _>(&self.blobs, SUBJECTS_KEY)?;

        let id = loop {
            let id = EntryId::generate();
            if records.items.iter().all(|s| s.id != id) {
                break id;
            }
        };

        let subject = Subject {
            id,
            name: new.name,
            study_hours: new.study_hours,
            deadline: new.deadline,
            priority: new.priority,
        };
        records.items.push(subject.clone());
        blob::save(&self.blobs, SUBJECTS_KEY, &records)?;

        tracing::debug!(id = %subject.id, name = %subject.name, "added subject");
        Ok(subject)
    }

    /// Remove a subject by id. Unknown ids are a no-op and write nothing.
    pub fn remove(&self, id: &EntryId) -> PlannerResult<bool> {
        let mut records = blob::load::<Subject, _>(&self.blobs, SUBJECTS_KEY)?;
        let before = records.items.len();

        records.items.retain(|s| &s.id != id);
        if records.items.len() == before {
            return Ok(false);
        }

        blob::save(&self.blobs, SUBJECTS_KEY, &records)?;
        Ok(true)
    }

    pub fn clear(&self) -> PlannerResult<()> {
        self.blobs.remove(SUBJECTS_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blob::MemoryBlobStore;

    fn new_subject(name: &str, hours: u32, deadline: Option<&str>, priority: Priority) -> NewSubject {
        NewSubject {
            name: name.to_string(),
            study_hours: hours,
            deadline: deadline.map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap()),
            priority,
        }
    }

    #[test]
    fn test_reads_browser_format() {
        let json = r#"{"id":"1700000000000","name":"Physics","studyHours":"5","deadline":"2025-06-01","priority":"High"}"#;
        let subject: Subject = serde_json::from_str(json).unwrap();

        assert_eq!(subject.study_hours, 5);
        assert_eq!(subject.priority, Priority::High);
        assert_eq!(subject.deadline, NaiveDate::from_ymd_opt(2025, 6, 1));
    }

    #[test]
    fn test_lenient_fields() {
        let json = r#"{"id":"1","name":"Art","studyHours":"","deadline":""}"#;
        let subject: Subject = serde_json::from_str(json).unwrap();

        assert_eq!(subject.study_hours, 0);
        assert_eq!(subject.deadline, None);
        assert_eq!(subject.priority, Priority::Medium);

        let numeric: Subject = serde_json::from_str(r#"{"id":"2","name":"Bio","studyHours":3}"#).unwrap();
        assert_eq!(numeric.study_hours, 3);
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!(" low".parse::<Priority>().unwrap(), Priority::Low);
        assert!(matches!(
            "urgent".parse::<Priority>(),
            Err(PlannerError::InvalidPriority(_))
        ));
    }

    #[test]
    fn test_add_list_remove() {
        let store = SubjectStore::new(MemoryBlobStore::new());
        let math = store.add(new_subject("Math", 4, Some("2025-05-01"), Priority::High)).unwrap();
        store.add(new_subject("History", 2, None, Priority::Low)).unwrap();

        assert_eq!(store.names().unwrap(), vec!["Math", "History"]);

        assert!(store.remove(&math.id).unwrap());
        assert!(!store.remove(&math.id).unwrap());
        assert_eq!(store.names().unwrap(), vec!["History"]);
    }

    #[test]
    fn test_list_by_deadline() {
        let store = SubjectStore::new(MemoryBlobStore::new());
        store.add(new_subject("None", 1, None, Priority::Low)).unwrap();
        store.add(new_subject("Late", 1, Some("2025-12-01"), Priority::Low)).unwrap();
        store.add(new_subject("Soon", 1, Some("2025-01-15"), Priority::Low)).unwrap();

        let names: Vec<String> = store
            .list_by_deadline()
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Soon", "Late", "None"]);
    }

    #[test]
    fn test_clear() {
        let store = SubjectStore::new(MemoryBlobStore::new());
        store.add(new_subject("Math", 4, None, Priority::High)).unwrap();

        store.clear().unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_stored_under_browser_key() {
        let blobs = MemoryBlobStore::new();
        blobs
            .write(
                "studyPlannerSubjects",
                br#"[{"id":"1","name":"Physics","studyHours":"5","deadline":"","priority":"high"}]"#,
            )
            .unwrap();

        let store = SubjectStore::new(&blobs);
        assert_eq!(store.names().unwrap(), vec!["Physics"]);

        store.add(new_subject("Math", 2, None, Priority::Low)).unwrap();
        assert_eq!(blobs.read("subjects").unwrap(), None);
        assert_eq!(store.names().unwrap(), vec!["Physics", "Math"]);
    }

    #[test]
    fn test_remove_unknown_id_does_not_rewrite() {
        let blobs = MemoryBlobStore::new();
        let raw: &[u8] = br#"[{"id":"1","name":"Art","deadline":"soon"}]"#;
        blobs.write(SUBJECTS_KEY, raw).unwrap();

        let store = SubjectStore::new(&blobs);
        assert!(store.list().unwrap().is_empty());
        assert!(!store.remove(&EntryId::from("1")).unwrap());
        assert_eq!(blobs.read(SUBJECTS_KEY).unwrap().as_deref(), Some(raw));

        let empty = MemoryBlobStore::new();
        assert!(!SubjectStore::new(&empty).remove(&EntryId::from("1")).unwrap());
        assert_eq!(empty.read(SUBJECTS_KEY).unwrap(), None);
    }

    #[test]
    fn test_add_keeps_unreadable_subjects() {
        let blobs = MemoryBlobStore::new();
        blobs
            .write(SUBJECTS_KEY, br#"[{"id":"1","name":"Art","deadline":"soon"}]"#)
            .unwrap();

        let store = SubjectStore::new(&blobs);
        let math = store.add(new_subject("Math", 2, None, Priority::Low)).unwrap();
        assert!(store.remove(&math.id).unwrap());

        let raw: serde_json::Value =
            serde_json::from_slice(&blobs.read(SUBJECTS_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(raw, serde_json::json!([{"id":"1","name":"Art","deadline":"soon"}]));
    }
}
