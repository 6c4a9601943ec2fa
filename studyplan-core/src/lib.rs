//! Core of the studyplan weekly study planner.
//!
//! - `store`: persisted schedule entries (`ScheduleStore`)
//! - `conflict`: half-open overlap checks and validation of new entries
//! - `view`: daily and weekly projections of a snapshot
//! - `subject`, `dashboard`: the subject list and its summary
//! - `planner`: validate-then-persist facade over all of the above

pub mod blob;
pub mod config;
pub mod conflict;
pub mod dashboard;
pub mod entry;
pub mod error;
pub mod planner;
pub mod store;
pub mod subject;
pub mod time_of_day;
pub mod view;
pub mod weekday;

pub use entry::{EntryId, NewEntry, ScheduleEntry};
pub use error::{PlannerError, PlannerResult};
pub use planner::Planner;
pub use time_of_day::{TimeOfDay, format_time};
pub use weekday::Weekday;
