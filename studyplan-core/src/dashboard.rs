//! At-a-glance summary of subjects and today's schedule.

use chrono::{Duration, NaiveDate};

use crate::entry::ScheduleEntry;
use crate::subject::{Priority, Subject};
use crate::view::daily_view;
use crate::weekday::Weekday;

/// Days ahead (inclusive) that count as an upcoming deadline.
pub const UPCOMING_DEADLINE_DAYS: i64 = 7;

/// Maximum number of high-priority subjects shown.
pub const HIGH_PRIORITY_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub total_subjects: usize,
    pub total_hours: u32,
    pub upcoming_deadlines: usize,
    pub today: Weekday,
    pub todays_entries: Vec<ScheduleEntry>,
    pub high_priority: Vec<Subject>,
}

impl Dashboard {
    pub fn compute(subjects: &[Subject], entries: &[ScheduleEntry], today: NaiveDate) -> Self {
        let horizon = today + Duration::days(UPCOMING_DEADLINE_DAYS);
        let weekday = Weekday::of(today);

        Dashboard {
            total_subjects: subjects.len(),
            total_hours: subjects.iter().map(|s| s.study_hours).sum(),
            upcoming_deadlines: subjects
                .iter()
                .filter_map(|s| s.deadline)
                .filter(|d| *d >= today && *d <= horizon)
                .count(),
            today: weekday,
            todays_entries: daily_view(entries, weekday),
            high_priority: subjects
                .iter()
                .filter(|s| s.priority == Priority::High)
                .take(HIGH_PRIORITY_LIMIT)
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryId;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn subject(name: &str, hours: u32, deadline: Option<&str>, priority: Priority) -> Subject {
        Subject {
            id: EntryId::from(name),
            name: name.to_string(),
            study_hours: hours,
            deadline: deadline.map(date),
            priority,
        }
    }

    fn entry(id: &str, day: Weekday, start: &str) -> ScheduleEntry {
        ScheduleEntry {
            id: EntryId::from(id),
            subject: id.to_string(),
            day,
            start_time: start.parse().unwrap(),
            end_time: "23:00".parse().unwrap(),
        }
    }

    #[test]
    fn test_totals() {
        let subjects = vec![
            subject("a", 3, None, Priority::Low),
            subject("b", 5, None, Priority::Medium),
        ];

        let dash = Dashboard::compute(&subjects, &[], date("2025-03-20"));
        assert_eq!(dash.total_subjects, 2);
        assert_eq!(dash.total_hours, 8);
    }

    #[test]
    fn test_upcoming_deadline_window_is_inclusive() {
        let subjects = vec![
            subject("past", 1, Some("2025-03-19"), Priority::Low),
            subject("today", 1, Some("2025-03-20"), Priority::Low),
            subject("edge", 1, Some("2025-03-27"), Priority::Low),
            subject("later", 1, Some("2025-03-28"), Priority::Low),
            subject("none", 1, None, Priority::Low),
        ];

        let dash = Dashboard::compute(&subjects, &[], date("2025-03-20"));
        assert_eq!(dash.upcoming_deadlines, 2);
    }

    #[test]
    fn test_todays_entries_use_weekday_of_date() {
        // 2025-03-20 is a Thursday
        let entries = vec![
            entry("thu-late", Weekday::Thursday, "14:00"),
            entry("fri", Weekday::Friday, "09:00"),
            entry("thu-early", Weekday::Thursday, "08:00"),
        ];

        let dash = Dashboard::compute(&[], &entries, date("2025-03-20"));
        assert_eq!(dash.today, Weekday::Thursday);

        let ids: Vec<&str> = dash.todays_entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["thu-early", "thu-late"]);
    }

    #[test]
    fn test_high_priority_limited_to_three() {
        let subjects = vec![
            subject("h1", 1, None, Priority::High),
            subject("l", 1, None, Priority::Low),
            subject("h2", 1, None, Priority::High),
            subject("h3", 1, None, Priority::High),
            subject("h4", 1, None, Priority::High),
        ];

        let dash = Dashboard::compute(&subjects, &[], date("2025-03-20"));
        let names: Vec<&str> = dash.high_priority.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["h1", "h2", "h3"]);
    }
}
