//! Read-only projections of a schedule snapshot for display.

use crate::entry::ScheduleEntry;
use crate::weekday::Weekday;

/// Which projection to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Daily,
    Weekly,
}

/// Entries of one day, sorted by start time.
pub fn daily_view(entries: &[ScheduleEntry], today: Weekday) -> Vec<ScheduleEntry> {
    let mut day: Vec<ScheduleEntry> = entries.iter().filter(|e| e.day == today).cloned().collect();
    day.sort_by_key(|e| e.start_time);
    day
}

/// Seven day columns, Monday through Sunday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyView {
    days: [(Weekday, Vec<ScheduleEntry>); 7],
}

impl WeeklyView {
    /// Columns in Monday..Sunday order. Days without entries have an empty list.
    pub fn days(&self) -> &[(Weekday, Vec<ScheduleEntry>)] {
        &self.days
    }

    pub fn day(&self, day: Weekday) -> &[ScheduleEntry] {
        &self.days[day.ordinal()].1
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(|(_, entries)| entries.is_empty())
    }

    pub fn len(&self) -> usize {
        self.days.iter().map(|(_, entries)| entries.len()).sum()
    }
}

pub fn weekly_view(entries: &[ScheduleEntry]) -> WeeklyView {
    WeeklyView {
        days: Weekday::ALL.map(|day| (day, daily_view(entries, day))),
    }
}

/// A rendered projection, as selected by a [`ViewMode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Daily {
        day: Weekday,
        entries: Vec<ScheduleEntry>,
    },
    Weekly(WeeklyView),
}

pub fn project(entries: &[ScheduleEntry], mode: ViewMode, today: Weekday) -> View {
    match mode {
        ViewMode::Daily => View::Daily {
            day: today,
            entries: daily_view(entries, today),
        },
        ViewMode::Weekly => View::Weekly(weekly_view(entries)),
    }
}
