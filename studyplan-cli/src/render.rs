//! TUI rendering traits for studyplan types.
//!
//! Extension traits that add colored terminal rendering to studyplan-core
//! types using owo_colors.

use owo_colors::OwoColorize;
use studyplan_core::dashboard::Dashboard;
use studyplan_core::subject::{Priority, Subject};
use studyplan_core::view::{View, WeeklyView};
use studyplan_core::{EntryId, ScheduleEntry, Weekday};

use crate::utils::tui::pluralize;

/// Number of id characters shown; enough to address an entry on the command line.
pub const SHORT_ID_LEN: usize = 8;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

pub fn short_id(id: &EntryId) -> String {
    id.as_str().chars().take(SHORT_ID_LEN).collect()
}

impl Render for Weekday {
    fn render(&self) -> String {
        format!("📅 {}", self.name().bold())
    }
}

impl Render for ScheduleEntry {
    fn render(&self) -> String {
        let time = format!(
            "{} - {}",
            self.start_time.to_12h(),
            self.end_time.to_12h()
        );
        let id = format!("[{}]", short_id(&self.id));
        format!("{:>19}  {} {}", time, self.subject, id.dimmed())
    }
}

impl Render for Priority {
    fn render(&self) -> String {
        match self {
            Priority::High => self.to_string().red().to_string(),
            Priority::Medium => self.to_string().yellow().to_string(),
            Priority::Low => self.to_string().green().to_string(),
        }
    }
}

impl Render for Subject {
    fn render(&self) -> String {
        let deadline = self
            .deadline
            .map(|d| d.format("%b %-d, %Y").to_string())
            .unwrap_or_else(|| "no deadline".to_string());
        let id = format!("[{}]", short_id(&self.id));

        format!(
            "{} ({}) {}h/week, {} {}",
            self.name.bold(),
            self.priority.render(),
            self.study_hours,
            deadline,
            id.dimmed()
        )
    }
}

/// Weekly view: one block per day, empty days marked.
impl Render for WeeklyView {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        for (day, entries) in self.days() {
            lines.push(day.render());
            if entries.is_empty() {
                lines.push(format!("   {}", "No classes".dimmed()));
            } else {
                lines.extend(entries.iter().map(|e| format!("   {}", e.render())));
            }
        }

        let total = self.len();
        lines.push(String::new());
        lines.push(
            format!("{} {} this week", total, pluralize("session", total))
                .dimmed()
                .to_string(),
        );

        lines.join("\n")
    }
}

impl Render for View {
    fn render(&self) -> String {
        match self {
            View::Daily { day, entries } if entries.is_empty() => {
                format!("No schedules for today ({})", day).dimmed().to_string()
            }
            View::Daily { day, entries } => {
                let mut lines = vec![day.render()];
                lines.extend(entries.iter().map(|e| format!("   {}", e.render())));
                lines.join("\n")
            }
            View::Weekly(week) => week.render(),
        }
    }
}

impl Render for Dashboard {
    fn render(&self) -> String {
        let mut lines = vec![
            format!("{} {}", "Subjects:".dimmed(), self.total_subjects),
            format!("{} {}", "Study hours/week:".dimmed(), self.total_hours),
            format!("{} {}", "Upcoming deadlines:".dimmed(), self.upcoming_deadlines),
            format!("{} {}", "Classes today:".dimmed(), self.todays_entries.len()),
            String::new(),
            "High priority".bold().to_string(),
        ];

        if self.high_priority.is_empty() {
            lines.push(format!("   {}", "No high priority subjects".dimmed()));
        } else {
            lines.extend(
                self.high_priority
                    .iter()
                    .map(|s| format!("   {} - {}h/week", s.name.bold(), s.study_hours)),
            );
        }

        lines.push(String::new());
        lines.push(format!("{} ({})", "Today".bold(), self.today));

        if self.todays_entries.is_empty() {
            lines.push(format!("   {}", "No classes scheduled today".dimmed()));
        } else {
            lines.extend(self.todays_entries.iter().map(|e| format!("   {}", e.render())));
        }

        lines.join("\n")
    }
}
