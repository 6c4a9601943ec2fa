//! Wall-clock times with minute granularity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PlannerError, PlannerResult};

/// A time of day, stored as minutes since midnight.
///
/// The textual form is the zero-padded 24-hour `HH:MM` string, which is also
/// how it is persisted. Ordering follows the minute count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub fn new(hours: u16, minutes: u16) -> PlannerResult<Self> {
        if hours > 23 || minutes > 59 {
            return Err(PlannerError::InvalidTime(format!("{hours:02}:{minutes:02}")));
        }
        Ok(TimeOfDay(hours * 60 + minutes))
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hours(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// 12-hour display form, e.g. `1:05 PM`. Midnight is `12:xx AM`, noon is `12:xx PM`.
    pub fn to_12h(self) -> String {
        let hours = self.hours();
        let display_hour = match hours % 12 {
            0 => 12,
            h => h,
        };
        let meridiem = if hours >= 12 { "PM" } else { "AM" };
        format!("{}:{:02} {}", display_hour, self.minute(), meridiem)
    }
}

/// Format an `HH:MM` string for display on a 12-hour clock.
pub fn format_time(time: &str) -> PlannerResult<String> {
    Ok(time.parse::<TimeOfDay>()?.to_12h())
}

impl FromStr for TimeOfDay {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PlannerError::InvalidTime(s.to_string());

        let (hh, mm) = s.split_once(':').ok_or_else(invalid)?;
        if hh.len() != 2 || mm.len() != 2 {
            return Err(invalid());
        }
        if !hh.bytes().chain(mm.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let hours: u16 = hh.parse().map_err(|_| invalid())?;
        let minutes: u16 = mm.parse().map_err(|_| invalid())?;
        TimeOfDay::new(hours, minutes).map_err(|_| invalid())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours(), self.minute())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
