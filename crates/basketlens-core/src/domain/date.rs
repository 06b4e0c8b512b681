use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use time::format_description::FormatItem;
use time::macros::format_description;
use time::Date;

const DAY_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Calendar-ordered date key: ISO date (`YYYY-MM-DD`) for daily data or
/// an ISO date-time for intraday data. Lexicographic order equals
/// chronological order, which is the only ordering the core relies on.
///
/// Unparseable labels are tolerated by construction; consumers that
/// need real date arithmetic fall back when [`DateKey::parse_date`]
/// returns `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// UTC day key: the leading `YYYY-MM-DD` portion of the label.
    /// Labels where byte 10 is not a character boundary are returned
    /// whole; they fail to parse downstream like any other odd label.
    pub fn day(&self) -> &str {
        self.0.get(..10).unwrap_or(&self.0)
    }

    /// Attempt to interpret the day key as a calendar date.
    pub fn parse_date(&self) -> Option<Date> {
        Date::parse(self.day(), DAY_FORMAT).ok()
    }
}

impl Display for DateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for DateKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DateKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Render a `time::Date` back into day-key form.
pub fn format_day(date: Date) -> DateKey {
    DateKey::new(
        date.format(DAY_FORMAT)
            .unwrap_or_else(|_| date.to_string()),
    )
}
