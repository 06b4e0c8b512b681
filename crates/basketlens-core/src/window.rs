//! Named lookback windows over a calendar.
//!
//! A window is resolved to calendar *indices*, anchored at the most
//! recent date. Two fallbacks guarantee a window never makes an
//! otherwise-plottable series vanish: an ordinal fallback when the
//! calendar labels fail to parse as dates, and a minimum-viable-window
//! fallback when the dated selection is too small to draw a line.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::{Date, Duration, Month};

use crate::{DateKey, ValidationError};

/// Closed set of lookback windows selectable by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeKey {
    #[serde(rename = "1D")]
    OneDay,
    #[serde(rename = "5D")]
    FiveDays,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "YTD")]
    YearToDate,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "5Y")]
    FiveYears,
    #[serde(rename = "ALL")]
    All,
}

impl RangeKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneDay => "1D",
            Self::FiveDays => "5D",
            Self::SixMonths => "6M",
            Self::YearToDate => "YTD",
            Self::OneYear => "1Y",
            Self::FiveYears => "5Y",
            Self::All => "ALL",
        }
    }

    /// How many trailing ordinals to keep when dates cannot be parsed.
    /// `None` means the whole calendar.
    const fn ordinal_fallback(self) -> Option<usize> {
        match self {
            Self::OneDay => Some(2),
            Self::FiveDays => Some(6),
            _ => None,
        }
    }

    /// Smallest selection worth drawing when the dated cutoff comes up
    /// short but the calendar itself has data.
    const fn minimum_window(self) -> usize {
        match self {
            Self::OneDay | Self::FiveDays => 2,
            _ => 12,
        }
    }
}

impl Display for RangeKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RangeKey {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_uppercase().as_str() {
            "1D" => Ok(Self::OneDay),
            "5D" => Ok(Self::FiveDays),
            "6M" => Ok(Self::SixMonths),
            "YTD" => Ok(Self::YearToDate),
            "1Y" => Ok(Self::OneYear),
            "5Y" => Ok(Self::FiveYears),
            "ALL" => Ok(Self::All),
            _ => Err(ValidationError::InvalidRangeKey {
                value: value.to_owned(),
            }),
        }
    }
}

/// Resolve `key` to the ordered calendar indices it covers, anchored
/// at the calendar's last date.
pub fn window_indices(calendar: &[DateKey], key: RangeKey) -> Vec<usize> {
    if calendar.is_empty() {
        return Vec::new();
    }
    if key == RangeKey::All {
        return (0..calendar.len()).collect();
    }

    let anchor = calendar
        .last()
        .and_then(|date| date.parse_date());

    let selected = match anchor {
        Some(anchor) => {
            let cutoff = cutoff_for(anchor, key);
            let cutoff_key = crate::format_day(cutoff);
            (0..calendar.len())
                .filter(|&i| calendar[i].day() >= cutoff_key.as_str())
                .collect::<Vec<_>>()
        }
        // Ordinal labels: no date to subtract from, take a trailing slice.
        None => {
            let keep = key.ordinal_fallback().unwrap_or(calendar.len());
            tail_indices(calendar.len(), keep)
        }
    };

    if selected.len() < 2 && calendar.len() >= 2 {
        let keep = key.minimum_window().min(calendar.len());
        return tail_indices(calendar.len(), keep);
    }

    selected
}

fn tail_indices(len: usize, keep: usize) -> Vec<usize> {
    let keep = keep.min(len);
    (len - keep..len).collect()
}

fn cutoff_for(anchor: Date, key: RangeKey) -> Date {
    match key {
        RangeKey::OneDay => anchor.saturating_sub(Duration::days(1)),
        RangeKey::FiveDays => anchor.saturating_sub(Duration::days(5)),
        RangeKey::SixMonths => shift_months(anchor, 6),
        RangeKey::YearToDate => Date::from_calendar_date(anchor.year(), Month::January, 1)
            .unwrap_or(anchor),
        RangeKey::OneYear => shift_months(anchor, 12),
        RangeKey::FiveYears => shift_months(anchor, 60),
        RangeKey::All => anchor,
    }
}

/// Move `date` back by `months`, clamping the day-of-month so e.g.
/// Aug 31 − 6M lands on Feb 28/29 rather than overflowing.
fn shift_months(date: Date, months: i32) -> Date {
    let total = date.year() * 12 + (date.month() as i32 - 1) - months;
    let year = total.div_euclid(12);
    let month_number = total.rem_euclid(12) as u8 + 1;
    let month = Month::try_from(month_number).expect("month number in 1..=12");
    let day = date.day().min(month.length(year));

    Date::from_calendar_date(year, month, day).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn daily_calendar(from: &str, days: usize) -> Vec<DateKey> {
        let start = DateKey::new(from).parse_date().expect("valid start date");
        (0..days)
            .map(|offset| crate::format_day(start + Duration::days(offset as i64)))
            .collect()
    }

    #[test]
    fn all_selects_every_index() {
        let calendar = daily_calendar("2024-01-01", 10);
        assert_eq!(
            window_indices(&calendar, RangeKey::All),
            (0..10).collect::<Vec<_>>()
        );
    }

    #[test]
    fn ytd_selects_from_january_first() {
        // Full calendar year, daily; YTD anchored at Dec 31 keeps everything.
        let calendar = daily_calendar("2020-01-01", 366);
        assert_eq!(calendar.last().expect("non-empty").as_str(), "2020-12-31");

        let indices = window_indices(&calendar, RangeKey::YearToDate);
        assert_eq!(indices, (0..366).collect::<Vec<_>>());
    }

    #[test]
    fn ytd_drops_prior_year() {
        let calendar = daily_calendar("2023-12-25", 20); // crosses into 2024
        let indices = window_indices(&calendar, RangeKey::YearToDate);
        let first = &calendar[indices[0]];
        assert_eq!(first.as_str(), "2024-01-01");
    }

    #[test]
    fn six_months_clamps_day_of_month() {
        assert_eq!(
            shift_months(Date::from_calendar_date(2024, Month::August, 31).expect("valid"), 6)
                .to_string(),
            "2024-02-29"
        );
    }

    #[test]
    fn ordinal_labels_fall_back_to_trailing_slice() {
        let calendar: Vec<DateKey> = (0..10).map(|i| DateKey::new(format!("bar {i}"))).collect();

        assert_eq!(window_indices(&calendar, RangeKey::OneDay), vec![8, 9]);
        assert_eq!(
            window_indices(&calendar, RangeKey::FiveDays),
            vec![4, 5, 6, 7, 8, 9]
        );
        assert_eq!(
            window_indices(&calendar, RangeKey::OneYear),
            (0..10).collect::<Vec<_>>()
        );
    }

    #[test]
    fn sparse_calendar_widens_to_minimum_window() {
        // Monthly-ish data: 1D/5D cutoffs would select a single point.
        let calendar: Vec<DateKey> = ["2023-01-31", "2023-02-28", "2023-03-31", "2023-04-28"]
            .iter()
            .map(|&d| d.into())
            .collect();

        let indices = window_indices(&calendar, RangeKey::OneDay);
        assert_eq!(indices, vec![2, 3]);
    }

    #[test]
    fn empty_calendar_selects_nothing() {
        assert!(window_indices(&[], RangeKey::All).is_empty());
    }

    #[test]
    fn serializes_with_display_labels() {
        let json = serde_json::to_string(&RangeKey::YearToDate).expect("serializable");
        assert_eq!(json, "\"YTD\"");
        let back: RangeKey = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back, RangeKey::YearToDate);
    }

    #[test]
    fn range_keys_round_trip_from_str() {
        for key in [
            RangeKey::OneDay,
            RangeKey::FiveDays,
            RangeKey::SixMonths,
            RangeKey::YearToDate,
            RangeKey::OneYear,
            RangeKey::FiveYears,
            RangeKey::All,
        ] {
            assert_eq!(key.as_str().parse::<RangeKey>().expect("round trip"), key);
        }
        assert!(matches!(
            "2W".parse::<RangeKey>(),
            Err(ValidationError::InvalidRangeKey { .. })
        ));
    }
}
