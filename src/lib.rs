//! Headless date-picker core.
//!
//! Timezone-free calendar dates with their own Gregorian arithmetic, month
//! grids chunked into whole weeks, a reducer-style calendar state machine and
//! a classifier that tells the rendering layer which role every date plays in
//! the current selection.

mod bounds;
mod config;
mod consts;
mod labels;
mod month_view;
mod prelude;
mod range;
mod selection;
mod state;
#[cfg(test)]
mod test_utils;
mod types;
mod view;
mod week;
mod year_month;

pub use bounds::DateBounds;
pub use config::{CalendarConfig, LocalePreference};
pub use consts::*;
pub use labels::{
    CalendarNames, InvariantNames, LocaleNames, NameWidth, WeekdayLabel, month_label,
    month_label_with, weekday_labels, weekday_labels_with,
};
pub use month_view::{MonthView, is_outside_month, month_view, visible_months};
pub use range::{DateRange, DatesInRange, RangeError, dates_in_range};
pub use selection::{DateRole, ExtendForward, RangeCommitPolicy, Selection, classify, select_date};
pub use state::{
    CalendarAction, CalendarState, Clock, FixedClock, NavigationKey, SystemClock, init_calendar,
    key_action, reduce,
};
pub use types::{Day, Month, Weekday, Year, days_in_month, is_leap_year};
pub use view::{DayCell, MonthGrid, build_month_grids};
pub use week::{first_date_of_week, last_date_of_week};
pub use year_month::YearMonth;

use crate::prelude::*;
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::str::FromStr;
use types::{civil_from_days, days_from_civil};

/// A calendar day with no time-of-day and no timezone.
///
/// Ordering is chronological. All arithmetic saturates at
/// [`CalendarDate::MIN`] and [`CalendarDate::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Invalid weekday: {_0} (must be 1-7)")]
    InvalidWeekday(u8),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// 0001-01-01
    pub const MIN: Self = Self {
        year:  Year::MIN,
        month: Month::JANUARY,
        day:   Day::FIRST,
    };
    /// 9999-12-31
    pub const MAX: Self = Self {
        year:  Year::MAX,
        month: Month::DECEMBER,
        day:   Day::THIRTY_FIRST,
    };

    /// Creates a date from raw components.
    ///
    /// # Errors
    /// Returns the matching `ParseError` variant for an out-of-range year,
    /// month or day.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: Month::new(month)?,
            day:   Day::new(day, year, month)?,
        })
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// The month this date belongs to
    pub const fn year_month(&self) -> YearMonth {
        YearMonth::from_parts(self.year, self.month)
    }

    pub const fn weekday(&self) -> Weekday {
        Weekday::from_days_since_epoch(self.days_since_epoch())
    }

    /// Signed number of days from `self` to `other`
    pub const fn days_until(&self, other: Self) -> i32 {
        other.days_since_epoch() - self.days_since_epoch()
    }

    pub(crate) const fn days_since_epoch(&self) -> i32 {
        days_from_civil(self.year(), self.month(), self.day())
    }

    /// Converts a day count back to a date, saturating at `MIN`/`MAX`.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn from_days_since_epoch(days: i64) -> Self {
        let min = i64::from(Self::MIN.days_since_epoch());
        let max = i64::from(Self::MAX.days_since_epoch());
        if days <= min {
            return Self::MIN;
        }
        if days >= max {
            return Self::MAX;
        }
        // Inside (min, max), so the narrowing and the component checks hold
        let (year, month, day) = civil_from_days(days as i32);
        u16::try_from(year)
            .ok()
            .and_then(|year| Self::new(year, month, day).ok())
            .unwrap_or(Self::MIN)
    }

    /// Like [`CalendarDate::from_days_since_epoch`], but reaches one year past
    /// either end of the supported range instead of saturating. Only month
    /// grids build such dates, to complete their first and last week.
    pub(crate) fn from_days_unclamped(days: i64) -> Option<Self> {
        let (year, month, day) = civil_from_days(i32::try_from(days).ok()?);
        let year = Year::padding(year)?;
        Some(Self {
            year,
            month: Month::new(month).ok()?,
            day: Day::new(day, year.get(), month).ok()?,
        })
    }

    /// False only for grid padding days outside `MIN..=MAX`
    pub fn is_supported(&self) -> bool {
        (Self::MIN..=Self::MAX).contains(self)
    }

    pub fn add_days(self, days: i32) -> Self {
        Self::from_days_since_epoch(i64::from(self.days_since_epoch()) + i64::from(days))
    }

    pub fn sub_days(self, days: i32) -> Self {
        Self::from_days_since_epoch(i64::from(self.days_since_epoch()) - i64::from(days))
    }

    /// Adds months, clamping the day to the length of the target month
    /// (`2020-01-31 + 1 month = 2020-02-29`).
    pub fn add_months(self, months: i32) -> Self {
        self.shift_months(i64::from(months))
    }

    pub fn sub_months(self, months: i32) -> Self {
        self.shift_months(-i64::from(months))
    }

    /// Adds years, clamping Feb 29 to Feb 28 in common years.
    pub fn add_years(self, years: i32) -> Self {
        self.shift_months(i64::from(years) * i64::from(MONTHS_IN_YEAR))
    }

    pub fn sub_years(self, years: i32) -> Self {
        self.shift_months(-i64::from(years) * i64::from(MONTHS_IN_YEAR))
    }

    fn shift_months(self, months: i64) -> Self {
        let Some(target) = self.year_month().checked_shift(months) else {
            return match months.cmp(&0) {
                Ordering::Less => Self::MIN,
                Ordering::Greater => Self::MAX,
                Ordering::Equal => self.clamp(Self::MIN, Self::MAX),
            };
        };
        let day = self.day().min(target.days_in_month());
        Self::new(target.year(), target.month(), day).unwrap_or(Self::MIN)
    }
}

/// Chronological comparison: `Less` when `a` comes before `b`.
pub fn compare(a: CalendarDate, b: CalendarDate) -> Ordering {
    a.cmp(&b)
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        match parts.as_slice() {
            [year, month, day] => {
                let year = parse_u16(year)?;
                let month = parse_u8(month)?;
                let day = parse_u8(day)?;
                Self::new(year, month, day)
            },
            _ => Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s) in {trimmed}",
                parts.len()
            ))),
        }
    }
}

/// Helper to parse u16 with better error messages
pub(crate) fn parse_u16(s: &str) -> Result<u16, ParseError> {
    s.parse::<u16>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

/// Helper to parse u8 with better error messages
pub(crate) fn parse_u8(s: &str) -> Result<u8, ParseError> {
    s.parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl TryFrom<(u16, u8, u8)> for CalendarDate {
    type Error = ParseError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<CalendarDate> for (u16, u8, u8) {
    fn from(date: CalendarDate) -> Self {
        (date.year(), date.month(), date.day())
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
