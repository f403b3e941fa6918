use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    CalendarDate, DATE_SEPARATOR, MONTHS_IN_YEAR, ParseError, parse_u8, parse_u16,
    prelude::*,
    types::{Day, Month, Year},
};

/// A calendar month with no day component, e.g. `2020-03`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}", "year.get()", "month.get()")]
pub struct YearMonth {
    year:  Year,
    month: Month,
}

impl YearMonth {
    /// January of year 1
    pub const MIN: Self = Self::from_parts(Year::MIN, Month::JANUARY);
    /// December of year 9999
    pub const MAX: Self = Self::from_parts(Year::MAX, Month::DECEMBER);

    /// # Errors
    /// Returns `ParseError::InvalidYear` or `ParseError::InvalidMonth`.
    pub fn new(year: u16, month: u8) -> Result<Self, ParseError> {
        Ok(Self::from_parts(Year::new(year)?, Month::new(month)?))
    }

    pub const fn from_parts(year: Year, month: Month) -> Self {
        Self { year, month }
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn days_in_month(&self) -> u8 {
        crate::types::days_in_month(self.year(), self.month())
    }

    pub const fn first_day(&self) -> CalendarDate {
        CalendarDate {
            year:  self.year,
            month: self.month,
            day:   Day::FIRST,
        }
    }

    pub const fn last_day(&self) -> CalendarDate {
        CalendarDate {
            year:  self.year,
            month: self.month,
            day:   Day::last_of(self.year, self.month),
        }
    }

    /// Whether `date` falls inside this month
    pub fn contains(&self, date: CalendarDate) -> bool {
        date.year_month() == *self
    }

    pub fn add_months(self, months: i32) -> Self {
        self.shift_saturating(i64::from(months))
    }

    pub fn sub_months(self, months: i32) -> Self {
        self.shift_saturating(-i64::from(months))
    }

    pub fn add_years(self, years: i32) -> Self {
        self.shift_saturating(i64::from(years) * i64::from(MONTHS_IN_YEAR))
    }

    pub fn sub_years(self, years: i32) -> Self {
        self.shift_saturating(-i64::from(years) * i64::from(MONTHS_IN_YEAR))
    }

    /// Signed number of months from `self` to `other`
    pub fn months_until(&self, other: Self) -> i64 {
        other.month_index() - self.month_index()
    }

    fn shift_saturating(self, months: i64) -> Self {
        self.checked_shift(months)
            .unwrap_or(if months < 0 { Self::MIN } else { Self::MAX })
    }

    /// Moves by `months`, or `None` when the result leaves the supported years.
    pub(crate) fn checked_shift(self, months: i64) -> Option<Self> {
        let index = self.month_index().checked_add(months)?;
        let months_in_year = i64::from(MONTHS_IN_YEAR);
        let year = u16::try_from(index.div_euclid(months_in_year)).ok()?;
        let month = u8::try_from(index.rem_euclid(months_in_year) + 1).ok()?;
        Self::new(year, month).ok()
    }

    /// Months elapsed since January of year 0
    fn month_index(self) -> i64 {
        i64::from(self.year()) * i64::from(MONTHS_IN_YEAR) + i64::from(self.month()) - 1
    }
}

impl From<CalendarDate> for YearMonth {
    fn from(date: CalendarDate) -> Self {
        date.year_month()
    }
}

impl FromStr for YearMonth {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        match parts.as_slice() {
            [year, month] => Self::new(parse_u16(year)?, parse_u8(month)?),
            _ => Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM, found {} component(s) in {trimmed}",
                parts.len()
            ))),
        }
    }
}

impl Serialize for YearMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, year_month};

    #[test]
    fn test_from_date_drops_day() {
        assert_eq!(YearMonth::from(date(2020, 3, 31)), year_month(2020, 3));
        assert_eq!(date(2020, 3, 1).year_month(), year_month(2020, 3));
    }

    #[test]
    fn test_first_and_last_day() {
        assert_eq!(year_month(2020, 2).first_day(), date(2020, 2, 1));
        assert_eq!(year_month(2020, 2).last_day(), date(2020, 2, 29));
        assert_eq!(year_month(2021, 2).last_day(), date(2021, 2, 28));
        assert_eq!(year_month(2020, 12).last_day(), date(2020, 12, 31));
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(year_month(2020, 12).add_months(1), year_month(2021, 1));
        assert_eq!(year_month(2020, 1).sub_months(1), year_month(2019, 12));
        assert_eq!(year_month(2020, 3).add_years(2), year_month(2022, 3));
        assert_eq!(year_month(2020, 3).sub_years(1), year_month(2019, 3));
        assert_eq!(year_month(2020, 3).add_months(-15), year_month(2018, 12));
    }

    #[test]
    fn test_arithmetic_saturates() {
        assert_eq!(YearMonth::MAX.add_months(1), YearMonth::MAX);
        assert_eq!(YearMonth::MIN.sub_months(1), YearMonth::MIN);
        assert_eq!(year_month(2020, 1).add_years(i32::MAX), YearMonth::MAX);
    }

    #[test]
    fn test_months_until() {
        assert_eq!(year_month(2020, 11).months_until(year_month(2021, 2)), 3);
        assert_eq!(year_month(2021, 2).months_until(year_month(2020, 11)), -3);
    }

    #[test]
    fn test_contains() {
        let march = year_month(2020, 3);
        assert!(march.contains(date(2020, 3, 1)));
        assert!(march.contains(date(2020, 3, 31)));
        assert!(!march.contains(date(2020, 4, 1)));
        assert!(!march.contains(date(2019, 3, 15)));
    }

    #[test]
    fn test_parse_and_display() {
        let parsed = "2020-03".parse::<YearMonth>().unwrap();
        assert_eq!(parsed, year_month(2020, 3));
        assert_eq!(parsed.to_string(), "2020-03");
        assert!(matches!(
            "2020-03-01".parse::<YearMonth>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2020-00".parse::<YearMonth>(),
            Err(ParseError::InvalidMonth(0))
        ));
    }

    #[test]
    fn test_serde_string_format() {
        let value = year_month(2020, 3);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#""2020-03""#);
        let parsed: YearMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, value);
    }
}
