use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_IN_WEEK, DAYS_PER_GREGORIAN_CYCLE, DECEMBER, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JANUARY, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_DAY,
    MIN_YEAR, UNIX_EPOCH_SHIFT,
};
use crate::ParseError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU8;

const fn non_zero_u8(value: u8) -> NonZeroU8 {
    match NonZeroU8::new(value) {
        Some(v) => v,
        None => panic!("value must be non-zero"),
    }
}

/// Integer conversions shared by the date components; they serialize as
/// plain numbers and validate on the way back in.
macro_rules! component_conversions {
    ($name:ident, $repr:ty, $check:expr) => {
        impl TryFrom<$repr> for $name {
            type Error = ParseError;

            fn try_from(value: $repr) -> Result<Self, Self::Error> {
                $check(value)
            }
        }

        impl From<$name> for $repr {
            fn from(component: $name) -> Self {
                component.get()
            }
        }
    };
}

/// Calendar year in `MIN_YEAR..=MAX_YEAR`.
///
/// The only years outside that window are the one just before and the one
/// just after it, and they only appear in the padding days of month grids
/// (see [`Year::padding`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "u16", into = "u16")]
#[display(fmt = "{}", _0)]
pub struct Year(u16);

impl Year {
    pub const MIN: Self = Self(MIN_YEAR);
    pub const MAX: Self = Self(MAX_YEAR);

    /// # Errors
    /// `ParseError::InvalidYear` for 0 and anything past `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        if (MIN_YEAR..=MAX_YEAR).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ParseError::InvalidYear(value))
        }
    }

    /// Year of a grid padding day: `MIN_YEAR - 1..=MAX_YEAR + 1`.
    pub(crate) fn padding(value: i32) -> Option<Self> {
        let lowest = i32::from(MIN_YEAR) - 1;
        let highest = i32::from(MAX_YEAR) + 1;
        if (lowest..=highest).contains(&value) {
            u16::try_from(value).ok().map(Self)
        } else {
            None
        }
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }

    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

component_conversions!(Year, u16, Self::new);

/// Month of the year, January = 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "u8", into = "u8")]
#[display(fmt = "{}", _0)]
pub struct Month(NonZeroU8);

impl Month {
    pub const JANUARY: Self = Self(non_zero_u8(JANUARY));
    pub const DECEMBER: Self = Self(non_zero_u8(DECEMBER));

    /// # Errors
    /// `ParseError::InvalidMonth` outside `1..=12`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        match NonZeroU8::new(value) {
            Some(month) if value <= MAX_MONTH => Ok(Self(month)),
            _ => Err(ParseError::InvalidMonth(value)),
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

component_conversions!(Month, u8, Self::new);

/// Day of the month.
///
/// [`Day::new`] checks the value against the length of its month. Converting
/// from a bare `u8` has no month to check against and only accepts `1..=31`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "u8", into = "u8")]
#[display(fmt = "{}", _0)]
pub struct Day(NonZeroU8);

impl Day {
    pub const FIRST: Self = Self(non_zero_u8(MIN_DAY));
    pub(crate) const THIRTY_FIRST: Self = Self(non_zero_u8(31));

    /// # Errors
    /// `ParseError::InvalidDay` when `month` is out of range or the month has
    /// no such day.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, ParseError> {
        let in_month = (JANUARY..=MAX_MONTH).contains(&month) && value <= days_in_month(year, month);
        match NonZeroU8::new(value) {
            Some(day) if in_month => Ok(Self(day)),
            _ => Err(ParseError::InvalidDay {
                month,
                day: value,
                year,
            }),
        }
    }

    /// Last day of the given month
    pub(crate) const fn last_of(year: Year, month: Month) -> Self {
        Self(non_zero_u8(days_in_month(year.get(), month.get())))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    fn from_bare(value: u8) -> Result<Self, ParseError> {
        match NonZeroU8::new(value) {
            Some(day) if value <= Self::THIRTY_FIRST.get() => Ok(Self(day)),
            _ => Err(ParseError::InvalidDay {
                month: 0,
                day: value,
                year: 0,
            }),
        }
    }
}

component_conversions!(Day, u8, Self::from_bare);

/// Day of the week, numbered the ISO 8601 way (Monday = 1 ... Sunday = 7).
///
/// Doubles as the "first day of week" setting of a calendar.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Weekday {
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays, Monday first
    pub const ALL: [Self; DAYS_IN_WEEK] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Creates a weekday from its ISO number (1 = Monday, 7 = Sunday)
    ///
    /// # Errors
    /// Returns `ParseError::InvalidWeekday` outside `1..=7`.
    pub fn from_iso(value: u8) -> Result<Self, ParseError> {
        match value {
            1..=7 => Ok(Self::ALL[usize::from(value - 1)]),
            _ => Err(ParseError::InvalidWeekday(value)),
        }
    }

    /// ISO number, 1 = Monday
    pub const fn iso_number(self) -> u8 {
        self as u8 + 1
    }

    /// Days since Sunday (Sunday = 0), the order of POSIX locale tables
    pub const fn days_from_sunday(self) -> usize {
        (self as usize + 1) % DAYS_IN_WEEK
    }

    /// Number of days to step forward from `start` to reach `self`, in `0..7`
    pub const fn days_since(self, start: Self) -> u8 {
        ((self as u8 + DAYS_IN_WEEK as u8) - start as u8) % DAYS_IN_WEEK as u8
    }

    /// The weekday `n` days after this one
    pub const fn nth_after(self, n: usize) -> Self {
        Self::ALL[(self as usize + n) % DAYS_IN_WEEK]
    }

    /// Weekday of a day counted from 1970-01-01 (a Thursday)
    pub(crate) const fn from_days_since_epoch(days: i32) -> Self {
        let thursday = Self::Thursday as i32;
        Self::ALL[(days + thursday).rem_euclid(DAYS_IN_WEEK as i32) as usize]
    }
}

impl TryFrom<u8> for Weekday {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_iso(value)
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.iso_number()
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Days from 1970-01-01 to the given proleptic Gregorian date.
///
/// Years are shifted to start in March so the leap day lands at the end of
/// the shifted year.
pub(crate) const fn days_from_civil(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32 - if month <= FEBRUARY { 1 } else { 0 };
    let era = y.div_euclid(GREGORIAN_CYCLE as i32);
    let year_of_era = y - era * GREGORIAN_CYCLE as i32;
    let shifted_month = (month as i32 + 9) % 12;
    let day_of_year = (153 * shifted_month + 2) / 5 + day as i32 - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_PER_GREGORIAN_CYCLE + day_of_era - UNIX_EPOCH_SHIFT
}

/// Inverse of [`days_from_civil`]. Returns `(year, month, day)`; the year may
/// fall outside `MIN_YEAR..=MAX_YEAR`, callers clamp beforehand.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) const fn civil_from_days(days: i32) -> (i32, u8, u8) {
    let z = days + UNIX_EPOCH_SHIFT;
    let era = z.div_euclid(DAYS_PER_GREGORIAN_CYCLE);
    let day_of_era = z - era * DAYS_PER_GREGORIAN_CYCLE;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
    let month = if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    };
    let year = year_of_era + era * GREGORIAN_CYCLE as i32 + if month <= 2 { 1 } else { 0 };
    (year, month as u8, day as u8)
}
