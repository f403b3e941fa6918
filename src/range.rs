use std::{fmt, iter::FusedIterator};

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, ParseError};

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: CalendarDate, end: CalendarDate },

    /// Error parsing date component.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// A range selection was given more than two endpoints.
    #[error("A date range has at most 2 endpoints, found {0}")]
    TooManyEndpoints(usize),
}

/// Produces every date from `start` to `end`, both inclusive.
///
/// # Errors
/// Returns `RangeError::InvalidRange` when `end` is before `start`; an
/// inverted range is never silently turned into an empty one.
pub fn dates_in_range(start: CalendarDate, end: CalendarDate) -> Result<DatesInRange, RangeError> {
    if end < start {
        return Err(RangeError::InvalidRange { start, end });
    }
    Ok(DatesInRange::new(start, end))
}

/// Lazy day-by-day walk over an inclusive date range.
///
/// Cloning yields an independent iterator at the same position and
/// [`DatesInRange::restart`] rewinds to the start date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatesInRange {
    start: CalendarDate,
    end:   CalendarDate,
    front: i32,
    back:  i32,
}

impl DatesInRange {
    fn new(start: CalendarDate, end: CalendarDate) -> Self {
        Self {
            start,
            end,
            front: start.days_since_epoch(),
            back: end.days_since_epoch(),
        }
    }

    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    /// Rewinds the iterator to the first date of the range.
    pub fn restart(&mut self) {
        *self = Self::new(self.start, self.end);
    }
}

impl Iterator for DatesInRange {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front > self.back {
            return None;
        }
        let date = CalendarDate::from_days_since_epoch(i64::from(self.front));
        self.front += 1;
        Some(date)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.back - self.front + 1).unwrap_or(0);
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for DatesInRange {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front > self.back {
            return None;
        }
        let date = CalendarDate::from_days_since_epoch(i64::from(self.back));
        self.back -= 1;
        Some(date)
    }
}

impl ExactSizeIterator for DatesInRange {}

impl FusedIterator for DatesInRange {}

/// An in-progress or committed range selection.
///
/// Holds zero, one or two endpoints in the order they were picked; the
/// second endpoint may precede the first. Consumers that need a sorted pair
/// call [`DateRange::sorted`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<CalendarDate>", into = "Vec<CalendarDate>")]
pub struct DateRange {
    first:  Option<CalendarDate>,
    second: Option<CalendarDate>,
}

impl DateRange {
    /// No endpoint chosen yet
    pub const fn empty() -> Self {
        Self {
            first:  None,
            second: None,
        }
    }

    /// Start chosen, end pending
    pub const fn starting_at(date: CalendarDate) -> Self {
        Self {
            first:  Some(date),
            second: None,
        }
    }

    /// Complete range; the endpoints may come in either order
    pub const fn new(first: CalendarDate, second: CalendarDate) -> Self {
        Self {
            first:  Some(first),
            second: Some(second),
        }
    }

    /// Builds a range from up to two endpoints.
    ///
    /// # Errors
    /// Returns `RangeError::TooManyEndpoints` for more than two dates.
    pub fn from_endpoints(endpoints: &[CalendarDate]) -> Result<Self, RangeError> {
        match *endpoints {
            [] => Ok(Self::empty()),
            [first] => Ok(Self::starting_at(first)),
            [first, second] => Ok(Self::new(first, second)),
            _ => Err(RangeError::TooManyEndpoints(endpoints.len())),
        }
    }

    pub const fn first(&self) -> Option<CalendarDate> {
        self.first
    }

    pub const fn second(&self) -> Option<CalendarDate> {
        self.second
    }

    /// Number of endpoints chosen (0, 1 or 2)
    pub const fn len(&self) -> usize {
        match (self.first, self.second) {
            (None, _) => 0,
            (Some(_), None) => 1,
            (Some(_), Some(_)) => 2,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    pub const fn is_complete(&self) -> bool {
        self.second.is_some()
    }

    pub fn endpoints(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.first.iter().chain(self.second.iter()).copied()
    }

    /// Returns a copy with `date` appended as the second endpoint.
    ///
    /// An empty range gets `date` as its first endpoint instead; a complete
    /// range has its second endpoint replaced.
    #[must_use]
    pub const fn with_endpoint(self, date: CalendarDate) -> Self {
        match self.first {
            None => Self::starting_at(date),
            Some(first) => Self::new(first, date),
        }
    }

    /// The committed range as `(start, end)` with `start <= end`.
    pub fn sorted(&self) -> Option<(CalendarDate, CalendarDate)> {
        let (a, b) = (self.first?, self.second?);
        Some(if a <= b { (a, b) } else { (b, a) })
    }

    /// Every date covered by a complete range
    pub fn dates(&self) -> Option<DatesInRange> {
        self.sorted().map(|(start, end)| DatesInRange::new(start, end))
    }
}

impl TryFrom<Vec<CalendarDate>> for DateRange {
    type Error = RangeError;

    fn try_from(value: Vec<CalendarDate>) -> Result<Self, Self::Error> {
        Self::from_endpoints(&value)
    }
}

impl From<DateRange> for Vec<CalendarDate> {
    fn from(range: DateRange) -> Self {
        range.endpoints().collect()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.first, self.second) {
            (None, _) => Ok(()),
            (Some(first), None) => write!(f, "{first}/.."),
            (Some(first), Some(second)) => write!(f, "{first}/{second}"),
        }
    }
}
