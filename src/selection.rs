use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DateBounds, DateRange, compare};

/// What the user has picked.
///
/// Serialized untagged: `null`, a date string, or an array of up to two dates.
/// A calendar in range mode starts from `Range(DateRange::empty())`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Selection {
    #[default]
    None,
    Single(CalendarDate),
    Range(DateRange),
}

impl Selection {
    /// The single date, or the endpoint that was picked first
    pub const fn first_date(&self) -> Option<CalendarDate> {
        match self {
            Self::None => None,
            Self::Single(date) => Some(*date),
            Self::Range(range) => range.first(),
        }
    }
}

impl From<CalendarDate> for Selection {
    fn from(date: CalendarDate) -> Self {
        Self::Single(date)
    }
}

impl From<DateRange> for Selection {
    fn from(range: DateRange) -> Self {
        Self::Range(range)
    }
}

/// Role of a date within the current selection, used to style its cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateRole {
    #[default]
    None,
    Selected,
    RangeStart,
    RangeMiddle,
    RangeEnd,
}

/// Classifies `date` against `selection`.
///
/// An open range (one endpoint) is previewed up to `hovered`. The pair of
/// endpoints is sorted first, so a user may pick the later date first. A
/// range whose endpoints coincide collapses to `Selected`.
pub fn classify(date: CalendarDate, selection: &Selection, hovered: Option<CalendarDate>) -> DateRole {
    match *selection {
        Selection::None => DateRole::None,
        Selection::Single(selected) if selected == date => DateRole::Selected,
        Selection::Single(_) => DateRole::None,
        Selection::Range(range) => classify_range(date, range, hovered),
    }
}

fn classify_range(date: CalendarDate, range: DateRange, hovered: Option<CalendarDate>) -> DateRole {
    let Some(first) = range.first() else {
        return DateRole::None;
    };
    let Some(other) = range.second().or(hovered) else {
        return if date == first {
            DateRole::Selected
        } else {
            DateRole::None
        };
    };

    let (start, end) = match compare(first, other) {
        Ordering::Greater => (other, first),
        Ordering::Less | Ordering::Equal => (first, other),
    };

    match (compare(date, start), compare(date, end)) {
        (Ordering::Equal, Ordering::Equal) => DateRole::Selected,
        (Ordering::Equal, _) => DateRole::RangeStart,
        (_, Ordering::Equal) => DateRole::RangeEnd,
        (Ordering::Greater, Ordering::Less) => DateRole::RangeMiddle,
        _ => DateRole::None,
    }
}

/// Decides how a click changes a range selection.
///
/// Closures `Fn(DateRange, CalendarDate) -> DateRange` implement this too.
pub trait RangeCommitPolicy {
    fn commit(&self, range: DateRange, clicked: CalendarDate) -> DateRange;
}

impl<F> RangeCommitPolicy for F
where
    F: Fn(DateRange, CalendarDate) -> DateRange,
{
    fn commit(&self, range: DateRange, clicked: CalendarDate) -> DateRange {
        self(range, clicked)
    }
}

/// Default commit rule.
///
/// With exactly one endpoint and a click on or after it, the click completes
/// the range. Anything else (no endpoint, a complete range, a click before
/// the start) starts a new range at the clicked date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtendForward;

impl RangeCommitPolicy for ExtendForward {
    fn commit(&self, range: DateRange, clicked: CalendarDate) -> DateRange {
        match (range.first(), range.second()) {
            (Some(start), None) if clicked >= start => range.with_endpoint(clicked),
            _ => DateRange::starting_at(clicked),
        }
    }
}

/// Applies a click to the selection.
///
/// Disabled dates leave the selection untouched. `None` and single
/// selections become a single selection; ranges go through `policy`.
pub fn select_date<P>(policy: &P, selection: &Selection, clicked: CalendarDate, bounds: &DateBounds) -> Selection
where
    P: RangeCommitPolicy + ?Sized,
{
    if bounds.is_disabled(clicked) {
        log::debug!("ignoring click on disabled date {clicked}");
        return *selection;
    }
    match *selection {
        Selection::None | Selection::Single(_) => Selection::Single(clicked),
        Selection::Range(range) => Selection::Range(policy.commit(range, clicked)),
    }
}
