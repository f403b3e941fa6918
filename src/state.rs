//! Calendar navigation state.
//!
//! A [`CalendarState`] changes only through [`reduce`] (or
//! [`CalendarState::dispatch`]). After every transition the displayed month
//! is the month of the focused date.

use std::str::FromStr;

use chrono::Datelike;
use serde::Serialize;

use crate::{
    CalendarConfig, CalendarDate, DateBounds, ParseError, Weekday, YearMonth, first_date_of_week,
    last_date_of_week,
};

/// Source of "today".
pub trait Clock {
    fn today(&self) -> CalendarDate;
}

/// Reads the local date from the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        let now = chrono::Local::now().date_naive();
        let year = u16::try_from(now.year()).unwrap_or(if now.year() < 1 { 0 } else { u16::MAX });
        // chrono's month and day always fit in u8
        let month = u8::try_from(now.month()).unwrap_or(1);
        let day = u8::try_from(now.day()).unwrap_or(1);
        CalendarDate::new(year, month, day).unwrap_or_else(|err| {
            log::warn!("system date {now} is outside the supported range: {err}");
            if year == 0 { CalendarDate::MIN } else { CalendarDate::MAX }
        })
    }
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}

/// Everything the calendar needs to render its current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarState {
    today:           CalendarDate,
    focused_date:    CalendarDate,
    hovered_date:    Option<CalendarDate>,
    displayed_month: YearMonth,
}

impl CalendarState {
    /// Fixed when the calendar was created
    pub const fn today(&self) -> CalendarDate {
        self.today
    }

    pub const fn focused_date(&self) -> CalendarDate {
        self.focused_date
    }

    pub const fn hovered_date(&self) -> Option<CalendarDate> {
        self.hovered_date
    }

    pub const fn displayed_month(&self) -> YearMonth {
        self.displayed_month
    }

    /// Applies `action` in place.
    pub fn dispatch(&mut self, action: CalendarAction) {
        *self = reduce(self, action);
    }

    /// Grid padding outside the supported range is clamped back into it.
    fn focused_on(self, date: CalendarDate) -> Self {
        let date = date.clamp(CalendarDate::MIN, CalendarDate::MAX);
        Self {
            focused_date: date,
            displayed_month: date.year_month(),
            ..self
        }
    }
}

/// Transitions accepted by [`reduce`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarAction {
    PrevMonth,
    NextMonth,
    FocusDate(CalendarDate),
    MouseEnterDate(CalendarDate),
    MouseLeaveDate,
}

/// Creates the state for a new calendar.
///
/// `today` is read from `clock` once. Focus starts on the first selected
/// date, or on today, clamped into the configured bounds. Inverted bounds are
/// ignored for clamping and logged.
pub fn init_calendar<C>(config: &CalendarConfig, clock: &C) -> CalendarState
where
    C: Clock + ?Sized,
{
    let today = clock.today();
    let preferred = config.selection.first_date().unwrap_or(today);
    let bounds = config.bounds().unwrap_or_else(|err| {
        log::warn!("ignoring calendar bounds: {err}");
        DateBounds::unbounded()
    });
    let focused_date = bounds.clamp(preferred);
    if focused_date != preferred {
        log::debug!("initial focus {preferred} clamped to {focused_date}");
    }
    log::debug!("calendar initialized: today {today}, focus {focused_date}");

    CalendarState {
        today,
        focused_date,
        hovered_date: None,
        displayed_month: focused_date.year_month(),
    }
}

/// Pure transition function.
///
/// Month paging moves focus and view together and is not clamped to the
/// bounds; disabling the paging controls is up to the caller (see
/// [`DateBounds::is_prev_month_disabled`]).
pub fn reduce(state: &CalendarState, action: CalendarAction) -> CalendarState {
    let next = match action {
        CalendarAction::PrevMonth => state.focused_on(state.focused_date.sub_months(1)),
        CalendarAction::NextMonth => state.focused_on(state.focused_date.add_months(1)),
        CalendarAction::FocusDate(date) => state.focused_on(date),
        CalendarAction::MouseEnterDate(date) => CalendarState {
            hovered_date: Some(date),
            ..*state
        },
        CalendarAction::MouseLeaveDate => CalendarState {
            hovered_date: None,
            ..*state
        },
    };
    log::trace!(
        "{action:?}: focus {} -> {}, month {} -> {}",
        state.focused_date,
        next.focused_date,
        state.displayed_month,
        next.displayed_month
    );
    next
}

/// Keys the calendar grid reacts to, named like DOM `KeyboardEvent.key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationKey {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    PageUp,
    PageDown,
    Home,
    End,
}

impl FromStr for NavigationKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ArrowLeft" => Ok(Self::ArrowLeft),
            "ArrowRight" => Ok(Self::ArrowRight),
            "ArrowUp" => Ok(Self::ArrowUp),
            "ArrowDown" => Ok(Self::ArrowDown),
            "PageUp" => Ok(Self::PageUp),
            "PageDown" => Ok(Self::PageDown),
            "Home" => Ok(Self::Home),
            "End" => Ok(Self::End),
            other => Err(ParseError::InvalidFormat(format!("Unknown navigation key: {other}"))),
        }
    }
}

/// Translates a key press into a focus change.
///
/// Arrows move by a day or a week; page keys move by a month, or by a year
/// while `modifier` (shift) is held; Home/End jump to the edges of the week.
/// Focus may land on disabled dates.
pub fn key_action(
    focused: CalendarDate,
    key: NavigationKey,
    modifier: bool,
    first_day: Weekday,
) -> CalendarAction {
    let target = match key {
        NavigationKey::ArrowLeft => focused.sub_days(1),
        NavigationKey::ArrowRight => focused.add_days(1),
        NavigationKey::ArrowUp => focused.sub_days(7),
        NavigationKey::ArrowDown => focused.add_days(7),
        NavigationKey::PageUp if modifier => focused.sub_years(1),
        NavigationKey::PageUp => focused.sub_months(1),
        NavigationKey::PageDown if modifier => focused.add_years(1),
        NavigationKey::PageDown => focused.add_months(1),
        NavigationKey::Home => first_date_of_week(focused, first_day),
        NavigationKey::End => last_date_of_week(focused, first_day),
    };
    CalendarAction::FocusDate(target)
}
