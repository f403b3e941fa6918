use crate::{CalendarDate, DAYS_IN_WEEK, Weekday};

/// First date of the week containing `date`, for weeks starting on `first_day`.
pub fn first_date_of_week(date: CalendarDate, first_day: Weekday) -> CalendarDate {
    let offset = date.weekday().days_since(first_day);
    date.sub_days(i32::from(offset))
}

/// Last date of the week containing `date`, for weeks starting on `first_day`.
pub fn last_date_of_week(date: CalendarDate, first_day: Weekday) -> CalendarDate {
    let last_day = first_day.nth_after(DAYS_IN_WEEK - 1);
    let offset = last_day.days_since(date.weekday());
    date.add_days(i32::from(offset))
}
