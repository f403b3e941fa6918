use crate::{CalendarDate, DAYS_IN_WEEK, Weekday, YearMonth};

/// Weeks of a month grid, each week `days_in_week` dates long.
pub type MonthView = Vec<Vec<CalendarDate>>;

/// Builds the grid for `year_month`.
///
/// The month is widened to whole weeks on both sides, so the first and last
/// rows usually carry dates from the neighbouring months. With seven-day
/// weeks the grid has 4 to 6 rows. Other week lengths pad the final row with
/// the following days; a zero-length week produces an empty grid.
///
/// Rows are always complete, even for the first and last supported months:
/// their padding may reach into the year before [`CalendarDate::MIN`] or
/// after [`CalendarDate::MAX`] (see [`CalendarDate::is_supported`]).
pub fn month_view(year_month: YearMonth, first_day: Weekday, days_in_week: usize) -> MonthView {
    if days_in_week == 0 {
        return Vec::new();
    }

    let first = year_month.first_day();
    let last = year_month.last_day();
    let leading = i64::from(first.weekday().days_since(first_day));
    let last_weekday = first_day.nth_after(DAYS_IN_WEEK - 1);
    let trailing = i64::from(last_weekday.days_since(last.weekday()));

    let start = i64::from(first.days_since_epoch()) - leading;
    let end = i64::from(last.days_since_epoch()) + trailing;

    let Ok(week_len) = i64::try_from(days_in_week) else {
        log::warn!("cannot build month view for {year_month}: week of {days_in_week} days");
        return Vec::new();
    };
    let span = end - start + 1;
    let end = end + (week_len - span % week_len) % week_len;

    let dates: Option<Vec<CalendarDate>> = (start..=end).map(CalendarDate::from_days_unclamped).collect();
    let Some(dates) = dates else {
        log::warn!("cannot build month view for {year_month}: {days_in_week}-day weeks run past the calendar");
        return Vec::new();
    };

    dates
        .chunks(days_in_week)
        .map(<[CalendarDate]>::to_vec)
        .collect()
}

/// Dates from the leading/trailing weeks that belong to another month
pub fn is_outside_month(date: CalendarDate, year_month: YearMonth) -> bool {
    !year_month.contains(date)
}

/// The months shown by a calendar rendering `count` months side by side.
pub fn visible_months(displayed_month: YearMonth, count: usize) -> Vec<YearMonth> {
    (0..count)
        .map_while(|offset| i32::try_from(offset).ok())
        .map(|offset| displayed_month.add_months(offset))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, year_month};

    #[test]
    fn test_month_view_week_counts() {
        struct TestCase {
            year_month:  YearMonth,
            first_day:   Weekday,
            weeks:       usize,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year_month:  year_month(2021, 2),
                first_day:   Weekday::Monday,
                weeks:       4,
                description: "February 2021 starts on Monday and ends on Sunday",
            },
            TestCase {
                year_month:  year_month(2015, 2),
                first_day:   Weekday::Sunday,
                weeks:       4,
                description: "February 2015 starts on Sunday and ends on Saturday",
            },
            TestCase {
                year_month:  year_month(2020, 3),
                first_day:   Weekday::Sunday,
                weeks:       5,
                description: "March 2020 with Sunday start",
            },
            TestCase {
                year_month:  year_month(2020, 3),
                first_day:   Weekday::Monday,
                weeks:       6,
                description: "March 2020 with Monday start",
            },
        ];

        for case in &cases {
            let view = month_view(case.year_month, case.first_day, 7);
            assert_eq!(view.len(), case.weeks, "{}", case.description);
            assert!(view.iter().all(|week| week.len() == 7), "{}", case.description);
        }
    }

    #[test]
    fn test_month_view_leading_and_trailing_days() {
        let view = month_view(year_month(2020, 3), Weekday::Monday, 7);
        assert_eq!(view[0][0], date(2020, 2, 24));
        assert_eq!(view[0][6], date(2020, 3, 1));
        assert_eq!(view[5][1], date(2020, 3, 31));
        assert_eq!(view[5][6], date(2020, 4, 5));
    }

    #[test]
    fn test_month_view_is_contiguous() {
        let view = month_view(year_month(2020, 12), Weekday::Sunday, 7);
        let dates: Vec<_> = view.into_iter().flatten().collect();
        for pair in dates.windows(2) {
            assert_eq!(pair[0].add_days(1), pair[1]);
        }
        assert_eq!(dates.first().map(CalendarDate::weekday), Some(Weekday::Sunday));
        assert_eq!(dates.last().map(CalendarDate::weekday), Some(Weekday::Saturday));
    }

    #[test]
    fn test_month_view_unusual_week_lengths() {
        assert!(month_view(year_month(2020, 3), Weekday::Monday, 0).is_empty());

        let view = month_view(year_month(2020, 3), Weekday::Monday, 5);
        assert!(view.iter().all(|week| week.len() == 5));
        let flat: Vec<_> = view.into_iter().flatten().collect();
        assert_eq!(flat[0], date(2020, 2, 24));
        assert!(flat.contains(&date(2020, 3, 31)));
    }

    #[test]
    fn test_month_view_complete_at_supported_limits() {
        struct TestCase {
            year_month:  YearMonth,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year_month:  YearMonth::MIN,
                description: "first supported month",
            },
            TestCase {
                year_month:  YearMonth::MAX,
                description: "last supported month",
            },
        ];

        for case in &cases {
            for first_day in Weekday::ALL {
                let view = month_view(case.year_month, first_day, 7);
                assert!((4..=6).contains(&view.len()), "{} from {first_day}", case.description);
                for week in &view {
                    assert_eq!(week.len(), 7, "{} from {first_day}", case.description);
                    assert_eq!(week[0].weekday(), first_day, "{} from {first_day}", case.description);
                }

                let dates: Vec<_> = view.into_iter().flatten().collect();
                for pair in dates.windows(2) {
                    assert_eq!(pair[0].days_until(pair[1]), 1, "{} from {first_day}", case.description);
                }
                let in_month = dates.iter().filter(|d| case.year_month.contains(**d)).count();
                assert_eq!(in_month, 31, "{} from {first_day}", case.description);
                assert!(
                    dates
                        .iter()
                        .filter(|d| !d.is_supported())
                        .all(|d| is_outside_month(*d, case.year_month)),
                    "{} from {first_day}",
                    case.description
                );
            }
        }
    }

    #[test]
    fn test_month_view_padding_past_limits() {
        let view = month_view(YearMonth::MIN, Weekday::Sunday, 7);
        assert_eq!(view[0][0].to_string(), "0000-12-31");
        assert_eq!(view[0][1], CalendarDate::MIN);

        let view = month_view(YearMonth::MAX, Weekday::Monday, 7);
        let last_week = view.last().unwrap();
        assert_eq!(last_week[4], CalendarDate::MAX);
        assert_eq!(last_week[6].to_string(), "10000-01-02");
    }

    #[test]
    fn test_is_outside_month() {
        let march = year_month(2020, 3);
        assert!(is_outside_month(date(2020, 2, 29), march));
        assert!(!is_outside_month(date(2020, 3, 15), march));
        assert!(is_outside_month(date(2020, 4, 1), march));
    }

    #[test]
    fn test_visible_months() {
        assert_eq!(
            visible_months(year_month(2020, 11), 3),
            vec![year_month(2020, 11), year_month(2020, 12), year_month(2021, 1)]
        );
        assert!(visible_months(year_month(2020, 11), 0).is_empty());
    }
}
