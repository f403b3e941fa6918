use crate::{CalendarDate, RangeError, YearMonth};

/// Optional `[min, max]` window of selectable dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DateBounds {
    min: Option<CalendarDate>,
    max: Option<CalendarDate>,
}

impl DateBounds {
    /// Bounds that accept every date
    pub const fn unbounded() -> Self {
        Self { min: None, max: None }
    }

    /// # Errors
    /// Returns `RangeError::InvalidRange` when `min` is after `max`.
    pub fn new(min: Option<CalendarDate>, max: Option<CalendarDate>) -> Result<Self, RangeError> {
        match (min, max) {
            (Some(start), Some(end)) if start > end => Err(RangeError::InvalidRange { start, end }),
            _ => Ok(Self { min, max }),
        }
    }

    pub const fn min(&self) -> Option<CalendarDate> {
        self.min
    }

    pub const fn max(&self) -> Option<CalendarDate> {
        self.max
    }

    /// Moves `date` into the window. Unbounded sides leave it untouched.
    pub fn clamp(&self, date: CalendarDate) -> CalendarDate {
        match (self.min, self.max) {
            (Some(min), _) if date < min => min,
            (_, Some(max)) if date > max => max,
            _ => date,
        }
    }

    /// A date before `min` or after `max` cannot be selected, and neither
    /// can grid padding outside the supported range.
    pub fn is_disabled(&self, date: CalendarDate) -> bool {
        !date.is_supported()
            || self.min.is_some_and(|min| date < min)
            || self.max.is_some_and(|max| date > max)
    }

    /// True when the month before `year_month` lies entirely before `min`.
    pub fn is_prev_month_disabled(&self, year_month: YearMonth) -> bool {
        self.min.is_some_and(|min| {
            year_month == YearMonth::MIN || year_month.sub_months(1).last_day() < min
        })
    }

    /// True when the month after `year_month` lies entirely after `max`.
    pub fn is_next_month_disabled(&self, year_month: YearMonth) -> bool {
        self.max.is_some_and(|max| {
            year_month == YearMonth::MAX || year_month.add_months(1).first_day() > max
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, year_month};

    fn march_bounds() -> DateBounds {
        DateBounds::new(Some(date(2020, 3, 5)), Some(date(2020, 3, 25))).unwrap()
    }

    #[test]
    fn test_new_rejects_inverted_bounds() {
        let result = DateBounds::new(Some(date(2020, 3, 25)), Some(date(2020, 3, 5)));
        assert!(matches!(result, Err(RangeError::InvalidRange { .. })));
        assert!(DateBounds::new(Some(date(2020, 3, 5)), None).is_ok());
        assert!(DateBounds::new(Some(date(2020, 3, 5)), Some(date(2020, 3, 5))).is_ok());
    }

    #[test]
    fn test_clamp() {
        let bounds = march_bounds();
        assert_eq!(bounds.clamp(date(2020, 3, 1)), date(2020, 3, 5));
        assert_eq!(bounds.clamp(date(2020, 3, 31)), date(2020, 3, 25));
        assert_eq!(bounds.clamp(date(2020, 3, 15)), date(2020, 3, 15));
        assert_eq!(DateBounds::unbounded().clamp(date(1900, 1, 1)), date(1900, 1, 1));
    }

    #[test]
    fn test_is_disabled() {
        let bounds = march_bounds();
        assert!(bounds.is_disabled(date(2020, 3, 4)));
        assert!(!bounds.is_disabled(date(2020, 3, 5)));
        assert!(!bounds.is_disabled(date(2020, 3, 25)));
        assert!(bounds.is_disabled(date(2020, 3, 26)));
        assert!(!DateBounds::unbounded().is_disabled(date(2020, 3, 26)));
    }

    #[test]
    fn test_padding_past_supported_range_is_disabled() {
        let view = crate::month_view(YearMonth::MIN, crate::Weekday::Sunday, 7);
        let unbounded = DateBounds::unbounded();
        assert!(unbounded.is_disabled(view[0][0]));
        assert!(!unbounded.is_disabled(CalendarDate::MIN));
        assert!(!unbounded.is_disabled(CalendarDate::MAX));
    }

    #[test]
    fn test_month_navigation_disabled() {
        let bounds = march_bounds();
        let march = year_month(2020, 3);
        assert!(bounds.is_prev_month_disabled(march));
        assert!(bounds.is_next_month_disabled(march));

        assert!(!bounds.is_prev_month_disabled(year_month(2020, 4)));
        assert!(!bounds.is_next_month_disabled(year_month(2020, 2)));

        let unbounded = DateBounds::unbounded();
        assert!(!unbounded.is_prev_month_disabled(march));
        assert!(!unbounded.is_next_month_disabled(march));
    }

    #[test]
    fn test_month_navigation_with_bound_on_month_edge() {
        let bounds = DateBounds::new(Some(date(2020, 2, 29)), Some(date(2020, 4, 1))).unwrap();
        assert!(!bounds.is_prev_month_disabled(year_month(2020, 3)));
        assert!(!bounds.is_next_month_disabled(year_month(2020, 3)));
        assert!(bounds.is_prev_month_disabled(year_month(2020, 2)));
        assert!(bounds.is_next_month_disabled(year_month(2020, 4)));
    }
}
