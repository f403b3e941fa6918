use serde::Serialize;

use crate::{
    CalendarConfig, CalendarDate, CalendarState, DAYS_IN_WEEK, DateBounds, DateRole, WeekdayLabel,
    YearMonth, classify, is_outside_month, month_label_with, month_view, visible_months,
    weekday_labels_with,
};

/// One rendered day of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    pub date:             CalendarDate,
    pub role:             DateRole,
    pub is_disabled:      bool,
    pub is_outside_month: bool,
    pub is_today:         bool,
    pub is_focused:       bool,
}

/// Everything needed to draw one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid {
    pub year_month: YearMonth,
    pub title:      String,
    pub weekdays:   Vec<WeekdayLabel>,
    pub weeks:      Vec<Vec<DayCell>>,
}

/// Annotated grids for `config.number_of_months` months starting at the
/// displayed month.
pub fn build_month_grids(state: &CalendarState, config: &CalendarConfig) -> Vec<MonthGrid> {
    let bounds = config.bounds().unwrap_or_else(|err| {
        log::warn!("ignoring calendar bounds: {err}");
        DateBounds::unbounded()
    });
    let names = config.locale.names();
    let first_day = config.first_day_of_week;
    let weekdays = weekday_labels_with(first_day, DAYS_IN_WEEK, &names);

    visible_months(state.displayed_month(), config.number_of_months)
        .into_iter()
        .map(|year_month| {
            let weeks = month_view(year_month, first_day, weekdays.len())
                .into_iter()
                .map(|week| {
                    week.into_iter()
                        .map(|date| DayCell {
                            date,
                            role: classify(date, &config.selection, state.hovered_date()),
                            is_disabled: bounds.is_disabled(date),
                            is_outside_month: is_outside_month(date, year_month),
                            is_today: date == state.today(),
                            is_focused: date == state.focused_date(),
                        })
                        .collect()
                })
                .collect();

            MonthGrid {
                year_month,
                title: month_label_with(year_month, &names),
                weekdays: weekdays.clone(),
                weeks,
            }
        })
        .collect()
}
