use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DateBounds, LocaleNames, RangeError, Selection, Weekday};

/// One BCP 47 tag or a list in order of preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalePreference {
    One(String),
    Many(Vec<String>),
}

impl Default for LocalePreference {
    fn default() -> Self {
        Self::One("en-US".to_owned())
    }
}

impl LocalePreference {
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        let tags: &[String] = match self {
            Self::One(tag) => std::slice::from_ref(tag),
            Self::Many(tags) => tags,
        };
        tags.iter().map(String::as_str)
    }

    /// Naming source for the first supported tag
    pub fn names(&self) -> LocaleNames {
        LocaleNames::negotiate(self.tags())
    }
}

/// Options a calendar is created with.
///
/// Deserializes from camelCase keys; every key is optional:
///
/// ```json
/// { "selection": ["2020-03-10", "2020-03-20"], "minDate": "2020-01-01",
///   "firstDayOfWeek": 7, "locale": ["de-DE", "en-US"], "numberOfMonths": 2 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalendarConfig {
    pub selection:         Selection,
    pub min_date:          Option<CalendarDate>,
    pub max_date:          Option<CalendarDate>,
    pub first_day_of_week: Weekday,
    pub locale:            LocalePreference,
    pub number_of_months:  usize,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            selection:         Selection::None,
            min_date:          None,
            max_date:          None,
            first_day_of_week: Weekday::Monday,
            locale:            LocalePreference::default(),
            number_of_months:  1,
        }
    }
}

impl CalendarConfig {
    /// The selectable window.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` when `min_date` is after `max_date`.
    pub fn bounds(&self) -> Result<DateBounds, RangeError> {
        DateBounds::new(self.min_date, self.max_date)
    }
}
