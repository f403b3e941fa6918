//! Localized weekday and month names.
//!
//! Naming is delegated to a [`CalendarNames`] implementation so a host can
//! plug in its own locale data. [`LocaleNames`] reads the bundled POSIX
//! locale tables; whenever a name is missing the English
//! [`InvariantNames`] fill the gap.

use pure_rust_locales::{Locale, locale_match};
use serde::Serialize;

use crate::{Month, Weekday, YearMonth};

/// How much of a name to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameWidth {
    /// "Monday"
    Long,
    /// "Mon"
    Short,
    /// "M"
    Narrow,
}

/// Header entry for one column of a month grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WeekdayLabel {
    pub long:   String,
    pub narrow: String,
}

/// Source of localized calendar names.
///
/// Returning `None` means the name is unsupported; callers fall back to
/// [`InvariantNames`].
pub trait CalendarNames {
    fn weekday_name(&self, weekday: Weekday, width: NameWidth) -> Option<String>;

    fn month_name(&self, month: Month, width: NameWidth) -> Option<String> {
        let _ = (month, width);
        None
    }
}

/// English names that never fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InvariantNames;

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Region picked for a bare language tag when it differs from the language
/// code itself.
const DEFAULT_REGIONS: &[(&str, &str)] = &[
    ("ar", "EG"),
    ("cs", "CZ"),
    ("da", "DK"),
    ("el", "GR"),
    ("en", "US"),
    ("et", "EE"),
    ("fa", "IR"),
    ("he", "IL"),
    ("hi", "IN"),
    ("ja", "JP"),
    ("ko", "KR"),
    ("nb", "NO"),
    ("sl", "SI"),
    ("sv", "SE"),
    ("uk", "UA"),
    ("vi", "VN"),
    ("zh", "CN"),
];

impl InvariantNames {
    fn weekday(weekday: Weekday, width: NameWidth) -> String {
        shorten(WEEKDAY_NAMES[usize::from(weekday.iso_number() - 1)], width)
    }

    fn month(month: Month, width: NameWidth) -> String {
        shorten(MONTH_NAMES[usize::from(month.get() - 1)], width)
    }
}

impl CalendarNames for InvariantNames {
    fn weekday_name(&self, weekday: Weekday, width: NameWidth) -> Option<String> {
        Some(Self::weekday(weekday, width))
    }

    fn month_name(&self, month: Month, width: NameWidth) -> Option<String> {
        Some(Self::month(month, width))
    }
}

fn shorten(long: &str, width: NameWidth) -> String {
    match width {
        NameWidth::Long => long.to_owned(),
        NameWidth::Short => long.chars().take(3).collect(),
        NameWidth::Narrow => narrow(long),
    }
}

/// First letter, uppercased
fn narrow(long: &str) -> String {
    long.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// Names read from the bundled POSIX locale tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleNames {
    locale: Locale,
}

impl Default for LocaleNames {
    fn default() -> Self {
        Self::new(Locale::POSIX)
    }
}

impl LocaleNames {
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Resolves a BCP 47 tag such as `de-DE`, `zh-Hant-TW` or plain `de`.
    ///
    /// Tries the full tag, then language plus region. A tag without a region
    /// uses the language's usual region (`de` → `de_DE`, `en` → `en_US`),
    /// or the language name doubled (`fi` → `fi_FI`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        let subtags: Vec<&str> = tag
            .split(['-', '_'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        let language = subtags.first()?.to_ascii_lowercase();
        let region = subtags
            .iter()
            .skip(1)
            .find(|s| s.len() == 2 || (s.len() == 3 && s.chars().all(|c| c.is_ascii_digit())));

        let mut candidates = vec![subtags.join("_")];
        match region {
            Some(region) => candidates.push(format!("{language}_{}", region.to_ascii_uppercase())),
            None => {
                if let Some((_, region)) = DEFAULT_REGIONS.iter().find(|(lang, _)| *lang == language) {
                    candidates.push(format!("{language}_{region}"));
                }
                candidates.push(format!("{language}_{}", language.to_ascii_uppercase()));
            },
        }

        candidates
            .iter()
            .find_map(|candidate| Locale::try_from(candidate.as_str()).ok())
            .map(Self::new)
    }

    /// Picks the first supported tag; falls back to POSIX (English) names.
    pub fn negotiate<'a, I>(tags: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut requested = Vec::new();
        for tag in tags {
            if let Some(names) = Self::from_tag(tag) {
                log::trace!("resolved locale tag {tag:?} to {:?}", names.locale);
                return names;
            }
            requested.push(tag);
        }
        log::warn!("no supported locale in {requested:?}, using POSIX names");
        Self::default()
    }

    fn weekday_table(&self, width: NameWidth) -> &'static [&'static str] {
        match width {
            NameWidth::Short | NameWidth::Narrow => locale_match!(self.locale => LC_TIME::ABDAY),
            NameWidth::Long => locale_match!(self.locale => LC_TIME::DAY),
        }
    }

    fn month_table(&self, width: NameWidth) -> &'static [&'static str] {
        match width {
            NameWidth::Short | NameWidth::Narrow => locale_match!(self.locale => LC_TIME::ABMON),
            NameWidth::Long => locale_match!(self.locale => LC_TIME::MON),
        }
    }
}

fn pick(table: &[&str], index: usize) -> Option<String> {
    table
        .get(index)
        .filter(|name| !name.is_empty())
        .map(|name| (*name).to_owned())
}

/// Narrow names for a whole table of abbreviated names.
///
/// Characters every name starts with are skipped (`星期一`, `星期二`, ...),
/// then the next one is taken. Falls back to the abbreviations themselves
/// when that leaves every name the same.
fn narrow_names(abbreviated: &[&str]) -> Option<Vec<String>> {
    if abbreviated.is_empty() || abbreviated.iter().any(|name| name.is_empty()) {
        return None;
    }
    let shared = shared_prefix_len(abbreviated);
    let narrow: Vec<String> = abbreviated
        .iter()
        .map(|name| name.chars().nth(shared).map_or_else(|| (*name).to_owned(), |c| c.to_uppercase().collect()))
        .collect();

    if abbreviated.len() > 1 && narrow.iter().all(|name| *name == narrow[0]) {
        return Some(abbreviated.iter().map(|name| (*name).to_owned()).collect());
    }
    Some(narrow)
}

/// Number of leading characters all names have in common
fn shared_prefix_len(names: &[&str]) -> usize {
    let Some((first, rest)) = names.split_first() else {
        return 0;
    };
    let first: Vec<char> = first.chars().collect();
    rest.iter().fold(first.len(), |len, name| {
        name.chars()
            .zip(&first)
            .take(len)
            .take_while(|(a, b)| a == *b)
            .count()
    })
}

impl CalendarNames for LocaleNames {
    fn weekday_name(&self, weekday: Weekday, width: NameWidth) -> Option<String> {
        // Locale tables start on Sunday
        let index = weekday.days_from_sunday();
        match width {
            NameWidth::Narrow => narrow_names(self.weekday_table(NameWidth::Short))?.into_iter().nth(index),
            NameWidth::Long | NameWidth::Short => pick(self.weekday_table(width), index),
        }
    }

    fn month_name(&self, month: Month, width: NameWidth) -> Option<String> {
        let index = usize::from(month.get() - 1);
        match width {
            NameWidth::Narrow => narrow_names(self.month_table(NameWidth::Short))?.into_iter().nth(index),
            NameWidth::Long | NameWidth::Short => pick(self.month_table(width), index),
        }
    }
}

/// Header labels for `days_in_week` columns starting at `first_day`.
pub fn weekday_labels(first_day: Weekday, days_in_week: usize, locale: &str) -> Vec<WeekdayLabel> {
    weekday_labels_with(first_day, days_in_week, &LocaleNames::negotiate([locale]))
}

/// Like [`weekday_labels`], with an injected naming source.
pub fn weekday_labels_with<N>(first_day: Weekday, days_in_week: usize, names: &N) -> Vec<WeekdayLabel>
where
    N: CalendarNames + ?Sized,
{
    (0..days_in_week)
        .map(|offset| {
            let weekday = first_day.nth_after(offset);
            let name = |width| {
                names
                    .weekday_name(weekday, width)
                    .unwrap_or_else(|| InvariantNames::weekday(weekday, width))
            };
            WeekdayLabel {
                long:   name(NameWidth::Long),
                narrow: name(NameWidth::Narrow),
            }
        })
        .collect()
}

/// Headline for a month, e.g. "March 2020".
pub fn month_label(year_month: YearMonth, locale: &str) -> String {
    month_label_with(year_month, &LocaleNames::negotiate([locale]))
}

pub fn month_label_with<N>(year_month: YearMonth, names: &N) -> String
where
    N: CalendarNames + ?Sized,
{
    let month = year_month.month_typed();
    let name = names
        .month_name(month, NameWidth::Long)
        .unwrap_or_else(|| InvariantNames::month(month, NameWidth::Long));
    format!("{name} {}", year_month.year())
}
