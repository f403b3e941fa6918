//! Property tests for the calendar state machine and the selection classifier.

use calendar_core::{
    CalendarAction, CalendarConfig, CalendarDate, DateRange, DateRole, FixedClock, NavigationKey,
    Selection, Weekday, YearMonth, classify, init_calendar, key_action, reduce,
};
use proptest::prelude::*;

fn date_strategy() -> impl Strategy<Value = CalendarDate> {
    (1900..2100u16, 1..=12u8, 1..=28u8).prop_map(|(year, month, day)| {
        CalendarDate::new(year, month, day).expect("generated date must be valid")
    })
}

fn key_strategy() -> impl Strategy<Value = NavigationKey> {
    prop_oneof![
        Just(NavigationKey::ArrowLeft),
        Just(NavigationKey::ArrowRight),
        Just(NavigationKey::ArrowUp),
        Just(NavigationKey::ArrowDown),
        Just(NavigationKey::PageUp),
        Just(NavigationKey::PageDown),
        Just(NavigationKey::Home),
        Just(NavigationKey::End),
    ]
}

#[derive(Debug, Clone)]
enum Step {
    Action(CalendarAction),
    Key(NavigationKey, bool),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Action(CalendarAction::PrevMonth)),
        Just(Step::Action(CalendarAction::NextMonth)),
        Just(Step::Action(CalendarAction::MouseLeaveDate)),
        date_strategy().prop_map(|d| Step::Action(CalendarAction::FocusDate(d))),
        date_strategy().prop_map(|d| Step::Action(CalendarAction::MouseEnterDate(d))),
        (key_strategy(), any::<bool>()).prop_map(|(key, modifier)| Step::Key(key, modifier)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn prop_displayed_month_follows_focus(
        today in date_strategy(),
        first_day in prop_oneof![Just(Weekday::Monday), Just(Weekday::Sunday)],
        steps in prop::collection::vec(step_strategy(), 0..40),
    ) {
        let mut state = init_calendar(&CalendarConfig::default(), &FixedClock(today));
        prop_assert_eq!(state.displayed_month(), YearMonth::from(state.focused_date()));

        for step in steps {
            let action = match step {
                Step::Action(action) => action,
                Step::Key(key, modifier) => key_action(state.focused_date(), key, modifier, first_day),
            };
            let hovered_before = state.hovered_date();
            let next = reduce(&state, action);

            prop_assert_eq!(next.displayed_month(), YearMonth::from(next.focused_date()));
            prop_assert_eq!(next.today(), today);
            if let CalendarAction::FocusDate(target) = action {
                prop_assert_eq!(next.focused_date(), target);
                prop_assert_eq!(next.hovered_date(), hovered_before);
            }

            state.dispatch(action);
            prop_assert_eq!(state, next);
        }
    }

    #[test]
    fn prop_classify_ignores_endpoint_order(
        a in date_strategy(),
        b in date_strategy(),
        probe in date_strategy(),
    ) {
        let forward = Selection::Range(DateRange::new(a, b));
        let backward = Selection::Range(DateRange::new(b, a));
        prop_assert_eq!(classify(probe, &forward, None), classify(probe, &backward, None));
    }

    #[test]
    fn prop_hover_preview_matches_committed_range(
        start in date_strategy(),
        hovered in date_strategy(),
        probe in date_strategy(),
    ) {
        let open = Selection::Range(DateRange::starting_at(start));
        let committed = Selection::Range(DateRange::new(start, hovered));
        prop_assert_eq!(classify(probe, &open, Some(hovered)), classify(probe, &committed, None));
    }

    #[test]
    fn prop_range_roles_are_consistent(
        a in date_strategy(),
        b in date_strategy(),
        probe in date_strategy(),
    ) {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let role = classify(probe, &Selection::Range(DateRange::new(a, b)), None);
        let expected = if start == end && probe == start {
            DateRole::Selected
        } else if probe == start {
            DateRole::RangeStart
        } else if probe == end {
            DateRole::RangeEnd
        } else if start < probe && probe < end {
            DateRole::RangeMiddle
        } else {
            DateRole::None
        };
        prop_assert_eq!(role, expected);
    }
}
