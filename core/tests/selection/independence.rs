// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, NaiveDate};
use meetsel_core::SelectionError;

use crate::common::{assert_date_unchanged, assert_time_unchanged, test_selection};

#[test]
fn set_time_never_touches_date() {
    for hour in 0..24 {
        for minute in 0..60 {
            let mut state = test_selection();
            state.set_date(2024, 12, 31).unwrap();
            let before = state;

            let after = state.set_time(hour, minute).unwrap();
            assert_date_unchanged(&before, &after);
            assert_eq!(after, state);
        }
    }
}

#[test]
fn set_date_never_touches_time() {
    let mut state = test_selection();
    state.set_time(23, 59).unwrap();

    let mut date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    while date < end {
        let before = state;
        let after = state
            .set_date(date.year(), date.month(), date.day())
            .unwrap();
        assert_time_unchanged(&before, &after);
        assert_eq!(after.selected().date(), date);
        date = date.succ_opt().unwrap();
    }
}

#[test]
fn failed_updates_keep_previous_selection() {
    let mut state = test_selection();
    state.set_date(2024, 3, 5).unwrap();
    state.set_time(14, 0).unwrap();
    let before = state;

    assert!(matches!(
        state.set_time(24, 0),
        Err(SelectionError::InvalidTimeOfDay { .. })
    ));
    assert!(matches!(
        state.set_time(12, 60),
        Err(SelectionError::InvalidTimeOfDay { .. })
    ));
    assert!(matches!(
        state.set_date(2024, 2, 30),
        Err(SelectionError::InvalidCalendarDate { .. })
    ));
    assert!(matches!(
        state.set_date(2023, 4, 31),
        Err(SelectionError::InvalidCalendarDate { .. })
    ));
    assert_eq!(state, before);
}

#[test]
fn reference_is_never_modified() {
    let mut state = test_selection();
    let reference = state.reference_instant();

    state.set_date(2030, 1, 1).unwrap();
    state.set_time(0, 0).unwrap();
    let _ = state.set_time(99, 99);

    assert_eq!(state.reference_instant(), reference);
}
