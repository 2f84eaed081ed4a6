// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use meetsel_core::{date_from_picker_millis, picker_millis_for_date};

use crate::common::{naive, test_selection};

#[test]
fn picker_opens_on_reference_day() {
    let state = test_selection();
    let millis = picker_millis_for_date(state.reference_instant().date());
    assert_eq!(
        date_from_picker_millis(millis).unwrap(),
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    );
}

#[test]
fn confirmed_picker_day_keeps_time() {
    let mut state = test_selection();
    state.set_time(16, 45).unwrap();

    let day = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
    state
        .set_date_from_picker(Some(picker_millis_for_date(day)))
        .unwrap();

    assert_eq!(state.selected(), naive(2024, 3, 8, 16, 45));
    assert!(state.is_date_in_future());
}

#[test]
fn picker_without_selection_is_ignored() {
    let mut state = test_selection();
    let before = state;
    state.set_date_from_picker(None).unwrap();
    assert_eq!(state, before);
}
