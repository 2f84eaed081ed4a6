// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use meetsel_core::SelectionState;

use crate::common::{naive, test_selection};

#[test]
fn afternoon_meeting_today() {
    let mut state = test_selection();
    state.set_time(14, 0).unwrap();

    assert!(state.is_time_in_future());
    assert!(!state.is_date_in_future());
    assert_eq!(state.format_short_time(), "02:00 PM");
}

#[test]
fn meeting_later_this_week() {
    let mut state = test_selection();
    state.set_date(2024, 3, 5).unwrap();

    assert!(state.is_date_in_future());
    assert!(!state.is_time_in_future());
    assert_eq!(state.format_short_date(), "03/05/24");
}

#[test]
fn earlier_time_today_is_not_in_future() {
    let mut state = test_selection();
    state.set_time(9, 0).unwrap();
    assert!(!state.is_time_in_future());
    assert!(!state.is_date_in_future());
}

#[test]
fn past_date_with_later_time_still_reports_time_in_future() {
    let mut state = test_selection();
    state.set_date(2023, 12, 25).unwrap();
    state.set_time(18, 0).unwrap();

    assert!(state.is_time_in_future());
    assert!(!state.is_date_in_future());
}

#[test]
fn flags_depend_only_on_selection_and_reference() {
    let reference = naive(2024, 3, 1, 10, 30);
    let selected = naive(2024, 3, 5, 8, 0);

    let restored = SelectionState::with_selected(reference, selected);
    let mut edited = SelectionState::new(reference);
    edited.set_time(23, 0).unwrap();
    edited.set_date(2024, 3, 5).unwrap();
    edited.set_time(8, 0).unwrap();

    assert_eq!(restored, edited);
    assert_eq!(restored.is_time_in_future(), edited.is_time_in_future());
    assert_eq!(restored.is_date_in_future(), edited.is_date_in_future());
}
