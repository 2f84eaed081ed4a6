// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{TimeZone, Utc};
use chrono_tz::{America::New_York, Europe::Berlin};
use meetsel_core::{Clock, FixedClock, SavedSelection, SelectionState, restore, save};

use crate::common::{naive, reference_clock, test_selection};

#[test]
fn recreated_screen_keeps_selection() {
    let clock = reference_clock();
    let mut state = SelectionState::open(&clock);
    state.set_date(2024, 3, 5).unwrap();
    state.set_time(14, 0).unwrap();

    let saved = save(&state, &clock.timezone());
    let json = serde_json::to_string(&saved).unwrap();

    let recreated = FixedClock::new(Utc.with_ymd_and_hms(2024, 3, 1, 10, 45, 0).unwrap());
    let saved: SavedSelection = serde_json::from_str(&json).unwrap();
    let reference = recreated.now().naive_local();
    let restored = restore(saved, &recreated.timezone(), reference).unwrap();

    assert_eq!(restored.selected(), state.selected());
    assert_eq!(restored.reference_instant(), naive(2024, 3, 1, 10, 45));
    assert_eq!(restored.format_full(), "03/05/24 02:00 PM");
}

#[test]
fn round_trip_in_dst_timezone() {
    let mut state = test_selection();
    state.set_date(2024, 7, 1).unwrap();
    state.set_time(9, 30).unwrap();

    let saved = save(&state, &Berlin);
    let expected = Utc.with_ymd_and_hms(2024, 7, 1, 7, 30, 0).unwrap();
    assert_eq!(saved.timestamp, expected.timestamp_millis());

    let restored = restore(saved, &Berlin, state.reference_instant()).unwrap();
    assert_eq!(restored, state);
}

#[test]
fn selection_in_dst_gap_keeps_date_west_of_utc() {
    // 02:30 does not exist in New York on 2025-03-09
    let mut state = test_selection();
    state.set_date(2025, 3, 9).unwrap();
    state.set_time(2, 30).unwrap();

    let saved = save(&state, &New_York);
    let expected = Utc.with_ymd_and_hms(2025, 3, 9, 7, 30, 0).unwrap();
    assert_eq!(saved.timestamp, expected.timestamp_millis());

    let restored = restore(saved, &New_York, state.reference_instant()).unwrap();
    assert_eq!(restored.selected(), naive(2025, 3, 9, 3, 30));
    assert_eq!(restored.selected().date(), state.selected().date());
}

#[test]
fn selection_in_dst_gap_keeps_date_east_of_utc() {
    // 02:30 does not exist in Berlin on 2024-03-31
    let mut state = test_selection();
    state.set_date(2024, 3, 31).unwrap();
    state.set_time(2, 30).unwrap();

    let saved = save(&state, &Berlin);
    let restored = restore(saved, &Berlin, state.reference_instant()).unwrap();
    assert_eq!(restored.selected(), naive(2024, 3, 31, 3, 30));
}
