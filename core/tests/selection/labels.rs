// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use meetsel_core::{LABEL_NOW, LABEL_TODAY, parse_full};

use crate::common::{naive, test_selection};

#[test]
fn fresh_card_reads_now_and_today() {
    let state = test_selection();
    assert_eq!(state.time_button_label(), LABEL_NOW);
    assert_eq!(state.date_button_label(), LABEL_TODAY);
    assert_eq!(
        state.confirmation_label(),
        "Meeting Scheduled: 03/01/24 10:30 AM"
    );
}

#[test]
fn future_date_shows_time_even_if_earlier() {
    let mut state = test_selection();
    state.set_date(2024, 3, 2).unwrap();
    state.set_time(8, 15).unwrap();

    assert_eq!(state.time_button_label(), "08:15 AM");
    assert_eq!(state.date_button_label(), "03/02/24");
}

#[test]
fn full_format_parses_back() {
    let mut state = test_selection();
    for (y, mo, d, h, mi) in [(2024, 3, 5, 14, 0), (2024, 2, 29, 0, 1), (2068, 12, 31, 23, 59)] {
        state.set_date(y, mo, d).unwrap();
        state.set_time(h, mi).unwrap();

        let parsed = parse_full(&state.format_full()).unwrap();
        assert_eq!(parsed, naive(y, mo, d, h, mi));
        assert_eq!(parsed, state.selected());
    }
}
