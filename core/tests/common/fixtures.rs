// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};
use meetsel_core::{FixedClock, SelectionState};

/// Builds a wall-clock date-time, panicking on invalid input.
#[must_use]
pub fn naive(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid test date")
        .and_hms_opt(hour, minute, 0)
        .expect("valid test time")
}

/// A UTC clock frozen at 2024-03-01T10:30.
#[must_use]
pub fn reference_clock() -> FixedClock<Utc> {
    FixedClock::new(Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap())
}

/// A selection opened at 2024-03-01T10:30.
///
/// # Example
///
/// ```ignore
/// let mut state = test_selection();
/// state.set_time(14, 0).unwrap();
/// ```
#[must_use]
pub fn test_selection() -> SelectionState {
    SelectionState::open(&reference_clock())
}
