// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use meetsel_core::SelectionState;

/// Asserts that only the time of day differs between two selections.
///
/// # Panics
///
/// Panics if the calendar dates differ.
pub fn assert_date_unchanged(before: &SelectionState, after: &SelectionState) {
    assert_eq!(
        before.selected().date(),
        after.selected().date(),
        "date changed from {} to {}",
        before.selected(),
        after.selected()
    );
}

/// Asserts that only the calendar date differs between two selections.
///
/// # Panics
///
/// Panics if the times of day differ.
pub fn assert_time_unchanged(before: &SelectionState, after: &SelectionState) {
    assert_eq!(
        before.selected().time(),
        after.selected().time(),
        "time of day changed from {} to {}",
        before.selected(),
        after.selected()
    );
}
