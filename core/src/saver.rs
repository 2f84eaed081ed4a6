// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Saving a selection as a single timestamp and bringing it back when a screen is
//! re-created, plus the millisecond values a date picker exchanges.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

use crate::datetime::{from_local_datetime, utc_midnight_millis};
use crate::{SelectionError, SelectionState};

/// A selection flattened to epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SavedSelection {
    pub timestamp: i64,
}

/// Resolves the selected wall-clock time in `tz` and keeps it as epoch milliseconds.
pub fn save<Tz: TimeZone>(state: &SelectionState, tz: &Tz) -> SavedSelection {
    let timestamp = from_local_datetime(tz, state.selected()).timestamp_millis();
    tracing::debug!(timestamp, "selection saved");
    SavedSelection { timestamp }
}

/// Re-derives date and time of day from a saved timestamp in `tz`.
///
/// `reference` is the instant captured by the re-created screen; the future flags of the
/// restored selection are relative to it.
pub fn restore<Tz: TimeZone>(
    saved: SavedSelection,
    tz: &Tz,
    reference: NaiveDateTime,
) -> Result<SelectionState, SelectionError> {
    let selected = DateTime::from_timestamp_millis(saved.timestamp)
        .ok_or(SelectionError::InvalidTimestamp(saved.timestamp))?
        .with_timezone(tz)
        .naive_local();

    tracing::debug!(%selected, "selection restored");
    Ok(SelectionState::with_selected(reference, selected))
}

/// The calendar date a date picker value stands for. Picker values are UTC midnights, so
/// the conversion ignores the local timezone.
pub fn date_from_picker_millis(millis: i64) -> Result<NaiveDate, SelectionError> {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.date_naive())
        .ok_or(SelectionError::InvalidTimestamp(millis))
}

/// The value a date picker opens with: the reference day.
pub fn picker_millis_for_date(date: NaiveDate) -> i64 {
    utc_midnight_millis(date)
}
