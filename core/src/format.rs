// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Fixed display patterns for the meeting card.
//!
//! There is no locale negotiation: the card always reads `hh:mm AM/PM` and
//! `MM/DD/YY`, whatever the system locale is.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::SelectionError;

/// `hh:mm AM/PM`
pub const SHORT_TIME_FORMAT: &str = "%I:%M %p";

/// `MM/DD/YY`
pub const SHORT_DATE_FORMAT: &str = "%m/%d/%y";

/// `MM/DD/YY hh:mm AM/PM`
pub const FULL_FORMAT: &str = "%m/%d/%y %I:%M %p";

pub fn format_short_time(time: NaiveTime) -> String {
    time.format(SHORT_TIME_FORMAT).to_string()
}

pub fn format_short_date(date: NaiveDate) -> String {
    date.format(SHORT_DATE_FORMAT).to_string()
}

pub fn format_full(dt: NaiveDateTime) -> String {
    dt.format(FULL_FORMAT).to_string()
}

/// Parses text produced by [`format_full`] back into a date-time with minute precision.
///
/// NOTE: two-digit years map into 1969..=2068, so only selections inside that window
/// survive a format/parse round trip.
pub fn parse_full(s: &str) -> Result<NaiveDateTime, SelectionError> {
    NaiveDateTime::parse_from_str(s.trim(), FULL_FORMAT)
        .map_err(|e| SelectionError::Parse(format!("{s:?}: {e}, expected MM/DD/YY hh:mm AM/PM")))
}
