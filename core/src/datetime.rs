// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{
    DateTime, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone, offset::LocalResult,
};

pub const fn start_of_day_naive() -> NaiveTime {
    NaiveTime::MIN
}

/// Convert the `NaiveDateTime` to the given timezone, handles local time ambiguities:
/// - `Single(dt)` returns directly;
/// - `Ambiguous(a, b)` takes the earlier one;
/// - `None` (local time does not exist, e.g., due to DST transition): reads the wall time with
///   the offset in effect before the gap, which moves it forward by the gap length on the
///   same day (02:30 becomes 03:30).
pub fn from_local_datetime<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(x) => x,
        LocalResult::Ambiguous(a, b) => {
            tracing::warn!(%naive, "ambiguous local time, picking earliest");
            if a <= b { a } else { b }
        }
        LocalResult::None => {
            tracing::warn!(%naive, "local time does not exist, shifting past the gap");
            let before = naive.checked_sub_signed(TimeDelta::days(1)).unwrap_or(naive);
            let offset = tz.offset_from_utc_datetime(&before).fix();
            let utc = naive - TimeDelta::seconds(i64::from(offset.local_minus_utc()));
            tz.from_utc_datetime(&utc)
        }
    }
}

/// The epoch milliseconds of `date` at midnight UTC, the value a date picker exchanges.
pub fn utc_midnight_millis(date: NaiveDate) -> i64 {
    NaiveDateTime::new(date, start_of_day_naive())
        .and_utc()
        .timestamp_millis()
}
