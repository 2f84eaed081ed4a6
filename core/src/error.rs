// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Errors raised while updating or re-hydrating a meeting selection.
///
/// A failed operation never modifies the selection it was called on.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Hour outside `0..=23` or minute outside `0..=59`.
    #[error("invalid time of day: {hour:02}:{minute:02}")]
    InvalidTimeOfDay { hour: u32, minute: u32 },

    /// The year/month/day triple does not name an existing calendar date.
    #[error("invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidCalendarDate { year: i32, month: u32, day: u32 },

    /// The saved epoch-millisecond timestamp is out of range.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(i64),

    /// Text does not match the expected date/time pattern.
    #[error("failed to parse date/time: {0}")]
    Parse(String),
}
