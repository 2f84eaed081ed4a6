// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core of the meeting time selector: the selection state and its rules, the fixed display
//! patterns, the clock a screen opens with, and the save/restore bridge.

mod clock;
mod config;
mod datetime;
mod error;
mod format;
mod saver;
mod selection;

pub use crate::clock::{Clock, FixedClock, SystemClock, local_timezone_name};
pub use crate::config::{APP_NAME, Config, ConfigError, MAX_MINUTE_STEP, WeekStart};
pub use crate::error::SelectionError;
pub use crate::format::{
    FULL_FORMAT, SHORT_DATE_FORMAT, SHORT_TIME_FORMAT, format_full, format_short_date,
    format_short_time, parse_full,
};
pub use crate::saver::{
    SavedSelection, date_from_picker_millis, picker_millis_for_date, restore, save,
};
pub use crate::selection::{LABEL_NOW, LABEL_TODAY, SelectionState};
