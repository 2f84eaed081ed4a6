// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::clock::Clock;
use crate::format::{format_full, format_short_date, format_short_time};
use crate::saver::date_from_picker_millis;
use crate::SelectionError;

/// Label of the time button while the selection is still "now".
pub const LABEL_NOW: &str = "Now";

/// Label of the date button while the selection is still "today".
pub const LABEL_TODAY: &str = "Today";

/// The meeting date-time a screen is editing, together with the instant the screen was opened.
///
/// Both values are wall-clock date-times in the timezone the screen was opened in. The
/// reference never changes after construction; the selection is only replaced through
/// [`SelectionState::set_time`] and [`SelectionState::set_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    reference: NaiveDateTime,
    selected: NaiveDateTime,
}

impl SelectionState {
    /// Starts a selection equal to `reference`.
    pub fn new(reference: NaiveDateTime) -> Self {
        Self {
            reference,
            selected: reference,
        }
    }

    /// Starts a selection at the current instant of `clock`.
    pub fn open<C: Clock>(clock: &C) -> Self {
        let now = clock.now().naive_local();
        tracing::debug!(%now, "opening meeting selection");
        Self::new(now)
    }

    /// Re-creates a selection whose value was captured by an earlier screen.
    pub fn with_selected(reference: NaiveDateTime, selected: NaiveDateTime) -> Self {
        Self {
            reference,
            selected,
        }
    }

    pub fn reference_instant(&self) -> NaiveDateTime {
        self.reference
    }

    pub fn selected(&self) -> NaiveDateTime {
        self.selected
    }

    /// Replaces the time of day, keeping the date.
    pub fn set_time(&mut self, hour: u32, minute: u32) -> Result<Self, SelectionError> {
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or(SelectionError::InvalidTimeOfDay { hour, minute })?;

        self.selected = NaiveDateTime::new(self.selected.date(), time);
        tracing::debug!(selected = %self.selected, "time of day updated");
        Ok(*self)
    }

    /// Replaces the calendar date, keeping the time of day.
    pub fn set_date(&mut self, year: i32, month: u32, day: u32) -> Result<Self, SelectionError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(SelectionError::InvalidCalendarDate { year, month, day })?;

        self.selected = NaiveDateTime::new(date, self.selected.time());
        tracing::debug!(selected = %self.selected, "calendar date updated");
        Ok(*self)
    }

    /// Applies the value a date picker confirmed with. A picker without a selected day leaves
    /// the selection as it is.
    pub fn set_date_from_picker(&mut self, millis: Option<i64>) -> Result<Self, SelectionError> {
        let Some(millis) = millis else {
            tracing::debug!("date picker confirmed without a selection, keeping current date");
            return Ok(*self);
        };

        let date = date_from_picker_millis(millis)?;
        self.selected = NaiveDateTime::new(date, self.selected.time());
        tracing::debug!(selected = %self.selected, "calendar date updated from picker");
        Ok(*self)
    }

    /// Whether the selected time of day is later than the reference time of day.
    ///
    /// NOTE: the dates are not compared, so a past date with a later clock time still counts
    /// as "in the future". Callers pair it with [`Self::is_date_in_future`].
    pub fn is_time_in_future(&self) -> bool {
        self.selected.time() > self.reference.time()
    }

    /// Whether the selected date is after the reference date.
    pub fn is_date_in_future(&self) -> bool {
        self.selected.date() > self.reference.date()
    }

    pub fn format_short_time(&self) -> String {
        format_short_time(self.selected.time())
    }

    pub fn format_short_date(&self) -> String {
        format_short_date(self.selected.date())
    }

    pub fn format_full(&self) -> String {
        format_full(self.selected)
    }

    /// Text of the time button: "Now" until either the time or the date moves ahead.
    pub fn time_button_label(&self) -> String {
        if !self.is_time_in_future() && !self.is_date_in_future() {
            LABEL_NOW.to_string()
        } else {
            self.format_short_time()
        }
    }

    /// Text of the date button: "Today" until the date moves ahead.
    pub fn date_button_label(&self) -> String {
        if !self.is_date_in_future() {
            LABEL_TODAY.to_string()
        } else {
            self.format_short_date()
        }
    }

    pub fn confirmation_label(&self) -> String {
        format!("Meeting Scheduled: {}", self.format_full())
    }
}
