// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use colored::{Color, Colorize};
use meetsel_core::{SavedSelection, SelectionState};
use unicode_width::UnicodeWidthStr;

use crate::util::ArgOutputFormat;

/// Prints the meeting card after the user confirmed it.
#[derive(Debug)]
pub struct CardFormatter {
    timezone: String,
    format: ArgOutputFormat,
}

impl CardFormatter {
    pub fn new(timezone: impl Into<String>) -> Self {
        Self {
            timezone: timezone.into(),
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, card: &'a SelectionState, saved: SavedSelection) -> Display<'a> {
        Display {
            card,
            saved,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    card: &'a SelectionState,
    saved: SavedSelection,
    formatter: &'a CardFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            ArgOutputFormat::Json => self.fmt_json(f),
            ArgOutputFormat::Table => self.fmt_table(f),
        }
    }
}

impl Display<'_> {
    fn fmt_table(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const COLOR_FUTURE: Color = Color::Green;

        let card = self.card;
        let rows = [
            (
                "Time",
                card.time_button_label(),
                card.is_time_in_future().then_some(COLOR_FUTURE),
            ),
            (
                "Date",
                card.date_button_label(),
                card.is_date_in_future().then_some(COLOR_FUTURE),
            ),
            ("Scheduled", card.format_full(), None),
            ("Saved", self.saved.timestamp.to_string(), None),
        ];

        let width = rows.iter().map(|(k, _, _)| k.width()).max().unwrap_or(0);
        for (key, value, color) in rows {
            let key = format!("{key:<width$}");
            let value = match color {
                Some(color) => value.color(color).to_string(),
                None => value,
            };
            writeln!(f, "{}  {}", key.bold(), value)?;
        }
        Ok(())
    }

    fn fmt_json(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let card = self.card;
        let json = CardJson {
            time_label: card.time_button_label(),
            date_label: card.date_button_label(),
            scheduled: card.format_full(),
            time_in_future: card.is_time_in_future(),
            date_in_future: card.is_date_in_future(),
            timestamp: self.saved.timestamp,
            timezone: &self.formatter.timezone,
        };
        let s = serde_json::to_string_pretty(&json).map_err(|_| fmt::Error)?;
        writeln!(f, "{s}")
    }
}

#[derive(Debug, serde::Serialize)]
struct CardJson<'a> {
    time_label: String,
    date_label: String,
    scheduled: String,
    time_in_future: bool,
    date_in_future: bool,
    timestamp: i64,
    timezone: &'a str,
}
