// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use chrono::{DateTime, FixedOffset};
use clap::{Arg, ArgMatches, arg, value_parser};
use meetsel_core::{Clock, SavedSelection, SelectionState, restore};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,
    Table,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Table)
    }
}

/// A saved selection, as epoch milliseconds, to re-create the screen from.
#[derive(Debug, Clone, Copy)]
pub struct ArgRestore;

impl ArgRestore {
    pub fn arg() -> Arg {
        arg!(--restore <MILLIS> "Restore a saved selection from epoch milliseconds")
            .value_parser(value_parser!(i64))
            .allow_negative_numbers(true)
    }

    pub fn from(matches: &ArgMatches) -> Option<i64> {
        matches.get_one("restore").copied()
    }
}

/// Opens a fresh selection at the clock's current instant, or brings back a saved one with
/// that instant as its reference.
pub fn open_selection<C: Clock>(
    clock: &C,
    saved: Option<i64>,
) -> Result<SelectionState, Box<dyn Error>> {
    match saved {
        Some(timestamp) => {
            let reference = clock.now().naive_local();
            let saved = SavedSelection { timestamp };
            Ok(restore(saved, &clock.timezone(), reference)?)
        }
        None => Ok(SelectionState::open(clock)),
    }
}

/// Splits `YYYY-MM-DD` into its numbers without checking that the date exists, so that the
/// selection can report a nonexistent day itself.
pub fn parse_date_parts(s: &str) -> Result<(i32, u32, u32), Box<dyn Error>> {
    let invalid = || format!("Invalid date format: {s}. Expected format: YYYY-MM-DD");

    let mut parts = s.trim().splitn(3, '-');
    let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid().into());
    };

    let year = y.parse().map_err(|_| invalid())?;
    let month = m.parse().map_err(|_| invalid())?;
    let day = d.parse().map_err(|_| invalid())?;
    Ok((year, month, day))
}

/// Splits `HH:MM` into hour and minute without range checks.
pub fn parse_time_parts(s: &str) -> Result<(u32, u32), Box<dyn Error>> {
    let invalid = || format!("Invalid time format: {s}. Expected format: HH:MM");

    let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;
    let hour = h.parse().map_err(|_| invalid())?;
    let minute = m.parse().map_err(|_| invalid())?;
    Ok((hour, minute))
}

/// Parses an RFC 3339 instant such as `2024-03-01T10:30:00+08:00`.
pub fn parse_reference(s: &str) -> Result<DateTime<FixedOffset>, Box<dyn Error>> {
    DateTime::parse_from_rfc3339(s.trim())
        .map_err(|e| format!("Invalid instant: {s}: {e}. Expected RFC 3339").into())
}
