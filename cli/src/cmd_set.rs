// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Non-interactive counterpart of the picker screen: the same gestures, given as arguments.

use std::error::Error;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, Timelike};
use clap::{ArgMatches, Command, arg};
use meetsel_core::{
    Clock, FixedClock, SelectionState, SystemClock, local_timezone_name, parse_full, save,
};

use crate::card_formatter::CardFormatter;
use crate::util::{
    ArgOutputFormat, ArgRestore, open_selection, parse_date_parts, parse_reference,
    parse_time_parts,
};

#[derive(Debug, Clone, Copy)]
pub struct CmdSet {
    pub date: Option<(i32, u32, u32)>,
    pub time: Option<(u32, u32)>,
    pub at: Option<NaiveDateTime>,
    pub restore: Option<i64>,
    pub now: Option<DateTime<FixedOffset>>,

    pub output_format: ArgOutputFormat,
}

impl CmdSet {
    pub const NAME: &str = "set";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Set the meeting date and time without the picker")
            .arg(arg!(--date <DATE> "Calendar date of the meeting (YYYY-MM-DD)"))
            .arg(arg!(--time <TIME> "Time of day of the meeting (HH:MM, 24-hour)"))
            .arg(
                arg!(--at <DATETIME> r#"Date and time of the meeting ("MM/DD/YY hh:mm AM")"#)
                    .conflicts_with_all(["date", "time"]),
            )
            .arg(ArgRestore::arg())
            .arg(arg!(--now <INSTANT> "Reference instant instead of the system clock (RFC 3339)"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let date = matches
            .get_one::<String>("date")
            .map(|s| parse_date_parts(s))
            .transpose()?;

        let time = matches
            .get_one::<String>("time")
            .map(|s| parse_time_parts(s))
            .transpose()?;

        let at = matches
            .get_one::<String>("at")
            .map(|s| parse_full(s))
            .transpose()?;

        let now = matches
            .get_one::<String>("now")
            .map(|s| parse_reference(s))
            .transpose()?;

        Ok(Self {
            date,
            time,
            at,
            restore: ArgRestore::from(matches),
            now,

            output_format: ArgOutputFormat::from(matches),
        })
    }

    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "setting meeting time...");
        match self.now {
            Some(now) => self.print(&FixedClock::new(now), now.offset().to_string()),
            None => self.print(&SystemClock, local_timezone_name()),
        }
    }

    fn print<C: Clock>(&self, clock: &C, timezone: String) -> Result<(), Box<dyn Error>> {
        let card = self.select(clock)?;
        let saved = save(&card, &clock.timezone());
        let formatter = CardFormatter::new(timezone).with_output_format(self.output_format);
        print!("{}", formatter.format(&card, saved));
        Ok(())
    }

    /// Applies the date first and the time second, the order a user confirms the two pickers.
    fn select<C: Clock>(&self, clock: &C) -> Result<SelectionState, Box<dyn Error>> {
        let mut card = open_selection(clock, self.restore)?;
        if let Some(at) = self.at {
            card.set_date(at.year(), at.month(), at.day())?;
            card.set_time(at.hour(), at.minute())?;
        }
        if let Some((year, month, day)) = self.date {
            card.set_date(year, month, day)?;
        }
        if let Some((hour, minute)) = self.time {
            card.set_time(hour, minute)?;
        }
        Ok(card)
    }
}
