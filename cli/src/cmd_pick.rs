// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{Arg, ArgMatches, Command, arg, value_parser};
use clap_num::number_range;
use meetsel_core::{
    Clock, Config, MAX_MINUTE_STEP, SystemClock, WeekStart, local_timezone_name, save,
};

use crate::card_formatter::CardFormatter;
use crate::tui;
use crate::util::{ArgOutputFormat, ArgRestore, open_selection};

#[derive(Debug, Clone, Copy)]
pub struct CmdPick {
    pub restore: Option<i64>,
    pub is_24_hour: bool,
    pub minute_step: Option<u32>,
    pub week_start: Option<WeekStart>,

    pub output_format: ArgOutputFormat,
}

impl CmdPick {
    pub const NAME: &str = "pick";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Pick the meeting date and time using TUI")
            .arg(ArgRestore::arg())
            .arg(arg!(--"24-hour" "Show the time picker as a 24-hour dial"))
            .arg(arg_minute_step())
            .arg(
                arg!(--"week-start" <WEEKDAY> "First column of the date picker")
                    .value_parser(value_parser!(WeekStart)),
            )
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            restore: ArgRestore::from(matches),
            is_24_hour: matches.get_flag("24-hour"),
            minute_step: matches.get_one("minute-step").copied(),
            week_start: matches.get_one("week-start").copied(),

            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn new() -> Self {
        Self {
            restore: None,
            is_24_hour: false,
            minute_step: None,
            week_start: None,

            output_format: ArgOutputFormat::Table,
        }
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "picking meeting time...");
        let config = self.override_config(*config);

        let clock = SystemClock;
        let card = open_selection(&clock, self.restore)?;
        let Some(card) = tui::pick_meeting_time(card, config)? else {
            tracing::info!("user canceled the meeting selection");
            return Ok(());
        };

        let saved = save(&card, &clock.timezone());
        let formatter =
            CardFormatter::new(local_timezone_name()).with_output_format(self.output_format);
        print!("{}", formatter.format(&card, saved));
        Ok(())
    }

    fn override_config(&self, mut config: Config) -> Config {
        if self.is_24_hour {
            config.is_24_hour = true;
        }
        if let Some(minute_step) = self.minute_step {
            config.minute_step = minute_step;
        }
        if let Some(week_start) = self.week_start {
            config.week_start = week_start;
        }
        config
    }
}

fn arg_minute_step() -> Arg {
    fn from_1_to_max(s: &str) -> Result<u32, String> {
        number_range(s, 1, MAX_MINUTE_STEP)
    }

    arg!(--"minute-step" <MINUTES> "Minute increment of the time picker (1-30)")
        .value_parser(from_1_to_max)
}
