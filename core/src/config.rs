// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use chrono::Weekday;

/// The name of the application.
pub const APP_NAME: &str = "meetsel";

/// Largest minute increment the time picker accepts.
pub const MAX_MINUTE_STEP: u32 = 30;

/// Picker preferences of the meeting screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    /// Show the time picker as a 24-hour dial. The card labels are always 12-hour.
    #[serde(default)]
    pub is_24_hour: bool,

    /// Minute increment of the time picker.
    #[serde(default = "default_minute_step")]
    pub minute_step: u32,

    /// First column of the date picker grid.
    #[serde(default)]
    pub week_start: WeekStart,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            is_24_hour: false,
            minute_step: default_minute_step(),
            week_start: WeekStart::default(),
        }
    }
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), ConfigError> {
        if !(1..=MAX_MINUTE_STEP).contains(&self.minute_step) {
            return Err(ConfigError::MinuteStep(self.minute_step));
        }
        Ok(())
    }
}

const fn default_minute_step() -> u32 {
    1
}

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("minute_step must be between 1 and 30, got {0}")]
    MinuteStep(u32),
}

/// The weekday a date picker row starts with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    Monday,
    #[default]
    Sunday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Sunday => Weekday::Sun,
        }
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekStart::Monday => write!(f, "monday"),
            WeekStart::Sunday => write!(f, "sunday"),
        }
    }
}
