// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end of the meeting time selector: argument parsing, configuration
//! loading, the interactive picker screen and the card printer.

mod card_formatter;
mod cli;
mod cmd_generate_completion;
mod cmd_pick;
mod cmd_set;
mod config;
mod tui;
mod util;

pub use crate::cli::{Cli, Commands, run};
