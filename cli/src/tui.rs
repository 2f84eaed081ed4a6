// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod app;
mod component;
mod component_page;
mod date_picker;
mod dispatcher;
mod meeting_card;
mod meeting_store;
mod time_picker;

pub use app::pick_meeting_time;
