// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, Message};
use crate::tui::component_page::{centered, instructions};
use crate::tui::date_picker::{self, DatePicker};
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::meeting_store::MeetingStore;
use crate::tui::time_picker::{self, TimePicker};

pub const TITLE: &str = "Meeting Time Selection";

const GLYPH_CLOCK: &str = "🕒";
const GLYPH_CALENDAR: &str = "📅";
const GLYPH_DROPDOWN: &str = "▾";

const CARD_WIDTH: u16 = 40;
const CARD_HEIGHT: u16 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Time,
    Date,
}

/// The time button, the date button and the confirmation label, with the two picker
/// dialogs drawn over them when open.
pub struct MeetingCard {
    focus: Focus,
    time_picker: TimePicker,
    date_picker: DatePicker,
}

impl MeetingCard {
    pub fn new() -> Self {
        Self {
            focus: Focus::Time,
            time_picker: TimePicker::new(),
            date_picker: DatePicker::new(),
        }
    }

    fn open_focused(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<MeetingStore>) {
        match self.focus {
            Focus::Time => {
                self.time_picker.activate(dispatcher, store);
                dispatcher.dispatch(&Action::OpenTimePicker);
            }
            Focus::Date => {
                self.date_picker.activate(dispatcher, store);
                dispatcher.dispatch(&Action::OpenDatePicker);
            }
        }
    }
}

impl Component<MeetingStore> for MeetingCard {
    fn render(&self, store: &RefCell<MeetingStore>, area: Rect, buf: &mut Buffer) {
        let (time_label, date_label, confirmation, error, show_time, show_date) = {
            let s = store.borrow();
            (
                s.selection.time_button_label(),
                s.selection.date_button_label(),
                s.selection.confirmation_label(),
                s.error.as_ref().map(ToString::to_string),
                s.show_time_picker,
                s.show_date_picker,
            )
        };

        let card = centered(area, CARD_WIDTH, CARD_HEIGHT);
        let [time_area, date_area, _, label_area, error_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(card);

        let time_focused = self.focus == Focus::Time;
        render_button(GLYPH_CLOCK, &time_label, time_focused, time_area, buf);
        render_button(GLYPH_CALENDAR, &date_label, !time_focused, date_area, buf);

        Paragraph::new(confirmation)
            .white()
            .centered()
            .render(label_area, buf);

        if let Some(error) = error {
            Paragraph::new(error).red().centered().render(error_area, buf);
        }

        if show_time {
            let popup = centered(area, time_picker::WIDTH, time_picker::HEIGHT);
            self.time_picker.render(store, popup, buf);
        } else if show_date {
            let popup = centered(area, date_picker::WIDTH, date_picker::HEIGHT);
            self.date_picker.render(store, popup, buf);
        }
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<MeetingStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let (show_time, show_date) = {
            let s = store.borrow();
            (s.show_time_picker, s.show_date_picker)
        };
        if show_time {
            return self.time_picker.on_key(dispatcher, store, area, event);
        } else if show_date {
            return self.date_picker.on_key(dispatcher, store, area, event);
        }

        match event.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Time => Focus::Date,
                    Focus::Date => Focus::Time,
                };
                Some(Message::Handled)
            }
            KeyCode::Enter => {
                self.open_focused(dispatcher, store);
                Some(Message::Handled)
            }
            KeyCode::Char('s') => {
                dispatcher.dispatch(&Action::Submit);
                Some(Message::Exit)
            }
            _ => None,
        }
    }
}

/// Footer hints for whatever currently takes the keys.
pub fn card_instructions(store: &MeetingStore) -> Line<'static> {
    if store.show_time_picker {
        instructions(&[
            ("Adjust", "Up/Down"),
            ("Field", "Left/Right"),
            ("Confirm", "Enter"),
            ("Cancel", "Esc"),
        ])
    } else if store.show_date_picker {
        instructions(&[
            ("Day", "Left/Right"),
            ("Week", "Up/Down"),
            ("Month", "PgUp/PgDn"),
            ("Confirm", "Enter"),
            ("Cancel", "Esc"),
        ])
    } else {
        instructions(&[
            ("Move", "Up/Down"),
            ("Open", "Enter"),
            ("Submit", "s"),
            ("Exit", "Esc"),
        ])
    }
}

fn render_button(glyph: &str, label: &str, focused: bool, area: Rect, buf: &mut Buffer) {
    let text = format!("{glyph} {label} {GLYPH_DROPDOWN}");
    let width = text.width() as u16 + 4; // border 2 + padding 2
    let area = centered(area, width, 3);

    let color = if focused { Color::Blue } else { Color::Gray };
    let block = Block::bordered().border_set(border::ROUNDED).fg(color);
    let inner = block.inner(area);
    block.render(area, buf);

    let text = Paragraph::new(text).centered();
    match focused {
        true => text.bold().render(inner, buf),
        false => text.render(inner, buf),
    }
}
