// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use chrono::Timelike;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::meeting_store::MeetingStore;

pub const WIDTH: u16 = 24;
pub const HEIGHT: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Hour,
    Minute,
    Period,
}

/// Hour, minute and AM/PM fields of the time dialog. While open it takes every key.
#[derive(Debug)]
pub struct TimePicker {
    hour: u32,
    minute: u32,
    field: Field,
}

impl TimePicker {
    pub fn new() -> Self {
        Self {
            hour: 0,
            minute: 0,
            field: Field::Hour,
        }
    }

    fn fields(is_24_hour: bool) -> &'static [Field] {
        match is_24_hour {
            true => &[Field::Hour, Field::Minute],
            false => &[Field::Hour, Field::Minute, Field::Period],
        }
    }

    fn move_field(&mut self, is_24_hour: bool, forward: bool) {
        let fields = Self::fields(is_24_hour);
        let index = fields.iter().position(|f| *f == self.field).unwrap_or(0);
        let len = fields.len();
        let index = match forward {
            true => (index + 1) % len,
            false => (index + len - 1) % len,
        };
        self.field = fields[index];
    }

    fn adjust(&mut self, is_24_hour: bool, minute_step: u32, up: bool) {
        match self.field {
            Field::Hour if is_24_hour => {
                self.hour = match up {
                    true => (self.hour + 1) % 24,
                    false => (self.hour + 23) % 24,
                }
            }
            Field::Hour => {
                // stay within the current half of the day
                let offset = self.hour - self.hour % 12;
                let hour = match up {
                    true => (self.hour % 12 + 1) % 12,
                    false => (self.hour % 12 + 11) % 12,
                };
                self.hour = offset + hour;
            }
            Field::Minute => self.minute = step_minute(self.minute, minute_step, up),
            Field::Period => self.hour = (self.hour + 12) % 24,
        }
    }

    fn spans(&self, is_24_hour: bool) -> Vec<Span<'static>> {
        let style = |field: Field| match self.field == field {
            true => Style::new().reversed().bold(),
            false => Style::new(),
        };

        let hour = match is_24_hour {
            true => self.hour,
            false if self.hour % 12 == 0 => 12,
            false => self.hour % 12,
        };

        let mut spans = vec![
            Span::styled(format!("{hour:02}"), style(Field::Hour)),
            Span::raw(" : "),
            Span::styled(format!("{:02}", self.minute), style(Field::Minute)),
        ];
        if !is_24_hour {
            let period = if self.hour < 12 { "AM" } else { "PM" };
            spans.push(Span::raw("  "));
            spans.push(Span::styled(period, style(Field::Period)));
        }
        spans
    }
}

impl Component<MeetingStore> for TimePicker {
    fn render(&self, store: &RefCell<MeetingStore>, area: Rect, buf: &mut Buffer) {
        let is_24_hour = store.borrow().config.is_24_hour;
        let block = Block::bordered()
            .border_set(border::ROUNDED)
            .title(Line::from(" Select time ".bold()).centered())
            .blue();

        Clear.render(area, buf);
        let inner = block.inner(area);
        block.render(area, buf);

        let [_, row, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(inner);
        Paragraph::new(Line::from(self.spans(is_24_hour)))
            .white()
            .centered()
            .render(row, buf);
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<MeetingStore>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let config = store.borrow().config;
        match event.code {
            KeyCode::Left | KeyCode::BackTab => self.move_field(config.is_24_hour, false),
            KeyCode::Right | KeyCode::Tab => self.move_field(config.is_24_hour, true),
            KeyCode::Up => self.adjust(config.is_24_hour, config.minute_step, true),
            KeyCode::Down => self.adjust(config.is_24_hour, config.minute_step, false),
            KeyCode::Enter => {
                let action = Action::ConfirmTime {
                    hour: self.hour,
                    minute: self.minute,
                };
                dispatcher.dispatch(&action);
            }
            KeyCode::Esc => dispatcher.dispatch(&Action::DismissTimePicker),
            _ => {}
        };
        Some(Message::Handled)
    }

    fn activate(&mut self, _dispatcher: &mut Dispatcher, store: &RefCell<MeetingStore>) {
        let selected = store.borrow().selection.selected();
        self.hour = selected.hour();
        self.minute = selected.minute();
        self.field = Field::Hour;
    }
}

/// The next multiple of `step` above `minute`, or below it when going down, wrapping
/// within the hour.
fn step_minute(minute: u32, step: u32, up: bool) -> u32 {
    let step = step.max(1);
    match up {
        true => match (minute / step + 1) * step {
            next if next >= 60 => 0,
            next => next,
        },
        false if minute % step != 0 => minute - minute % step,
        false if minute == 0 => 59 / step * step,
        false => minute - step,
    }
}
