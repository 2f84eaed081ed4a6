// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::{Block, Clear, Paragraph};

use meetsel_core::picker_millis_for_date;

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::meeting_store::MeetingStore;

pub const WIDTH: u16 = 24;
pub const HEIGHT: u16 = 10;

type Week = [Option<NaiveDate>; 7];

/// Month grid of the date dialog. The highlighted day starts at the reference day and is
/// kept between openings.
#[derive(Debug)]
pub struct DatePicker {
    highlighted: Option<NaiveDate>,
}

impl DatePicker {
    pub fn new() -> Self {
        Self { highlighted: None }
    }

    fn highlighted(&self, store: &RefCell<MeetingStore>) -> NaiveDate {
        self.highlighted
            .unwrap_or_else(|| store.borrow().selection.reference_instant().date())
    }

    fn move_to(&mut self, date: Option<NaiveDate>) {
        match date {
            Some(date) => self.highlighted = Some(date),
            None => tracing::debug!("date out of range, keeping highlight"),
        }
    }

    fn lines(&self, store: &RefCell<MeetingStore>) -> Vec<Line<'static>> {
        let highlighted = self.highlighted(store);
        let store = store.borrow();
        let reference = store.selection.reference_instant().date();
        let week_start = store.config.week_start.weekday();

        let header = weekdays(week_start)
            .iter()
            .map(|wd| wd.to_string()[..2].to_string())
            .collect::<Vec<_>>()
            .join(" ");

        let mut lines = vec![Line::from(header.dark_gray())];
        for week in month_grid(highlighted, week_start) {
            let mut spans = Vec::with_capacity(13);
            for (i, day) in week.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(match day {
                    Some(day) => {
                        let mut style = Style::new();
                        if *day == reference {
                            style = style.underlined();
                        }
                        if *day == highlighted {
                            style = style.reversed().bold();
                        }
                        Span::styled(format!("{:>2}", day.day()), style)
                    }
                    None => Span::raw("  "),
                });
            }
            lines.push(Line::from(spans));
        }
        lines
    }
}

impl Component<MeetingStore> for DatePicker {
    fn render(&self, store: &RefCell<MeetingStore>, area: Rect, buf: &mut Buffer) {
        let title = self.highlighted(store).format(" %B %Y ").to_string();
        let block = Block::bordered()
            .border_set(border::ROUNDED)
            .title(Line::from(title.bold()).centered())
            .blue();

        Clear.render(area, buf);
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(self.lines(store))
            .white()
            .centered()
            .render(inner, buf);
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<MeetingStore>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let day = self.highlighted(store);
        match event.code {
            KeyCode::Left => self.move_to(day.checked_sub_days(Days::new(1))),
            KeyCode::Right => self.move_to(day.checked_add_days(Days::new(1))),
            KeyCode::Up => self.move_to(day.checked_sub_days(Days::new(7))),
            KeyCode::Down => self.move_to(day.checked_add_days(Days::new(7))),
            KeyCode::PageUp => self.move_to(day.checked_sub_months(Months::new(1))),
            KeyCode::PageDown => self.move_to(day.checked_add_months(Months::new(1))),
            KeyCode::Home => {
                let reference = store.borrow().selection.reference_instant().date();
                self.move_to(Some(reference));
            }
            KeyCode::Enter => {
                let millis = picker_millis_for_date(day);
                dispatcher.dispatch(&Action::ConfirmDate(Some(millis)));
            }
            KeyCode::Esc => dispatcher.dispatch(&Action::DismissDatePicker),
            _ => {}
        };
        Some(Message::Handled)
    }

    fn activate(&mut self, _dispatcher: &mut Dispatcher, store: &RefCell<MeetingStore>) {
        if self.highlighted.is_none() {
            self.highlighted = Some(store.borrow().selection.reference_instant().date());
        }
    }
}

/// The weeks of the month containing `date`, each starting on `week_start`. Days of the
/// neighbouring months are left empty.
pub fn month_grid(date: NaiveDate, week_start: Weekday) -> Vec<Week> {
    let Some(first) = date.with_day(1) else {
        return Vec::new();
    };

    let mut weeks = Vec::with_capacity(6);
    let mut week: Week = [None; 7];
    let mut col = days_between(week_start, first.weekday());
    let mut day = Some(first);
    while let Some(d) = day.filter(|d| d.month() == first.month()) {
        week[col] = Some(d);
        col += 1;
        if col == 7 {
            weeks.push(week);
            week = [None; 7];
            col = 0;
        }
        day = d.succ_opt();
    }
    if col > 0 {
        weeks.push(week);
    }
    weeks
}

fn weekdays(week_start: Weekday) -> [Weekday; 7] {
    let mut days = [week_start; 7];
    for i in 1..7 {
        days[i] = days[i - 1].succ();
    }
    days
}

fn days_between(from: Weekday, to: Weekday) -> usize {
    ((to.num_days_from_monday() + 7 - from.num_days_from_monday()) % 7) as usize
}

#[cfg(test)]
mod tests {
    use meetsel_core::{Config, WeekStart};

    use super::*;
    use crate::tui::meeting_store::tests::{reference, store, store_with};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn press(
        picker: &mut DatePicker,
        dispatcher: &mut Dispatcher,
        store: &RefCell<MeetingStore>,
        keys: &[KeyCode],
    ) {
        for key in keys {
            let msg = picker.on_key(dispatcher, store, Rect::default(), KeyEvent::from(*key));
            assert_eq!(msg, Some(Message::Handled));
        }
    }

    #[test]
    fn grid_starts_on_sunday() {
        // March 2024 starts on a Friday
        let weeks = month_grid(date(2024, 3, 15), Weekday::Sun);
        assert_eq!(weeks.len(), 6);
        assert_eq!(weeks[0][..5], [None; 5]);
        assert_eq!(weeks[0][5], Some(date(2024, 3, 1)));
        assert_eq!(weeks[5][0], Some(date(2024, 3, 31)));
        assert_eq!(weeks[5][1], None);
    }

    #[test]
    fn grid_starts_on_monday() {
        let weeks = month_grid(date(2024, 3, 15), Weekday::Mon);
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0][4], Some(date(2024, 3, 1)));
        assert_eq!(weeks[4][6], Some(date(2024, 3, 31)));
    }

    #[test]
    fn grid_of_aligned_february() {
        let weeks = month_grid(date(2015, 2, 10), Weekday::Sun);
        assert_eq!(weeks.len(), 4);
        assert_eq!(weeks[0][0], Some(date(2015, 2, 1)));
        assert_eq!(weeks[3][6], Some(date(2015, 2, 28)));
    }

    #[test]
    fn lists_weekdays_from_start() {
        assert_eq!(weekdays(Weekday::Sun)[0], Weekday::Sun);
        assert_eq!(weekdays(Weekday::Sun)[6], Weekday::Sat);
        assert_eq!(weekdays(Weekday::Mon)[6], Weekday::Sun);
    }

    #[test]
    fn seeds_with_reference_day() {
        let (store, mut dispatcher) = store();
        let mut picker = DatePicker::new();
        picker.activate(&mut dispatcher, &store);
        assert_eq!(picker.highlighted, Some(reference().date()));
    }

    #[test]
    fn moves_and_confirms_day() {
        let (store, mut dispatcher) = store();
        dispatcher.dispatch(&Action::OpenDatePicker);
        let mut picker = DatePicker::new();
        picker.activate(&mut dispatcher, &store);

        use KeyCode::*;
        press(&mut picker, &mut dispatcher, &store, &[Down, Left, Left, Left]);
        assert_eq!(picker.highlighted, Some(date(2024, 3, 5)));
        press(&mut picker, &mut dispatcher, &store, &[Enter]);

        let store = store.borrow();
        assert!(!store.show_date_picker);
        assert_eq!(store.selection.date_button_label(), "03/05/24");
        assert_eq!(store.selection.format_short_time(), "10:30 AM");
    }

    #[test]
    fn month_keys_clamp_day() {
        let (store, mut dispatcher) = store();
        let mut picker = DatePicker::new();
        picker.highlighted = Some(date(2024, 1, 31));

        press(&mut picker, &mut dispatcher, &store, &[KeyCode::PageDown]);
        assert_eq!(picker.highlighted, Some(date(2024, 2, 29)));
        press(&mut picker, &mut dispatcher, &store, &[KeyCode::PageUp]);
        assert_eq!(picker.highlighted, Some(date(2024, 1, 29)));
        press(&mut picker, &mut dispatcher, &store, &[KeyCode::Home]);
        assert_eq!(picker.highlighted, Some(reference().date()));
    }

    #[test]
    fn escape_dismisses_and_keeps_highlight() {
        let (store, mut dispatcher) = store();
        dispatcher.dispatch(&Action::OpenDatePicker);
        let mut picker = DatePicker::new();
        picker.activate(&mut dispatcher, &store);

        use KeyCode::*;
        press(&mut picker, &mut dispatcher, &store, &[Right, Esc]);
        assert!(!store.borrow().show_date_picker);
        assert_eq!(store.borrow().selection.selected(), reference());

        picker.activate(&mut dispatcher, &store);
        assert_eq!(picker.highlighted, Some(date(2024, 3, 2)));
    }

    #[test]
    fn renders_header_for_week_start() {
        let config = Config {
            week_start: WeekStart::Monday,
            ..Config::default()
        };
        let (store, mut dispatcher) = store_with(config);
        let mut picker = DatePicker::new();
        picker.activate(&mut dispatcher, &store);

        let lines = picker.lines(&store);
        assert_eq!(lines[0].to_string(), "Mo Tu We Th Fr Sa Su");
        assert_eq!(lines[1].to_string(), "             1  2  3");
    }
}
