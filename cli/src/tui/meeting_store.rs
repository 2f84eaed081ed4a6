// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use meetsel_core::{Config, SelectionError, SelectionState};

use crate::tui::dispatcher::{Action, Dispatcher};

#[derive(Debug)]
pub struct MeetingStore {
    pub selection: SelectionState,
    pub config: Config,

    pub show_time_picker: bool,
    pub show_date_picker: bool,

    /// The last rejected gesture, cleared by the next accepted one
    pub error: Option<SelectionError>,

    /// Whether the user submit the selection
    pub submit: bool,
}

impl MeetingStore {
    pub fn new(selection: SelectionState, config: Config) -> Self {
        Self {
            selection,
            config,
            show_time_picker: false,
            show_date_picker: false,
            error: None,
            submit: false,
        }
    }

    pub fn reduce(&mut self, action: &Action) {
        match *action {
            Action::OpenTimePicker => {
                self.show_time_picker = true;
                self.show_date_picker = false;
            }
            Action::OpenDatePicker => {
                self.show_date_picker = true;
                self.show_time_picker = false;
            }
            Action::ConfirmTime { hour, minute } => {
                self.show_time_picker = false;
                let result = self.selection.set_time(hour, minute);
                self.record(result);
            }
            Action::ConfirmDate(millis) => {
                self.show_date_picker = false;
                let result = self.selection.set_date_from_picker(millis);
                self.record(result);
            }
            Action::DismissTimePicker => self.show_time_picker = false,
            Action::DismissDatePicker => self.show_date_picker = false,
            Action::Submit => self.submit = true,
        }
    }

    fn record(&mut self, result: Result<SelectionState, SelectionError>) {
        match result {
            Ok(_) => self.error = None,
            Err(e) => {
                tracing::warn!(err = %e, "selection rejected");
                self.error = Some(e);
            }
        }
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| {
            that.borrow_mut().reduce(action)
        }));
        dispatcher.register(callback);
    }
}
