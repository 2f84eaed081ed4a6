// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

type Callback = Rc<RefCell<dyn FnMut(&Action)>>;

pub struct Dispatcher {
    subscribers: Vec<Callback>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    pub fn register(&mut self, callback: Callback) {
        self.subscribers.push(callback);
    }

    pub fn dispatch(&mut self, action: &Action) {
        tracing::trace!(?action, "dispatching");
        for sub in &self.subscribers {
            (sub.borrow_mut())(action);
        }
    }
}

/// User gestures on the meeting card and its pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    OpenTimePicker,
    OpenDatePicker,
    ConfirmTime { hour: u32, minute: u32 },
    /// Epoch milliseconds at UTC midnight of the chosen day.
    ConfirmDate(Option<i64>),
    DismissTimePicker,
    DismissDatePicker,
    Submit,
}
