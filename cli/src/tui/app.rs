// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, error::Error, rc::Rc};

use meetsel_core::{Config, SelectionState};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::layout::Rect;

use crate::tui::component::{Component, Message};
use crate::tui::component_page::SinglePage;
use crate::tui::dispatcher::Dispatcher;
use crate::tui::meeting_card::{MeetingCard, TITLE, card_instructions};
use crate::tui::meeting_store::MeetingStore;

/// Shows the meeting card until the user submits or leaves it. Returns the submitted
/// selection, or `None` when the user left without submitting.
pub fn pick_meeting_time(
    selection: SelectionState,
    config: Config,
) -> Result<Option<SelectionState>, Box<dyn Error>> {
    let store = MeetingStore::new(selection, config);
    let store = run_meeting_card(store)?;
    match store.submit {
        true => Ok(Some(store.selection)),
        false => Ok(None),
    }
}

fn run_meeting_card(store: MeetingStore) -> Result<MeetingStore, Box<dyn Error>> {
    let store = Rc::new(RefCell::new(store));

    let mut terminal = ratatui::init();
    let result = {
        let mut dispatcher = Dispatcher::new();
        MeetingStore::register_to(store.clone(), &mut dispatcher);
        let mut app = App::new(dispatcher, &store);

        loop {
            if let Err(e) = app.draw(&store, &mut terminal) {
                break Err(e);
            }

            match app.read_event(&store) {
                Err(e) => break Err(e),
                Ok(Some(Message::Exit)) => break Ok(()),
                Ok(_) => {} // Continue the loop to render the next frame
            }
        }
    }; // release dispatcher and view here to avoid borrow conflicts
    ratatui::restore();
    result?;

    let owned_store = Rc::try_unwrap(store)
        .map_err(|_| "Store still has references")?
        .into_inner();
    Ok(owned_store)
}

struct App {
    dispatcher: Dispatcher,
    page: SinglePage<MeetingStore, MeetingCard>,
    area: Rect,
}

impl App {
    fn new(mut dispatcher: Dispatcher, store: &RefCell<MeetingStore>) -> Self {
        let mut page = SinglePage::new(TITLE.to_owned(), MeetingCard::new(), card_instructions);
        page.activate(&mut dispatcher, store);
        Self {
            dispatcher,
            page,
            area: Rect::default(),
        }
    }

    fn draw(
        &mut self,
        store: &RefCell<MeetingStore>,
        terminal: &mut DefaultTerminal,
    ) -> Result<(), Box<dyn Error>> {
        terminal.draw(|frame| {
            self.area = frame.area();
            self.page.render(store, frame.area(), frame.buffer_mut());
        })?;
        Ok(())
    }

    fn read_event(
        &mut self,
        store: &RefCell<MeetingStore>,
    ) -> Result<Option<Message>, Box<dyn Error>> {
        match event::read()? {
            Event::Key(e) if e.kind == KeyEventKind::Press => {
                Ok(self.page.on_key(&mut self.dispatcher, store, self.area, e))
            }
            _ => Ok(None),
        }
    }
}
