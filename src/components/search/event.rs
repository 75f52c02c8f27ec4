// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Event routing for the search view.
//!
//! While the search box has focus every key goes to the text input. Otherwise
//! keys drive the results table, and table actions are forwarded to the event
//! loop as application events.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::{Focus, ResultTableAction, SearchView},
    events::{AppEvent, AppEventProcessor},
    model::Category,
};

impl AppEventProcessor for SearchView {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        let Event::Key(key_event) = event else {
            return Ok(());
        };

        match key_event.code {
            KeyCode::Tab => {
                self.category = self.category.next();
                return self.submit(event_tx);
            }
            KeyCode::BackTab => {
                self.category = self.category.previous();
                return self.submit(event_tx);
            }
            _ => {}
        }

        match self.focus {
            Focus::SearchInput => match key_event.code {
                KeyCode::Enter => {
                    self.focus = Focus::Results;
                    self.submit(event_tx)?;
                }
                KeyCode::Esc => self.focus = Focus::Results,
                _ => {
                    self.input.handle_event(&event);
                }
            },

            Focus::Results => {
                match key_event.code {
                    KeyCode::Char('/') => {
                        self.focus = Focus::SearchInput;
                        return Ok(());
                    }
                    KeyCode::Char(c @ '1'..='9') => {
                        let index = c as usize - '1' as usize;
                        if let Some(category) = Category::from_index(index) {
                            if category != self.category {
                                self.category = category;
                                self.submit(event_tx)?;
                            }
                        }
                        return Ok(());
                    }
                    _ => {}
                }

                match self.result_table.process_event(&event) {
                    Some(ResultTableAction::SelectionChanged(index)) => {
                        event_tx.send(AppEvent::SelectionChanged(index))?;
                    }
                    Some(ResultTableAction::Activate(index)) => {
                        event_tx.send(AppEvent::ShowDetail(index))?;
                    }
                    None => {}
                }
            }
        }

        Ok(())
    }
}

impl SearchView {
    fn submit(&self, event_tx: &Sender<AppEvent>) -> Result<()> {
        event_tx.send(AppEvent::NewSearchQuery(self.query().to_string(), self.category))?;
        Ok(())
    }
}
