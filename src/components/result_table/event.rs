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

//! Input handling for the results table.
//!
//! This module maps raw terminal keyboard events to table navigation and
//! reports the resulting selection changes to the owner.

use crossterm::event::{Event, KeyCode, KeyModifiers};

use crate::{
    components::{ResultTable, ResultTableAction},
    model::artwork::ImageFetcher,
};

impl<F: ImageFetcher> ResultTable<F> {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<ResultTableAction> {
        let page = self.visible_rows.max(1);

        match event {
            Event::Key(key_event) => match (key_event.code, key_event.modifiers) {
                (KeyCode::Char('j'), _) | (KeyCode::Down, _) => self.goto_next(),
                (KeyCode::Char('k'), _) | (KeyCode::Up, _) => self.goto_previous(),
                (KeyCode::Char('g'), _) | (KeyCode::Home, _) => self.goto_first(),
                (KeyCode::Char('G'), _) | (KeyCode::End, _) => self.goto_last(),

                (KeyCode::Char('f'), KeyModifiers::CONTROL) | (KeyCode::PageDown, _) => self.page_forward(page),
                (KeyCode::Char('b'), KeyModifiers::CONTROL) | (KeyCode::PageUp, _) => self.page_back(page),
                (KeyCode::Char('d'), KeyModifiers::CONTROL) => self.page_forward(page / 2),
                (KeyCode::Char('u'), KeyModifiers::CONTROL) => self.page_back(page / 2),

                (KeyCode::Enter, _) => self.selected().map(ResultTableAction::Activate),

                _ => None,
            },

            _ => None,
        }
    }
}
