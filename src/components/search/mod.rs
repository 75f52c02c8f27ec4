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

//! Search view.
//!
//! This module coordinates the search box, the category tabs and the
//! [`ResultTable`]. Submitting the search box or switching category turns
//! into an [`AppEvent::NewSearchQuery`](crate::events::AppEvent) for the event
//! loop, which owns the search state.

mod event;
mod render;

use tui_input::Input;

use crate::{
    components::ResultTable,
    model::{Category, search::SearchState},
    tasks::TaskSender,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Focus {
    SearchInput,
    Results,
}

pub(crate) struct SearchView {
    pub(crate) input: Input,
    pub(crate) category: Category,
    pub(crate) focus: Focus,
    pub(crate) result_table: ResultTable<TaskSender>,
}

impl SearchView {
    pub(crate) fn new(category: Category, task_tx: TaskSender) -> Self {
        Self {
            input: Input::default(),
            category,
            focus: Focus::SearchInput,
            result_table: ResultTable::new(task_tx),
        }
    }

    pub(crate) fn query(&self) -> &str {
        self.input.value()
    }

    /// Resets the table after the search state changed.
    pub(crate) fn reload(&mut self, state: &SearchState) {
        self.result_table.reload(state);
    }

    pub(crate) fn selected(&self) -> Option<usize> {
        self.result_table.selected()
    }
}
