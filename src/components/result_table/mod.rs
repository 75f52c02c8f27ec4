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

//! Search results table widget and state management.
//!
//! This module maps the [`SearchState`] onto table rows. Every state has a
//! fixed row layout: nothing before the first search, a single placeholder row
//! while loading or when nothing was found, and one row per result otherwise.
//! Only result rows can be selected.
//!
//! Each visible row owns an artwork slot. When scrolling or a new result set
//! puts a different item on a row, the row's slot is rebound, cancelling the
//! download for the item that scrolled away.

mod event;
mod render;

use ratatui::widgets::TableState;

use crate::{
    model::{
        Artwork, FetchToken, SearchResult,
        artwork::{ArtworkSlots, ArtworkStatus, ImageFetcher},
        search::SearchState,
    },
    net::FetchError,
};

/// Actions the table reports to its owner.
#[derive(Debug, PartialEq)]
pub(crate) enum ResultTableAction {
    SelectionChanged(usize),
    Activate(usize),
}

/// Number of rows shown for `state`.
pub(crate) fn row_count(state: &SearchState) -> usize {
    match state {
        SearchState::NotSearched => 0,
        SearchState::Loading { .. } => 1,
        SearchState::NoResults => 1,
        SearchState::Results(results) => results.len(),
    }
}

/// Whether rows in `state` are selectable.
pub(crate) fn is_selectable(state: &SearchState) -> bool {
    match state {
        SearchState::NotSearched | SearchState::Loading { .. } | SearchState::NoResults => false,
        SearchState::Results(_) => true,
    }
}

pub(crate) struct ResultTable<F: ImageFetcher> {
    pub(crate) table_state: TableState,
    artwork: ArtworkSlots<F>,
    row_count: usize,
    selectable: bool,
    visible_rows: usize,
}

impl<F: ImageFetcher> ResultTable<F> {
    pub(crate) fn new(fetcher: F) -> Self {
        Self {
            table_state: TableState::new(),
            artwork: ArtworkSlots::new(fetcher),
            row_count: 0,
            selectable: false,
            visible_rows: 0,
        }
    }

    /// Re-reads the row layout after a state transition.
    ///
    /// Selection moves to the first row when there are results, and every
    /// artwork slot is released since its row no longer shows the same item.
    pub(crate) fn reload(&mut self, state: &SearchState) {
        self.row_count = row_count(state);
        self.selectable = is_selectable(state);
        self.artwork.clear();

        *self.table_state.offset_mut() = 0;
        self.table_state
            .select((self.selectable && self.row_count > 0).then_some(0));
    }

    pub(crate) fn selected(&self) -> Option<usize> {
        if self.selectable {
            self.table_state.selected()
        } else {
            None
        }
    }

    /// The artwork shown on the table row `index`, if it is on screen.
    pub(crate) fn artwork_status(&self, index: usize) -> &ArtworkStatus {
        let slot = index.wrapping_sub(self.table_state.offset());
        self.artwork.status(slot)
    }

    pub(crate) fn complete_artwork(&mut self, token: FetchToken, outcome: Result<Artwork, FetchError>) -> bool {
        self.artwork.complete(token, outcome)
    }

    /// Scrolls so the selection is within `height` rows, and binds one artwork
    /// slot per visible result.
    pub(crate) fn bind_visible(&mut self, results: &[SearchResult], height: usize) {
        let mut offset = self.table_state.offset().min(results.len().saturating_sub(1));
        if let Some(selected) = self.table_state.selected() {
            if selected < offset {
                offset = selected;
            } else if height > 0 && selected >= offset + height {
                offset = selected + 1 - height;
            }
        }
        *self.table_state.offset_mut() = offset;
        self.visible_rows = height;

        let visible = results.iter().skip(offset).take(height);
        let mut bound = 0;
        for (slot, result) in visible.enumerate() {
            self.artwork.bind(slot, &result.artwork_small_url);
            bound += 1;
        }
        self.artwork.truncate(bound);
    }

    fn select(&mut self, index: usize) -> Option<ResultTableAction> {
        if !self.selectable || self.row_count == 0 {
            return None;
        }
        let index = index.min(self.row_count - 1);
        if self.table_state.selected() == Some(index) {
            return None;
        }
        self.table_state.select(Some(index));
        Some(ResultTableAction::SelectionChanged(index))
    }

    fn goto_next(&mut self) -> Option<ResultTableAction> {
        let len = self.row_count;
        if len == 0 {
            return None;
        }
        let i = match self.table_state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.select(i)
    }

    fn goto_previous(&mut self) -> Option<ResultTableAction> {
        let len = self.row_count;
        if len == 0 {
            return None;
        }
        let i = match self.table_state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        self.select(i)
    }

    fn goto_first(&mut self) -> Option<ResultTableAction> {
        self.select(0)
    }

    fn goto_last(&mut self) -> Option<ResultTableAction> {
        self.select(self.row_count.saturating_sub(1))
    }

    fn page_forward(&mut self, page: usize) -> Option<ResultTableAction> {
        let current = self.table_state.selected().unwrap_or(0);
        self.select(current.saturating_add(page))
    }

    fn page_back(&mut self, page: usize) -> Option<ResultTableAction> {
        let current = self.table_state.selected().unwrap_or(0);
        self.select(current.saturating_sub(page))
    }
}
