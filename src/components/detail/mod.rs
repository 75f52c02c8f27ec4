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

//! Detail presentation of a single search result.
//!
//! On wide terminals the detail is a pane beside the results that follows the
//! selection, on narrow ones it is a popup opened on demand. Either way the
//! view owns one artwork slot for the large artwork, and dropping the view
//! cancels that download.

mod render;

use crate::{
    model::{
        Artwork, FetchToken, SearchResult,
        artwork::{ArtworkSlots, ArtworkStatus, ImageFetcher},
    },
    net::FetchError,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Presentation {
    Pane,
    Popup,
}

pub(crate) struct DetailView<F: ImageFetcher> {
    result: SearchResult,
    presentation: Presentation,
    artwork: ArtworkSlots<F>,
}

impl<F: ImageFetcher> DetailView<F> {
    pub(crate) fn new(fetcher: F, result: SearchResult, presentation: Presentation) -> Self {
        let mut artwork = ArtworkSlots::new(fetcher);
        artwork.bind(0, &result.artwork_large_url);

        Self {
            result,
            presentation,
            artwork,
        }
    }

    pub(crate) fn result(&self) -> &SearchResult {
        &self.result
    }

    pub(crate) fn presentation(&self) -> Presentation {
        self.presentation
    }

    pub(crate) fn set_presentation(&mut self, presentation: Presentation) {
        self.presentation = presentation;
    }

    pub(crate) fn artwork(&self) -> &ArtworkStatus {
        self.artwork.status(0)
    }

    /// Switches the view to `result`, fetching its artwork unless it is
    /// already shown.
    pub(crate) fn show(&mut self, result: SearchResult) {
        self.artwork.bind(0, &result.artwork_large_url);
        self.result = result;
    }

    pub(crate) fn complete_artwork(&mut self, token: FetchToken, outcome: Result<Artwork, FetchError>) -> bool {
        self.artwork.complete(token, outcome)
    }
}
