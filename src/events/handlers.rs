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

use tracing::{debug, warn};

use crate::{
    App,
    components::{DetailView, Presentation},
    events::AppEvent,
    model::{Artwork, Category, FetchToken, SearchResult},
    net::FetchError,
    util::open::open_url,
};

pub(super) const SEARCH_ERROR: &str = "There was an error reading from the iTunes Store. Please try again.";

pub(super) fn handle_new_search_query(app: &mut App, query: String, category: Category) {
    app.status = None;
    app.config.default_category = category;

    let event_tx = app.event_tx.clone();
    app.search.perform_search(
        &query,
        category,
        Box::new(move |success| {
            if event_tx.send(AppEvent::SearchFinished(success)).is_err() {
                debug!("event loop stopped before search finished");
            }
        }),
    );

    app.search_view.reload(app.search.state());
    app.detail = None;
}

pub(super) fn handle_search_settled(app: &mut App, token: FetchToken, outcome: Result<Vec<SearchResult>, FetchError>) {
    if app.search.settle(token, outcome) {
        app.search_view.reload(app.search.state());
        follow_selection(app);
    }
}

pub(super) fn handle_search_finished(app: &mut App, success: bool) {
    if !success {
        app.error_popup = Some(String::from(SEARCH_ERROR));
    }
}

pub(super) fn handle_artwork_settled(app: &mut App, token: FetchToken, outcome: Result<Artwork, FetchError>) {
    if let Some(detail) = &mut app.detail {
        if detail.complete_artwork(token, outcome.clone()) {
            return;
        }
    }

    if !app.search_view.result_table.complete_artwork(token, outcome) {
        debug!(%token, "dropping stale artwork");
    }
}

pub(super) fn handle_selection_changed(app: &mut App, index: usize) {
    debug!(index, "selection changed");
    follow_selection(app);
}

pub(super) fn handle_show_detail(app: &mut App, index: usize) {
    if app.is_wide() {
        return;
    }

    if let Some(result) = app.search.results().get(index) {
        app.detail = Some(DetailView::new(app.task_tx.clone(), result.clone(), Presentation::Popup));
    }
}

pub(super) fn handle_close_detail(app: &mut App) {
    if app
        .detail
        .as_ref()
        .is_some_and(|d| d.presentation() == Presentation::Popup)
    {
        app.detail = None;
    }
}

pub(super) fn handle_open_in_store(app: &mut App, url: String) {
    if url.is_empty() {
        app.status = Some(String::from("No store link for this item"));
        return;
    }

    if let Err(e) = open_url(&url) {
        handle_error(app, format!("Failed to open store link: {e}"));
    }
}

pub(super) fn handle_resize(app: &mut App, width: u16) {
    app.width = width;

    if app.is_wide() {
        if let Some(detail) = &mut app.detail {
            detail.set_presentation(Presentation::Pane);
        }
        follow_selection(app);
    } else if app
        .detail
        .as_ref()
        .is_some_and(|d| d.presentation() == Presentation::Pane)
    {
        app.detail = None;
    }
}

pub(super) fn handle_error(app: &mut App, message: String) {
    warn!(%message, "application error");
    app.status = Some(message);
}

pub(super) fn handle_tick(app: &mut App) {
    app.ticks = app.ticks.wrapping_add(1);
}

/// Keeps the detail pane on the selected result, on wide terminals only.
fn follow_selection(app: &mut App) {
    if !app.is_wide() {
        return;
    }

    let selected = app
        .search_view
        .selected()
        .and_then(|index| app.search.results().get(index))
        .cloned();

    let Some(result) = selected else {
        app.detail = None;
        return;
    };

    if let Some(detail) = &mut app.detail {
        detail.show(result);
    } else {
        app.detail = Some(DetailView::new(app.task_tx.clone(), result, Presentation::Pane));
    }
}
