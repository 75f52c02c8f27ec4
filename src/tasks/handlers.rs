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

use std::sync::{Arc, mpsc::Sender};

use tracing::debug;

use crate::{
    events::AppEvent,
    model::{FetchToken, search::FetchRequest},
    net::CatalogService,
};

pub(super) async fn search<S: CatalogService>(service: Arc<S>, request: FetchRequest, event_tx: Sender<AppEvent>) {
    let outcome = service.search(&request.query, request.category).await;

    // The event loop may already have quit.
    if event_tx.send(AppEvent::SearchSettled(request.token, outcome)).is_err() {
        debug!(token = %request.token, "search outcome undeliverable");
    }
}

pub(super) async fn fetch_artwork<S: CatalogService>(
    service: Arc<S>,
    token: FetchToken,
    url: String,
    event_tx: Sender<AppEvent>,
) {
    let outcome = service.artwork(&url).await;

    if event_tx.send(AppEvent::ArtworkSettled(token, outcome)).is_err() {
        debug!(%token, "artwork outcome undeliverable");
    }
}
