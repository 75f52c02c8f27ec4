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

//! Application event handling.
//!
//! This module acts as the central hub for the "Controller" logic of the
//! application. Keyboard input, ticks and fetch completions from the task
//! worker all arrive as [`AppEvent`]s on one channel, and are applied to the
//! [`App`] state on the event loop thread, one at a time.
//!
//! # Architecture
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    `mpsc` channel.
//! 2. **Process**: The [`process_events`] function updates the [`App`] state
//!    and hands fetch requests to the task worker.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.
//!
//! Since only this thread touches the search state, a completion is checked
//! against the current fetch token and applied without any locking.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::process_key_event;

use std::{io::Stdout, sync::mpsc::Sender};

use anyhow::Result;
use crossterm::event::{Event, KeyEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    model::{Artwork, Category, FetchToken, SearchResult},
    net::FetchError,
    render::draw,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Resize(u16),

    NewSearchQuery(String, Category),
    SearchSettled(FetchToken, Result<Vec<SearchResult>, FetchError>),
    SearchFinished(bool),

    ArtworkSettled(FetchToken, Result<Artwork, FetchError>),

    SelectionChanged(usize),
    ShowDetail(usize),
    CloseDetail,
    OpenInStore(String),

    Tick,

    ExitApplication,

    Error(String),
}

pub(crate) trait AppEventProcessor {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()>;
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::Resize(width) => handle_resize(app, width),
            AppEvent::NewSearchQuery(query, category) => handle_new_search_query(app, query, category),
            AppEvent::SearchSettled(token, outcome) => handle_search_settled(app, token, outcome),
            AppEvent::SearchFinished(success) => handle_search_finished(app, success),
            AppEvent::ArtworkSettled(token, outcome) => handle_artwork_settled(app, token, outcome),
            AppEvent::SelectionChanged(index) => handle_selection_changed(app, index),
            AppEvent::ShowDetail(index) => handle_show_detail(app, index),
            AppEvent::CloseDetail => handle_close_detail(app),
            AppEvent::OpenInStore(url) => handle_open_in_store(app, url),
            AppEvent::Error(message) => handle_error(app, message),
            AppEvent::Tick => handle_tick(app),
            AppEvent::ExitApplication => {}
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}
