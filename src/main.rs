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

//! # Store Search TUI.
//!
//! A terminal client for searching the iTunes Store catalog.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background fetch layer.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns the search state, manages the terminal
//!   lifecycle and renders the UI.
//! * The **Task Worker** runs catalog searches and artwork downloads on a
//!   Tokio runtime, reporting completions back as events.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Completions are
//! delivered to the main thread via a `std::sync::mpsc` channel, and a
//! completion for a fetch that has since been superseded is discarded there.

mod components;
mod config;
mod events;
mod logging;
mod model;
mod net;
mod render;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tracing::{info, warn};

use crate::{
    components::{DetailView, SearchView},
    config::AppConfig,
    events::{AppEvent, process_events},
    model::search::Search,
    net::itunes::ITunesClient,
    tasks::TaskSender,
    theme::Theme,
    util::term::TerminalStyle,
};

const WINDOW_TITLE: &str = "StoreSearch";

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: TaskSender,

    pub search: Search<TaskSender>,

    pub search_view: SearchView,
    pub detail: Option<DetailView<TaskSender>>,

    pub error_popup: Option<String>,
    pub status: Option<String>,

    pub width: u16,
    pub ticks: usize,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, task_tx: TaskSender) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let category = config.default_category;

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            task_tx: task_tx.clone(),
            search: Search::new(task_tx.clone()),
            search_view: SearchView::new(category, task_tx),
            detail: None,
            error_popup: None,
            status: None,
            width: 0,
            ticks: 0,
        }
    }

    /// Whether the terminal is wide enough for the detail pane.
    pub fn is_wide(&self) -> bool {
        self.width >= self.config.wide_layout_min_width
    }
}

/// The entry point of the application.
///
/// Sets up logging, the task worker and the communication channels,
/// initializes the application state, manages the terminal lifecycle, and
/// returns an error if any part of the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();
    let logging = logging::init();

    let client = ITunesClient::new(&config).context("Failed to create store client")?;

    let (task_tx, task_rx) = TaskSender::channel();
    let mut app = App::new(config, task_tx);

    match logging {
        Ok(path) => info!(path = %path.display(), "storesearch started"),
        Err(e) => app.event_tx.send(AppEvent::Error(format!("Logging disabled: {e:#}")))?,
    }

    tasks::spawn_task_worker(client, task_rx, app.event_tx.clone())?;

    let style = Theme::to_hex(app.theme.background_colour).map(|hex| TerminalStyle::apply(&hex, WINDOW_TITLE));

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);
    drop(style);

    if let Err(e) = config::save_config(&app.config) {
        warn!(error = %e, "failed to save configuration");
    }

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], disabling raw mode
/// and leaving the alternate screen. It also ensures the cursor is made
/// visible again.
///
/// This function is designed to be "best-effort" and does not return a result,
/// as it is typically called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}

/// Starts the input and tick threads and enters the main event loop.
///
/// This function spawns two long-running background threads:
/// * An input thread to poll for keyboard and resize events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// After spawning them, it hands control to [`process_events`] to manage the
/// UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    app.width = terminal.size().context("Failed to read terminal size")?.width;

    // Spawn a thread to translate raw terminal events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(Event::Key(key)) => AppEvent::Key(key),
                Ok(Event::Resize(width, _)) => AppEvent::Resize(width),
                Ok(_) => continue,
                Err(e) => {
                    let _ = tx_keys.send(AppEvent::Error(format!("Failed to read terminal input: {e}")));
                    break;
                }
            };
            if tx_keys.send(event).is_err() {
                break;
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(Duration::from_millis(250));
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
