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

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    App,
    components::{Focus, Presentation},
    events::{AppEvent, AppEventProcessor},
};

/// Maps keyboard input to application actions.
///
/// This function acts as the primary input router for the TUI. Open popups
/// take every key first, then the search view, and whatever the search view
/// leaves alone is handled globally.
///
/// # Arguments
///
/// * `app` - A mutable reference to the application state.
/// * `key` - The key event captured from the terminal backend.
///
/// # Errors
///
/// Returns an error if an event cannot be sent to the event loop.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    if app.error_popup.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.error_popup = None;
        }
        return Ok(());
    }

    let popup_open = app
        .detail
        .as_ref()
        .is_some_and(|d| d.presentation() == Presentation::Popup);
    if popup_open {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => app.event_tx.send(AppEvent::CloseDetail)?,
            KeyCode::Char('o') => open_in_store(app)?,
            KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,
            _ => {}
        }
        return Ok(());
    }

    // Keys typed into the search box, including the one that leaves it, are
    // not global.
    let focus = app.search_view.focus;
    app.search_view.process_event(Event::Key(key), &app.event_tx)?;

    if focus == Focus::Results && app.search_view.focus == Focus::Results {
        process_global_key_event(app, key)?;
    }

    Ok(())
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        // Only the pane is reachable here, an open popup took the key earlier
        KeyCode::Char('o') => open_in_store(app)?,

        // Abandon a slow search
        KeyCode::Esc if app.search.is_loading() => {
            app.search.cancel();
            app.search_view.reload(app.search.state());
        }

        _ => {}
    }

    Ok(())
}

fn open_in_store(app: &App) -> Result<()> {
    if let Some(detail) = &app.detail {
        app.event_tx.send(AppEvent::OpenInStore(detail.result().store_url.clone()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::AppConfig,
        model::{Category, fixtures::result, search::SearchState},
        tasks::TaskSender,
    };

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        let (task_tx, _) = TaskSender::channel();
        App::new(AppConfig::default(), task_tx)
    }

    #[test]
    fn test_q_is_typed_into_search_box() {
        let mut app = app();
        app.search_view.focus = Focus::SearchInput;

        process_key_event(&mut app, key(KeyCode::Char('q'))).unwrap();

        assert_eq!(app.search_view.query(), "q");
        assert!(app.event_rx.try_recv().is_err());
    }

    #[test]
    fn test_q_quits_from_results() {
        let mut app = app();
        app.search_view.focus = Focus::Results;

        process_key_event(&mut app, key(KeyCode::Char('q'))).unwrap();

        assert!(matches!(app.event_rx.try_recv(), Ok(AppEvent::ExitApplication)));
    }

    #[test]
    fn test_error_popup_takes_keys() {
        let mut app = app();
        app.search_view.focus = Focus::Results;
        app.error_popup = Some(String::from("Whoops"));

        process_key_event(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(app.error_popup.is_some());
        assert!(app.event_rx.try_recv().is_err());

        process_key_event(&mut app, key(KeyCode::Enter)).unwrap();
        assert!(app.error_popup.is_none());
    }

    #[test]
    fn test_esc_cancels_loading_search() {
        let mut app = app();
        app.search.perform_search("abba", Category::All, Box::new(|_| {}));
        app.search_view.focus = Focus::Results;

        process_key_event(&mut app, key(KeyCode::Esc)).unwrap();

        assert_eq!(app.search.state(), &SearchState::NotSearched);
        assert!(!app.search.is_loading());
    }

    #[test]
    fn test_esc_in_search_box_only_leaves_it() {
        let mut app = app();
        app.search.perform_search("abba", Category::All, Box::new(|_| {}));
        app.search_view.focus = Focus::SearchInput;

        process_key_event(&mut app, key(KeyCode::Esc)).unwrap();

        assert_eq!(app.search_view.focus, Focus::Results);
        assert!(app.search.is_loading());
    }

    #[test]
    fn test_popup_enter_closes_detail() {
        let mut app = app();
        app.search_view.focus = Focus::Results;
        app.search_view.reload(&SearchState::Results(vec![result("a")]));
        app.detail = Some(crate::components::DetailView::new(
            app.task_tx.clone(),
            result("a"),
            Presentation::Popup,
        ));

        process_key_event(&mut app, key(KeyCode::Enter)).unwrap();

        assert!(matches!(app.event_rx.try_recv(), Ok(AppEvent::CloseDetail)));
    }

    #[test]
    fn test_o_opens_store_link_from_popup() {
        let mut app = app();
        app.search_view.focus = Focus::Results;
        app.detail = Some(crate::components::DetailView::new(
            app.task_tx.clone(),
            result("a"),
            Presentation::Popup,
        ));

        process_key_event(&mut app, key(KeyCode::Char('o'))).unwrap();

        match app.event_rx.try_recv() {
            Ok(AppEvent::OpenInStore(url)) => assert_eq!(url, "https://example.com/a"),
            other => panic!("unexpected event {other:?}"),
        }
        assert!(app.detail.is_some());
    }

    #[test]
    fn test_o_opens_store_link_from_pane() {
        let mut app = app();
        app.search_view.focus = Focus::Results;
        app.search_view.reload(&SearchState::Results(vec![result("a")]));
        app.detail = Some(crate::components::DetailView::new(
            app.task_tx.clone(),
            result("a"),
            Presentation::Pane,
        ));

        process_key_event(&mut app, key(KeyCode::Char('o'))).unwrap();

        assert!(matches!(app.event_rx.try_recv(), Ok(AppEvent::OpenInStore(url)) if url == "https://example.com/a"));
    }

    #[test]
    fn test_o_without_detail_is_ignored() {
        let mut app = app();
        app.search_view.focus = Focus::Results;

        process_key_event(&mut app, key(KeyCode::Char('o'))).unwrap();

        assert!(app.event_rx.try_recv().is_err());
    }

    #[test]
    fn test_o_is_typed_into_search_box() {
        let mut app = app();
        app.search_view.focus = Focus::SearchInput;
        app.detail = Some(crate::components::DetailView::new(
            app.task_tx.clone(),
            result("a"),
            Presentation::Pane,
        ));

        process_key_event(&mut app, key(KeyCode::Char('o'))).unwrap();

        assert_eq!(app.search_view.query(), "o");
        assert!(app.event_rx.try_recv().is_err());
    }
}
