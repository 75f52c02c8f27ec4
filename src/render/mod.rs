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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called on every
//! terminal tick or state change to provide a reactive user interface.

mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::{App, components::Presentation, render::status::draw_status, theme::Theme};

/// Renders the user interface to the terminal frame.
///
/// It handles:
///
/// * **Layout**: The search view, with the detail pane beside it on wide
///   terminals, above the status line.
/// * **Popups**: The detail popup on narrow terminals and the error popup,
///   drawn last so they sit on top.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing the UI
///   to update internal view state (like the table scroll position and the
///   artwork bound to visible rows).
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(Block::default().style(Style::default().bg(app.theme.background_colour)), area);

    // Outer layout: main, footer
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let pane = app
        .detail
        .as_ref()
        .is_some_and(|d| d.presentation() == Presentation::Pane);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(if pane {
            [Constraint::Percentage(60), Constraint::Percentage(40)]
        } else {
            [Constraint::Min(0), Constraint::Length(0)]
        })
        .split(outer[0]);

    app.search_view
        .draw(f, main[0], app.search.state(), app.ticks, &app.theme);

    if let Some(detail) = &app.detail {
        match detail.presentation() {
            Presentation::Pane => detail.draw(f, main[1], &app.theme),
            Presentation::Popup => detail.draw(f, outer[0], &app.theme),
        }
    }

    draw_status(f, outer[1], app);

    if let Some(message) = &app.error_popup {
        draw_error_popup(f, area, message, &app.theme);
    }
}

/// A `width` x `height` area centred in `area`, clamped to fit.
pub(crate) fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    popup
}

fn draw_error_popup(f: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let popup = popup_area(area, 50, 7);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.error_colour))
        .padding(Padding::horizontal(1))
        .title(" Whoops... ")
        .title_bottom(" Enter to dismiss ")
        .style(Style::default().bg(theme.background_colour));

    let paragraph = Paragraph::new(message).wrap(Wrap { trim: true }).block(block);
    f.render_widget(paragraph, popup);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_area_is_centred() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(popup_area(area, 60, 10), Rect::new(20, 15, 60, 10));
    }

    #[test]
    fn test_popup_area_is_clamped() {
        let area = Rect::new(0, 0, 30, 5);
        assert_eq!(popup_area(area, 60, 10), area);
    }
}
