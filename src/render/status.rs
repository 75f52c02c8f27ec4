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

//! Render the status line.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::{App, components::Focus, model::search::SearchState};

fn summary(state: &SearchState) -> String {
    match state {
        SearchState::NotSearched => String::new(),
        SearchState::Loading { query, category } => format!("Searching {} for \"{}\"", category.title(), query),
        SearchState::NoResults => String::from("No results"),
        SearchState::Results(results) if results.len() == 1 => String::from("1 result"),
        SearchState::Results(results) => format!("{} results", results.len()),
    }
}

pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    let (left, colour) = match &app.status {
        Some(message) => (message.clone(), app.theme.error_colour),
        None => (summary(app.search.state()), app.theme.muted_fg),
    };

    let hints = match app.search_view.focus {
        Focus::SearchInput => "Enter search  Tab category  Esc results",
        Focus::Results => "/ search  j/k move  Enter detail  o store  1-4 category  q quit",
    };

    f.render_widget(
        Paragraph::new(left).style(Style::default().fg(colour).bg(app.theme.input_bg)),
        container[0],
    );
    f.render_widget(
        Paragraph::new(hints)
            .style(Style::default().fg(app.theme.muted_fg).bg(app.theme.input_bg))
            .alignment(Alignment::Right),
        container[1],
    );
}
