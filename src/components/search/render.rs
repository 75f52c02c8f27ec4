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

//! UI rendering logic for the search view.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph, Tabs},
};

use crate::{
    components::{Focus, SearchView},
    model::{Category, search::SearchState},
    theme::Theme,
};

impl SearchView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, state: &SearchState, ticks: usize, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(area);

        self.draw_search_box(f, chunks[0], theme);
        self.draw_categories(f, chunks[1], theme);
        self.result_table.draw(f, chunks[2], state, ticks, theme);
    }

    fn draw_search_box(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let border_colour = match self.focus {
            Focus::SearchInput => theme.accent_colour,
            Focus::Results => theme.border_colour,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .padding(Padding::horizontal(1))
            .title(" Search ");

        let inner = block.inner(area);

        // Keep the cursor in view when the query is wider than the box.
        let width = inner.width.max(1) as usize;
        let scroll = self.input.visual_scroll(width);

        let input = Paragraph::new(self.input.value())
            .style(Style::default().bg(theme.input_bg))
            .scroll((0, scroll as u16))
            .block(block);
        f.render_widget(input, area);

        if self.focus == Focus::SearchInput {
            let cursor = self.input.visual_cursor().max(scroll) - scroll;
            f.set_cursor_position((inner.x + cursor as u16, inner.y));
        }
    }

    fn draw_categories(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let titles = Category::ALL.iter().map(|c| Line::from(c.title()));

        let tabs = Tabs::new(titles)
            .select(self.category.index())
            .style(Style::default().fg(theme.muted_fg))
            .highlight_style(
                Style::default()
                    .fg(theme.accent_colour)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(theme.border_colour)));

        f.render_widget(tabs, area);
    }
}
