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

//! UI rendering logic for the results table.
//!
//! Every [`SearchState`] has its own presentation: a hint before the first
//! search, a spinner row while loading, a placeholder when nothing was found
//! and the result rows otherwise.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Cell, Paragraph, Row, Table},
};

use crate::{
    components::ResultTable,
    model::{
        SearchResult,
        artwork::{ArtworkStatus, ImageFetcher},
        search::SearchState,
    },
    theme::Theme,
    util::format::format_price,
};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

// Header row plus its bottom margin.
const HEADER_HEIGHT: u16 = 2;

impl<F: ImageFetcher> ResultTable<F> {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, state: &SearchState, ticks: usize, theme: &Theme) {
        match state {
            SearchState::NotSearched => {
                let hint = Paragraph::new("Press / to search the store")
                    .style(Style::default().fg(theme.muted_fg))
                    .alignment(Alignment::Center);
                f.render_widget(hint, area);
            }

            SearchState::Loading { query, .. } => {
                let spinner = SPINNER[ticks % SPINNER.len()];
                let loading = Paragraph::new(format!("{spinner} Loading \"{query}\"..."))
                    .style(Style::default().fg(theme.accent_colour))
                    .alignment(Alignment::Center);
                f.render_widget(loading, area);
            }

            SearchState::NoResults => {
                let nothing = Paragraph::new("Nothing Found")
                    .style(Style::default().fg(theme.muted_fg))
                    .alignment(Alignment::Center);
                f.render_widget(nothing, area);
            }

            SearchState::Results(results) => self.draw_results(f, area, results, theme),
        }
    }

    fn draw_results(&mut self, f: &mut Frame, area: Rect, results: &[SearchResult], theme: &Theme) {
        let height = area.height.saturating_sub(HEADER_HEIGHT) as usize;
        self.bind_visible(results, height);

        let rows = results.iter().enumerate().map(|(index, item)| {
            let art = match self.artwork_status(index) {
                ArtworkStatus::Empty => Line::from(""),
                ArtworkStatus::Loading => Line::from("…").style(Style::default().fg(theme.muted_fg)),
                ArtworkStatus::Loaded(_) => Line::from("▣").style(Style::default().fg(theme.accent_colour)),
                ArtworkStatus::Failed => Line::from("✗").style(Style::default().fg(theme.error_colour)),
            };

            Row::new(vec![
                Cell::from(art),
                Cell::from(Line::from(item.name.as_str()).style(Style::default().fg(theme.table_name_fg))),
                Cell::from(Line::from(item.artist_line()).style(Style::default().fg(theme.table_artist_fg))),
                Cell::from(
                    Line::from(format_price(item.price, &item.currency))
                        .style(Style::default().fg(theme.table_price_fg))
                        .alignment(Alignment::Right),
                ),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(1),
                Constraint::Percentage(45),
                Constraint::Fill(1),
                Constraint::Length(10),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(""),
                Cell::from("Name"),
                Cell::from("Artist"),
                Cell::from(Line::from("Price").alignment(Alignment::Right)),
            ])
            .style(Style::default().add_modifier(Modifier::BOLD).fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(theme.selection_bg).fg(theme.table_name_fg))
        .block(Block::default());

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    use super::*;
    use crate::{model::fixtures::result, tasks::TaskSender};

    fn rendered(state: &SearchState) -> Vec<String> {
        let (task_tx, _task_rx) = TaskSender::channel();
        let mut table = ResultTable::new(task_tx);
        table.reload(state);

        let mut terminal = Terminal::new(TestBackend::new(100, 6)).unwrap();
        terminal
            .draw(|f| table.draw(f, f.area(), state, 0, &Theme::default()))
            .unwrap();

        lines(terminal.backend().buffer())
    }

    fn lines(buffer: &Buffer) -> Vec<String> {
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_row_shows_artist_and_kind() {
        let rows = rendered(&SearchState::Results(vec![result("Track")]));

        let row = &rows[HEADER_HEIGHT as usize];
        assert!(row.contains("Track"), "{row}");
        assert!(row.contains("Some Artist (Song)"), "{row}");
        assert!(row.contains("$1.29"), "{row}");
    }

    #[test]
    fn test_row_without_artist_shows_unknown() {
        let mut item = result("Track");
        item.artist_name.clear();

        let rows = rendered(&SearchState::Results(vec![item]));

        let row = &rows[HEADER_HEIGHT as usize];
        assert!(row.contains("Unknown"), "{row}");
        assert!(!row.contains("(Song)"), "{row}");
    }

    #[test]
    fn test_nothing_found_placeholder() {
        let rows = rendered(&SearchState::NoResults);
        assert!(rows.iter().any(|row| row.contains("Nothing Found")));
    }
}
