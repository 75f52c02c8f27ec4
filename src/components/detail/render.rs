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

//! UI rendering logic for the detail view.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::{
    components::{DetailView, Presentation},
    model::artwork::{ArtworkStatus, ImageFetcher},
    render::popup_area,
    theme::Theme,
    util::format::{format_price, format_size},
};

impl<F: ImageFetcher> DetailView<F> {
    /// Draws the pane into `area`, or the popup centred over it.
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let area = match self.presentation() {
            Presentation::Pane => area,
            Presentation::Popup => {
                let popup = popup_area(area, 60, 14);
                f.render_widget(Clear, popup);
                popup
            }
        };

        let borders = match self.presentation() {
            Presentation::Pane => Borders::LEFT,
            Presentation::Popup => Borders::ALL,
        };

        let block = Block::default()
            .borders(borders)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(theme.background_colour));

        let block = match self.presentation() {
            Presentation::Popup => block.title(" Detail ").title_bottom(" o open in store  Esc to close "),
            Presentation::Pane => block,
        };

        let paragraph = Paragraph::new(self.lines(theme))
            .wrap(Wrap { trim: true })
            .block(block);

        f.render_widget(paragraph, area);
    }

    fn lines(&self, theme: &Theme) -> Vec<Line<'_>> {
        let result = self.result();
        let label = Style::default().fg(theme.muted_fg);

        let artist = if result.artist_name.is_empty() {
            "Unknown"
        } else {
            result.artist_name.as_str()
        };

        let artwork = match self.artwork() {
            ArtworkStatus::Empty => String::from("None"),
            ArtworkStatus::Loading => String::from("Loading..."),
            ArtworkStatus::Loaded(artwork) => match &artwork.content_type {
                Some(content_type) => format!("{} ({})", format_size(artwork.len()), content_type),
                None => format_size(artwork.len()),
            },
            ArtworkStatus::Failed => String::from("Unavailable"),
        };

        vec![
            Line::from(Span::styled(
                result.name.as_str(),
                Style::default().fg(theme.table_name_fg).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(artist, Style::default().fg(theme.table_artist_fg))),
            Line::from(""),
            Line::from(vec![Span::styled("Type:    ", label), Span::styled(result.kind_for_display(), Style::default().fg(theme.table_kind_fg))]),
            Line::from(vec![Span::styled("Genre:   ", label), Span::raw(result.genre.as_str())]),
            Line::from(vec![
                Span::styled("Price:   ", label),
                Span::styled(format_price(result.price, &result.currency), Style::default().fg(theme.table_price_fg)),
            ]),
            Line::from(vec![Span::styled("Artwork: ", label), Span::raw(artwork)]),
            Line::from(""),
            Line::from(Span::styled(result.store_url.as_str(), Style::default().fg(theme.accent_colour))),
        ]
    }
}
