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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and external
//! formats (such as hexadecimal strings) used for terminal emulator styling.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) selection_bg: Color,
    pub(crate) input_bg: Color,
    pub(crate) muted_fg: Color,
    pub(crate) error_colour: Color,

    pub(crate) table_name_fg: Color,
    pub(crate) table_artist_fg: Color,
    pub(crate) table_kind_fg: Color,
    pub(crate) table_price_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Teal tint used for selections in the store.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(18, 28, 32),
            accent_colour: Color::Rgb(20, 160, 160),
            border_colour: Color::Rgb(90, 104, 110),
            selection_bg: Color::Rgb(12, 96, 96),
            input_bg: Color::Rgb(32, 46, 52),
            muted_fg: Color::Rgb(150, 160, 166),
            error_colour: Color::Rgb(235, 87, 87),

            table_name_fg: Color::Rgb(255, 255, 255),
            table_artist_fg: Color::Rgb(179, 201, 209),
            table_kind_fg: Color::Rgb(150, 160, 166),
            table_price_fg: Color::Rgb(250, 189, 47),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string, or `None` for anything but an `Rgb` colour.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}
