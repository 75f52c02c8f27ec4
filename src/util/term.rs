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

//! Terminal emulator styling.
//!
//! Uses OSC (Operating System Command) escape sequences to change the
//! emulator's background colour and window title. Most modern terminals
//! (XTerm, iTerm2, Alacritty, Kitty) understand these, others ignore them.

use std::io::{self, Write};

/// Applies the application's background colour and window title for as long
/// as it is alive, restoring the user's defaults when dropped.
pub(crate) struct TerminalStyle {
    _private: (),
}

impl TerminalStyle {
    /// # Arguments
    ///
    /// * `hex_color` - The background, e.g. `"#1e1e1e"`.
    /// * `title` - The window title.
    pub(crate) fn apply(hex_color: &str, title: &str) -> Self {
        // OSC 11 sets the background, OSC 2 the window title.
        write_osc(&format!("\x1b]11;{}\x07\x1b]2;{}\x07", hex_color, title));
        Self { _private: () }
    }
}

impl Drop for TerminalStyle {
    fn drop(&mut self) {
        // OSC 111 reverts the background to the user's configuration.
        write_osc("\x1b]111\x07\x1b]2;\x07");
    }
}

// Failures are ignored, the sequences are cosmetic.
fn write_osc(sequence: &str) {
    let mut stdout = io::stdout();
    let _ = stdout.write_all(sequence.as_bytes());
    let _ = stdout.flush();
}
