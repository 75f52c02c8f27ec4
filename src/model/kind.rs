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

//! Display labels for raw catalog kinds.

use std::borrow::Cow;

const KNOWN_KINDS: &[(&str, &str)] = &[
    ("album", "Album"),
    ("audiobook", "Audio Book"),
    ("book", "Book"),
    ("ebook", "E-Book"),
    ("feature-movie", "Movie"),
    ("music-video", "Music Video"),
    ("podcast", "Podcast"),
    ("software", "App"),
    ("song", "Song"),
    ("tv-episode", "TV Episode"),
];

/// Maps a raw catalog `kind` to the label shown to the user.
///
/// Unknown kinds are title-cased word by word, so this never fails and
/// always returns the same label for the same input.
pub(crate) fn kind_for_display(kind: &str) -> Cow<'static, str> {
    if let Some((_, label)) = KNOWN_KINDS.iter().find(|(raw, _)| *raw == kind) {
        return Cow::Borrowed(label);
    }

    let words: Vec<String> = kind
        .split(['-', '_', ' '])
        .filter(|w| !w.is_empty())
        .map(title_case)
        .collect();

    if words.is_empty() {
        Cow::Borrowed("Unknown")
    } else {
        Cow::Owned(words.join(" "))
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_kinds() {
        for (raw, label) in KNOWN_KINDS {
            assert_eq!(kind_for_display(raw), *label);
        }
        assert_eq!(kind_for_display("software"), "App");
    }

    #[test]
    fn test_unknown_kind_is_title_cased() {
        assert_eq!(kind_for_display("mac-software"), "Mac Software");
        assert_eq!(kind_for_display("interactive_BOOKLET"), "Interactive Booklet");
        assert_eq!(kind_for_display("coached-audio"), kind_for_display("coached-audio"));
    }

    #[test]
    fn test_empty_kind() {
        assert_eq!(kind_for_display(""), "Unknown");
        assert_eq!(kind_for_display("--"), "Unknown");
    }
}
