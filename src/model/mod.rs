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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, the catalog
//! items returned by a store search, the search category filter, and the
//! tokens used to track asynchronous fetches.

pub(crate) mod artwork;
pub(crate) mod kind;
pub(crate) mod search;

use std::{
    borrow::Cow,
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

use serde::{Deserialize, Serialize};

/// One catalog item returned by the store.
///
/// Values are never mutated after decoding; `price` is always finite and
/// non-negative.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SearchResult {
    pub(crate) name: String,
    pub(crate) artist_name: String,
    pub(crate) kind: String,
    pub(crate) genre: String,
    pub(crate) price: f64,
    pub(crate) currency: String,
    pub(crate) artwork_small_url: String,
    pub(crate) artwork_large_url: String,
    pub(crate) store_url: String,
}

impl SearchResult {
    pub(crate) fn kind_for_display(&self) -> Cow<'static, str> {
        kind::kind_for_display(&self.kind)
    }

    /// The artist line shown in the results list.
    pub(crate) fn artist_line(&self) -> String {
        if self.artist_name.is_empty() {
            String::from("Unknown")
        } else {
            format!("{} ({})", self.artist_name, self.kind_for_display())
        }
    }
}

/// Store search filter, selectable by index from the category tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum Category {
    #[default]
    All,
    Music,
    Software,
    EBooks,
}

impl Category {
    pub(crate) const ALL: [Category; 4] = [
        Category::All,
        Category::Music,
        Category::Software,
        Category::EBooks,
    ];

    pub(crate) fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub(crate) fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub(crate) fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub(crate) fn title(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Music => "Music",
            Category::Software => "Software",
            Category::EBooks => "E-books",
        }
    }

    /// The `entity` query parameter understood by the store search API.
    pub(crate) fn entity(self) -> &'static str {
        match self {
            Category::All => "",
            Category::Music => "musicTrack",
            Category::Software => "software",
            Category::EBooks => "ebook",
        }
    }
}

static NEXT_FETCH_TOKEN: AtomicU64 = AtomicU64::new(1);

/// Identity of one asynchronous request.
///
/// Tokens are unique for the life of the process and strictly increasing in
/// issue order, so a completion can always be matched against the request
/// that is current for its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct FetchToken(u64);

impl FetchToken {
    pub(crate) fn next() -> Self {
        Self(NEXT_FETCH_TOKEN.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for FetchToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Image bytes fetched for a catalog item.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Artwork {
    pub(crate) bytes: Vec<u8>,
    pub(crate) content_type: Option<String>,
}

impl Artwork {
    pub(crate) fn len(&self) -> usize {
        self.bytes.len()
    }
}
