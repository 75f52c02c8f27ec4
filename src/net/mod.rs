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

//! Network access to the store catalog.
//!
//! The [`CatalogService`] trait is the seam between the background task
//! worker and the remote store. [`itunes::ITunesClient`] is the production
//! implementation.

pub(crate) mod itunes;

use std::future::Future;

use thiserror::Error;

use crate::model::{Artwork, Category, SearchResult};

#[derive(Debug, Clone, Error)]
pub(crate) enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    Decode(String),

    /// Never sent by the task worker, which aborts cancelled fetches instead.
    /// Other fetcher implementations may report it.
    #[error("request cancelled")]
    Cancelled,
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            FetchError::Decode(e.to_string())
        } else {
            FetchError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}

/// Remote catalog operations, run on the task worker's runtime.
pub(crate) trait CatalogService: Send + Sync + 'static {
    fn search(
        &self,
        query: &str,
        category: Category,
    ) -> impl Future<Output = Result<Vec<SearchResult>, FetchError>> + Send;

    fn artwork(&self, url: &str) -> impl Future<Output = Result<Artwork, FetchError>> + Send;
}
