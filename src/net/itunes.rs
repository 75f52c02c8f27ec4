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

//! iTunes Search API client.
//!
//! Performs store searches and artwork downloads over HTTP, and decodes the
//! search response into [`SearchResult`]s. The response mixes several record
//! shapes distinguished by `wrapperType`, each naming its fields differently.

use std::time::Duration;

use reqwest::{Client, header::CONTENT_TYPE};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    config::AppConfig,
    model::{Artwork, Category, SearchResult},
    net::{CatalogService, FetchError},
};

#[derive(Clone)]
pub(crate) struct ITunesClient {
    client: Client,
    search_url: String,
    country: String,
    language: String,
    limit: u32,
}

impl ITunesClient {
    pub(crate) fn new(config: &AppConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            search_url: config.search_url.clone(),
            country: config.country.clone(),
            language: config.language.clone(),
            limit: config.result_limit,
        })
    }

    fn query_params(&self, term: &str, category: Category) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("term", term.to_string()),
            ("limit", self.limit.to_string()),
            ("lang", self.language.clone()),
            ("country", self.country.clone()),
        ];
        let entity = category.entity();
        if !entity.is_empty() {
            params.push(("entity", entity.to_string()));
        }
        params
    }
}

impl CatalogService for ITunesClient {
    async fn search(&self, query: &str, category: Category) -> Result<Vec<SearchResult>, FetchError> {
        let response = self
            .client
            .get(&self.search_url)
            .query(&self.query_params(query, category))
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let results = parse_search_response(&body)?;
        debug!(query, count = results.len(), "search response decoded");

        Ok(results)
    }

    async fn artwork(&self, url: &str) -> Result<Artwork, FetchError> {
        let response = self.client.get(url).send().await?.error_for_status()?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await?;

        Ok(Artwork {
            bytes: bytes.to_vec(),
            content_type,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    #[serde(default)]
    results: Vec<Item>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Item {
    wrapper_type: Option<String>,
    kind: Option<String>,

    track_name: Option<String>,
    collection_name: Option<String>,
    artist_name: Option<String>,

    track_view_url: Option<String>,
    collection_view_url: Option<String>,

    artwork_url60: Option<String>,
    artwork_url100: Option<String>,

    track_price: Option<f64>,
    collection_price: Option<f64>,
    price: Option<f64>,
    currency: Option<String>,

    primary_genre_name: Option<String>,
    genres: Option<Vec<String>>,
}

/// Decodes a search response body.
///
/// Records of an unknown `wrapperType`, or with a negative or non-finite
/// price, are skipped. Results are ordered by name, ignoring case.
pub(crate) fn parse_search_response(body: &str) -> Result<Vec<SearchResult>, FetchError> {
    let response: SearchResponse = serde_json::from_str(body)?;

    let mut results: Vec<SearchResult> = response
        .results
        .into_iter()
        .filter_map(Item::into_search_result)
        .collect();

    results.sort_by_cached_key(|r| r.name.to_lowercase());

    Ok(results)
}

impl Item {
    fn into_search_result(self) -> Option<SearchResult> {
        let wrapper_type = self.wrapper_type.unwrap_or_default();

        let (name, store_url, price, kind, genre) = match wrapper_type.as_str() {
            "track" => (
                self.track_name,
                self.track_view_url,
                self.track_price,
                self.kind,
                self.primary_genre_name,
            ),
            "audiobook" => (
                self.collection_name,
                self.collection_view_url,
                self.collection_price,
                Some(String::from("audiobook")),
                self.primary_genre_name,
            ),
            "software" => (
                self.track_name,
                self.track_view_url,
                self.price,
                self.kind,
                self.genres.and_then(|g| g.into_iter().next()),
            ),
            "ebook" => (
                self.track_name,
                self.track_view_url,
                self.price,
                self.kind,
                self.genres.map(|g| g.join(", ")),
            ),
            other => {
                debug!(wrapper_type = other, "skipping unsupported search result");
                return None;
            }
        };

        let price = price.unwrap_or(0.0);
        if !price.is_finite() || price < 0.0 {
            warn!(price, "skipping search result with invalid price");
            return None;
        }

        Some(SearchResult {
            name: name.unwrap_or_default(),
            artist_name: self.artist_name.unwrap_or_default(),
            kind: kind.unwrap_or_default(),
            genre: genre.unwrap_or_default(),
            price,
            currency: self.currency.unwrap_or_default(),
            artwork_small_url: self.artwork_url60.unwrap_or_default(),
            artwork_large_url: self.artwork_url100.unwrap_or_default(),
            store_url: store_url.unwrap_or_default(),
        })
    }
}
