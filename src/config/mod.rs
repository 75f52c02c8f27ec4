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

//! Application configuration.
//!
//! This module manages the application configuration file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::model::Category;

pub(crate) const CONFIG_NAME: &str = "storesearch";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub search_url: String,
    pub country: String,
    pub language: String,
    pub result_limit: u32,
    pub request_timeout_secs: u64,
    pub default_category: Category,
    /// Terminals at least this wide show the detail pane beside the results.
    pub wide_layout_min_width: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            search_url: String::from("https://itunes.apple.com/search"),
            country: String::from("US"),
            language: String::from("en_us"),
            result_limit: 200,
            request_timeout_secs: 15,
            default_category: Category::All,
            wide_layout_min_width: 120,
        }
    }
}

/// Loads the configuration, writing a default file on first run.
pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

/// Stores the configuration, remembering the last used search category.
pub fn save_config(config: &AppConfig) -> Result<(), confy::ConfyError> {
    confy::store(CONFIG_NAME, None, config)
}

/// Directory holding the configuration file, also used for the log file.
pub fn config_dir() -> Option<PathBuf> {
    let path = confy::get_configuration_file_path(CONFIG_NAME, None).ok()?;
    path.parent().map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.result_limit, 200);
        assert_eq!(config.default_category, Category::All);
        assert!(config.search_url.starts_with("https://"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"country": "GB", "default_category": "Music"}"#).unwrap();

        assert_eq!(config.country, "GB");
        assert_eq!(config.default_category, Category::Music);
        assert_eq!(config.request_timeout_secs, 15);
        assert_eq!(config.wide_layout_min_width, 120);
    }
}
