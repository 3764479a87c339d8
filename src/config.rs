//! # Search Configuration
//!
//! Settings for the lead search subscriber. Values come from built-in
//! defaults, an optional configuration file and `LEAD_SEARCH__*` environment
//! variables, in that order of precedence.
//!
//! ```rust,no_run
//! use lead_search::config::SearchConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SearchConfig::load(None)?;
//! println!("searching {}{} as {}", config.table_prefix, config.lead_table, config.lead_alias);
//! # Ok(())
//! # }
//! ```

use crate::constants::{tables, CANONICAL_LOCALE};
use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Configuration file consulted when no explicit path is given
pub const DEFAULT_CONFIG_FILE: &str = "config/lead-search";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Prefix applied to every table name
    pub table_prefix: String,
    pub lead_table: String,
    /// Alias of the lead table; every command's first join hangs off it
    pub lead_alias: String,
    pub locale: String,
    pub canonical_locale: String,
    pub global_search_limit: u32,
    pub database_url: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            table_prefix: String::new(),
            lead_table: tables::LEADS.to_string(),
            lead_alias: "l".to_string(),
            locale: CANONICAL_LOCALE.to_string(),
            canonical_locale: CANONICAL_LOCALE.to_string(),
            global_search_limit: 5,
            database_url: None,
        }
    }
}

impl SearchConfig {
    /// Load configuration from defaults, an optional file and the environment.
    ///
    /// With `path = None` the file `config/lead-search.{toml,yaml,json,...}` is
    /// used when present. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = Self::default();
        let mut builder = ::config::Config::builder()
            .set_default("table_prefix", defaults.table_prefix)?
            .set_default("lead_table", defaults.lead_table)?
            .set_default("lead_alias", defaults.lead_alias)?
            .set_default("locale", defaults.locale)?
            .set_default("canonical_locale", defaults.canonical_locale)?
            .set_default("global_search_limit", i64::from(defaults.global_search_limit))?;

        builder = match path {
            Some(path) => {
                debug!("Loading search configuration from {}", path.display());
                builder.add_source(::config::File::from(path).required(true))
            }
            None => builder.add_source(::config::File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        let config: SearchConfig = builder
            .add_source(
                ::config::Environment::with_prefix("LEAD_SEARCH")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Build configuration from plain environment variables only
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(db_url) = std::env::var("DATABASE_URL") {
            config.database_url = Some(db_url);
        }

        if let Ok(locale) = std::env::var("LEAD_SEARCH_LOCALE") {
            config.locale = locale;
        }

        if let Ok(prefix) = std::env::var("LEAD_SEARCH_TABLE_PREFIX") {
            config.table_prefix = prefix;
        }

        if let Ok(limit) = std::env::var("LEAD_SEARCH_GLOBAL_LIMIT") {
            config.global_search_limit = limit.parse().map_err(|e| {
                SearchError::ConfigurationError(format!("Invalid global_search_limit: {e}"))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.lead_table.trim().is_empty() {
            return Err(SearchError::ConfigurationError(
                "lead_table must not be empty".to_string(),
            ));
        }
        if self.lead_alias.trim().is_empty() {
            return Err(SearchError::ConfigurationError(
                "lead_alias must not be empty".to_string(),
            ));
        }
        if self.global_search_limit == 0 {
            return Err(SearchError::ConfigurationError(
                "global_search_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Table name with the configured prefix applied
    pub fn table(&self, name: &str) -> String {
        format!("{}{}", self.table_prefix, name)
    }
}
