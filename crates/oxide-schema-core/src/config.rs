//! Schema configuration.
//!
//! A [`SchemaConfig`] is handed to every blueprint by value. Blueprints copy
//! the table-level settings out of it and never write back.

use serde::{Deserialize, Serialize};

/// Table prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "";
/// Storage engine used when none is configured.
pub const DEFAULT_ENGINE: &str = "InnoDB";
/// Character set used when none is configured.
pub const DEFAULT_CHARSET: &str = "utf8mb4";
/// Collation used when none is configured.
pub const DEFAULT_COLLATION: &str = "utf8mb4_unicode_ci";
/// Length of `char`/`varchar` columns declared without one.
pub const DEFAULT_STRING_LENGTH: u32 = 255;

/// Configuration shared by all blueprints of a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// Connection URL for the execution layer (e.g. `mysql://root@localhost/app`).
    pub url: Option<String>,
    /// Database name, required for table-existence checks.
    pub database: Option<String>,
    /// Prefix prepended to every table name.
    pub prefix: String,
    /// Storage engine.
    pub engine: String,
    /// Default character set.
    pub charset: String,
    /// Default collation.
    pub collation: String,
    /// Default `char`/`varchar` length.
    pub string_length: u32,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            url: None,
            database: None,
            prefix: DEFAULT_PREFIX.to_string(),
            engine: DEFAULT_ENGINE.to_string(),
            charset: DEFAULT_CHARSET.to_string(),
            collation: DEFAULT_COLLATION.to_string(),
            string_length: DEFAULT_STRING_LENGTH,
        }
    }
}

impl SchemaConfig {
    /// Creates a configuration with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is malformed or a field has the wrong type.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Sets the connection URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the database name.
    #[must_use]
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Sets the table prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the storage engine.
    #[must_use]
    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = engine.into();
        self
    }

    /// Sets the character set.
    #[must_use]
    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = charset.into();
        self
    }

    /// Sets the collation.
    #[must_use]
    pub fn with_collation(mut self, collation: impl Into<String>) -> Self {
        self.collation = collation.into();
        self
    }

    /// Sets the default string length.
    #[must_use]
    pub const fn with_string_length(mut self, length: u32) -> Self {
        self.string_length = length;
        self
    }

    /// Engine to use, falling back to the default when empty.
    #[must_use]
    pub fn resolved_engine(&self) -> &str {
        or_default(&self.engine, DEFAULT_ENGINE)
    }

    /// Character set to use, falling back to the default when empty.
    #[must_use]
    pub fn resolved_charset(&self) -> &str {
        or_default(&self.charset, DEFAULT_CHARSET)
    }

    /// Collation to use, falling back to the default when empty.
    #[must_use]
    pub fn resolved_collation(&self) -> &str {
        or_default(&self.collation, DEFAULT_COLLATION)
    }
}

pub(crate) const fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() {
        default
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SchemaConfig::new();
        assert_eq!(config.prefix, "");
        assert_eq!(config.resolved_engine(), "InnoDB");
        assert_eq!(config.resolved_charset(), "utf8mb4");
        assert_eq!(config.resolved_collation(), "utf8mb4_unicode_ci");
        assert_eq!(config.string_length, 255);
        assert!(config.database.is_none());
    }

    #[test]
    fn test_empty_settings_resolve_to_defaults() {
        let config = SchemaConfig::new()
            .with_engine("")
            .with_charset("")
            .with_collation("");
        assert_eq!(config.resolved_engine(), DEFAULT_ENGINE);
        assert_eq!(config.resolved_charset(), DEFAULT_CHARSET);
        assert_eq!(config.resolved_collation(), DEFAULT_COLLATION);
    }

    #[test]
    fn test_from_json_partial() {
        let json = r#"{"prefix": "app_", "engine": "MyISAM"}"#;
        let config = SchemaConfig::from_json(json).unwrap();
        assert_eq!(config.prefix, "app_");
        assert_eq!(config.engine, "MyISAM");
        assert_eq!(config.charset, DEFAULT_CHARSET);
        assert_eq!(config.string_length, DEFAULT_STRING_LENGTH);
    }

    #[test]
    fn test_builder_setters() {
        let config = SchemaConfig::new()
            .with_url("mysql://root@localhost/app")
            .with_database("app")
            .with_string_length(191);
        assert_eq!(config.url.as_deref(), Some("mysql://root@localhost/app"));
        assert_eq!(config.database.as_deref(), Some("app"));
        assert_eq!(config.string_length, 191);
    }
}
