use articles_core::storage_keys::{StorageLayout, DEFAULT_ARTICLE_PARTITION_KEY};
use thiserror::Error;

pub const TABLE_NAME_VAR: &str = "TABLE_NAME";
pub const BUCKET_NAME_VAR: &str = "BUCKET_NAME";
pub const PARTITION_KEY_VAR: &str = "ARTICLE_PARTITION_KEY";
pub const CONTENT_PREFIX_VAR: &str = "ARTICLE_CONTENT_PREFIX";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} must be configured")]
    Missing(&'static str),
}

/// Resource names and key layout, resolved once per process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerConfig {
    pub table_name: String,
    pub bucket_name: String,
    pub layout: StorageLayout,
}

impl HandlerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_blank = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let table_name = non_blank(TABLE_NAME_VAR).ok_or(ConfigError::Missing(TABLE_NAME_VAR))?;
        let bucket_name =
            non_blank(BUCKET_NAME_VAR).ok_or(ConfigError::Missing(BUCKET_NAME_VAR))?;

        Ok(Self {
            table_name,
            bucket_name,
            layout: StorageLayout {
                partition_key: non_blank(PARTITION_KEY_VAR)
                    .unwrap_or_else(|| DEFAULT_ARTICLE_PARTITION_KEY.to_string()),
                content_prefix: lookup(CONTENT_PREFIX_VAR).unwrap_or_default(),
            },
        })
    }
}
