use crate::identifiers::ArticleId;
use crate::records::ArticleMetadataRecord;

pub const DEFAULT_ARTICLE_PARTITION_KEY: &str = "article";

/// Where article rows and bodies live inside the two stores.
///
/// All articles share one partition key. That makes the listing a single
/// query, but every write lands on the same partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    pub partition_key: String,
    pub content_prefix: String,
}

impl Default for StorageLayout {
    fn default() -> Self {
        Self {
            partition_key: DEFAULT_ARTICLE_PARTITION_KEY.to_string(),
            content_prefix: String::new(),
        }
    }
}

impl StorageLayout {
    pub fn metadata_record(&self, id: &ArticleId, title: &str) -> ArticleMetadataRecord {
        ArticleMetadataRecord {
            partition_key: self.partition_key.clone(),
            id: id.clone(),
            title: title.to_string(),
        }
    }

    pub fn content_object_key(&self, id: &ArticleId) -> String {
        content_object_key(&self.content_prefix, id)
    }
}

/// Object key for an article body. With an empty prefix the key is exactly
/// the article id.
pub fn content_object_key(base_prefix: &str, id: &ArticleId) -> String {
    let trimmed = base_prefix.trim_matches('/');
    if trimmed.is_empty() {
        id.as_str().to_string()
    } else {
        format!("{trimmed}/{id}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_key_is_bare_id_without_prefix() {
        let key = content_object_key("", &ArticleId::new("0b7c"));
        assert_eq!(key, "0b7c");
    }

    #[test]
    fn content_key_trims_prefix_slashes() {
        let key = content_object_key("/articles/bodies/", &ArticleId::new("0b7c"));
        assert_eq!(key, "articles/bodies/0b7c");
    }

    #[test]
    fn default_layout_uses_flat_article_partition() {
        let layout = StorageLayout::default();
        let record = layout.metadata_record(&ArticleId::new("id-1"), "Hello");

        assert_eq!(record.partition_key, "article");
        assert_eq!(record.id.as_str(), "id-1");
        assert_eq!(layout.content_object_key(&record.id), "id-1");
    }
}
