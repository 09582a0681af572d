use std::collections::BTreeMap;

use crate::contract::ArticleSummary;
use crate::identifiers::ArticleId;

pub const TITLE_ATTRIBUTE: &str = "title";

/// Non-key string attributes of a metadata item.
pub type Attributes = BTreeMap<String, String>;

/// Store-level view of one metadata row, independent of any backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataItem {
    pub partition_key: String,
    pub sort_key: String,
    pub attributes: Attributes,
}

/// Typed article projection of a [`MetadataItem`].
///
/// The sort key carries the article id; the partition key is shared by all
/// articles under the configured [`StorageLayout`](crate::storage_keys::StorageLayout).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleMetadataRecord {
    pub partition_key: String,
    pub id: ArticleId,
    pub title: String,
}

impl ArticleMetadataRecord {
    pub fn attributes(&self) -> Attributes {
        Attributes::from([(TITLE_ATTRIBUTE.to_string(), self.title.clone())])
    }

    pub fn into_item(self) -> MetadataItem {
        let attributes = self.attributes();
        MetadataItem {
            partition_key: self.partition_key,
            sort_key: self.id.into_inner(),
            attributes,
        }
    }

    /// Returns `None` when the item has no `title` attribute.
    pub fn from_item(item: MetadataItem) -> Option<Self> {
        let MetadataItem {
            partition_key,
            sort_key,
            mut attributes,
        } = item;
        let title = attributes.remove(TITLE_ATTRIBUTE)?;
        Some(Self {
            partition_key,
            id: ArticleId::new(sort_key),
            title,
        })
    }

    pub fn summary(&self) -> ArticleSummary {
        ArticleSummary {
            id: self.id.clone(),
            title: self.title.clone(),
        }
    }
}
