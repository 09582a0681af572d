use articles_core::records::{Attributes, MetadataItem};

use crate::adapters::error::StoreError;

/// Sorted key-value table keyed by (partition key, sort key).
pub trait MetadataStore {
    /// Unconditional insert or overwrite.
    fn put(
        &self,
        partition_key: &str,
        sort_key: &str,
        attributes: &Attributes,
    ) -> Result<(), StoreError>;

    /// All items under one partition, ascending by sort key.
    fn query(&self, partition_key: &str) -> Result<Vec<MetadataItem>, StoreError>;

    fn get_by_key(
        &self,
        partition_key: &str,
        sort_key: &str,
    ) -> Result<Option<MetadataItem>, StoreError>;
}
