use articles_core::contract::ArticleSummary;
use articles_core::records::ArticleMetadataRecord;
use articles_core::storage_keys::StorageLayout;
use serde_json::json;

use crate::adapters::{MetadataStore, StoreError};
use crate::handlers::apigw::{internal_error_response, success_response, ApiGatewayResponse};
use crate::logging::{log_error, log_info};

const COMPONENT: &str = "list_handler";

/// Lists `{id, title}` for every article in the layout's partition. Never
/// reads the content store.
pub fn handle_list_event(
    layout: &StorageLayout,
    metadata_store: &impl MetadataStore,
) -> ApiGatewayResponse {
    match list_articles(layout, metadata_store) {
        Ok(summaries) => {
            log_info(COMPONENT, "articles_listed", json!({ "count": summaries.len() }));
            success_response(200, summaries)
        }
        Err(error) => {
            log_error(
                COMPONENT,
                "list_failed",
                json!({
                    "partition_key": layout.partition_key,
                    "error": error.to_string(),
                }),
            );
            internal_error_response("Failed to list articles")
        }
    }
}

pub fn list_articles(
    layout: &StorageLayout,
    metadata_store: &impl MetadataStore,
) -> Result<Vec<ArticleSummary>, StoreError> {
    let items = metadata_store.query(&layout.partition_key)?;

    let mut summaries = Vec::with_capacity(items.len());
    for item in items {
        let sort_key = item.sort_key.clone();
        match ArticleMetadataRecord::from_item(item) {
            Some(record) => summaries.push(record.summary()),
            None => log_info(
                COMPONENT,
                "metadata_record_skipped",
                json!({ "id": sort_key, "reason": "missing title attribute" }),
            ),
        }
    }
    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use articles_core::records::Attributes;

    use super::*;
    use crate::adapters::memory::InMemoryMetadataStore;

    #[test]
    fn empty_partition_lists_as_empty_array() {
        let store = InMemoryMetadataStore::new();

        let response = handle_list_event(&StorageLayout::default(), &store);

        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "[]");
    }

    #[test]
    fn projects_sort_key_and_title_only() {
        let store = InMemoryMetadataStore::new();
        store
            .put(
                "article",
                "id-1",
                &Attributes::from([
                    ("title".to_string(), "Hello".to_string()),
                    ("author".to_string(), "someone".to_string()),
                ]),
            )
            .expect("put should succeed");

        let summaries =
            list_articles(&StorageLayout::default(), &store).expect("list should succeed");

        assert_eq!(
            serde_json::to_value(&summaries).expect("summaries should serialize"),
            json!([{"id": "id-1", "title": "Hello"}])
        );
    }

    #[test]
    fn skips_items_without_title_and_other_partitions() {
        let store = InMemoryMetadataStore::new();
        store
            .put("article", "untitled", &Attributes::new())
            .expect("put should succeed");
        store
            .put(
                "note",
                "id-2",
                &Attributes::from([("title".to_string(), "Note".to_string())]),
            )
            .expect("put should succeed");

        let summaries =
            list_articles(&StorageLayout::default(), &store).expect("list should succeed");

        assert!(summaries.is_empty());
    }

    #[test]
    fn store_failure_is_a_server_error() {
        let store = InMemoryMetadataStore::new();
        store.fail_with(StoreError::unavailable("query", "simulated outage"));

        let response = handle_list_event(&StorageLayout::default(), &store);

        assert_eq!(response.status_code, 500);
        assert!(!response.body.contains("simulated outage"));
    }
}
