#![allow(dead_code)]

use articles_core::contract::{ArticleSummary, PublishedArticleResponse};
use articles_core::identifiers::{ArticleId, IdentifierGenerator, RandomIdentifierGenerator};
use articles_core::storage_keys::StorageLayout;
use articles_lambda::adapters::memory::{InMemoryContentStore, InMemoryMetadataStore};
use articles_lambda::handlers::get::handle_get_event;
use articles_lambda::handlers::list::handle_list_event;
use articles_lambda::handlers::publish::handle_publish_event;
use articles_lambda::handlers::ApiGatewayResponse;
use serde_json::{json, Value};

/// Both stores plus the layout, wired the way a deployed process wires them.
pub struct TestBackend {
    pub layout: StorageLayout,
    pub metadata_store: InMemoryMetadataStore,
    pub content_store: InMemoryContentStore,
}

impl TestBackend {
    pub fn new() -> Self {
        Self {
            layout: StorageLayout::default(),
            metadata_store: InMemoryMetadataStore::new(),
            content_store: InMemoryContentStore::new(),
        }
    }

    pub fn publish_event(&self, event: Value) -> ApiGatewayResponse {
        self.publish_event_with(event, &RandomIdentifierGenerator)
    }

    pub fn publish_event_with(
        &self,
        event: Value,
        identifiers: &impl IdentifierGenerator,
    ) -> ApiGatewayResponse {
        handle_publish_event(
            event,
            &self.layout,
            identifiers,
            &self.metadata_store,
            &self.content_store,
        )
    }

    /// Publishes through a proxy event with a string body.
    pub fn publish(&self, title: &str, content: &str) -> ApiGatewayResponse {
        let body = json!({ "title": title, "content": content }).to_string();
        self.publish_event(json!({ "body": body }))
    }

    pub fn list(&self) -> ApiGatewayResponse {
        handle_list_event(&self.layout, &self.metadata_store)
    }

    pub fn list_summaries(&self) -> Vec<ArticleSummary> {
        let response = self.list();
        assert_eq!(response.status_code, 200, "list should succeed");
        serde_json::from_str(&response.body).expect("list body should parse")
    }

    pub fn get(&self, id: &ArticleId) -> ApiGatewayResponse {
        handle_get_event(
            &json!({ "pathParameters": { "id": id.as_str() } }),
            &self.layout,
            &self.content_store,
        )
    }
}

pub fn published_id(response: &ApiGatewayResponse) -> ArticleId {
    assert_eq!(response.status_code, 200, "publish should succeed: {}", response.body);
    let body: PublishedArticleResponse =
        serde_json::from_str(&response.body).expect("publish body should parse");
    body.id
}
