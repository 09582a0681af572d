use articles_core::identifiers::ArticleId;
use articles_core::storage_keys::StorageLayout;
use serde_json::{json, Value};

use crate::adapters::ContentStore;
use crate::handlers::apigw::{
    content_response, internal_error_response, not_found_response, path_parameter,
    validation_error_response, ApiGatewayResponse,
};
use crate::logging::{log_error, log_info};

const COMPONENT: &str = "get_handler";

/// Serves article content straight from the content store. The metadata
/// store is not consulted, so content is returned even when no listing
/// record exists for the id.
pub fn handle_get_event(
    event: &Value,
    layout: &StorageLayout,
    content_store: &impl ContentStore,
) -> ApiGatewayResponse {
    let Some(raw_id) = path_parameter(event, "id") else {
        return validation_error_response("Missing article id");
    };
    let id = ArticleId::new(raw_id);
    let content_key = layout.content_object_key(&id);

    match content_store.get_object(&content_key) {
        Ok(Some(body)) => {
            log_info(
                COMPONENT,
                "article_fetched",
                json!({ "id": id.as_str(), "content_bytes": body.len() }),
            );
            content_response(body)
        }
        Ok(None) => {
            log_info(COMPONENT, "article_not_found", json!({ "id": id.as_str() }));
            not_found_response(&format!("Article {id} not found"))
        }
        Err(error) => {
            log_error(
                COMPONENT,
                "get_failed",
                json!({
                    "id": id.as_str(),
                    "content_key": content_key,
                    "error": error.to_string(),
                }),
            );
            internal_error_response("Failed to read article")
        }
    }
}
