//! Article creation across the metadata and content stores.
//!
//! There is no cross-store transaction. The metadata row is written first and
//! the body second, with no compensation if the second write fails. A failure
//! in between leaves a listed article whose content is missing; the opposite
//! case (content that no listing can reach) never arises from this handler.

use std::time::Instant;

use articles_core::contract::{
    normalize_publish_request, PublishArticleRequest, PublishedArticleResponse,
};
use articles_core::identifiers::IdentifierGenerator;
use articles_core::storage_keys::StorageLayout;
use serde_json::{json, Value};

use crate::adapters::{ContentStore, MetadataStore};
use crate::handlers::apigw::{
    internal_error_response, normalize_apigw_event, success_response, validation_error_response,
    ApiGatewayResponse,
};
use crate::logging::{log_error, log_info};

const COMPONENT: &str = "publish_handler";
const PUBLISH_FAILED_MESSAGE: &str = "Failed to publish article";

pub fn handle_publish_event(
    event: Value,
    layout: &StorageLayout,
    identifiers: &impl IdentifierGenerator,
    metadata_store: &impl MetadataStore,
    content_store: &impl ContentStore,
) -> ApiGatewayResponse {
    let started_at = Instant::now();

    let payload = match normalize_apigw_event(event) {
        Ok(value) => value,
        Err(message) => return reject(&message),
    };

    let request = match serde_json::from_value::<PublishArticleRequest>(payload) {
        Ok(value) => value,
        Err(error) => return reject(&format!("Malformed request: {error}")),
    };

    let normalized = match normalize_publish_request(request) {
        Ok(value) => value,
        Err(error) => return reject(error.message()),
    };

    let id = identifiers.generate();
    let record = layout.metadata_record(&id, &normalized.title);

    if let Err(error) = metadata_store.put(
        &record.partition_key,
        id.as_str(),
        &record.attributes(),
    ) {
        log_error(
            COMPONENT,
            "metadata_write_failed",
            json!({
                "id": id.as_str(),
                "partition_key": record.partition_key,
                "retryable": error.is_retryable(),
                "error": error.to_string(),
            }),
        );
        return internal_error_response(PUBLISH_FAILED_MESSAGE);
    }

    let content_key = layout.content_object_key(&id);
    if let Err(error) = content_store.put_object(&content_key, normalized.content.as_bytes()) {
        log_error(
            COMPONENT,
            "content_write_failed",
            json!({
                "id": id.as_str(),
                "content_key": content_key,
                "inconsistency": "metadata_without_content",
                "retryable": error.is_retryable(),
                "error": error.to_string(),
            }),
        );
        return internal_error_response(PUBLISH_FAILED_MESSAGE);
    }

    log_info(
        COMPONENT,
        "article_published",
        json!({
            "id": id.as_str(),
            "content_bytes": normalized.content.len(),
            "duration_ms": started_at.elapsed().as_millis(),
        }),
    );
    success_response(200, PublishedArticleResponse { id })
}

fn reject(message: &str) -> ApiGatewayResponse {
    log_info(COMPONENT, "publish_rejected", json!({ "reason": message }));
    validation_error_response(message)
}
