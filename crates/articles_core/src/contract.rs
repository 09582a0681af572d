use serde::{Deserialize, Serialize};

use crate::identifiers::ArticleId;

/// Raw publish payload as decoded from the request body.
///
/// Both fields are optional at this layer so that absence can be reported as
/// a validation error instead of a decode failure. `null` decodes to `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublishArticleRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPublishRequest {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublishedArticleResponse {
    pub id: ArticleId,
}

/// One row of the article listing. Never carries content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleSummary {
    pub id: ArticleId,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

pub fn normalize_publish_request(
    payload: PublishArticleRequest,
) -> Result<NormalizedPublishRequest, ValidationError> {
    let (Some(title), Some(content)) = (payload.title, payload.content) else {
        return Err(ValidationError::new("Missing title or content"));
    };

    Ok(NormalizedPublishRequest { title, content })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_rejects_missing_title() {
        let request = PublishArticleRequest {
            title: None,
            content: Some("World".to_string()),
        };

        let error = normalize_publish_request(request).expect_err("request should fail");
        assert_eq!(error.message(), "Missing title or content");
    }

    #[test]
    fn normalize_rejects_missing_content() {
        let request = PublishArticleRequest {
            title: Some("Hello".to_string()),
            content: None,
        };

        assert!(normalize_publish_request(request).is_err());
    }

    #[test]
    fn normalize_accepts_empty_and_whitespace_titles() {
        for title in ["", "   "] {
            let request = PublishArticleRequest {
                title: Some(title.to_string()),
                content: Some("World".to_string()),
            };

            let normalized = normalize_publish_request(request).expect("request should pass");
            assert_eq!(normalized.title, title);
        }
    }

    #[test]
    fn normalize_keeps_empty_content_and_untrimmed_title() {
        let request = PublishArticleRequest {
            title: Some(" Hello ".to_string()),
            content: Some(String::new()),
        };

        let normalized = normalize_publish_request(request).expect("request should pass");
        assert_eq!(normalized.title, " Hello ");
        assert_eq!(normalized.content, "");
    }

    #[test]
    fn null_fields_decode_as_absent() {
        let request: PublishArticleRequest =
            serde_json::from_value(serde_json::json!({"title": null, "content": "x"}))
                .expect("payload should decode");

        assert_eq!(request.title, None);
        assert!(normalize_publish_request(request).is_err());
    }

    #[test]
    fn non_string_title_fails_to_decode() {
        let decoded = serde_json::from_value::<PublishArticleRequest>(
            serde_json::json!({"title": 42, "content": "x"}),
        );

        assert!(decoded.is_err());
    }
}
