//! API Gateway proxy event and response envelope.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
    #[serde(rename = "isBase64Encoded", default)]
    pub is_base64_encoded: bool,
}

/// Extracts the JSON request object from a proxy event.
///
/// Events without a `body` field are treated as direct invocations and
/// returned unchanged.
pub fn normalize_apigw_event(event: Value) -> Result<Value, String> {
    let Some(object) = event.as_object() else {
        return Err("Request payload must be a JSON object".to_string());
    };

    let Some(body) = object.get("body") else {
        return Ok(event);
    };

    let base64_encoded = object
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    match body {
        Value::Null => Ok(json!({})),
        Value::Object(_) => Ok(body.clone()),
        Value::String(text) if base64_encoded => {
            let decoded = BASE64
                .decode(text)
                .map_err(|error| format!("Malformed base64 body: {error}"))?;
            serde_json::from_slice(&decoded).map_err(|error| format!("Malformed JSON body: {error}"))
        }
        Value::String(text) => {
            serde_json::from_str(text).map_err(|error| format!("Malformed JSON body: {error}"))
        }
        _ => Err("Request body must be a JSON object".to_string()),
    }
}

/// Reads `pathParameters.{name}`, falling back to a top-level `{name}` for
/// direct invocations. Values are passed through verbatim; only an empty
/// string counts as absent.
pub fn path_parameter(event: &Value, name: &str) -> Option<String> {
    event
        .get("pathParameters")
        .and_then(|parameters| parameters.get(name))
        .or_else(|| event.get(name))
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

pub fn success_response(status_code: u16, payload: impl Serialize) -> ApiGatewayResponse {
    match serde_json::to_string(&payload) {
        Ok(body) => ApiGatewayResponse {
            status_code,
            headers: json!({"Content-Type": "application/json"}),
            body,
            is_base64_encoded: false,
        },
        Err(error) => error_response(
            500,
            json!({
                "error": "serialization_error",
                "message": error.to_string(),
            }),
        ),
    }
}

/// Raw article bytes. UTF-8 goes out as text, anything else base64-encoded.
pub fn content_response(body: Vec<u8>) -> ApiGatewayResponse {
    match String::from_utf8(body) {
        Ok(text) => ApiGatewayResponse {
            status_code: 200,
            headers: json!({"Content-Type": "text/plain; charset=utf-8"}),
            body: text,
            is_base64_encoded: false,
        },
        Err(error) => ApiGatewayResponse {
            status_code: 200,
            headers: json!({"Content-Type": "application/octet-stream"}),
            body: BASE64.encode(error.into_bytes()),
            is_base64_encoded: true,
        },
    }
}

pub fn validation_error_response(message: &str) -> ApiGatewayResponse {
    error_response(
        400,
        json!({
            "error": "validation_error",
            "message": message,
        }),
    )
}

pub fn not_found_response(message: &str) -> ApiGatewayResponse {
    error_response(
        404,
        json!({
            "error": "not_found",
            "message": message,
        }),
    )
}

/// Generic server failure. Callers cannot act on which store failed, so the
/// message never says.
pub fn internal_error_response(message: &str) -> ApiGatewayResponse {
    error_response(
        500,
        json!({
            "error": "internal_error",
            "message": message,
        }),
    )
}

fn error_response(status_code: u16, payload: Value) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: json!({"Content-Type": "application/json"}),
        body: payload.to_string(),
        is_base64_encoded: false,
    }
}
