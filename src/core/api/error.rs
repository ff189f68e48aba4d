//! API error types.
//!
//! Every variant renders as the message shown to MCP clients; tool results
//! prefix it with `Error: `.

use serde_json::Value;
use thiserror::Error;

/// Result type for AnythingLLM API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors produced while talking to AnythingLLM or validating tool input.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No API key is configured; raised before any network call.
    #[error("ANYTHINGLLM_API_KEY is not set. Configure it before using this MCP server.")]
    MissingApiKey,

    /// The API answered with a non-success status.
    #[error("{message}\nDetails: {detail}")]
    Status {
        status: u16,
        message: String,
        detail: String,
    },

    /// The request exceeded the configured timeout.
    #[error("Request timed out. AnythingLLM may be busy or unreachable.")]
    Timeout,

    /// The AnythingLLM instance could not be reached.
    #[error("Cannot connect to AnythingLLM at {base_url}. Is it running?")]
    Connect { base_url: String },

    /// Any other transport-level failure.
    #[error("Request failed: {0}")]
    Request(String),

    /// The API returned a payload of an unexpected JSON kind.
    #[error("Unexpected response type from '{endpoint}'. Expected object, got {found}.")]
    UnexpectedShape {
        endpoint: String,
        found: &'static str,
    },

    /// A tool argument failed validation.
    #[error("{0}")]
    InvalidArgument(String),

    /// A response could not be serialized for the client.
    #[error("Failed to encode response: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    /// Build a status error from the response code and raw body.
    pub fn status(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            message: status_message(status),
            detail: render_detail(body),
        }
    }

    /// Create an "invalid argument" error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build a shape error for a payload that should have been an object.
    pub fn unexpected_shape(endpoint: impl Into<String>, payload: &Value) -> Self {
        Self::UnexpectedShape {
            endpoint: endpoint.into(),
            found: json_kind(payload),
        }
    }

    /// Classify a reqwest failure.
    pub fn from_reqwest(err: reqwest::Error, base_url: &str) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connect {
                base_url: base_url.to_string(),
            }
        } else {
            Self::Request(err.to_string())
        }
    }

    /// The text returned to the MCP client.
    pub fn to_tool_text(&self) -> String {
        format!("Error: {}", self)
    }
}

fn status_message(status: u16) -> String {
    match status {
        401 => "Authentication failed. Check your ANYTHINGLLM_API_KEY.".to_string(),
        403 => "Permission denied. Your API key may lack required permissions.".to_string(),
        404 => "Resource not found. Check the slug or ID.".to_string(),
        429 => "Rate limit exceeded. Wait before retrying.".to_string(),
        500 => "Internal server error in AnythingLLM. Check LLM provider connectivity.".to_string(),
        other => format!("API error (HTTP {}).", other),
    }
}

/// JSON objects are re-encoded compactly, anything else is kept verbatim.
fn render_detail(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value @ Value::Object(_)) => value.to_string(),
        _ => body.to_string(),
    }
}

/// Name of the JSON kind of a value, for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_api_key_message() {
        let text = ApiError::MissingApiKey.to_tool_text();
        assert!(text.starts_with("Error: "));
        assert!(text.contains("ANYTHINGLLM_API_KEY is not set"));
    }

    #[test]
    fn test_known_status_messages() {
        let cases = [
            (401, "Authentication failed"),
            (403, "Permission denied"),
            (404, "Resource not found"),
            (429, "Rate limit exceeded"),
            (500, "Internal server error in AnythingLLM"),
        ];
        for (status, expected) in cases {
            let text = ApiError::status(status, "").to_tool_text();
            assert!(text.contains(expected), "{} -> {}", status, text);
        }
    }

    #[test]
    fn test_unknown_status_message() {
        let text = ApiError::status(502, "bad gateway").to_tool_text();
        assert_eq!(text, "Error: API error (HTTP 502).\nDetails: bad gateway");
    }

    #[test]
    fn test_object_detail_is_compact_json() {
        let text = ApiError::status(404, r#"{ "error": "no such workspace" }"#).to_tool_text();
        assert!(text.ends_with(r#"Details: {"error":"no such workspace"}"#));
    }

    #[test]
    fn test_non_object_detail_kept_verbatim() {
        let text = ApiError::status(500, "[1, 2]").to_tool_text();
        assert!(text.ends_with("Details: [1, 2]"));
    }

    #[test]
    fn test_timeout_and_connect_messages() {
        assert!(ApiError::Timeout.to_tool_text().contains("Request timed out"));
        let err = ApiError::Connect {
            base_url: "http://localhost:3001".to_string(),
        };
        assert_eq!(
            err.to_tool_text(),
            "Error: Cannot connect to AnythingLLM at http://localhost:3001. Is it running?"
        );
    }

    #[test]
    fn test_unexpected_shape_message() {
        let err = ApiError::unexpected_shape("/workspaces", &json!([]));
        assert_eq!(
            err.to_tool_text(),
            "Error: Unexpected response type from '/workspaces'. Expected object, got array."
        );
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = ApiError::invalid_argument("No updates provided.");
        assert_eq!(err.to_tool_text(), "Error: No updates provided.");
    }
}
