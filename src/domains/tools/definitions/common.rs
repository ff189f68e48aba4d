//! Common utilities shared across AnythingLLM tools.
//!
//! Parameter validation, path segment checks and shared parameter types.

use std::fmt::Debug;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::api::{ApiError, ApiResult};

/// Parameters for tools that take no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NoParams {}

/// How a workspace answers a chat message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChatMode {
    /// Uses document context and conversation history.
    #[default]
    Chat,
    /// Uses document context only.
    Query,
}

impl ChatMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Query => "query",
        }
    }
}

/// Reject values outside the inclusive range `[minimum, maximum]`.
///
/// NaN is rejected as well. Bounds use `Debug` so floats keep their
/// fractional part (`0.0`, not `0`).
pub fn validate_range<T>(name: &str, value: T, minimum: T, maximum: T) -> ApiResult<()>
where
    T: PartialOrd + Debug,
{
    if value >= minimum && value <= maximum {
        Ok(())
    } else {
        Err(ApiError::invalid_argument(format!(
            "{} must be between {:?} and {:?}.",
            name, minimum, maximum
        )))
    }
}

/// Check a slug before it is interpolated into an endpoint path.
pub fn path_segment<'a>(name: &str, value: &'a str) -> ApiResult<&'a str> {
    if value.trim().is_empty() {
        return Err(ApiError::invalid_argument(format!("{} must not be empty.", name)));
    }
    if value.contains(['/', '?', '#']) {
        return Err(ApiError::invalid_argument(format!(
            "{} must not contain '/', '?' or '#'.",
            name
        )));
    }
    Ok(value)
}

/// Require a JSON object payload from an endpoint.
pub fn require_object(payload: Value, endpoint: &str) -> ApiResult<Map<String, Value>> {
    match payload {
        Value::Object(map) => Ok(map),
        other => Err(ApiError::unexpected_shape(endpoint, &other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_range_inclusive() {
        assert!(validate_range("top_n", 1, 1, 20).is_ok());
        assert!(validate_range("top_n", 20, 1, 20).is_ok());
        assert!(validate_range("openAiTemp", 0.5, 0.0, 1.0).is_ok());
    }

    #[test]
    fn test_validate_range_message() {
        let err = validate_range("top_n", 0, 1, 20).unwrap_err();
        assert_eq!(err.to_string(), "top_n must be between 1 and 20.");
    }

    #[test]
    fn test_validate_range_float_bounds_keep_decimals() {
        let err = validate_range("openAiTemp", 1.5, 0.0, 1.0).unwrap_err();
        assert_eq!(err.to_string(), "openAiTemp must be between 0.0 and 1.0.");

        let err = validate_range("score_threshold", -0.1, 0.0, 1.0).unwrap_err();
        assert_eq!(err.to_string(), "score_threshold must be between 0.0 and 1.0.");
    }

    #[test]
    fn test_validate_range_rejects_nan() {
        assert!(validate_range("similarityThreshold", f64::NAN, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_path_segment() {
        assert_eq!(path_segment("slug", "papers").unwrap(), "papers");
        assert!(path_segment("slug", "").is_err());
        assert!(path_segment("slug", "  ").is_err());
        assert!(path_segment("slug", "a/b").is_err());
        assert!(path_segment("thread_slug", "x?y=1").is_err());
    }

    #[test]
    fn test_chat_mode_serde() {
        let mode: ChatMode = serde_json::from_value(json!("query")).unwrap();
        assert_eq!(mode, ChatMode::Query);
        assert_eq!(ChatMode::default().as_str(), "chat");
        assert!(serde_json::from_value::<ChatMode>(json!("stream")).is_err());
    }

    #[test]
    fn test_require_object() {
        assert!(require_object(json!({ "a": 1 }), "/x").is_ok());
        let err = require_object(json!("text"), "/system").unwrap_err();
        assert!(err.to_string().contains("got string"));
    }

    #[test]
    fn test_no_params_accepts_empty_object() {
        assert!(serde_json::from_value::<NoParams>(json!({})).is_ok());
    }
}
