//! Helpers for tool tests backed by a wiremock AnythingLLM instance.

use rmcp::model::{CallToolResult, RawContent};

use crate::core::api::ApiClient;
use crate::core::config::AnythingLlmConfig;

/// Client pointed at `base_url` with a test key.
pub fn client(base_url: &str) -> ApiClient {
    ApiClient::new(&AnythingLlmConfig {
        base_url: base_url.to_string(),
        api_key: "test-token".to_string(),
        timeout_secs: 5,
    })
    .unwrap()
}

/// Client with no API key configured.
pub fn unconfigured_client() -> ApiClient {
    ApiClient::new(&AnythingLlmConfig::default()).unwrap()
}

/// Text of the first content item.
pub fn result_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}

pub fn is_error(result: &CallToolResult) -> bool {
    result.is_error.unwrap_or(false)
}
