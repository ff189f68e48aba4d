//! System administration tools.
//!
//! Settings, vector statistics, chat export, embed widgets and the
//! OpenAI-compatible model listing.

use async_trait::async_trait;
use serde_json::{Map, Value, json};

use super::common::{NoParams, require_object};
use crate::core::api::{ApiClient, ApiResult, json_response};
use crate::domains::tools::{ApiTool, ToolHints};

/// Settings that are safe to expose; everything else (credentials,
/// provider keys) is dropped.
pub const SAFE_SETTING_KEYS: &[&str] = &[
    "LLMProvider",
    "LLMModel",
    "VectorDB",
    "EmbeddingEngine",
    "EmbeddingModelPref",
    "EmbeddingModelMaxChunkLength",
    "MultiUserMode",
    "DisableTelemetry",
    "WhisperProvider",
    "TextToSpeechProvider",
    "OllamaLLMBasePath",
    "OllamaLLMModelPref",
];

/// Keep only whitelisted, non-null settings.
fn filter_settings(settings: &Map<String, Value>) -> Map<String, Value> {
    SAFE_SETTING_KEYS
        .iter()
        .filter_map(|key| match settings.get(*key) {
            Some(Value::Null) | None => None,
            Some(value) => Some((key.to_string(), value.clone())),
        })
        .collect()
}

pub struct GetSystemSettingsTool;

#[async_trait]
impl ApiTool for GetSystemSettingsTool {
    type Params = NoParams;

    const NAME: &'static str = "anythingllm_get_system_settings";
    const DESCRIPTION: &'static str =
        "Get AnythingLLM system settings (LLM provider, vector DB, embeddings, etc.).";
    const HINTS: ToolHints = ToolHints::READ_ONLY;

    async fn call(client: &ApiClient, _params: NoParams) -> ApiResult<String> {
        let payload = require_object(client.get("/system").await?, "/system")?;
        let filtered = payload
            .get("settings")
            .and_then(Value::as_object)
            .map(filter_settings)
            .unwrap_or_default();

        json_response(&json!({ "settings": filtered }))
    }
}

pub struct GetVectorCountTool;

#[async_trait]
impl ApiTool for GetVectorCountTool {
    type Params = NoParams;

    const NAME: &'static str = "anythingllm_get_vector_count";
    const DESCRIPTION: &'static str = "Get the total number of vectors stored in the system.";
    const HINTS: ToolHints = ToolHints::READ_ONLY;

    async fn call(client: &ApiClient, _params: NoParams) -> ApiResult<String> {
        json_response(&client.get("/system/vector-count").await?)
    }
}

pub struct ExportChatsTool;

#[async_trait]
impl ApiTool for ExportChatsTool {
    type Params = NoParams;

    const NAME: &'static str = "anythingllm_export_chats";
    const DESCRIPTION: &'static str = "Export all chat logs from all workspaces.";
    const HINTS: ToolHints = ToolHints::READ_ONLY;

    async fn call(client: &ApiClient, _params: NoParams) -> ApiResult<String> {
        json_response(&client.get("/system/export-chats").await?)
    }
}

/// Lists public chat widget configurations.
pub struct ListEmbedsTool;

#[async_trait]
impl ApiTool for ListEmbedsTool {
    type Params = NoParams;

    const NAME: &'static str = "anythingllm_list_embeds";
    const DESCRIPTION: &'static str = "List all embed configurations (public chat widgets).";
    const HINTS: ToolHints = ToolHints::READ_ONLY;

    async fn call(client: &ApiClient, _params: NoParams) -> ApiResult<String> {
        json_response(&client.get("/embed").await?)
    }
}

pub struct ListModelsTool;

#[async_trait]
impl ApiTool for ListModelsTool {
    type Params = NoParams;

    const NAME: &'static str = "anythingllm_list_models";
    const DESCRIPTION: &'static str =
        "List available models via the OpenAI-compatible endpoint.";
    const HINTS: ToolHints = ToolHints::READ_ONLY;

    async fn call(client: &ApiClient, _params: NoParams) -> ApiResult<String> {
        json_response(&client.get("/openai/models").await?)
    }
}
