//! Workspace chat tools.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use super::common::{ChatMode, path_segment};
use super::workspace::WorkspaceSlugParams;
use crate::core::api::{ApiClient, ApiError, ApiResult, json_response};
use crate::domains::tools::{ApiTool, ToolHints};

/// Parameters for sending a chat message to a workspace.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ChatParams {
    /// Workspace slug.
    pub slug: String,

    /// Message to send.
    pub message: String,

    /// 'chat' (context + history) or 'query' (documents only).
    #[serde(default)]
    pub mode: ChatMode,
}

/// Reject blank chat messages before they reach the LLM.
pub(super) fn require_message(message: &str) -> ApiResult<()> {
    if message.trim().is_empty() {
        Err(ApiError::invalid_argument("message must not be empty."))
    } else {
        Ok(())
    }
}

/// Sends a message to a workspace.
pub struct ChatTool;

#[async_trait]
impl ApiTool for ChatTool {
    type Params = ChatParams;

    const NAME: &'static str = "anythingllm_chat";
    const DESCRIPTION: &'static str = "Send a message to a workspace and get a response. \
        Mode 'chat' uses document context + conversation history. \
        Mode 'query' uses only document context (no history).";
    const HINTS: ToolHints = ToolHints::CREATE;

    async fn call(client: &ApiClient, params: ChatParams) -> ApiResult<String> {
        let slug = path_segment("slug", &params.slug)?;
        require_message(&params.message)?;

        let body = json!({ "message": params.message, "mode": params.mode.as_str() });
        json_response(&client.post(&format!("/workspace/{}/chat", slug), &body).await?)
    }
}

pub struct GetChatHistoryTool;

#[async_trait]
impl ApiTool for GetChatHistoryTool {
    type Params = WorkspaceSlugParams;

    const NAME: &'static str = "anythingllm_get_chat_history";
    const DESCRIPTION: &'static str = "Get the chat history for a workspace.";
    const HINTS: ToolHints = ToolHints::READ_ONLY;

    async fn call(client: &ApiClient, params: WorkspaceSlugParams) -> ApiResult<String> {
        let slug = path_segment("slug", &params.slug)?;
        json_response(&client.get(&format!("/workspace/{}/chats", slug)).await?)
    }
}
