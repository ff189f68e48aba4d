//! Workspace thread tools.
//!
//! Threads keep separate conversation histories inside one workspace.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value, json};

use super::chat::require_message;
use super::common::{ChatMode, path_segment};
use crate::core::api::{ApiClient, ApiResult, json_response};
use crate::domains::tools::{ApiTool, ToolHints};

/// Parameters for creating a thread.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateThreadParams {
    /// Workspace slug.
    pub slug: String,

    /// Optional thread name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Parameters identifying a thread within a workspace.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ThreadParams {
    /// Workspace slug.
    pub slug: String,

    /// Thread slug.
    pub thread_slug: String,
}

/// Parameters for chatting inside a thread.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ThreadChatParams {
    /// Workspace slug.
    pub slug: String,

    /// Thread slug.
    pub thread_slug: String,

    /// Message to send.
    pub message: String,

    /// 'chat' or 'query'.
    #[serde(default)]
    pub mode: ChatMode,
}

fn thread_endpoint(slug: &str, thread_slug: &str) -> ApiResult<String> {
    Ok(format!(
        "/workspace/{}/thread/{}",
        path_segment("slug", slug)?,
        path_segment("thread_slug", thread_slug)?
    ))
}

pub struct CreateThreadTool;

#[async_trait]
impl ApiTool for CreateThreadTool {
    type Params = CreateThreadParams;

    const NAME: &'static str = "anythingllm_create_thread";
    const DESCRIPTION: &'static str = "Create a new chat thread within a workspace.";
    const HINTS: ToolHints = ToolHints::CREATE;

    async fn call(client: &ApiClient, params: CreateThreadParams) -> ApiResult<String> {
        let slug = path_segment("slug", &params.slug)?;

        let mut body = Map::new();
        if let Some(name) = params.name.filter(|n| !n.is_empty()) {
            body.insert("name".to_string(), Value::String(name));
        }

        let endpoint = format!("/workspace/{}/thread/new", slug);
        json_response(&client.post(&endpoint, &Value::Object(body)).await?)
    }
}

pub struct DeleteThreadTool;

#[async_trait]
impl ApiTool for DeleteThreadTool {
    type Params = ThreadParams;

    const NAME: &'static str = "anythingllm_delete_thread";
    const DESCRIPTION: &'static str = "Delete a chat thread from a workspace.";
    const HINTS: ToolHints = ToolHints::DELETE;

    async fn call(client: &ApiClient, params: ThreadParams) -> ApiResult<String> {
        client
            .delete(&thread_endpoint(&params.slug, &params.thread_slug)?)
            .await?;
        Ok(format!(
            "Thread '{}' deleted from workspace '{}'.",
            params.thread_slug, params.slug
        ))
    }
}

pub struct ChatInThreadTool;

#[async_trait]
impl ApiTool for ChatInThreadTool {
    type Params = ThreadChatParams;

    const NAME: &'static str = "anythingllm_chat_in_thread";
    const DESCRIPTION: &'static str = "Send a message within a specific workspace thread.";
    const HINTS: ToolHints = ToolHints::CREATE;

    async fn call(client: &ApiClient, params: ThreadChatParams) -> ApiResult<String> {
        let endpoint = format!("{}/chat", thread_endpoint(&params.slug, &params.thread_slug)?);
        require_message(&params.message)?;

        let body = json!({ "message": params.message, "mode": params.mode.as_str() });
        json_response(&client.post(&endpoint, &body).await?)
    }
}

pub struct GetThreadChatsTool;

#[async_trait]
impl ApiTool for GetThreadChatsTool {
    type Params = ThreadParams;

    const NAME: &'static str = "anythingllm_get_thread_chats";
    const DESCRIPTION: &'static str = "Get chat history for a specific thread in a workspace.";
    const HINTS: ToolHints = ToolHints::READ_ONLY;

    async fn call(client: &ApiClient, params: ThreadParams) -> ApiResult<String> {
        let endpoint = format!("{}/chats", thread_endpoint(&params.slug, &params.thread_slug)?);
        json_response(&client.get(&endpoint).await?)
    }
}
