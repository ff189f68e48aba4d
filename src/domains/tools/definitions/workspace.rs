//! Workspace management tools.
//!
//! Workspaces are AnythingLLM's unit of isolation: each has its own
//! documents, settings, chat history and threads.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::common::{ChatMode, NoParams, path_segment, require_object, validate_range};
use crate::core::api::{ApiClient, ApiError, ApiResult, json_response};
use crate::domains::tools::{ApiTool, ToolHints};

// ============================================================================
// Parameters
// ============================================================================

/// Parameters identifying a single workspace.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WorkspaceSlugParams {
    /// Workspace slug (e.g. 'papers', 'lands').
    pub slug: String,
}

/// Parameters for creating a workspace.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateWorkspaceParams {
    /// Name for the new workspace.
    pub name: String,
}

/// Parameters for updating workspace settings.
///
/// Only the settings that are provided are sent to AnythingLLM.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkspaceParams {
    /// Workspace slug to update.
    #[serde(skip_serializing)]
    pub slug: String,

    /// New workspace name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// LLM temperature (0.0-1.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_ai_temp: Option<f64>,

    /// Chat history length (0-100).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_ai_history: Option<i64>,

    /// System prompt override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_ai_prompt: Option<String>,

    /// Similarity threshold (0.0-1.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity_threshold: Option<f64>,

    /// Top N results for context (1-20).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_n: Option<i64>,

    /// Chat mode: 'chat' or 'query'.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_mode: Option<ChatMode>,
}

impl UpdateWorkspaceParams {
    fn validate(&self) -> ApiResult<()> {
        if let Some(temp) = self.open_ai_temp {
            validate_range("openAiTemp", temp, 0.0, 1.0)?;
        }
        if let Some(history) = self.open_ai_history {
            validate_range("openAiHistory", history, 0, 100)?;
        }
        if let Some(threshold) = self.similarity_threshold {
            validate_range("similarityThreshold", threshold, 0.0, 1.0)?;
        }
        if let Some(top_n) = self.top_n {
            validate_range("topN", top_n, 1, 20)?;
        }
        Ok(())
    }
}

// ============================================================================
// Structured Output Types
// ============================================================================

/// Condensed view of a workspace as returned by `list_workspaces`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSummary {
    pub name: Value,
    pub slug: Value,
    pub chat_mode: Value,
    pub vector_search_mode: Value,
    pub threads: usize,
    pub created_at: Value,
}

impl WorkspaceSummary {
    fn from_workspace(workspace: &Map<String, Value>) -> Self {
        let field = |key: &str| workspace.get(key).cloned().unwrap_or(Value::Null);
        Self {
            name: field("name"),
            slug: field("slug"),
            chat_mode: workspace
                .get("chatMode")
                .cloned()
                .unwrap_or_else(|| json!("chat")),
            vector_search_mode: field("vectorSearchMode"),
            threads: workspace
                .get("threads")
                .and_then(Value::as_array)
                .map_or(0, Vec::len),
            created_at: field("createdAt"),
        }
    }
}

#[derive(Debug, Serialize)]
struct WorkspaceList {
    total: usize,
    workspaces: Vec<WorkspaceSummary>,
}

// ============================================================================
// Tool Definitions
// ============================================================================

/// Lists every workspace with a condensed summary.
pub struct ListWorkspacesTool;

#[async_trait]
impl ApiTool for ListWorkspacesTool {
    type Params = NoParams;

    const NAME: &'static str = "anythingllm_list_workspaces";
    const DESCRIPTION: &'static str = "List all workspaces in the AnythingLLM instance \
        with their slugs, settings, and thread info.";
    const HINTS: ToolHints = ToolHints::READ_ONLY;

    async fn call(client: &ApiClient, _params: NoParams) -> ApiResult<String> {
        let payload = require_object(client.get("/workspaces").await?, "/workspaces")?;

        let entries = match payload.get("workspaces") {
            None | Some(Value::Null) => &[][..],
            Some(Value::Array(list)) => list.as_slice(),
            Some(other) => return Err(ApiError::unexpected_shape("/workspaces", other)),
        };

        // Every entry must be a workspace object so `total` matches the API
        let workspaces = entries
            .iter()
            .map(|entry| {
                entry
                    .as_object()
                    .map(WorkspaceSummary::from_workspace)
                    .ok_or_else(|| ApiError::unexpected_shape("/workspaces", entry))
            })
            .collect::<ApiResult<Vec<_>>>()?;

        json_response(&WorkspaceList {
            total: workspaces.len(),
            workspaces,
        })
    }
}

/// Fetches the full record of one workspace.
pub struct GetWorkspaceTool;

#[async_trait]
impl ApiTool for GetWorkspaceTool {
    type Params = WorkspaceSlugParams;

    const NAME: &'static str = "anythingllm_get_workspace";
    const DESCRIPTION: &'static str = "Get detailed information about a specific workspace.";
    const HINTS: ToolHints = ToolHints::READ_ONLY;

    async fn call(client: &ApiClient, params: WorkspaceSlugParams) -> ApiResult<String> {
        let slug = path_segment("slug", &params.slug)?;
        json_response(&client.get(&format!("/workspace/{}", slug)).await?)
    }
}

pub struct CreateWorkspaceTool;

#[async_trait]
impl ApiTool for CreateWorkspaceTool {
    type Params = CreateWorkspaceParams;

    const NAME: &'static str = "anythingllm_create_workspace";
    const DESCRIPTION: &'static str = "Create a new workspace.";
    const HINTS: ToolHints = ToolHints::CREATE;

    async fn call(client: &ApiClient, params: CreateWorkspaceParams) -> ApiResult<String> {
        if params.name.trim().is_empty() {
            return Err(ApiError::invalid_argument("name must not be empty."));
        }
        let body = json!({ "name": params.name });
        json_response(&client.post("/workspace/new", &body).await?)
    }
}

/// Updates selected workspace settings.
pub struct UpdateWorkspaceTool;

#[async_trait]
impl ApiTool for UpdateWorkspaceTool {
    type Params = UpdateWorkspaceParams;

    const NAME: &'static str = "anythingllm_update_workspace";
    const DESCRIPTION: &'static str = "Update workspace settings \
        (name, temperature, prompt, similarity threshold, etc.).";
    const HINTS: ToolHints = ToolHints::UPDATE;

    async fn call(client: &ApiClient, params: UpdateWorkspaceParams) -> ApiResult<String> {
        params.validate()?;
        let slug = path_segment("slug", &params.slug)?;

        let updates = serde_json::to_value(&params)?;
        if updates.as_object().is_none_or(Map::is_empty) {
            return Err(ApiError::invalid_argument("No updates provided."));
        }

        let endpoint = format!("/workspace/{}/update", slug);
        json_response(&client.post(&endpoint, &updates).await?)
    }
}

pub struct DeleteWorkspaceTool;

#[async_trait]
impl ApiTool for DeleteWorkspaceTool {
    type Params = WorkspaceSlugParams;

    const NAME: &'static str = "anythingllm_delete_workspace";
    const DESCRIPTION: &'static str =
        "Permanently delete a workspace. This action cannot be undone.";
    const HINTS: ToolHints = ToolHints::DELETE;

    async fn call(client: &ApiClient, params: WorkspaceSlugParams) -> ApiResult<String> {
        let slug = path_segment("slug", &params.slug)?;
        client.delete(&format!("/workspace/{}", slug)).await?;
        Ok(format!("Workspace '{}' deleted successfully.", slug))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::test_support::*;
    use crate::domains::tools::execute;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn update_params(slug: &str) -> UpdateWorkspaceParams {
        serde_json::from_value(json!({ "slug": slug })).unwrap()
    }

    #[tokio::test]
    async fn test_list_workspaces_summarizes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/workspaces"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "workspaces": [
                    {
                        "name": "Papers",
                        "slug": "papers",
                        "vectorSearchMode": "default",
                        "openAiPrompt": "long prompt that is dropped",
                        "threads": [{ "slug": "t1" }, { "slug": "t2" }],
                        "createdAt": "2024-01-01T00:00:00Z"
                    },
                    { "name": "Lands", "slug": "lands", "chatMode": "query" }
                ]
            })))
            .mount(&server)
            .await;

        let result = execute::<ListWorkspacesTool>(&client(&server.uri()), NoParams {}).await;
        assert!(!is_error(&result));

        let value: Value = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(value["total"], 2);
        assert_eq!(value["workspaces"][0]["slug"], "papers");
        assert_eq!(value["workspaces"][0]["chatMode"], "chat");
        assert_eq!(value["workspaces"][0]["threads"], 2);
        assert!(value["workspaces"][0].get("openAiPrompt").is_none());
        assert_eq!(value["workspaces"][1]["chatMode"], "query");
        assert_eq!(value["workspaces"][1]["threads"], 0);
        assert_eq!(value["workspaces"][1]["createdAt"], Value::Null);
    }

    #[tokio::test]
    async fn test_list_workspaces_rejects_non_object() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/workspaces"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let result = execute::<ListWorkspacesTool>(&client(&server.uri()), NoParams {}).await;
        assert!(is_error(&result));
        assert!(result_text(&result).contains("Unexpected response type from '/workspaces'"));
    }

    #[tokio::test]
    async fn test_list_workspaces_rejects_non_object_entry() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/workspaces"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "workspaces": [{ "name": "Papers", "slug": "papers" }, "lands"]
            })))
            .mount(&server)
            .await;

        let result = execute::<ListWorkspacesTool>(&client(&server.uri()), NoParams {}).await;
        assert!(is_error(&result));
        assert_eq!(
            result_text(&result),
            "Error: Unexpected response type from '/workspaces'. Expected object, got string."
        );
    }

    #[tokio::test]
    async fn test_list_workspaces_missing_list_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/workspaces"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let result = execute::<ListWorkspacesTool>(&client(&server.uri()), NoParams {}).await;
        let value: Value = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(value["total"], 0);
    }

    #[tokio::test]
    async fn test_get_workspace_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/workspace/ghost"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "workspace": null })))
            .mount(&server)
            .await;

        let params = WorkspaceSlugParams {
            slug: "ghost".to_string(),
        };
        let result = execute::<GetWorkspaceTool>(&client(&server.uri()), params).await;
        assert!(is_error(&result));
        assert!(result_text(&result).contains("Resource not found. Check the slug or ID."));
    }

    #[tokio::test]
    async fn test_create_workspace_posts_name() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/workspace/new"))
            .and(body_json(json!({ "name": "Research" })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "workspace": { "slug": "research" }, "message": null })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let params = CreateWorkspaceParams {
            name: "Research".to_string(),
        };
        let result = execute::<CreateWorkspaceTool>(&client(&server.uri()), params).await;
        assert!(!is_error(&result));
        assert!(result_text(&result).contains("research"));
    }

    #[tokio::test]
    async fn test_update_workspace_sends_only_provided_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/workspace/papers/update"))
            .and(body_json(json!({ "openAiTemp": 0.2, "topN": 6, "chatMode": "query" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "workspace": {} })))
            .expect(1)
            .mount(&server)
            .await;

        let params: UpdateWorkspaceParams = serde_json::from_value(json!({
            "slug": "papers",
            "openAiTemp": 0.2,
            "topN": 6,
            "chatMode": "query"
        }))
        .unwrap();
        let result = execute::<UpdateWorkspaceTool>(&client(&server.uri()), params).await;
        assert!(!is_error(&result), "{}", result_text(&result));
    }

    #[tokio::test]
    async fn test_update_workspace_requires_changes() {
        let result =
            execute::<UpdateWorkspaceTool>(&unconfigured_client(), update_params("papers")).await;
        assert!(is_error(&result));
        assert_eq!(result_text(&result), "Error: No updates provided.");
    }

    #[tokio::test]
    async fn test_update_workspace_validates_ranges_first() {
        let mut params = update_params("papers");
        params.open_ai_history = Some(101);
        let result = execute::<UpdateWorkspaceTool>(&unconfigured_client(), params).await;
        assert!(is_error(&result));
        assert!(result_text(&result).contains("openAiHistory must be between 0 and 100"));

        let mut params = update_params("papers");
        params.similarity_threshold = Some(1.5);
        let result = execute::<UpdateWorkspaceTool>(&unconfigured_client(), params).await;
        assert_eq!(
            result_text(&result),
            "Error: similarityThreshold must be between 0.0 and 1.0."
        );
    }

    #[tokio::test]
    async fn test_delete_workspace_message() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/v1/workspace/papers"))
            .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
            .expect(1)
            .mount(&server)
            .await;

        let params = WorkspaceSlugParams {
            slug: "papers".to_string(),
        };
        let result = execute::<DeleteWorkspaceTool>(&client(&server.uri()), params).await;
        assert!(!is_error(&result));
        assert_eq!(result_text(&result), "Workspace 'papers' deleted successfully.");
    }

    #[tokio::test]
    async fn test_delete_workspace_rejects_path_injection() {
        let params = WorkspaceSlugParams {
            slug: "../system".to_string(),
        };
        let result = execute::<DeleteWorkspaceTool>(&unconfigured_client(), params).await;
        assert!(is_error(&result));
        assert!(result_text(&result).contains("slug must not contain"));
    }
}
