//! Document and embedding tools.
//!
//! Documents are uploaded once into the instance's document store and then
//! embedded into workspaces through `update_embeddings`.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value, json};

use super::common::{NoParams, path_segment};
use crate::core::api::{ApiClient, ApiError, ApiResult, json_response};
use crate::domains::tools::{ApiTool, ToolHints};

/// Parameters for scraping a link.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UploadLinkParams {
    /// URL to scrape (must start with http:// or https://).
    pub link: String,
}

/// Parameters for uploading raw text.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UploadRawTextParams {
    /// Raw text content to upload.
    pub text_content: String,

    /// Document title.
    pub title: String,
}

/// Parameters for changing a workspace's embedded documents.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateEmbeddingsParams {
    /// Workspace slug.
    pub slug: String,

    /// Document paths to add (as listed by anythingllm_list_documents).
    #[serde(default)]
    pub adds: Option<Vec<String>>,

    /// Document names to remove.
    #[serde(default)]
    pub deletes: Option<Vec<String>>,
}

pub struct ListDocumentsTool;

#[async_trait]
impl ApiTool for ListDocumentsTool {
    type Params = NoParams;

    const NAME: &'static str = "anythingllm_list_documents";
    const DESCRIPTION: &'static str = "List all uploaded documents across all folders.";
    const HINTS: ToolHints = ToolHints::READ_ONLY;

    async fn call(client: &ApiClient, _params: NoParams) -> ApiResult<String> {
        json_response(&client.get("/documents").await?)
    }
}

pub struct GetAcceptedFileTypesTool;

#[async_trait]
impl ApiTool for GetAcceptedFileTypesTool {
    type Params = NoParams;

    const NAME: &'static str = "anythingllm_get_accepted_file_types";
    const DESCRIPTION: &'static str =
        "Get the list of file types that AnythingLLM accepts for upload.";
    const HINTS: ToolHints = ToolHints::READ_ONLY;

    async fn call(client: &ApiClient, _params: NoParams) -> ApiResult<String> {
        json_response(&client.get("/document/accepted-file-types").await?)
    }
}

/// Scrapes a web page into the document store. Reaches the open web.
pub struct UploadLinkTool;

#[async_trait]
impl ApiTool for UploadLinkTool {
    type Params = UploadLinkParams;

    const NAME: &'static str = "anythingllm_upload_link";
    const DESCRIPTION: &'static str =
        "Scrape a web page and upload it as a document to AnythingLLM.";
    const HINTS: ToolHints = ToolHints::CREATE.open_world();

    async fn call(client: &ApiClient, params: UploadLinkParams) -> ApiResult<String> {
        if !(params.link.starts_with("http://") || params.link.starts_with("https://")) {
            return Err(ApiError::invalid_argument(
                "Link must start with http:// or https://",
            ));
        }
        let body = json!({ "link": params.link });
        json_response(&client.post("/document/upload-link", &body).await?)
    }
}

pub struct UploadRawTextTool;

#[async_trait]
impl ApiTool for UploadRawTextTool {
    type Params = UploadRawTextParams;

    const NAME: &'static str = "anythingllm_upload_raw_text";
    const DESCRIPTION: &'static str = "Upload raw text content as a document to AnythingLLM.";
    const HINTS: ToolHints = ToolHints::CREATE;

    async fn call(client: &ApiClient, params: UploadRawTextParams) -> ApiResult<String> {
        let body = json!({
            "textContent": params.text_content,
            "metadata": { "title": params.title },
        });
        json_response(&client.post("/document/raw-text", &body).await?)
    }
}

pub struct UpdateEmbeddingsTool;

#[async_trait]
impl ApiTool for UpdateEmbeddingsTool {
    type Params = UpdateEmbeddingsParams;

    const NAME: &'static str = "anythingllm_update_embeddings";
    const DESCRIPTION: &'static str = "Add or remove document embeddings in a workspace. \
        Use document paths from anythingllm_list_documents.";
    const HINTS: ToolHints = ToolHints::UPDATE;

    async fn call(client: &ApiClient, params: UpdateEmbeddingsParams) -> ApiResult<String> {
        let slug = path_segment("slug", &params.slug)?;

        let mut body = Map::new();
        if let Some(adds) = params.adds.filter(|a| !a.is_empty()) {
            body.insert("adds".to_string(), json!(adds));
        }
        if let Some(deletes) = params.deletes.filter(|d| !d.is_empty()) {
            body.insert("deletes".to_string(), json!(deletes));
        }
        if body.is_empty() {
            return Err(ApiError::invalid_argument(
                "Provide at least 'adds' or 'deletes'.",
            ));
        }

        let endpoint = format!("/workspace/{}/update-embeddings", slug);
        json_response(&client.post(&endpoint, &Value::Object(body)).await?)
    }
}
