//! Authentication check tool.

use async_trait::async_trait;

use super::common::NoParams;
use crate::core::api::{ApiClient, ApiResult, json_response};
use crate::domains::tools::{ApiTool, ToolHints};

/// Verifies the API key against `/auth`.
pub struct CheckAuthTool;

#[async_trait]
impl ApiTool for CheckAuthTool {
    type Params = NoParams;

    const NAME: &'static str = "anythingllm_check_auth";
    const DESCRIPTION: &'static str =
        "Verify that the API key is valid and AnythingLLM is reachable.";
    const HINTS: ToolHints = ToolHints::READ_ONLY;

    async fn call(client: &ApiClient, _params: NoParams) -> ApiResult<String> {
        json_response(&client.get("/auth").await?)
    }
}
