//! Tool handlers module.
//!
//! Every AnythingLLM tool implements [`ApiTool`]. The generic functions here
//! turn an implementation into rmcp metadata, an rmcp route and an HTTP
//! handler, and normalize its outcome into a `CallToolResult`.

use std::sync::Arc;

use async_trait::async_trait;
use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, JsonObject, Tool, ToolAnnotations},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use tracing::{info, instrument, warn};

use super::error::ToolError;
use crate::core::api::{ApiClient, ApiResult};

/// Behavioural hints advertised to clients through tool annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolHints {
    pub read_only: bool,
    pub destructive: bool,
    pub idempotent: bool,
    pub open_world: bool,
}

impl ToolHints {
    /// Reads state, safe to repeat.
    pub const READ_ONLY: Self = Self {
        read_only: true,
        destructive: false,
        idempotent: true,
        open_world: false,
    };

    /// Creates something new on every call.
    pub const CREATE: Self = Self {
        read_only: false,
        destructive: false,
        idempotent: false,
        open_world: false,
    };

    /// Overwrites state; repeating the call has no further effect.
    pub const UPDATE: Self = Self {
        read_only: false,
        destructive: false,
        idempotent: true,
        open_world: false,
    };

    /// Permanently removes state.
    pub const DELETE: Self = Self {
        read_only: false,
        destructive: true,
        idempotent: false,
        open_world: false,
    };

    /// Mark the tool as reaching outside the AnythingLLM instance.
    pub const fn open_world(self) -> Self {
        Self {
            open_world: true,
            ..self
        }
    }

    /// Convert into rmcp annotations.
    pub fn to_annotations(self) -> ToolAnnotations {
        ToolAnnotations {
            title: None,
            read_only_hint: Some(self.read_only),
            destructive_hint: Some(self.destructive),
            idempotent_hint: Some(self.idempotent),
            open_world_hint: Some(self.open_world),
        }
    }
}

/// A tool backed by one AnythingLLM endpoint.
#[async_trait]
pub trait ApiTool: Send + Sync + 'static {
    /// Parameters decoded from the tool call arguments.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Behavioural hints.
    const HINTS: ToolHints;

    /// Validate the parameters, call the API and render the response text.
    async fn call(client: &ApiClient, params: Self::Params) -> ApiResult<String>;
}

/// Create a Tool model for a tool (metadata).
pub fn to_tool<T: ApiTool>() -> Tool {
    Tool {
        name: T::NAME.into(),
        description: Some(T::DESCRIPTION.into()),
        input_schema: cached_schema_for_type::<T::Params>(),
        annotations: Some(T::HINTS.to_annotations()),
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Decode raw call arguments into the tool's parameters.
pub fn parse_params<T: ApiTool>(arguments: JsonObject) -> Result<T::Params, ToolError> {
    serde_json::from_value(serde_json::Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Run a tool and normalize the outcome.
///
/// Failures never escape as protocol errors: they become an error result
/// whose text starts with `Error: `.
#[instrument(skip_all, fields(tool = T::NAME))]
pub async fn execute<T: ApiTool>(client: &ApiClient, params: T::Params) -> CallToolResult {
    info!("Tool called: {}", T::NAME);

    match T::call(client, params).await {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => {
            warn!("{} failed: {}", T::NAME, e);
            CallToolResult::error(vec![Content::text(e.to_tool_text())])
        }
    }
}

/// Create a ToolRoute for STDIO/TCP transport.
pub fn create_route<T, S>(client: Arc<ApiClient>) -> ToolRoute<S>
where
    T: ApiTool,
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(to_tool::<T>(), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let client = client.clone();
        async move {
            let params = parse_params::<T>(args)
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
            Ok(execute::<T>(&client, params).await)
        }
        .boxed()
    })
}

/// HTTP handler for a tool (for HTTP transport).
#[cfg(feature = "http")]
pub async fn http_handler<T: ApiTool>(
    arguments: serde_json::Value,
    client: &ApiClient,
) -> Result<serde_json::Value, ToolError> {
    let arguments = match arguments {
        serde_json::Value::Object(map) => map,
        serde_json::Value::Null => JsonObject::new(),
        other => {
            return Err(ToolError::invalid_arguments(format!(
                "arguments must be an object, got {}",
                crate::core::api::json_kind(&other)
            )));
        }
    };
    let params = parse_params::<T>(arguments)?;
    let result = execute::<T>(client, params).await;

    Ok(serde_json::to_value(&result)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_presets() {
        assert!(ToolHints::READ_ONLY.read_only);
        assert!(ToolHints::READ_ONLY.idempotent);
        assert!(ToolHints::DELETE.destructive);
        assert!(!ToolHints::DELETE.idempotent);
        assert!(ToolHints::UPDATE.idempotent);
        assert!(!ToolHints::CREATE.idempotent);
        assert!(ToolHints::CREATE.open_world().open_world);
    }

    #[test]
    fn test_hints_to_annotations() {
        let annotations = ToolHints::DELETE.to_annotations();
        assert_eq!(annotations.read_only_hint, Some(false));
        assert_eq!(annotations.destructive_hint, Some(true));
        assert_eq!(annotations.idempotent_hint, Some(false));
        assert_eq!(annotations.open_world_hint, Some(false));
    }
}
