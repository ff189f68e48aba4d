//! Vector search tool.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{path_segment, validate_range};
use crate::core::api::{ApiClient, ApiResult, json_response};
use crate::domains::tools::{ApiTool, ToolHints};

fn default_top_n() -> i64 {
    4
}

/// Parameters for a workspace vector search.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// Workspace slug to search in.
    pub slug: String,

    /// Search query.
    pub query: String,

    /// Number of results (1-20, default 4).
    #[serde(default = "default_top_n")]
    pub top_n: i64,

    /// Similarity score threshold (0-1). Lower = more results.
    #[serde(default)]
    pub score_threshold: Option<f64>,
}

/// Request body for `/vector-search`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VectorSearchRequest<'a> {
    query: &'a str,
    top_n: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    score_threshold: Option<f64>,
}

/// Finds the document chunks most similar to a query.
pub struct SearchTool;

#[async_trait]
impl ApiTool for SearchTool {
    type Params = SearchParams;

    const NAME: &'static str = "anythingllm_search";
    const DESCRIPTION: &'static str =
        "Search for relevant document chunks within a workspace using vector similarity.";
    const HINTS: ToolHints = ToolHints::READ_ONLY;

    async fn call(client: &ApiClient, params: SearchParams) -> ApiResult<String> {
        validate_range("top_n", params.top_n, 1, 20)?;
        if let Some(threshold) = params.score_threshold {
            validate_range("score_threshold", threshold, 0.0, 1.0)?;
        }
        let slug = path_segment("slug", &params.slug)?;

        let body = serde_json::to_value(VectorSearchRequest {
            query: &params.query,
            top_n: params.top_n,
            score_threshold: params.score_threshold,
        })?;
        let endpoint = format!("/workspace/{}/vector-search", slug);
        json_response(&client.post(&endpoint, &body).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::test_support::*;
    use crate::domains::tools::execute;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn search(top_n: i64, score_threshold: Option<f64>) -> SearchParams {
        SearchParams {
            slug: "demo".to_string(),
            query: "query".to_string(),
            top_n,
            score_threshold,
        }
    }

    #[test]
    fn test_top_n_defaults_to_four() {
        let params: SearchParams =
            serde_json::from_value(json!({ "slug": "demo", "query": "q" })).unwrap();
        assert_eq!(params.top_n, 4);
        assert!(params.score_threshold.is_none());
    }

    #[tokio::test]
    async fn test_rejects_invalid_top_n() {
        let result = execute::<SearchTool>(&unconfigured_client(), search(0, None)).await;
        assert!(is_error(&result));
        assert!(result_text(&result).contains("top_n must be between 1 and 20"));
    }

    #[tokio::test]
    async fn test_rejects_invalid_score_threshold() {
        let result = execute::<SearchTool>(&unconfigured_client(), search(4, Some(-0.1))).await;
        assert_eq!(
            result_text(&result),
            "Error: score_threshold must be between 0.0 and 1.0."
        );
    }

    #[tokio::test]
    async fn test_search_body_includes_threshold_when_set() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/workspace/demo/vector-search"))
            .and(body_json(json!({ "query": "query", "topN": 8, "scoreThreshold": 0.5 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{ "text": "chunk", "score": 0.91 }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = execute::<SearchTool>(&client(&server.uri()), search(8, Some(0.5))).await;
        assert!(!is_error(&result));
        assert!(result_text(&result).contains("chunk"));
    }

    #[tokio::test]
    async fn test_search_body_omits_threshold_when_unset() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/workspace/demo/vector-search"))
            .and(body_json(json!({ "query": "query", "topN": 4 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let result = execute::<SearchTool>(&client(&server.uri()), search(4, None)).await;
        assert!(!is_error(&result));
    }
}
