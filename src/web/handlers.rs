//! HTTP request handlers

use super::state::AppState;
use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    Json,
};
use serde::{Deserialize, Serialize};

/// Incoming GraphQL request body
#[derive(Debug, Deserialize)]
pub struct GraphQLRequest {
    pub query: String,
    #[serde(rename = "operationName")]
    pub operation_name: Option<String>,
    pub variables: Option<serde_json::Value>,
}

/// Outgoing GraphQL response body
#[derive(Debug, Serialize)]
pub struct GraphQLResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<serde_json::Value>,
}

/// GraphQL query handler
pub async fn graphql(
    State(state): State<AppState>,
    Json(req): Json<GraphQLRequest>,
) -> Json<GraphQLResponse> {
    let mut request = async_graphql::Request::new(req.query);

    if let Some(operation_name) = req.operation_name {
        request = request.operation_name(operation_name);
    }

    if let Some(variables) = req.variables {
        if let Ok(variables) = serde_json::from_value(variables) {
            request = request.variables(variables);
        }
    }

    let response = state.schema.execute(request).await;

    Json(GraphQLResponse {
        data: Some(serde_json::to_value(&response.data).unwrap_or_default()),
        errors: response
            .errors
            .into_iter()
            .map(|e| serde_json::to_value(&e).unwrap_or_default())
            .collect(),
    })
}

/// GraphQL Playground UI handler
pub async fn playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

/// Health check handler
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "instance": state.instance_name(),
        "version": crate::VERSION
    }))
}
