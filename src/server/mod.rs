//! HTTP API for word ladder queries.
//!
//! Routes map one-to-one onto the [`query`](crate::query) functions. The
//! registry is loaded before the listener binds and is shared read-only
//! across requests.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::graph::GraphRegistry;
use crate::query::{
    self, ErrorResponse, NeighborsResponse, PathResponse, QueryContext, QueryError,
    ReachableResponse, WordsResponse,
};
use crate::solve::{GraphStats, SearchOrder};

/// Shared state handed to every handler.
pub struct ServerState {
    pub registry: GraphRegistry,
    pub min_length: usize,
    pub max_length: usize,
}

impl ServerState {
    pub fn new(registry: GraphRegistry, min_length: usize, max_length: usize) -> Self {
        Self {
            registry,
            min_length,
            max_length,
        }
    }

    fn query(&self) -> QueryContext<'_> {
        QueryContext::new(&self.registry, self.min_length, self.max_length)
    }
}

type AppState = Arc<ServerState>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind listener on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Bind `addr` and serve until ctrl-c.
pub async fn serve(state: ServerState, addr: SocketAddr) -> Result<(), ServerError> {
    let state = Arc::new(state);
    let app = build_router(Arc::clone(&state));
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(
        %addr,
        words = state.registry.word_count(),
        min_length = state.min_length,
        max_length = state.max_length,
        "word ladder server listening"
    );

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("word ladder server stopped");
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/path/:start/:end", get(path_handler))
        .route("/longpath/:start/:end", get(longpath_handler))
        .route("/neighbors/:word", get(neighbors_handler))
        .route("/reachable/:word", get(reachable_handler))
        .route("/stats/:length", get(stats_handler))
        .route("/words/:length", get(words_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    lengths: Vec<usize>,
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        lengths: state
            .registry
            .lengths()
            .filter(|&len| !state.registry.get(len).is_empty())
            .collect(),
    })
}

async fn path_handler(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<PathResponse>, AppError> {
    let response = query::ladder_path(&state.query(), &start, &end, SearchOrder::BreadthFirst)?;
    Ok(Json(response))
}

async fn longpath_handler(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<PathResponse>, AppError> {
    let response = query::ladder_path(&state.query(), &start, &end, SearchOrder::DepthFirst)?;
    Ok(Json(response))
}

async fn neighbors_handler(
    State(state): State<AppState>,
    Path(word): Path<String>,
) -> Result<Json<NeighborsResponse>, AppError> {
    Ok(Json(query::ladder_neighbors(&state.query(), &word)?))
}

async fn reachable_handler(
    State(state): State<AppState>,
    Path(word): Path<String>,
) -> Result<Json<ReachableResponse>, AppError> {
    Ok(Json(query::ladder_reachable(&state.query(), &word)?))
}

async fn stats_handler(
    State(state): State<AppState>,
    Path(length): Path<String>,
) -> Result<Json<GraphStats>, AppError> {
    Ok(Json(query::ladder_stats(&state.query(), &length)?))
}

async fn words_handler(
    State(state): State<AppState>,
    Path(length): Path<String>,
) -> Result<Json<WordsResponse>, AppError> {
    Ok(Json(query::ladder_words(&state.query(), &length)?))
}

#[derive(Debug, Error)]
#[error(transparent)]
struct AppError(#[from] QueryError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            QueryError::NotFound(_) => StatusCode::NOT_FOUND,
            QueryError::UnequalLengths
            | QueryError::LengthOutOfRange { .. }
            | QueryError::MalformedLength => StatusCode::BAD_REQUEST,
        };
        tracing::debug!(%status, error = %self.0, "query rejected");
        let body = Json(ErrorResponse {
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(err) => tracing::error!(?err, "failed to listen for shutdown signal"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        let mut registry = GraphRegistry::new();
        registry.insert(3, build(&["cat", "bat", "bag", "bog", "dog", "emu"]));
        build_router(Arc::new(ServerState::new(registry, 1, 8)))
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_path_route() {
        let (status, body) = get_json("/path/cat/DOG").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["length"], 5);
        assert_eq!(body["path"][0], "cat");
        assert_eq!(body["path"][4], "dog");
    }

    #[tokio::test]
    async fn test_longpath_without_route() {
        let (status, body) = get_json("/longpath/cat/emu").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["length"], 0);
        assert!(body["path"].is_null());
    }

    #[tokio::test]
    async fn test_path_unequal_lengths() {
        let (status, body) = get_json("/path/cat/cold").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Please provide two equal length words.");
    }

    #[tokio::test]
    async fn test_neighbors_not_found() {
        let (status, body) = get_json("/neighbors/zzz").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Starting word <zzz> not found in dictionary.");
    }

    #[tokio::test]
    async fn test_neighbors_route() {
        let (status, body) = get_json("/neighbors/bat").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["length"], 2);
        assert_eq!(body["neighbors"][0], "cat");
    }

    #[tokio::test]
    async fn test_reachable_route() {
        let (status, body) = get_json("/reachable/dog").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 5);
        assert!(body["percent_of_graph"].as_f64().unwrap() > 83.0);
    }

    #[tokio::test]
    async fn test_stats_route() {
        let (status, body) = get_json("/stats/3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["nodes"], 6);
        assert_eq!(body["edges"], 8);
        assert_eq!(body["singletons"]["words"][0], "emu");
    }

    #[tokio::test]
    async fn test_length_errors() {
        let (status, body) = get_json("/stats/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Please provide an integer word length.");

        let (status, body) = get_json("/words/12").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Please provide a word of length >= 1 and <= 8.");
    }

    #[tokio::test]
    async fn test_words_route() {
        let (status, body) = get_json("/words/3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 6);
    }

    #[tokio::test]
    async fn test_health_lists_loaded_lengths() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["lengths"], serde_json::json!([3]));
    }
}
