//! Route handlers for the visualization API.
//!
//! Every `/api/` route answers HTTP 200 with either the requested payload or
//! an `{"error": ...}` object; the front-end client branches on the `error`
//! field, not the status code. Routes are registered with `any()` so a
//! non-GET request gets the structured payload instead of a bare 405.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use serde_json::json;
use tracing::{debug, error};

use atlas_graph::driver::GraphDriver;
use atlas_graph::search::precise_search;

use crate::datasets::{DatasetStore, SurfaceKind};
use crate::histogram::histogram;

/// Shared handler state; everything is read-only behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub driver: Arc<dyn GraphDriver>,
    pub datasets: Arc<DatasetStore>,
    pub histogram_bins: usize,
}

/// Build the application router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/brain-surface/", any(brain_surface))
        .route("/api/benchmark/", any(benchmark))
        .route("/api/region-detail/", any(region_detail))
        .route("/api/search-neo4j/", any(search_neo4j))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .with_state(state)
}

type Params = HashMap<String, String>;

// ─── Helpers ──────────────────────────────────────────────────────────────────

fn err(msg: &str) -> Response {
    Json(json!({ "error": msg })).into_response()
}

fn param<'a>(params: &'a Params, key: &str) -> Option<&'a str> {
    params.get(key).map(String::as_str)
}

// ─── Handlers ─────────────────────────────────────────────────────────────────

/// `GET /api/brain-surface/?type=<mesh|annotation>&name=<name>` — serve a
/// precomputed geometry or annotation blob verbatim.
async fn brain_surface(
    method: Method,
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Response {
    if method != Method::GET {
        return err("GET request required.");
    }

    let kind = match param(&params, "type") {
        Some("mesh") => SurfaceKind::Mesh,
        Some("annotation") => SurfaceKind::Annotation,
        _ => return err("type must be mesh or annotation"),
    };

    // A missing name falls through the membership check like any other
    // invalid value.
    let name = param(&params, "name").unwrap_or("");
    if !kind.valid_names().contains(&name) {
        return match kind {
            SurfaceKind::Mesh => err("mesh name must be inflated, pial, white or orig"),
            SurfaceKind::Annotation => {
                err("annotation name must be aparc, brodmann or shaefer-400-7")
            }
        };
    }

    debug!(kind = ?kind, name = %name, "brain-surface request");

    match state.datasets.brain_surface(kind, name).await {
        Ok(blob) => Json(blob).into_response(),
        Err(e) => {
            error!(name = %name, error = %e, "brain-surface dataset read failed");
            err("dataset unavailable")
        }
    }
}

/// `GET /api/benchmark/?name=<name>` — bin the named benchmark samples into
/// a histogram.
async fn benchmark(
    method: Method,
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Response {
    if method != Method::GET {
        return err("GET request required.");
    }

    let name = match param(&params, "name") {
        Some(name) => name,
        None => return err("name must be given"),
    };

    debug!(name = %name, "benchmark request");

    match state.datasets.benchmark_samples(name).await {
        Ok(Some(samples)) => Json(histogram(&samples, state.histogram_bins)).into_response(),
        Ok(None) => err("benchmark name not found"),
        Err(e) => {
            error!(name = %name, error = %e, "benchmark dataset read failed");
            err("dataset unavailable")
        }
    }
}

/// `GET /api/region-detail/?name=<name>` — dictionary lookup of a region's
/// metadata.
async fn region_detail(
    method: Method,
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Response {
    if method != Method::GET {
        return err("GET request required.");
    }

    let name = match param(&params, "name") {
        Some(name) => name,
        None => return err("name must be given"),
    };

    debug!(name = %name, "region-detail request");

    match state.datasets.region_detail(name).await {
        Ok(Some(detail)) => Json(detail).into_response(),
        Ok(None) => err("region name not found"),
        Err(e) => {
            error!(name = %name, error = %e, "region-detail dataset read failed");
            err("dataset unavailable")
        }
    }
}

/// `GET /api/search-neo4j/?type=precise&name=<name>` — star-shaped
/// neighborhood of the named graph node.
async fn search_neo4j(
    method: Method,
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Response {
    if method != Method::GET {
        return err("GET request required.");
    }

    if param(&params, "type") != Some("precise") {
        return err("type must be precise");
    }

    let name = match param(&params, "name") {
        Some(name) => name,
        None => return err("name must be given"),
    };

    debug!(name = %name, "neighborhood search request");

    match precise_search(state.driver.as_ref(), name).await {
        Ok(Some(neighborhood)) => Json(neighborhood).into_response(),
        Ok(None) => err("no result"),
        Err(e) => {
            error!(name = %name, error = %e, "neighborhood search failed");
            err("graph store unavailable")
        }
    }
}

/// Liveness probe — returns 200 as long as the process is running.
async fn health() -> impl IntoResponse {
    StatusCode::OK
}

/// Readiness probe — returns 200 if the dataset directory is accessible and
/// the graph store answers a ping.
async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let datasets_ok = matches!(
        tokio::fs::metadata(state.datasets.root()).await,
        Ok(meta) if meta.is_dir()
    );

    if datasets_ok && state.driver.ping().await.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}
