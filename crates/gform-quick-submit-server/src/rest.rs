//! HTTP API and demo page.
//!
//! Routes:
//! - `GET  /`                 embedded demo page
//! - `GET  /health`           liveness
//! - `GET  /api/parse-form`   scrape entry IDs from `?url=`
//! - `GET  /api/snippet`      entries plus a ready-to-paste submit snippet
//! - `GET  /api/sample-form`  links for the configured demo form
//! - `POST /api/contact`      validate and submit the demo contact form

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use gform_quick_submit::{
    form_links, render_snippet, FormEntry, GformClient, GformResult, SubmitRequest,
    SubmitResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};

use crate::config::{ContactEntryIds, ServerConfig};
use crate::contact::ContactForm;
use crate::error::{ApiError, ApiResult};

/// Shared state passed to all handlers.
pub struct AppState {
    pub client: GformClient,
    pub contact_ids: ContactEntryIds,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> GformResult<Self> {
        Ok(Self {
            client: GformClient::new(config.client.clone())?,
            contact_ids: config.contact_ids.clone(),
        })
    }
}

/// Build the axum Router with all endpoints.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/parse-form", get(parse_form))
        .route("/api/snippet", get(snippet))
        .route("/api/sample-form", get(sample_form))
        .route("/api/contact", post(contact))
        .layer(cors)
        .with_state(state)
}

/// Run the server until the listener fails.
pub async fn start(config: ServerConfig) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(&config)?);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);
    if config.client.default_form_url.is_none() {
        tracing::warn!("No default form URL configured; /api/contact will fail");
    }

    axum::serve(listener, app).await?;
    Ok(())
}

// ── Handlers ────────────────────────────────────────────────────

async fn index() -> impl IntoResponse {
    Html(include_str!("demo.html"))
}

async fn health() -> Json<Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[derive(Deserialize, Default)]
struct FormUrlParams {
    url: Option<String>,
}

impl FormUrlParams {
    fn required(self) -> ApiResult<String> {
        self.url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .ok_or(ApiError::MissingUrl)
    }
}

async fn scrape(state: &AppState, params: FormUrlParams) -> ApiResult<Vec<FormEntry>> {
    let url = params.required()?;
    state
        .client
        .fetch_entries(&url)
        .await
        .map_err(ApiError::ParseFailed)
}

async fn parse_form(
    Query(params): Query<FormUrlParams>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<FormEntry>>> {
    scrape(&state, params).await.map(Json)
}

#[derive(Serialize)]
struct SnippetBody {
    entries: Vec<FormEntry>,
    snippet: String,
}

async fn snippet(
    Query(params): Query<FormUrlParams>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<SnippetBody>> {
    let entries = scrape(&state, params).await?;
    let snippet = render_snippet(&entries);
    Ok(Json(SnippetBody { entries, snippet }))
}

async fn sample_form(State(state): State<Arc<AppState>>) -> Json<Value> {
    match state.client.config().default_form_url.as_deref() {
        Some(url) => {
            let links = form_links(url);
            Json(serde_json::json!({
                "configured": true,
                "view": links.view,
                "analytics": links.analytics,
            }))
        }
        None => Json(serde_json::json!({ "configured": false })),
    }
}

async fn contact(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ContactForm>,
) -> ApiResult<Response> {
    let items = form.into_items(&state.contact_ids)?;
    let resp: SubmitResponse = state.client.submit(&SubmitRequest::new(items)).await;

    let status = if resp.success {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };
    Ok((status, Json(resp)).into_response())
}
