use crate::db::{KvStore, Store};
use crate::server::routes::{auth, contacts, links, profile, projects};
use axum::{
    Json, Router,
    extract::Request,
    http::{Method, StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use serde_json::json;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, warn};

/// Immutable per-process state threaded into every handler.
///
/// Handlers keep no state of their own between calls; the two adapters share
/// one SQLite pool and the password is the only secret in the process.
#[derive(Clone)]
pub struct FolioState {
    pub kv: KvStore,
    pub store: Store,
    pub admin_password: Arc<str>,
}

impl FolioState {
    pub fn new(pool: SqlitePool, admin_password: Arc<str>) -> Self {
        Self {
            kv: KvStore::new(pool.clone()),
            store: Store::new(pool),
            admin_password,
        }
    }
}

async fn not_found_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not Found" })))
}

/// Uniform CORS policy for every route: any origin, the five verbs the API
/// speaks, JSON content plus the bearer header, preflight cached for a day.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(Duration::from_secs(86_400))
}

/// Answers any OPTIONS request with an empty 200 before route dispatch runs.
/// Browser preflights are already intercepted by the CORS layer above this;
/// this catches bare OPTIONS probes that would otherwise hit the router.
async fn preflight_ok(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    next.run(req).await
}

async fn access_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let start = Instant::now();
    let resp = next.run(req).await;

    let status = resp.status();
    let latency_ms = start.elapsed().as_millis() as u64;

    if status.is_server_error() {
        error!(
            "| {:>3} | {:^7} | {} | {}ms",
            status.as_u16(),
            method.as_str(),
            path,
            latency_ms
        );
    } else if status.is_client_error() {
        warn!(
            "| {:>3} | {:^7} | {} | {}ms",
            status.as_u16(),
            method.as_str(),
            path,
            latency_ms
        );
    } else {
        info!(
            "| {:>3} | {:^7} | {} | {}ms",
            status.as_u16(),
            method.as_str(),
            path,
            latency_ms
        );
    }

    resp
}

pub fn folio_router(state: FolioState) -> Router {
    Router::new()
        .route("/api/auth", post(auth::login))
        .route(
            "/api/profile",
            get(profile::get_profile).put(profile::update_profile),
        )
        .route(
            "/api/projects",
            get(projects::list_projects).post(projects::add_project),
        )
        .route("/api/links", get(links::list_links).post(links::add_link))
        .route(
            "/api/links/{id}",
            put(links::update_link).delete(links::delete_link),
        )
        .route(
            "/api/contacts",
            get(contacts::list_contacts).post(contacts::add_contact),
        )
        .route("/api/contacts/{id}", delete(contacts::delete_contact))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(middleware::from_fn(preflight_ok))
        .layer(middleware::from_fn(access_log))
        .layer(cors_layer())
}
