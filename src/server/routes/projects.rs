use crate::db::models::ProjectRow;
use crate::error::FolioError;
use crate::server::router::FolioState;
use axum::{Json, extract::State};
use folio_schema::NewProject;
use serde_json::{Value, json};
use tracing::warn;

/// GET /api/projects
///
/// Newest first. Storage failures degrade to an empty list.
pub async fn list_projects(State(state): State<FolioState>) -> Json<Vec<ProjectRow>> {
    match state.store.list_projects().await {
        Ok(rows) => Json(rows),
        Err(error) => {
            warn!(%error, "project listing failed, serving empty list");
            Json(Vec::new())
        }
    }
}

/// POST /api/projects
///
/// TODO: add `RequireAdminAuth` here once the admin panel sends a credential
/// for project creation; the route currently accepts unauthenticated writes,
/// unlike every other mutation.
pub async fn add_project(
    State(state): State<FolioState>,
    Json(project): Json<NewProject>,
) -> Result<Json<Value>, FolioError> {
    if project.title.is_empty() {
        return Err(FolioError::Validation("Title is required".to_string()));
    }

    state.store.insert_project(&project).await?;

    Ok(Json(json!({ "success": true })))
}
