use crate::db::models::LinkRow;
use crate::error::FolioError;
use crate::server::guards::auth::RequireAdminAuth;
use crate::server::router::FolioState;
use axum::{
    Json,
    extract::{Path, State},
};
use folio_schema::{NewLink, normalize_url};
use serde_json::{Value, json};
use tracing::warn;

/// GET /api/links
///
/// Ordered by `sort_order` ascending, creation time breaking ties. Storage
/// failures degrade to an empty list.
pub async fn list_links(State(state): State<FolioState>) -> Json<Vec<LinkRow>> {
    match state.store.list_links().await {
        Ok(rows) => Json(rows),
        Err(error) => {
            warn!(%error, "link listing failed, serving empty list");
            Json(Vec::new())
        }
    }
}

/// POST /api/links (admin)
pub async fn add_link(
    State(state): State<FolioState>,
    _auth: RequireAdminAuth,
    Json(mut link): Json<NewLink>,
) -> Result<Json<Value>, FolioError> {
    if link.title.is_empty() || link.url.is_empty() {
        return Err(FolioError::Validation(
            "Title and URL are required".to_string(),
        ));
    }
    link.url = normalize_url(&link.url);

    let id = state.store.insert_link(&link).await?;

    Ok(Json(json!({ "success": true, "id": id })))
}

/// PUT /api/links/{id} (admin)
///
/// Overwrites every field of the row; the URL is normalized again so a
/// schemeless edit cannot undo canonicalization.
pub async fn update_link(
    State(state): State<FolioState>,
    Path(id): Path<i64>,
    _auth: RequireAdminAuth,
    Json(mut link): Json<NewLink>,
) -> Result<Json<Value>, FolioError> {
    link.url = normalize_url(&link.url);

    state.store.update_link(id, &link).await?;

    Ok(Json(json!({ "success": true })))
}

/// DELETE /api/links/{id} (admin)
pub async fn delete_link(
    State(state): State<FolioState>,
    Path(id): Path<i64>,
    _auth: RequireAdminAuth,
) -> Result<Json<Value>, FolioError> {
    state.store.delete_link(id).await?;

    Ok(Json(json!({ "success": true })))
}
