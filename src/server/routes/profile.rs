use crate::error::FolioError;
use crate::server::guards::auth::RequireAdminAuth;
use crate::server::router::FolioState;
use axum::{Json, extract::State};
use folio_schema::Profile;
use serde_json::{Value, json};
use tracing::warn;

/// Fixed key under which the singleton profile document lives.
const PROFILE_KEY: &str = "profile";

/// GET /api/profile
///
/// Returns the stored document as-is, or `{}` when nothing has been written
/// yet. Storage failures also degrade to `{}`.
pub async fn get_profile(State(state): State<FolioState>) -> Json<Value> {
    match state.kv.get(PROFILE_KEY).await {
        Ok(Some(profile)) => Json(profile),
        Ok(None) => Json(json!({})),
        Err(error) => {
            warn!(%error, "profile read failed, serving empty document");
            Json(json!({}))
        }
    }
}

/// PUT /api/profile (admin)
///
/// Overwrites the document wholesale; the last writer wins.
pub async fn update_profile(
    State(state): State<FolioState>,
    _auth: RequireAdminAuth,
    Json(profile): Json<Profile>,
) -> Result<Json<Value>, FolioError> {
    state
        .kv
        .put(PROFILE_KEY, &serde_json::to_value(&profile)?)
        .await?;

    Ok(Json(json!({ "success": true })))
}
