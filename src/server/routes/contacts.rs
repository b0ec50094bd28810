use crate::db::models::ContactRow;
use crate::error::FolioError;
use crate::server::guards::auth::RequireAdminAuth;
use crate::server::router::FolioState;
use axum::{
    Json,
    extract::{Path, State},
};
use folio_schema::NewContact;
use serde_json::{Value, json};
use tracing::warn;

/// GET /api/contacts
///
/// Lists only `is_public` entries, in link ordering. Private entries are
/// stored but never served here. Storage failures degrade to an empty list.
pub async fn list_contacts(State(state): State<FolioState>) -> Json<Vec<ContactRow>> {
    match state.store.list_public_contacts().await {
        Ok(rows) => Json(rows),
        Err(error) => {
            warn!(%error, "contact listing failed, serving empty list");
            Json(Vec::new())
        }
    }
}

/// POST /api/contacts (admin)
pub async fn add_contact(
    State(state): State<FolioState>,
    _auth: RequireAdminAuth,
    Json(contact): Json<NewContact>,
) -> Result<Json<Value>, FolioError> {
    if contact.kind.is_empty() || contact.value.is_empty() {
        return Err(FolioError::Validation(
            "Type and value are required".to_string(),
        ));
    }

    let id = state.store.insert_contact(&contact).await?;

    Ok(Json(json!({ "success": true, "id": id })))
}

/// DELETE /api/contacts/{id} (admin)
pub async fn delete_contact(
    State(state): State<FolioState>,
    Path(id): Path<i64>,
    _auth: RequireAdminAuth,
) -> Result<Json<Value>, FolioError> {
    state.store.delete_contact(id).await?;

    Ok(Json(json!({ "success": true })))
}
