use crate::server::router::FolioState;
use crate::token;
use axum::extract::rejection::JsonRejection;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use folio_schema::AuthRequest;
use serde_json::json;
use subtle::ConstantTimeEq;

/// POST /api/auth
///
/// Exchanges the shared admin password for a bearer credential. The response
/// status is 200 either way; `success` tells the caller whether the password
/// matched and `token` is null on a mismatch.
pub async fn login(
    State(state): State<FolioState>,
    payload: Result<Json<AuthRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "error": "Invalid request" })),
            )
                .into_response();
        }
    };

    let expected = state.admin_password.as_ref();
    if bool::from(req.password.as_bytes().ct_eq(expected.as_bytes())) {
        let token = token::issue(expected, token::now_ms());
        Json(json!({ "success": true, "token": token })).into_response()
    } else {
        Json(json!({ "success": false, "token": null })).into_response()
    }
}
