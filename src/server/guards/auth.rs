use crate::error::AuthError;
use crate::server::router::FolioState;
use crate::token;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};

/// Extractor guarding the admin mutation routes.
///
/// Reads `Authorization: Bearer <credential>` and validates the credential
/// against the configured admin password. Rejections carry a 401 with the
/// concrete reason; a missing header is never treated as anonymous access.
#[derive(Debug, Clone, Copy)]
pub struct RequireAdminAuth;

impl FromRequestParts<FolioState> for RequireAdminAuth {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &FolioState,
    ) -> Result<Self, Self::Rejection> {
        let Some(bearer) = parts.headers.typed_get::<Authorization<Bearer>>() else {
            // Distinguish "no header at all" from "header without a Bearer
            // credential" so the caller sees why it was rejected.
            if parts.headers.contains_key(AUTHORIZATION) {
                return Err(AuthError::InvalidFormat);
            }
            return Err(AuthError::MissingHeader);
        };

        token::validate(
            bearer.token(),
            state.admin_password.as_ref(),
            token::now_ms(),
        )?;

        Ok(RequireAdminAuth)
    }
}
