//! Extractor de identidad autenticada
//!
//! Lee el bearer token del header Authorization y lo valida contra el
//! servicio de autenticación. Los handlers reciben la identidad ya
//! resuelta; ninguno parsea tokens por su cuenta.

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::models::user::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Identidad extraída del bearer token
pub struct AuthUser(pub AuthenticatedUser);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Missing Authorization header".to_string()))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Authentication("Expected bearer token".to_string()))?;

        let identity = state.auth.validate_token(token)?;
        Ok(AuthUser(identity))
    }
}
