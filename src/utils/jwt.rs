//! Utilidades JWT
//!
//! Tokens de sesión simples: sub (user id), nombre, rol, expiración.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::models::user::{AuthenticatedUser, UserRole};
use crate::utils::errors::AppError;

/// Claims del token de sesión
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    pub name: String,
    pub role: UserRole,
    pub exp: usize,
    pub iat: usize,
}

/// Genera un token de sesión para un usuario autenticado
pub fn generate_token(
    user: &AuthenticatedUser,
    secret: &str,
    expiration_secs: u64,
) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expires_at = now + chrono::Duration::seconds(expiration_secs as i64);

    let claims = JwtClaims {
        sub: user.id.clone(),
        name: user.name.clone(),
        role: user.role,
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| AppError::Internal(format!("JWT generation failed: {}", e)))
}

/// Valida un token y devuelve la identidad que transporta
pub fn validate_token(token: &str, secret: &str) -> Result<AuthenticatedUser, AppError> {
    let data = decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map_err(|e| AppError::Authentication(format!("Invalid token: {}", e)))?;

    Ok(AuthenticatedUser {
        id: data.claims.sub,
        name: data.claims.name,
        role: data.claims.role,
    })
}
