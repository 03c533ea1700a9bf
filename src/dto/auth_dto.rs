//! DTOs de autenticación

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::{AuthenticatedUser, UserRole};

/// Request de login
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub id: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Request de registro de nuevo usuario
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 50))]
    pub id: String,

    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 3))]
    pub password: String,

    pub role: UserRole,
}

/// Response de login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: Option<String>,
    pub user: Option<AuthenticatedUser>,
    pub message: Option<String>,
    pub expires_at: Option<chrono::DateTime<chrono::Utc>>,
}
