use axum::{extract::State, routing::post, Json, Router};
use validator::Validate;

use crate::dto::auth_dto::{LoginRequest, LoginResponse, RegisterRequest};
use crate::dto::common::ApiResponse;
use crate::models::user::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let response = state.auth.login(&request).await?;
    Ok(Json(response))
}

async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<AuthenticatedUser>>, AppError> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let user = state.auth.register(&request).await?;
    Ok(Json(ApiResponse::success_with_message(
        user,
        "Usuário cadastrado com sucesso! Agora você pode entrar.".to_string(),
    )))
}
