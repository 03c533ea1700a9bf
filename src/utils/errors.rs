//! Sistema de manejo de errores
//!
//! Este módulo define la taxonomía de errores del sistema y su conversión
//! a respuestas HTTP. Ningún error es fatal para el proceso: toda falla se
//! reporta y deja el sistema en el estado válido previo.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    /// Transición con campos requeridos ausentes o mal formados.
    /// Se rechaza la operación; el registro queda sin modificar.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Subtipo de validación: kmFinal <= kmInitial
    #[error("Ordering error: {0}")]
    Ordering(String),

    /// Transición intentada por un rol que no la permite
    #[error("Authorization error: {0}")]
    Authorization(String),

    /// Credenciales rechazadas por el colaborador de autenticación
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Falla del colaborador de persistencia externo. Política: aviso
    /// no-fatal, el estado local no se revierte, el usuario reintenta.
    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "Validation Error".to_string(),
                    message: msg,
                    details: None,
                    code: Some("VALIDATION_ERROR".to_string()),
                },
            ),

            AppError::Ordering(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "Ordering Error".to_string(),
                    message: msg,
                    details: None,
                    code: Some("ORDERING_ERROR".to_string()),
                },
            ),

            AppError::Authorization(msg) => (
                StatusCode::FORBIDDEN,
                ErrorResponse {
                    error: "Forbidden".to_string(),
                    message: msg,
                    details: None,
                    code: Some("FORBIDDEN".to_string()),
                },
            ),

            AppError::Authentication(msg) => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse {
                    error: "Unauthorized".to_string(),
                    message: msg,
                    details: None,
                    code: Some("UNAUTHORIZED".to_string()),
                },
            ),

            AppError::Persistence(msg) => {
                tracing::warn!("Persistence error: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorResponse {
                        error: "Persistence Error".to_string(),
                        message: "No se pudo sincronizar con la planilla remota".to_string(),
                        details: Some(json!({ "persistence_error": msg })),
                        code: Some("PERSISTENCE_ERROR".to_string()),
                    },
                )
            }

            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: "Not Found".to_string(),
                    message: msg,
                    details: None,
                    code: Some("NOT_FOUND".to_string()),
                },
            ),

            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal Server Error".to_string(),
                        message: "An unexpected error occurred".to_string(),
                        details: Some(json!({ "internal_error": msg })),
                        code: Some("INTERNAL_ERROR".to_string()),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Error de validación por campo requerido ausente
pub fn required_field_error(field: &str) -> AppError {
    AppError::Validation(format!("O campo '{}' é obrigatório", field))
}

/// Error de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Error de transición no permitida para el rol
pub fn forbidden_transition_error(role: &str, action: &str) -> AppError {
    AppError::Authorization(format!("Role '{}' cannot perform '{}'", role, action))
}
