use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::report_controller::ReportController;
use crate::dto::report_dto::{ReportQuery, ReportResponse};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_report_router() -> Router<AppState> {
    Router::new().route("/", get(generate_report))
}

async fn generate_report(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Query(query): Query<ReportQuery>,
) -> Result<Json<ReportResponse>, AppError> {
    let controller = ReportController::new(&state);
    let response = controller.generate(&user, query).await?;
    Ok(Json(response))
}
