use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};

use crate::controllers::trip_controller::TripController;
use crate::dto::common::ApiResponse;
use crate::dto::trip_dto::{
    AmendRequest, DecisionRequest, FactoryArrivalRequest, FinishTripRequest, StartTripRequest,
    TripResponse,
};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_trip_router() -> Router<AppState> {
    Router::new()
        .route("/", post(start_trip))
        .route("/", get(list_trips))
        .route("/pending", get(pending_trips))
        .route("/:id", get(get_trip))
        .route("/:id/factory-arrival", post(arrive_factory))
        .route("/:id/factory-departure", post(depart_factory))
        .route("/:id/finish", post(finish_trip))
        .route("/:id/decision", post(decide_trip))
        .route("/:id/amend", put(amend_trip))
}

async fn start_trip(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(request): Json<StartTripRequest>,
) -> Result<Json<ApiResponse<TripResponse>>, AppError> {
    let controller = TripController::new(&state);
    let response = controller.start(&user, request).await?;
    Ok(Json(response))
}

async fn list_trips(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<TripResponse>>, AppError> {
    let controller = TripController::new(&state);
    let response = controller.list(&user).await?;
    Ok(Json(response))
}

async fn pending_trips(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<TripResponse>>, AppError> {
    let controller = TripController::new(&state);
    let response = controller.pending(&user).await?;
    Ok(Json(response))
}

async fn get_trip(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<TripResponse>, AppError> {
    let controller = TripController::new(&state);
    let response = controller.get(&user, &id).await?;
    Ok(Json(response))
}

async fn arrive_factory(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    Json(request): Json<FactoryArrivalRequest>,
) -> Result<Json<ApiResponse<TripResponse>>, AppError> {
    let controller = TripController::new(&state);
    let response = controller.arrive_factory(&user, &id, request).await?;
    Ok(Json(response))
}

async fn depart_factory(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<TripResponse>>, AppError> {
    let controller = TripController::new(&state);
    let response = controller.depart_factory(&user, &id).await?;
    Ok(Json(response))
}

async fn finish_trip(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    Json(request): Json<FinishTripRequest>,
) -> Result<Json<ApiResponse<TripResponse>>, AppError> {
    let controller = TripController::new(&state);
    let response = controller.finish(&user, &id, request).await?;
    Ok(Json(response))
}

async fn decide_trip(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    Json(request): Json<DecisionRequest>,
) -> Result<Json<ApiResponse<TripResponse>>, AppError> {
    let controller = TripController::new(&state);
    let response = controller.decide(&user, &id, request).await?;
    Ok(Json(response))
}

async fn amend_trip(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    Json(request): Json<AmendRequest>,
) -> Result<Json<ApiResponse<TripResponse>>, AppError> {
    let controller = TripController::new(&state);
    let response = controller.amend(&user, &id, request).await?;
    Ok(Json(response))
}
