//! Controller de viagens
//!
//! Orquesta cada operación: cargar -> autorizar -> validar -> transicionar
//! -> guardar -> notificar. La lógica de negocio vive en los servicios;
//! acá solo se encadena.

use chrono::Utc;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::trip_dto::{
    AmendRequest, Decision, DecisionRequest, FactoryArrivalRequest, FinishTripRequest,
    StartTripRequest, TripResponse,
};
use crate::models::trip::{TransitionEvent, Trip, TripStatus};
use crate::models::user::AuthenticatedUser;
use crate::services::authorization_service;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct TripController {
    state: AppState,
}

impl TripController {
    pub fn new(state: &AppState) -> Self {
        Self {
            state: state.clone(),
        }
    }

    /// Inicia una viagem nueva (status Em Andamento)
    pub async fn start(
        &self,
        user: &AuthenticatedUser,
        request: StartTripRequest,
    ) -> AppResult<ApiResponse<TripResponse>> {
        authorization_service::require(user.role, TransitionEvent::StartTrip)?;
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let trip = self.state.lifecycle.start_trip(user, &request, Utc::now())?;
        let saved = self.state.trips.save(trip).await;

        Ok(ApiResponse::success_with_message(
            saved.into(),
            "Viagem iniciada".to_string(),
        ))
    }

    /// Registra la llegada a fábrica
    pub async fn arrive_factory(
        &self,
        user: &AuthenticatedUser,
        trip_id: &str,
        request: FactoryArrivalRequest,
    ) -> AppResult<ApiResponse<TripResponse>> {
        authorization_service::require(user.role, TransitionEvent::ArriveFactory)?;
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let trip = self.load_owned(user, trip_id).await?;
        let updated = self
            .state
            .lifecycle
            .arrive_factory(&trip, &request, Utc::now())?;
        let saved = self.state.trips.save(updated).await;

        Ok(ApiResponse::success(saved.into()))
    }

    /// Registra la salida de fábrica (solo horario)
    pub async fn depart_factory(
        &self,
        user: &AuthenticatedUser,
        trip_id: &str,
    ) -> AppResult<ApiResponse<TripResponse>> {
        authorization_service::require(user.role, TransitionEvent::DepartFactory)?;

        let trip = self.load_owned(user, trip_id).await?;
        let updated = self.state.lifecycle.depart_factory(&trip, Utc::now())?;
        let saved = self.state.trips.save(updated).await;

        Ok(ApiResponse::success(saved.into()))
    }

    /// Finaliza la viagem (queda Pendente para revisión)
    pub async fn finish(
        &self,
        user: &AuthenticatedUser,
        trip_id: &str,
        request: FinishTripRequest,
    ) -> AppResult<ApiResponse<TripResponse>> {
        authorization_service::require(user.role, TransitionEvent::FinishTrip)?;
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let trip = self.load_owned(user, trip_id).await?;
        let updated = self.state.lifecycle.finish_trip(&trip, &request, Utc::now())?;
        let saved = self.state.trips.save(updated).await;

        self.state.notifier.notify_pending_review(&saved).await;

        Ok(ApiResponse::success_with_message(
            saved.into(),
            "Viagem enviada para aprovação".to_string(),
        ))
    }

    /// Lista de viagens: el motorista ve solo las suyas, el admin todas
    pub async fn list(&self, user: &AuthenticatedUser) -> AppResult<Vec<TripResponse>> {
        let mut trips = if user.role.is_administrative() {
            self.state.trips.list().await
        } else {
            self.state.trips.list_by_driver(&user.id).await
        };

        trips.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Ok(trips.into_iter().map(TripResponse::from).collect())
    }

    /// Cola de revisión: viagens pendientes (solo administradores)
    pub async fn pending(&self, user: &AuthenticatedUser) -> AppResult<Vec<TripResponse>> {
        authorization_service::require(user.role, TransitionEvent::Approve)?;

        let mut trips = self.state.trips.list_by_status(TripStatus::Pendente).await;
        trips.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(trips.into_iter().map(TripResponse::from).collect())
    }

    /// Detalle de una viagem
    pub async fn get(&self, user: &AuthenticatedUser, trip_id: &str) -> AppResult<TripResponse> {
        let trip = self.load_visible(user, trip_id).await?;
        Ok(trip.into())
    }

    /// Decisión administrativa: aprobar o rechazar
    pub async fn decide(
        &self,
        user: &AuthenticatedUser,
        trip_id: &str,
        request: DecisionRequest,
    ) -> AppResult<ApiResponse<TripResponse>> {
        let event = match request.decision {
            Decision::Aprovado => TransitionEvent::Approve,
            Decision::Rejeitado => TransitionEvent::Reject,
        };
        authorization_service::require(user.role, event)?;

        let trip = self.state.approval.decide(trip_id, &request).await?;
        Ok(ApiResponse::success(trip.into()))
    }

    /// Enmienda de campos de auditoría (rol elevado, viagens aprobadas)
    pub async fn amend(
        &self,
        user: &AuthenticatedUser,
        trip_id: &str,
        request: AmendRequest,
    ) -> AppResult<ApiResponse<TripResponse>> {
        authorization_service::require(user.role, TransitionEvent::Amend)?;

        let trip = self.state.approval.amend(trip_id, &request).await?;
        Ok(ApiResponse::success(trip.into()))
    }

    /// Carga una viagem que el actor puede modificar (el motorista solo
    /// opera sobre las propias)
    async fn load_owned(&self, user: &AuthenticatedUser, trip_id: &str) -> AppResult<Trip> {
        let trip = self
            .state
            .trips
            .find_by_id(trip_id)
            .await
            .ok_or_else(|| not_found_error("Viagem", trip_id))?;

        if trip.driver_id != user.id {
            return Err(AppError::Authorization(
                "A viagem pertence a outro motorista".to_string(),
            ));
        }
        Ok(trip)
    }

    /// Carga una viagem visible para el actor (admins ven todas)
    async fn load_visible(&self, user: &AuthenticatedUser, trip_id: &str) -> AppResult<Trip> {
        if user.role.is_administrative() {
            self.state
                .trips
                .find_by_id(trip_id)
                .await
                .ok_or_else(|| not_found_error("Viagem", trip_id))
        } else {
            self.load_owned(user, trip_id).await
        }
    }
}
