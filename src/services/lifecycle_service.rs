//! Máquina de estados del ciclo de vida de una viagem
//!
//! Em Andamento -> [Na Fábrica -> Em Trânsito] -> Pendente -> Aprovado | Rejeitado
//!
//! Las etapas de fábrica son opcionales (cero o una vez cada una, siempre
//! en orden); una política de deployment puede volverlas obligatorias sin
//! bifurcar la máquina. Cada transición exitosa produce una copia nueva de
//! la viagem - si la validación falla no hay transición parcial.
//!
//! Los timestamps de cada waypoint salen del reloj del servidor en el
//! momento de la confirmación, nunca del payload: el actor no puede
//! retro-datar un waypoint.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::dto::trip_dto::{FactoryArrivalRequest, FinishTripRequest, StartTripRequest};
use crate::models::trip::{Trip, TripStatus};
use crate::models::user::AuthenticatedUser;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation;

/// Política de evidencias por waypoint
///
/// Qué waypoint exige foto y si la ruta por fábrica es obligatoria.
#[derive(Debug, Clone)]
pub struct EvidencePolicy {
    pub factory_arrival_photo_required: bool,
    /// Revisiones viejas exigían foto al salir de la fábrica; la revisión
    /// final registra solo el horario.
    pub factory_departure_photo_required: bool,
    /// Si es true, toda viagem debe pasar por la fábrica antes de
    /// finalizar (Finish solo es legal desde Em Trânsito).
    pub require_factory_route: bool,
}

impl Default for EvidencePolicy {
    fn default() -> Self {
        Self {
            factory_arrival_photo_required: true,
            factory_departure_photo_required: false,
            require_factory_route: false,
        }
    }
}

/// Servicio de ciclo de vida - funciones puras sobre (viagem, transición)
///
/// La persistencia queda afuera: los controllers cargan la viagem, aplican
/// la transición acá y guardan el resultado.
#[derive(Debug, Clone)]
pub struct LifecycleService {
    policy: EvidencePolicy,
}

impl LifecycleService {
    pub fn new(policy: EvidencePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &EvidencePolicy {
        &self.policy
    }

    /// Transición de creación: (nada) -> Em Andamento
    ///
    /// El id generado acá es temporal del lado cliente; el colaborador de
    /// persistencia puede reasignar el durable en la sincronización.
    pub fn start_trip(
        &self,
        driver: &AuthenticatedUser,
        request: &StartTripRequest,
        now: DateTime<Utc>,
    ) -> AppResult<Trip> {
        validation::validate_start(request)?;

        Ok(Trip {
            id: Uuid::new_v4().to_string(),
            driver_id: driver.id.clone(),
            driver_name: driver.name.clone(),
            vehicle_plate: request.vehicle_plate.trim().to_string(),
            start_date: now.format("%Y-%m-%d").to_string(),
            start_time: now.format("%H:%M").to_string(),
            origin: request.origin.trim().to_string(),
            km_initial: request.km_initial,
            photo_initial: request.photo_initial.clone(),
            factory_name: None,
            factory_arrival_time: None,
            factory_arrival_photo: None,
            factory_departure_time: None,
            factory_departure_photo: None,
            end_date: None,
            end_time: None,
            destination: None,
            km_final: None,
            photo_final: None,
            status: TripStatus::EmAndamento,
            numero_dt: None,
            valor_comissao: None,
            admin_comment: None,
            created_at: now.to_rfc3339(),
        })
    }

    /// Em Andamento -> Na Fábrica
    pub fn arrive_factory(
        &self,
        trip: &Trip,
        request: &FactoryArrivalRequest,
        now: DateTime<Utc>,
    ) -> AppResult<Trip> {
        expect_status(trip, TripStatus::EmAndamento, "chegada na fábrica")?;
        validation::validate_factory_arrival(request, &self.policy)?;

        let mut updated = trip.clone();
        updated.factory_name = Some(request.factory_name.clone());
        updated.factory_arrival_time = Some(now.format("%H:%M").to_string());
        updated.factory_arrival_photo = request
            .photo
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(str::to_string);
        updated.status = TripStatus::NaFabrica;
        Ok(updated)
    }

    /// Na Fábrica -> Em Trânsito (solo registro de horario)
    pub fn depart_factory(&self, trip: &Trip, now: DateTime<Utc>) -> AppResult<Trip> {
        expect_status(trip, TripStatus::NaFabrica, "saída da fábrica")?;

        let mut updated = trip.clone();
        updated.factory_departure_time = Some(now.format("%H:%M").to_string());
        updated.status = TripStatus::EmTransito;
        Ok(updated)
    }

    /// Em Andamento | Em Trânsito -> Pendente
    ///
    /// Con `require_factory_route` activa, solo es legal desde Em Trânsito.
    pub fn finish_trip(
        &self,
        trip: &Trip,
        request: &FinishTripRequest,
        now: DateTime<Utc>,
    ) -> AppResult<Trip> {
        let legal_from = if self.policy.require_factory_route {
            trip.status == TripStatus::EmTransito
        } else {
            matches!(trip.status, TripStatus::EmAndamento | TripStatus::EmTransito)
        };
        if !legal_from {
            return Err(invalid_transition(trip, "finalização"));
        }

        validation::validate_finish(trip, request)?;

        let mut updated = trip.clone();
        updated.destination = Some(request.destination.trim().to_string());
        updated.km_final = Some(request.km_final);
        updated.photo_final = Some(request.photo_final.clone());
        updated.end_date = Some(now.format("%Y-%m-%d").to_string());
        updated.end_time = Some(now.format("%H:%M").to_string());
        updated.status = TripStatus::Pendente;
        Ok(updated)
    }
}

fn expect_status(trip: &Trip, expected: TripStatus, action: &str) -> AppResult<()> {
    if trip.status != expected {
        return Err(invalid_transition(trip, action));
    }
    Ok(())
}

fn invalid_transition(trip: &Trip, action: &str) -> AppError {
    AppError::Validation(format!(
        "Transição inválida: {} não é permitida com status '{}'",
        action, trip.status
    ))
}
