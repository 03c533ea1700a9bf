//! Motor de validación por transición
//!
//! Validación pura y síncrona: dado el estado actual de la viagem y los
//! datos de la transición propuesta, acepta o rechaza con un motivo
//! legible. Nunca muta el registro - si algo falla, no hay transición
//! parcial.
//!
//! Los números se parsean una sola vez en el borde (los DTOs ya llegan
//! como numéricos vía serde); acá solo se chequean rangos y consistencia.

use rust_decimal::Decimal;

use crate::dto::trip_dto::{DecisionAuditFields, FactoryArrivalRequest, FinishTripRequest, StartTripRequest};
use crate::models::trip::{is_known_factory, Trip};
use crate::services::lifecycle_service::EvidencePolicy;
use crate::utils::errors::{required_field_error, AppError, AppResult};

/// Validación de creación (inicio de viagem)
pub fn validate_start(request: &StartTripRequest) -> AppResult<()> {
    validate_not_empty(&request.vehicle_plate, "placa")?;
    validate_not_empty(&request.origin, "origem")?;
    validate_not_empty(&request.photo_initial, "foto inicial")?;
    validate_km(request.km_initial, "KM Inicial")?;
    Ok(())
}

/// Validación de llegada a fábrica
pub fn validate_factory_arrival(
    request: &FactoryArrivalRequest,
    policy: &EvidencePolicy,
) -> AppResult<()> {
    if !is_known_factory(&request.factory_name) {
        return Err(AppError::Validation(format!(
            "Fábrica '{}' não consta na lista de fábricas conhecidas",
            request.factory_name
        )));
    }
    if policy.factory_arrival_photo_required {
        match &request.photo {
            Some(photo) if !photo.trim().is_empty() => {}
            _ => return Err(required_field_error("foto de chegada na fábrica")),
        }
    }
    Ok(())
}

/// Validación de finalización
///
/// La comparación de odómetro usa el `km_initial` ya almacenado en la
/// viagem, nunca un valor re-enviado por el cliente.
pub fn validate_finish(trip: &Trip, request: &FinishTripRequest) -> AppResult<()> {
    validate_not_empty(&request.destination, "destino")?;
    validate_not_empty(&request.photo_final, "foto final")?;
    validate_km(request.km_final, "KM Final")?;

    if request.km_final <= trip.km_initial {
        return Err(AppError::Ordering(
            "O KM Final deve ser maior que o KM Inicial.".to_string(),
        ));
    }
    Ok(())
}

/// Validación de los campos de auditoría para aprobar/enmendar
///
/// Devuelve el número DT ya normalizado (solo dígitos) y el valor de
/// comisión verificado como >= 0.
pub fn validate_audit_fields(fields: &DecisionAuditFields) -> AppResult<(String, Decimal)> {
    let numero_dt = match &fields.numero_dt {
        Some(raw) => normalize_numero_dt(raw),
        None => String::new(),
    };
    if numero_dt.is_empty() {
        return Err(AppError::Validation(
            "O número da DT é obrigatório para aprovar".to_string(),
        ));
    }

    let valor = fields
        .valor_comissao
        .ok_or_else(|| AppError::Validation("O valor da comissão é obrigatório para aprovar".to_string()))?;
    if valor < Decimal::ZERO {
        return Err(AppError::Validation(
            "O valor da comissão não pode ser negativo".to_string(),
        ));
    }

    Ok((numero_dt, valor))
}

/// Normaliza el número DT: solo dígitos
pub fn normalize_numero_dt(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn validate_not_empty(value: &str, field: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(required_field_error(field));
    }
    Ok(())
}

fn validate_km(value: f64, field: &str) -> AppResult<()> {
    if !value.is_finite() {
        return Err(AppError::Validation(format!("{} deve ser um número", field)));
    }
    if value < 0.0 {
        return Err(AppError::Validation(format!(
            "{} não pode ser negativo",
            field
        )));
    }
    Ok(())
}
