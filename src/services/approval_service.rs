//! Motor de aprobación/auditoría
//!
//! Lado administrativo del ciclo de vida: decidir sobre viagens
//! pendientes (aprobar con campos de auditoría obligatorios, rechazar con
//! comentario opcional) y enmendar los campos de auditoría de viagens ya
//! aprobadas sin tocar el estado.
//!
//! Todo decide/amend exitoso se propaga al colaborador de persistencia;
//! las fallas de propagación se loguean y no revierten el cambio local.

use std::sync::Arc;

use chrono::Utc;

use crate::dto::trip_dto::{AmendRequest, Decision, DecisionRequest};
use crate::models::trip::{Trip, TripStatus};
use crate::repositories::trip_repository::TripRepository;
use crate::services::notification_service::NotificationService;
use crate::utils::errors::{not_found_error, AppError, AppResult};
use crate::utils::validation;

#[derive(Clone)]
pub struct ApprovalService {
    trips: Arc<TripRepository>,
    notifier: NotificationService,
}

impl ApprovalService {
    pub fn new(trips: Arc<TripRepository>, notifier: NotificationService) -> Self {
        Self { trips, notifier }
    }

    /// Pendente -> Aprovado | Rejeitado
    ///
    /// Para aprobar, los campos de auditoría son obligatorios y se validan
    /// antes de tocar el registro. Para rechazar se ignoran.
    pub async fn decide(&self, trip_id: &str, request: &DecisionRequest) -> AppResult<Trip> {
        let trip = self
            .trips
            .find_by_id(trip_id)
            .await
            .ok_or_else(|| not_found_error("Viagem", trip_id))?;

        if trip.status != TripStatus::Pendente {
            return Err(AppError::Validation(format!(
                "Somente viagens pendentes podem ser decididas (status atual: '{}')",
                trip.status
            )));
        }

        let mut updated = trip.clone();
        match request.decision {
            Decision::Aprovado => {
                let (numero_dt, valor) = validation::validate_audit_fields(&request.audit)?;
                updated.numero_dt = Some(numero_dt);
                updated.valor_comissao = Some(valor);
                updated.status = TripStatus::Aprovado;
            }
            Decision::Rejeitado => {
                updated.status = TripStatus::Rejeitado;
            }
        }
        updated.admin_comment = normalize_comment(request.comment.as_deref());

        let saved = self.trips.save(updated).await;
        self.notifier.notify_decision(&saved).await;

        tracing::info!(
            trip_id = %saved.id,
            status = %saved.status,
            "Decisão administrativa registrada em {}",
            Utc::now().to_rfc3339()
        );
        Ok(saved)
    }

    /// Enmienda de campos de auditoría sobre una viagem aprobada
    ///
    /// Solo los campos financieros y el comentario; odómetro y waypoints
    /// quedan congelados una vez aprobada la viagem. El estado no cambia,
    /// por lo que repetir la misma enmienda es idempotente.
    pub async fn amend(&self, trip_id: &str, request: &AmendRequest) -> AppResult<Trip> {
        let trip = self
            .trips
            .find_by_id(trip_id)
            .await
            .ok_or_else(|| not_found_error("Viagem", trip_id))?;

        if trip.status != TripStatus::Aprovado {
            return Err(AppError::Validation(format!(
                "Somente viagens aprovadas podem ser emendadas (status atual: '{}')",
                trip.status
            )));
        }

        let (numero_dt, valor) = validation::validate_audit_fields(&request.audit)?;

        let mut updated = trip.clone();
        updated.numero_dt = Some(numero_dt);
        updated.valor_comissao = Some(valor);
        if let Some(comment) = normalize_comment(request.comment.as_deref()) {
            updated.admin_comment = Some(comment);
        }

        let saved = self.trips.save(updated).await;
        Ok(saved)
    }
}

fn normalize_comment(comment: Option<&str>) -> Option<String> {
    comment
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::trip_dto::DecisionAuditFields;
    use crate::repositories::user_repository::UserRepository;
    use rust_decimal::Decimal;

    async fn service_with_pending_trip() -> (ApprovalService, String) {
        let trips = Arc::new(TripRepository::new(None));
        let users = Arc::new(UserRepository::new());
        users.seed_defaults().await.unwrap();

        let mut trip = crate::services::report_service::tests_support::approved_trip("t1", 100.0, 150.0);
        trip.status = TripStatus::Pendente;
        trip.numero_dt = None;
        trip.valor_comissao = None;
        let id = trip.id.clone();
        trips.save(trip).await;

        let notifier = NotificationService::new(users);
        (ApprovalService::new(trips, notifier), id)
    }

    #[tokio::test]
    async fn test_approve_without_audit_fields_fails() {
        let (service, id) = service_with_pending_trip().await;

        let request = DecisionRequest {
            decision: Decision::Aprovado,
            comment: None,
            audit: DecisionAuditFields {
                numero_dt: None,
                valor_comissao: None,
            },
        };
        assert!(service.decide(&id, &request).await.is_err());

        // la falla no movió el estado
        let trip = service.trips.find_by_id(&id).await.unwrap();
        assert_eq!(trip.status, TripStatus::Pendente);
    }

    #[tokio::test]
    async fn test_approve_with_audit_fields() {
        let (service, id) = service_with_pending_trip().await;

        let request = DecisionRequest {
            decision: Decision::Aprovado,
            comment: Some("ok".to_string()),
            audit: DecisionAuditFields {
                numero_dt: Some("DT-12345".to_string()),
                valor_comissao: Some(Decimal::from(500)),
            },
        };
        let trip = service.decide(&id, &request).await.unwrap();
        assert_eq!(trip.status, TripStatus::Aprovado);
        assert_eq!(trip.numero_dt.as_deref(), Some("12345"));
        assert_eq!(trip.admin_comment.as_deref(), Some("ok"));
    }

    #[tokio::test]
    async fn test_reject_ignores_audit_fields() {
        let (service, id) = service_with_pending_trip().await;

        let request = DecisionRequest {
            decision: Decision::Rejeitado,
            comment: None,
            audit: DecisionAuditFields {
                numero_dt: None,
                valor_comissao: None,
            },
        };
        let trip = service.decide(&id, &request).await.unwrap();
        assert_eq!(trip.status, TripStatus::Rejeitado);
        assert!(trip.numero_dt.is_none());
    }

    #[tokio::test]
    async fn test_amend_only_on_approved_and_idempotent() {
        let (service, id) = service_with_pending_trip().await;

        let amend = AmendRequest {
            audit: DecisionAuditFields {
                numero_dt: Some("999".to_string()),
                valor_comissao: Some(Decimal::from(750)),
            },
            comment: None,
        };

        // todavía pendiente: no se puede enmendar
        assert!(service.amend(&id, &amend).await.is_err());

        let approve = DecisionRequest {
            decision: Decision::Aprovado,
            comment: None,
            audit: DecisionAuditFields {
                numero_dt: Some("12345".to_string()),
                valor_comissao: Some(Decimal::from(500)),
            },
        };
        service.decide(&id, &approve).await.unwrap();

        let first = service.amend(&id, &amend).await.unwrap();
        let second = service.amend(&id, &amend).await.unwrap();
        assert_eq!(first.numero_dt, second.numero_dt);
        assert_eq!(first.valor_comissao, second.valor_comissao);
        assert_eq!(second.status, TripStatus::Aprovado);
    }
}
