//! Servicio de notificaciones
//!
//! Notifier respaldado en logs estructurados en vez de un colaborador de
//! email real. Las fallas de notificación nunca afectan la transición que
//! las disparó.

use std::sync::Arc;

use tracing::info;

use crate::models::trip::Trip;
use crate::repositories::user_repository::UserRepository;

#[derive(Clone)]
pub struct NotificationService {
    users: Arc<UserRepository>,
}

impl NotificationService {
    pub fn new(users: Arc<UserRepository>) -> Self {
        Self { users }
    }

    /// Aviso a los administradores: nueva viagem para revisar
    pub async fn notify_pending_review(&self, trip: &Trip) {
        for admin in self.users.list_admins().await {
            info!(
                to = %admin.email,
                trip_id = %trip.id,
                "Nova Solicitação de Viagem: o motorista {} finalizou uma viagem de {} para {}",
                trip.driver_name,
                trip.origin,
                trip.destination.as_deref().unwrap_or("-"),
            );
        }
    }

    /// Aviso al motorista: su viagem fue aprobada o rechazada
    pub async fn notify_decision(&self, trip: &Trip) {
        let Some(driver) = self.users.find_by_id(&trip.driver_id).await else {
            log::warn!(
                "No se pudo notificar: motorista '{}' no encontrado",
                trip.driver_id
            );
            return;
        };

        info!(
            to = %driver.email,
            trip_id = %trip.id,
            status = %trip.status,
            "Viagem {}: sua solicitação de {} para {} foi {}. Comentário: {}",
            trip.status,
            trip.origin,
            trip.destination.as_deref().unwrap_or("-"),
            trip.status.as_str().to_lowercase(),
            trip.admin_comment.as_deref().unwrap_or("Sem comentários."),
        );
    }
}
