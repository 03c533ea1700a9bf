//! DTOs de viagens
//!
//! Requests por transición y la proyección de respuesta. Los timestamps de
//! waypoint NUNCA vienen en los requests - el servidor estampa el reloj al
//! confirmar (medida anti-adulteración).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::trip::Trip;
use crate::utils::photos::normalize_photo_link;

/// Request para iniciar una viagem
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StartTripRequest {
    #[validate(length(min = 1, max = 20))]
    pub vehicle_plate: String,

    #[validate(length(min = 1, max = 200))]
    pub origin: String,

    pub km_initial: f64,

    #[validate(length(min = 1))]
    pub photo_initial: String,
}

/// Request de llegada a fábrica
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FactoryArrivalRequest {
    #[validate(length(min = 1, max = 100))]
    pub factory_name: String,

    /// Requerida u opcional según la EvidencePolicy del deployment
    pub photo: Option<String>,
}

/// Request de finalización de viagem
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FinishTripRequest {
    #[validate(length(min = 1, max = 200))]
    pub destination: String,

    pub km_final: f64,

    #[validate(length(min = 1))]
    pub photo_final: String,
}

/// Decisión administrativa sobre una viagem pendiente
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Decision {
    #[serde(rename = "Aprovado")]
    Aprovado,
    #[serde(rename = "Rejeitado")]
    Rejeitado,
}

/// Campos de auditoría que acompañan una aprobación o enmienda
#[derive(Debug, Clone, Deserialize)]
pub struct DecisionAuditFields {
    pub numero_dt: Option<String>,
    pub valor_comissao: Option<Decimal>,
}

/// Request de decisión (aprobar / rechazar)
#[derive(Debug, Deserialize)]
pub struct DecisionRequest {
    pub decision: Decision,
    pub comment: Option<String>,
    #[serde(flatten)]
    pub audit: DecisionAuditFields,
}

/// Request de enmienda de campos de auditoría (solo viagens aprobadas)
#[derive(Debug, Deserialize)]
pub struct AmendRequest {
    #[serde(flatten)]
    pub audit: DecisionAuditFields,
    pub comment: Option<String>,
}

/// Links de fotos normalizados para display
///
/// El valor crudo queda intacto dentro de `trip` - esto es solo la vista.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayPhotos {
    pub photo_initial: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factory_arrival_photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_final: Option<String>,
}

/// Response de viagem para la API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripResponse {
    #[serde(flatten)]
    pub trip: Trip,
    pub display_photos: DisplayPhotos,
}

impl From<Trip> for TripResponse {
    fn from(trip: Trip) -> Self {
        let display_photos = DisplayPhotos {
            photo_initial: normalize_photo_link(&trip.photo_initial),
            factory_arrival_photo: trip
                .factory_arrival_photo
                .as_deref()
                .map(normalize_photo_link),
            photo_final: trip.photo_final.as_deref().map(normalize_photo_link),
        };
        Self {
            trip,
            display_photos,
        }
    }
}
