//! Modelo de Trip (viagem)
//!
//! Este módulo contiene la entidad central del sistema: una viagem de un
//! motorista en un vehículo, con evidencias fotográficas por waypoint.
//! Los nombres de campos y estados replican exactamente el formato que
//! produce el front-end / la planilla remota.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fábricas conocidas - la llegada a fábrica debe seleccionar una de estas
pub const FACTORY_NAMES: &[&str] = &["FB ITU", "FB VIAMÃO", "FB GRAVATAÍ", "FB SARANDI"];

/// Verifica si un nombre de fábrica pertenece a la lista enumerada
pub fn is_known_factory(name: &str) -> bool {
    FACTORY_NAMES.iter().any(|f| *f == name)
}

/// Estado del ciclo de vida de una viagem
///
/// Los valores serializados son los strings exactos que viajan por el wire
/// ("Em Andamento", "Pendente", etc.) - no cambiarlos.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TripStatus {
    #[serde(rename = "Em Andamento")]
    EmAndamento,
    #[serde(rename = "Na Fábrica")]
    NaFabrica,
    #[serde(rename = "Em Trânsito")]
    EmTransito,
    #[serde(rename = "Pendente")]
    Pendente,
    #[serde(rename = "Aprovado")]
    Aprovado,
    #[serde(rename = "Rejeitado")]
    Rejeitado,
}

impl TripStatus {
    /// String exacto del wire
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::EmAndamento => "Em Andamento",
            TripStatus::NaFabrica => "Na Fábrica",
            TripStatus::EmTransito => "Em Trânsito",
            TripStatus::Pendente => "Pendente",
            TripStatus::Aprovado => "Aprovado",
            TripStatus::Rejeitado => "Rejeitado",
        }
    }

    /// Estados terminales: no hay más transiciones de ciclo de vida
    /// (amend sobre Aprovado no cambia el estado)
    pub fn is_terminal(&self) -> bool {
        matches!(self, TripStatus::Aprovado | TripStatus::Rejeitado)
    }

    /// Estados donde el motorista todavía tiene acciones pendientes
    pub fn is_intermediate(&self) -> bool {
        matches!(
            self,
            TripStatus::EmAndamento | TripStatus::NaFabrica | TripStatus::EmTransito
        )
    }
}

impl std::fmt::Display for TripStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Evento de transición sobre una viagem
///
/// Los checks de rol se hacen siempre contra este enum vía
/// `authorization_service::can_perform` - nunca inline en los handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEvent {
    StartTrip,
    ArriveFactory,
    DepartFactory,
    FinishTrip,
    Approve,
    Reject,
    Amend,
}

/// Viagem completa - mapea al row de la planilla remota
///
/// `driver_id`/`driver_name` se denormalizan al crear y son inmutables:
/// identifican quién hizo la viagem, no quién está logueado.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub driver_id: String,
    pub driver_name: String,
    pub vehicle_plate: String,

    // Parte 1 (inicio)
    pub start_date: String,
    pub start_time: String,
    pub origin: String,
    pub km_initial: f64,
    pub photo_initial: String,

    // Etapas intermedias (fábrica) - opcionales, siempre en orden
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factory_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factory_arrival_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factory_arrival_photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factory_departure_time: Option<String>,
    // Legado: revisiones viejas exigían foto de salida de fábrica.
    // Se conserva en el wire para registros históricos, nunca se exige.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factory_departure_photo: Option<String>,

    // Parte 2 (finalización) - ausentes hasta finalizar
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub km_final: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_final: Option<String>,

    pub status: TripStatus,

    // Campos de auditoría (solo admin, obligatorios para aprobar)
    #[serde(rename = "numero_dt", skip_serializing_if = "Option::is_none")]
    pub numero_dt: Option<String>,
    #[serde(rename = "valor_comissao", skip_serializing_if = "Option::is_none")]
    pub valor_comissao: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_comment: Option<String>,

    pub created_at: String,
}

impl Trip {
    /// Distancia auditada de la viagem
    ///
    /// Diferencias negativas o no-finitas (datos corruptos upstream) se
    /// aplanan a cero para no contaminar los agregados.
    pub fn audited_distance(&self) -> f64 {
        match self.km_final {
            Some(km_final) => {
                let diff = km_final - self.km_initial;
                if diff.is_finite() {
                    diff.max(0.0)
                } else {
                    0.0
                }
            }
            None => 0.0,
        }
    }
}
