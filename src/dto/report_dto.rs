//! DTOs de reportes
//!
//! Proyección plana por fila, lista para export tabular. El formato final
//! (CSV/planilla/PDF) es responsabilidad del colaborador de export.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::trip::Trip;

/// Filtros del reporte - rango inclusivo sobre startDate, placa exacta
#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    pub start: Option<String>,
    pub end: Option<String>,
    pub plate: Option<String>,
}

/// Fila plana del reporte de viagens auditadas
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub start_date: String,
    pub end_date: Option<String>,
    pub driver_name: String,
    pub vehicle_plate: String,
    pub origin: String,
    pub destination: Option<String>,
    pub start_time: String,
    pub factory_arrival_time: Option<String>,
    pub factory_departure_time: Option<String>,
    pub end_time: Option<String>,
    pub km_initial: f64,
    pub km_final: Option<f64>,
    pub distance: f64,
    #[serde(rename = "numero_dt")]
    pub numero_dt: Option<String>,
    #[serde(rename = "valor_comissao")]
    pub valor_comissao: Option<Decimal>,
    pub status: String,
    pub admin_comment: Option<String>,
}

impl From<&Trip> for ReportRow {
    fn from(trip: &Trip) -> Self {
        Self {
            start_date: trip.start_date.clone(),
            end_date: trip.end_date.clone(),
            driver_name: trip.driver_name.clone(),
            vehicle_plate: trip.vehicle_plate.clone(),
            origin: trip.origin.clone(),
            destination: trip.destination.clone(),
            start_time: trip.start_time.clone(),
            factory_arrival_time: trip.factory_arrival_time.clone(),
            factory_departure_time: trip.factory_departure_time.clone(),
            end_time: trip.end_time.clone(),
            km_initial: trip.km_initial,
            km_final: trip.km_final,
            distance: trip.audited_distance(),
            numero_dt: trip.numero_dt.clone(),
            valor_comissao: trip.valor_comissao,
            status: trip.status.to_string(),
            admin_comment: trip.admin_comment.clone(),
        }
    }
}

/// Response del reporte: filas + distancia total auditada
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub total_km: f64,
    pub count: usize,
    pub rows: Vec<ReportRow>,
}
