//! Motor de reportes/agregación
//!
//! Proyección pura y de solo lectura sobre las viagens aprobadas: filtro
//! por rango de fechas y placa, orden descendente por fecha de inicio,
//! distancia total auditada y filas planas listas para export.

use crate::dto::report_dto::{ReportQuery, ReportResponse, ReportRow};
use crate::models::trip::{Trip, TripStatus};

/// Genera el reporte sobre el conjunto de viagens dado.
///
/// El rango de fechas es inclusivo y se compara lexicográficamente - es
/// válido porque las fechas se almacenan en forma canónica `YYYY-MM-DD`
/// con cero-padding. Ese formato es un invariante del sistema.
pub fn generate_report(trips: &[Trip], query: &ReportQuery) -> ReportResponse {
    let mut approved: Vec<&Trip> = trips
        .iter()
        .filter(|t| t.status == TripStatus::Aprovado)
        .filter(|t| match &query.start {
            Some(start) => t.start_date.as_str() >= start.as_str(),
            None => true,
        })
        .filter(|t| match &query.end {
            Some(end) => t.start_date.as_str() <= end.as_str(),
            None => true,
        })
        .filter(|t| match &query.plate {
            Some(plate) => t.vehicle_plate == *plate,
            None => true,
        })
        .collect();

    approved.sort_by(|a, b| b.start_date.cmp(&a.start_date));

    // Diferencias negativas o NaN aplanadas a cero vía audited_distance -
    // datos corruptos upstream no pueden contaminar la suma
    let total_km: f64 = approved.iter().map(|t| t.audited_distance()).sum();

    let rows: Vec<ReportRow> = approved.iter().map(|t| ReportRow::from(*t)).collect();

    ReportResponse {
        total_km,
        count: rows.len(),
        rows,
    }
}

#[cfg(test)]
pub(crate) mod tests_support {
    use crate::models::trip::{Trip, TripStatus};

    /// Viagem aprobada mínima para tests
    pub fn approved_trip(id: &str, km_initial: f64, km_final: f64) -> Trip {
        Trip {
            id: id.to_string(),
            driver_id: "motorista1".to_string(),
            driver_name: "Matheus Prux".to_string(),
            vehicle_plate: "ABC1D23".to_string(),
            start_date: "2024-01-10".to_string(),
            start_time: "08:00".to_string(),
            origin: "Porto Alegre".to_string(),
            km_initial,
            photo_initial: "x".to_string(),
            factory_name: None,
            factory_arrival_time: None,
            factory_arrival_photo: None,
            factory_departure_time: None,
            factory_departure_photo: None,
            end_date: Some("2024-01-10".to_string()),
            end_time: Some("17:00".to_string()),
            destination: Some("Caxias".to_string()),
            km_final: Some(km_final),
            photo_final: Some("z".to_string()),
            status: TripStatus::Aprovado,
            numero_dt: Some("12345".to_string()),
            valor_comissao: Some(rust_decimal::Decimal::from(500)),
            admin_comment: None,
            created_at: "2024-01-10T08:00:00Z".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::tests_support::approved_trip;
    use super::*;

    #[test]
    fn test_total_floors_negative_and_excludes_non_approved() {
        let mut pending = approved_trip("t3", 50.0, 80.0);
        pending.status = TripStatus::Pendente;

        let trips = vec![
            approved_trip("t1", 100.0, 150.0),
            approved_trip("t2", 200.0, 180.0),
            pending,
        ];

        let report = generate_report(&trips, &ReportQuery::default());
        assert_eq!(report.count, 2);
        assert_eq!(report.total_km, 50.0);
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let mut a = approved_trip("t1", 0.0, 10.0);
        a.start_date = "2024-01-05".to_string();
        let mut b = approved_trip("t2", 0.0, 10.0);
        b.start_date = "2024-01-10".to_string();
        let mut c = approved_trip("t3", 0.0, 10.0);
        c.start_date = "2024-01-15".to_string();

        let trips = vec![a, b, c];
        let query = ReportQuery {
            start: Some("2024-01-10".to_string()),
            end: Some("2024-01-10".to_string()),
            plate: None,
        };

        let report = generate_report(&trips, &query);
        assert_eq!(report.count, 1);
        assert_eq!(report.rows[0].start_date, "2024-01-10");
    }

    #[test]
    fn test_sorted_descending_by_start_date() {
        let mut a = approved_trip("t1", 0.0, 10.0);
        a.start_date = "2024-01-05".to_string();
        let mut b = approved_trip("t2", 0.0, 10.0);
        b.start_date = "2024-02-01".to_string();

        let report = generate_report(&[a, b], &ReportQuery::default());
        assert_eq!(report.rows[0].start_date, "2024-02-01");
        assert_eq!(report.rows[1].start_date, "2024-01-05");
    }

    #[test]
    fn test_plate_filter_exact_match() {
        let a = approved_trip("t1", 0.0, 10.0);
        let mut b = approved_trip("t2", 0.0, 20.0);
        b.vehicle_plate = "XYZ9Z99".to_string();

        let query = ReportQuery {
            start: None,
            end: None,
            plate: Some("XYZ9Z99".to_string()),
        };
        let report = generate_report(&[a, b], &query);
        assert_eq!(report.count, 1);
        assert_eq!(report.total_km, 20.0);
    }

    #[test]
    fn test_row_projection_carries_audit_fields() {
        let trip = approved_trip("t1", 100.0, 150.0);
        let report = generate_report(std::slice::from_ref(&trip), &ReportQuery::default());

        let row = &report.rows[0];
        assert_eq!(row.distance, 50.0);
        assert_eq!(row.numero_dt.as_deref(), Some("12345"));
        assert_eq!(row.status, "Aprovado");
    }
}
