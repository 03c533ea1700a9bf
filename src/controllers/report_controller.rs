//! Controller de reportes

use crate::dto::report_dto::{ReportQuery, ReportResponse};
use crate::models::user::AuthenticatedUser;
use crate::services::report_service;
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

pub struct ReportController {
    state: AppState,
}

impl ReportController {
    pub fn new(state: &AppState) -> Self {
        Self {
            state: state.clone(),
        }
    }

    /// Reporte de viagens auditadas - solo administradores
    pub async fn generate(
        &self,
        user: &AuthenticatedUser,
        query: ReportQuery,
    ) -> AppResult<ReportResponse> {
        if !user.role.is_administrative() {
            return Err(AppError::Authorization(
                "Relatórios são restritos a administradores".to_string(),
            ));
        }

        let trips = self.state.trips.list().await;
        Ok(report_service::generate_report(&trips, &query))
    }
}
