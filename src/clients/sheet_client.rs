//! Cliente de la planilla remota
//!
//! El colaborador de persistencia es un web-app respaldado en planilla con
//! una API estilo query (`action=getTrips|saveTrip|login`). El core no
//! depende del transporte: todo pasa por el trait `RemoteStore`, que los
//! tests sustituyen por stubs.

use async_trait::async_trait;
use serde::Deserialize;

use crate::models::trip::Trip;
use crate::models::user::User;
use crate::utils::errors::{AppError, AppResult};

/// Contrato del colaborador de persistencia externo
#[async_trait]
pub trait RemoteStore: Send + Sync {
    async fn list_trips(&self) -> AppResult<Vec<Trip>>;
    async fn save_trip(&self, trip: &Trip) -> AppResult<()>;
    async fn authenticate(&self, id: &str, password: &str) -> AppResult<Option<User>>;
}

/// Ack genérico del web-app de la planilla
#[derive(Debug, Deserialize)]
struct SheetAck {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

/// Response de login del web-app
#[derive(Debug, Deserialize)]
struct SheetLoginResponse {
    success: bool,
    #[serde(default)]
    user: Option<User>,
}

/// Implementación HTTP real contra el web-app de la planilla
pub struct SheetClient {
    client: reqwest::Client,
    base_url: String,
}

impl SheetClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl RemoteStore for SheetClient {
    async fn list_trips(&self) -> AppResult<Vec<Trip>> {
        let url = format!("{}?action=getTrips", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Persistence(format!("getTrips request failed: {}", e)))?;

        let trips: Vec<Trip> = response
            .json()
            .await
            .map_err(|e| AppError::Persistence(format!("getTrips decode failed: {}", e)))?;

        log::info!("Planilla remota: {} viagens cargadas", trips.len());
        Ok(trips)
    }

    async fn save_trip(&self, trip: &Trip) -> AppResult<()> {
        let url = format!("{}?action=saveTrip", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(trip)
            .send()
            .await
            .map_err(|e| AppError::Persistence(format!("saveTrip request failed: {}", e)))?;

        let ack: SheetAck = response
            .json()
            .await
            .map_err(|e| AppError::Persistence(format!("saveTrip decode failed: {}", e)))?;

        if !ack.success {
            return Err(AppError::Persistence(format!(
                "saveTrip rejected: {}",
                ack.message.unwrap_or_else(|| "sin detalle".to_string())
            )));
        }
        Ok(())
    }

    async fn authenticate(&self, id: &str, password: &str) -> AppResult<Option<User>> {
        let url = format!(
            "{}?action=login&id={}&password={}",
            self.base_url,
            urlencoding::encode(id),
            urlencoding::encode(password)
        );
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Persistence(format!("login request failed: {}", e)))?;

        let login: SheetLoginResponse = response
            .json()
            .await
            .map_err(|e| AppError::Persistence(format!("login decode failed: {}", e)))?;

        if login.success {
            Ok(login.user)
        } else {
            Ok(None)
        }
    }
}
