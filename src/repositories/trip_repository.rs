//! Repositorio de viagens
//!
//! Mapa en memoria autoritativo para la sesión, espejado best-effort a la
//! planilla remota. El write local se aplica siempre de inmediato
//! (actualización optimista); el push remoto puede fallar y solo se
//! loguea - el usuario reintenta manualmente (consistencia eventual).
//!
//! Race conocida y aceptada: no hay lock de servidor coordinando ediciones
//! concurrentes de la misma viagem - gana el último write. En este dominio
//! un motorista es dueño de su viagem y la revisión administrativa ocurre
//! después de los writes del motorista.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::clients::sheet_client::RemoteStore;
use crate::models::trip::{Trip, TripStatus};

pub struct TripRepository {
    trips: Arc<RwLock<HashMap<String, Trip>>>,
    remote: Option<Arc<dyn RemoteStore>>,
}

impl TripRepository {
    pub fn new(remote: Option<Arc<dyn RemoteStore>>) -> Self {
        Self {
            trips: Arc::new(RwLock::new(HashMap::new())),
            remote,
        }
    }

    /// Carga inicial desde la planilla remota. No-fatal: si el colaborador
    /// no responde, la sesión arranca vacía y se reconcilia en el próximo
    /// refresh.
    pub async fn hydrate(&self) -> usize {
        let Some(remote) = &self.remote else {
            return 0;
        };

        match remote.list_trips().await {
            Ok(remote_trips) => {
                let mut trips = self.trips.write().await;
                for trip in remote_trips {
                    // Filtra rows nulos/vacíos que a veces vienen de la
                    // sincronización con la planilla
                    if trip.id.trim().is_empty() {
                        continue;
                    }
                    trips.insert(trip.id.clone(), trip);
                }
                trips.len()
            }
            Err(e) => {
                log::warn!("No se pudo hidratar desde la planilla remota: {}", e);
                0
            }
        }
    }

    pub async fn list(&self) -> Vec<Trip> {
        self.trips.read().await.values().cloned().collect()
    }

    pub async fn list_by_driver(&self, driver_id: &str) -> Vec<Trip> {
        self.trips
            .read()
            .await
            .values()
            .filter(|t| t.driver_id == driver_id)
            .cloned()
            .collect()
    }

    pub async fn list_by_status(&self, status: TripStatus) -> Vec<Trip> {
        self.trips
            .read()
            .await
            .values()
            .filter(|t| t.status == status)
            .cloned()
            .collect()
    }

    pub async fn find_by_id(&self, id: &str) -> Option<Trip> {
        self.trips.read().await.get(id).cloned()
    }

    /// Guarda localmente y propaga a la planilla remota.
    ///
    /// La propagación fallida se loguea en warn y NO revierte el estado
    /// local.
    pub async fn save(&self, trip: Trip) -> Trip {
        {
            let mut trips = self.trips.write().await;
            trips.insert(trip.id.clone(), trip.clone());
        }

        if let Some(remote) = &self.remote {
            if let Err(e) = remote.save_trip(&trip).await {
                log::warn!(
                    "Push remoto falló para viagem '{}' (estado local conservado): {}",
                    trip.id,
                    e
                );
            }
        }

        trip
    }
}
