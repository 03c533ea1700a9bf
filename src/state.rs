//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum: repositorios, servicios y configuración.

use std::sync::Arc;

use crate::clients::sheet_client::{RemoteStore, SheetClient};
use crate::config::environment::EnvironmentConfig;
use crate::repositories::trip_repository::TripRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::approval_service::ApprovalService;
use crate::services::auth_service::AuthService;
use crate::services::lifecycle_service::{EvidencePolicy, LifecycleService};
use crate::services::notification_service::NotificationService;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub trips: Arc<TripRepository>,
    pub users: Arc<UserRepository>,
    pub lifecycle: LifecycleService,
    pub approval: ApprovalService,
    pub auth: AuthService,
    pub notifier: NotificationService,
}

impl AppState {
    pub fn new(config: EnvironmentConfig) -> Self {
        let remote: Option<Arc<dyn RemoteStore>> = config
            .sheet_api_url
            .as_ref()
            .map(|url| Arc::new(SheetClient::new(url.clone())) as Arc<dyn RemoteStore>);

        let trips = Arc::new(TripRepository::new(remote.clone()));
        let users = Arc::new(UserRepository::new());
        let notifier = NotificationService::new(users.clone());

        let policy = EvidencePolicy {
            require_factory_route: config.require_factory_route,
            ..EvidencePolicy::default()
        };

        Self {
            lifecycle: LifecycleService::new(policy),
            approval: ApprovalService::new(trips.clone(), notifier.clone()),
            auth: AuthService::new(
                users.clone(),
                remote,
                config.jwt_secret.clone(),
                config.jwt_expiration,
            ),
            notifier,
            trips,
            users,
            config,
        }
    }
}
