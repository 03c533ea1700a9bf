//! Servicio de autenticación
//!
//! Login contra el repositorio local de usuarios (hashes bcrypt), con
//! fallback al colaborador remoto cuando está configurado. Un login
//! exitoso emite un JWT de sesión; las credenciales rechazadas se
//! reportan directo al usuario, sin reintentos automáticos.

use std::sync::Arc;

use chrono::Utc;

use crate::clients::sheet_client::RemoteStore;
use crate::dto::auth_dto::{LoginRequest, LoginResponse, RegisterRequest};
use crate::models::user::{AuthenticatedUser, User};
use crate::repositories::user_repository::{hash_password, UserRepository};
use crate::utils::errors::AppResult;
use crate::utils::jwt;

#[derive(Clone)]
pub struct AuthService {
    users: Arc<UserRepository>,
    remote: Option<Arc<dyn RemoteStore>>,
    jwt_secret: String,
    jwt_expiration: u64,
}

impl AuthService {
    pub fn new(
        users: Arc<UserRepository>,
        remote: Option<Arc<dyn RemoteStore>>,
        jwt_secret: String,
        jwt_expiration: u64,
    ) -> Self {
        Self {
            users,
            remote,
            jwt_secret,
            jwt_expiration,
        }
    }

    /// Autentica y emite el token de sesión
    pub async fn login(&self, request: &LoginRequest) -> AppResult<LoginResponse> {
        let user = match self
            .users
            .verify_credentials(&request.id, &request.password)
            .await?
        {
            Some(user) => Some(user),
            None => self.try_remote_login(request).await,
        };

        let Some(user) = user else {
            return Ok(LoginResponse {
                success: false,
                token: None,
                user: None,
                message: Some("ID ou senha incorretos.".to_string()),
                expires_at: None,
            });
        };

        let identity = AuthenticatedUser::from(&user);
        let token = jwt::generate_token(&identity, &self.jwt_secret, self.jwt_expiration)?;
        let expires_at = Utc::now() + chrono::Duration::seconds(self.jwt_expiration as i64);

        Ok(LoginResponse {
            success: true,
            token: Some(token),
            user: Some(identity),
            message: None,
            expires_at: Some(expires_at),
        })
    }

    /// Alta de usuario nuevo - id único
    pub async fn register(&self, request: &RegisterRequest) -> AppResult<AuthenticatedUser> {
        let user = User {
            id: request.id.trim().to_string(),
            name: request.name.trim().to_string(),
            email: request.email.trim().to_string(),
            role: request.role,
            password_hash: Some(hash_password(&request.password)?),
        };
        let identity = AuthenticatedUser::from(&user);
        self.users.insert(user).await?;
        Ok(identity)
    }

    /// Valida un token de sesión
    pub fn validate_token(&self, token: &str) -> AppResult<AuthenticatedUser> {
        jwt::validate_token(token, &self.jwt_secret)
    }

    /// Intento contra el colaborador remoto; si responde un usuario, se
    /// cachea localmente para la sesión
    async fn try_remote_login(&self, request: &LoginRequest) -> Option<User> {
        let remote = self.remote.as_ref()?;
        match remote.authenticate(&request.id, &request.password).await {
            Ok(Some(user)) => {
                if let Err(e) = self.users.insert(user.clone()).await {
                    log::warn!("No se pudo cachear usuario remoto '{}': {}", user.id, e);
                }
                Some(user)
            }
            Ok(None) => None,
            Err(e) => {
                log::warn!("Colaborador de autenticación no disponible: {}", e);
                None
            }
        }
    }
}
