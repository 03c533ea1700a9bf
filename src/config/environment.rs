//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. El endpoint de la
//! planilla remota es opcional: sin él, el sistema corre con el
//! repositorio en memoria solamente (modo desarrollo/tests).

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    pub cors_origins: Vec<String>,
    /// URL del web-app de la planilla remota (colaborador de persistencia)
    pub sheet_api_url: Option<String>,
    /// Deployment con ruta por fábrica obligatoria
    pub require_factory_route: bool,
}

impl EnvironmentConfig {
    pub fn from_env() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            jwt_secret: env::var("JWT_SECRET").unwrap_or_else(|_| "dev-secret".to_string()),
            jwt_expiration: env::var("JWT_EXPIRATION")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(86400),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_default(),
            sheet_api_url: env::var("SHEET_API_URL").ok(),
            require_factory_route: env::var("REQUIRE_FACTORY_ROUTE")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
