//! Modelo de User
//!
//! Usuarios del sistema: motoristas y administradores. Los usuarios no
//! tienen ciclo de vida propio - solo identidad y rol.

use serde::{Deserialize, Serialize};

/// Rol de usuario - gatea qué transiciones puede ejecutar
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Driver,
    Admin,
    SuperAdmin,
}

impl UserRole {
    /// Admin o SuperAdmin: puede revisar viagens pendientes
    pub fn is_administrative(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::SuperAdmin)
    }
}

/// Usuario del sistema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    /// Hash bcrypt - nunca se serializa hacia afuera
    #[serde(skip_serializing, default)]
    pub password_hash: Option<String>,
}

/// Identidad autenticada que viaja en el JWT y llega a los handlers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: String,
    pub name: String,
    pub role: UserRole,
}

impl From<&User> for AuthenticatedUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            role: user.role,
        }
    }
}
