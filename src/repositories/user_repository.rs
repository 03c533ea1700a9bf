//! Repositorio de usuarios
//!
//! Usuarios en memoria con hashes bcrypt. Al arrancar se siembran un
//! administrador y un motorista; el registro agrega usuarios nuevos
//! rechazando ids duplicados.

use std::collections::HashMap;
use std::sync::Arc;

use bcrypt::{hash, verify, DEFAULT_COST};
use tokio::sync::RwLock;

use crate::models::user::{User, UserRole};
use crate::utils::errors::{AppError, AppResult};

pub struct UserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl UserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Siembra los usuarios iniciales del sistema
    pub async fn seed_defaults(&self) -> AppResult<()> {
        let defaults = [
            User {
                id: "admin".to_string(),
                name: "Administrador Sistema".to_string(),
                email: "admin@empresa.com".to_string(),
                role: UserRole::SuperAdmin,
                password_hash: Some(hash_password("admin")?),
            },
            User {
                id: "motorista1".to_string(),
                name: "Matheus Prux".to_string(),
                email: "matheus@empresa.com".to_string(),
                role: UserRole::Driver,
                password_hash: Some(hash_password("123")?),
            },
        ];

        let mut users = self.users.write().await;
        for user in defaults {
            users.entry(user.id.clone()).or_insert(user);
        }
        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> Option<User> {
        self.users.read().await.get(id).cloned()
    }

    pub async fn list_admins(&self) -> Vec<User> {
        self.users
            .read()
            .await
            .values()
            .filter(|u| u.role.is_administrative())
            .cloned()
            .collect()
    }

    /// Alta de usuario - id único
    pub async fn insert(&self, user: User) -> AppResult<()> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.id) {
            return Err(AppError::Validation(
                "Este ID de usuário já está em uso.".to_string(),
            ));
        }
        users.insert(user.id.clone(), user);
        Ok(())
    }

    /// Verifica credenciales contra el hash almacenado
    pub async fn verify_credentials(&self, id: &str, password: &str) -> AppResult<Option<User>> {
        let Some(user) = self.find_by_id(id).await else {
            return Ok(None);
        };
        let Some(stored_hash) = &user.password_hash else {
            return Ok(None);
        };

        let matches = verify(password, stored_hash)
            .map_err(|e| AppError::Internal(format!("bcrypt verify failed: {}", e)))?;

        Ok(if matches { Some(user) } else { None })
    }
}

/// Hash bcrypt con el costo por defecto
pub fn hash_password(plain: &str) -> AppResult<String> {
    hash(plain, DEFAULT_COST).map_err(|e| AppError::Internal(format!("bcrypt hash failed: {}", e)))
}
