//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación: máquina de
//! estados del ciclo de vida, aprobación/auditoría, reportes, autenticación
//! y autorización.

pub mod approval_service;
pub mod auth_service;
pub mod authorization_service;
pub mod lifecycle_service;
pub mod notification_service;
pub mod report_service;
