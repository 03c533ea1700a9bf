//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación,
//! JWT y normalización de referencias de fotos.

pub mod errors;
pub mod jwt;
pub mod photos;
pub mod validation;
