//! Modelos del sistema
//!
//! Este módulo contiene las entidades del dominio: viagens y usuarios.
//! Los modelos mapean exactamente al formato de la planilla remota.

pub mod trip;
pub mod user;
