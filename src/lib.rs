//! Sistema de registro y aprobación de viagens
//!
//! Backend del flujo motorista/administrador: el motorista registra
//! odómetro y evidencias fotográficas en cada waypoint (inicio, fábrica,
//! destino); el administrador audita, aprueba o rechaza adjuntando número
//! de DT y comisión; los reportes agregan la distancia auditada.

pub mod clients;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
