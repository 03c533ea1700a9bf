//! Servicio de autorización
//!
//! Un único predicado rol -> transición consultado por todos los
//! controllers antes de ejecutar cualquier transición. Los checks de rol
//! no viven en ningún otro lado.

use crate::models::trip::TransitionEvent;
use crate::models::user::UserRole;
use crate::utils::errors::{forbidden_transition_error, AppError, AppResult};

/// ¿Puede este rol ejecutar esta transición?
pub fn can_perform(role: UserRole, event: TransitionEvent) -> bool {
    match event {
        TransitionEvent::StartTrip
        | TransitionEvent::ArriveFactory
        | TransitionEvent::DepartFactory
        | TransitionEvent::FinishTrip => role == UserRole::Driver,

        TransitionEvent::Approve | TransitionEvent::Reject => role.is_administrative(),

        // Enmendar viagens ya aprobadas requiere el rol elevado
        TransitionEvent::Amend => role == UserRole::SuperAdmin,
    }
}

/// Versión con error tipado para usar con `?` en los controllers
pub fn require(role: UserRole, event: TransitionEvent) -> AppResult<()> {
    if can_perform(role, event) {
        Ok(())
    } else {
        Err(forbidden_error(role, event))
    }
}

fn forbidden_error(role: UserRole, event: TransitionEvent) -> AppError {
    let role_name = match role {
        UserRole::Driver => "driver",
        UserRole::Admin => "admin",
        UserRole::SuperAdmin => "super_admin",
    };
    let action = match event {
        TransitionEvent::StartTrip => "start_trip",
        TransitionEvent::ArriveFactory => "arrive_factory",
        TransitionEvent::DepartFactory => "depart_factory",
        TransitionEvent::FinishTrip => "finish_trip",
        TransitionEvent::Approve => "approve",
        TransitionEvent::Reject => "reject",
        TransitionEvent::Amend => "amend",
    };
    forbidden_transition_error(role_name, action)
}
