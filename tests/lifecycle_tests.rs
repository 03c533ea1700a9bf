//! Tests de integración del ciclo de vida completo
//!
//! Ejercitan la cadena real controller -> servicio -> repositorio con el
//! repositorio en memoria (sin colaborador remoto).

use rust_decimal::Decimal;

use viagens_backend::config::environment::EnvironmentConfig;
use viagens_backend::controllers::report_controller::ReportController;
use viagens_backend::controllers::trip_controller::TripController;
use viagens_backend::dto::report_dto::ReportQuery;
use viagens_backend::dto::trip_dto::{
    AmendRequest, Decision, DecisionAuditFields, DecisionRequest, FactoryArrivalRequest,
    FinishTripRequest, StartTripRequest,
};
use viagens_backend::models::trip::TripStatus;
use viagens_backend::models::user::{AuthenticatedUser, UserRole};
use viagens_backend::state::AppState;
use viagens_backend::utils::errors::AppError;

fn test_config() -> EnvironmentConfig {
    EnvironmentConfig {
        environment: "test".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        jwt_secret: "test-secret".to_string(),
        jwt_expiration: 3600,
        cors_origins: vec![],
        sheet_api_url: None,
        require_factory_route: false,
    }
}

async fn test_state() -> AppState {
    let state = AppState::new(test_config());
    state.users.seed_defaults().await.unwrap();
    state
}

fn driver() -> AuthenticatedUser {
    AuthenticatedUser {
        id: "motorista1".to_string(),
        name: "Matheus Prux".to_string(),
        role: UserRole::Driver,
    }
}

fn admin() -> AuthenticatedUser {
    AuthenticatedUser {
        id: "gerente".to_string(),
        name: "Gerente Frota".to_string(),
        role: UserRole::Admin,
    }
}

fn super_admin() -> AuthenticatedUser {
    AuthenticatedUser {
        id: "admin".to_string(),
        name: "Administrador Sistema".to_string(),
        role: UserRole::SuperAdmin,
    }
}

fn start_request() -> StartTripRequest {
    StartTripRequest {
        vehicle_plate: "ABC1D23".to_string(),
        origin: "Porto Alegre".to_string(),
        km_initial: 1000.0,
        photo_initial: "x".to_string(),
    }
}

#[tokio::test]
async fn test_full_happy_path_with_factory_stop() {
    let state = test_state().await;
    let trips = TripController::new(&state);

    // inicio -> Em Andamento
    let started = trips.start(&driver(), start_request()).await.unwrap();
    let trip = started.data.unwrap().trip;
    assert_eq!(trip.status, TripStatus::EmAndamento);
    let id = trip.id;

    // chegada na fábrica -> Na Fábrica
    let at_factory = trips
        .arrive_factory(
            &driver(),
            &id,
            FactoryArrivalRequest {
                factory_name: "FB ITU".to_string(),
                photo: Some("y".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(at_factory.data.unwrap().trip.status, TripStatus::NaFabrica);

    // saída da fábrica -> Em Trânsito
    let in_transit = trips.depart_factory(&driver(), &id).await.unwrap();
    let in_transit = in_transit.data.unwrap().trip;
    assert_eq!(in_transit.status, TripStatus::EmTransito);
    assert!(in_transit.factory_departure_time.is_some());

    // finalización -> Pendente
    let finished = trips
        .finish(
            &driver(),
            &id,
            FinishTripRequest {
                destination: "Caxias".to_string(),
                km_final: 1200.0,
                photo_final: "z".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(finished.data.unwrap().trip.status, TripStatus::Pendente);

    // aprobación con campos de auditoría -> Aprovado
    let approved = trips
        .decide(
            &admin(),
            &id,
            DecisionRequest {
                decision: Decision::Aprovado,
                comment: Some("tudo certo".to_string()),
                audit: DecisionAuditFields {
                    numero_dt: Some("12345".to_string()),
                    valor_comissao: Some(Decimal::new(50000, 2)),
                },
            },
        )
        .await
        .unwrap();
    let approved = approved.data.unwrap().trip;
    assert_eq!(approved.status, TripStatus::Aprovado);
    assert_eq!(approved.numero_dt.as_deref(), Some("12345"));

    // el reporte incluye la viagem con distancia 200
    let reports = ReportController::new(&state);
    let report = reports
        .generate(&admin(), ReportQuery::default())
        .await
        .unwrap();
    assert_eq!(report.count, 1);
    assert_eq!(report.total_km, 200.0);
    assert_eq!(report.rows[0].distance, 200.0);
}

#[tokio::test]
async fn test_finish_rejected_when_km_final_not_greater() {
    let state = test_state().await;
    let trips = TripController::new(&state);

    let started = trips.start(&driver(), start_request()).await.unwrap();
    let id = started.data.unwrap().trip.id;

    let err = trips
        .finish(
            &driver(),
            &id,
            FinishTripRequest {
                destination: "Caxias".to_string(),
                km_final: 1000.0,
                photo_final: "z".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Ordering(_)));

    // el estado quedó como estaba
    let current = trips.get(&driver(), &id).await.unwrap();
    assert_eq!(current.trip.status, TripStatus::EmAndamento);
    assert!(current.trip.km_final.is_none());
}

#[tokio::test]
async fn test_evidence_gating_blocks_transitions() {
    let state = test_state().await;
    let trips = TripController::new(&state);

    // inicio sin foto
    let mut no_photo = start_request();
    no_photo.photo_initial = "".to_string();
    assert!(trips.start(&driver(), no_photo).await.is_err());

    // chegada na fábrica sin foto
    let started = trips.start(&driver(), start_request()).await.unwrap();
    let id = started.data.unwrap().trip.id;
    let err = trips
        .arrive_factory(
            &driver(),
            &id,
            FactoryArrivalRequest {
                factory_name: "FB ITU".to_string(),
                photo: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    // finalización sin foto final
    let err = trips
        .finish(
            &driver(),
            &id,
            FinishTripRequest {
                destination: "Caxias".to_string(),
                km_final: 1200.0,
                photo_final: "".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn test_approval_gating_keeps_status_pendente() {
    let state = test_state().await;
    let trips = TripController::new(&state);

    let started = trips.start(&driver(), start_request()).await.unwrap();
    let id = started.data.unwrap().trip.id;
    trips
        .finish(
            &driver(),
            &id,
            FinishTripRequest {
                destination: "Caxias".to_string(),
                km_final: 1100.0,
                photo_final: "z".to_string(),
            },
        )
        .await
        .unwrap();

    // aprobar sin DT ni comisión falla
    let err = trips
        .decide(
            &admin(),
            &id,
            DecisionRequest {
                decision: Decision::Aprovado,
                comment: None,
                audit: DecisionAuditFields {
                    numero_dt: None,
                    valor_comissao: None,
                },
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    // comisión negativa también falla
    let err = trips
        .decide(
            &admin(),
            &id,
            DecisionRequest {
                decision: Decision::Aprovado,
                comment: None,
                audit: DecisionAuditFields {
                    numero_dt: Some("12345".to_string()),
                    valor_comissao: Some(Decimal::from(-10)),
                },
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let current = trips.get(&admin(), &id).await.unwrap();
    assert_eq!(current.trip.status, TripStatus::Pendente);
}

#[tokio::test]
async fn test_role_gating() {
    let state = test_state().await;
    let trips = TripController::new(&state);

    let started = trips.start(&driver(), start_request()).await.unwrap();
    let id = started.data.unwrap().trip.id;
    trips
        .finish(
            &driver(),
            &id,
            FinishTripRequest {
                destination: "Caxias".to_string(),
                km_final: 1100.0,
                photo_final: "z".to_string(),
            },
        )
        .await
        .unwrap();

    // un motorista no aprueba
    let err = trips
        .decide(
            &driver(),
            &id,
            DecisionRequest {
                decision: Decision::Aprovado,
                comment: None,
                audit: DecisionAuditFields {
                    numero_dt: Some("1".to_string()),
                    valor_comissao: Some(Decimal::ONE),
                },
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Authorization(_)));

    // un admin no inicia viagens
    assert!(matches!(
        trips.start(&admin(), start_request()).await.unwrap_err(),
        AppError::Authorization(_)
    ));

    // un motorista no toca viagens ajenas
    let other_driver = AuthenticatedUser {
        id: "motorista2".to_string(),
        name: "Outro Motorista".to_string(),
        role: UserRole::Driver,
    };
    assert!(matches!(
        trips.depart_factory(&other_driver, &id).await.unwrap_err(),
        AppError::Authorization(_) | AppError::NotFound(_)
    ));
}

#[tokio::test]
async fn test_amend_requires_super_admin_and_is_idempotent() {
    let state = test_state().await;
    let trips = TripController::new(&state);

    let started = trips.start(&driver(), start_request()).await.unwrap();
    let id = started.data.unwrap().trip.id;
    trips
        .finish(
            &driver(),
            &id,
            FinishTripRequest {
                destination: "Caxias".to_string(),
                km_final: 1100.0,
                photo_final: "z".to_string(),
            },
        )
        .await
        .unwrap();
    trips
        .decide(
            &admin(),
            &id,
            DecisionRequest {
                decision: Decision::Aprovado,
                comment: None,
                audit: DecisionAuditFields {
                    numero_dt: Some("12345".to_string()),
                    valor_comissao: Some(Decimal::from(500)),
                },
            },
        )
        .await
        .unwrap();

    let amend = AmendRequest {
        audit: DecisionAuditFields {
            numero_dt: Some("DT-99999".to_string()),
            valor_comissao: Some(Decimal::from(750)),
        },
        comment: Some("valor corrigido".to_string()),
    };

    // admin común no puede enmendar
    let err = trips.amend(&admin(), &id, amend_clone(&amend)).await.unwrap_err();
    assert!(matches!(err, AppError::Authorization(_)));

    // súper admin sí - dos veces con el mismo payload da el mismo registro
    let first = trips
        .amend(&super_admin(), &id, amend_clone(&amend))
        .await
        .unwrap()
        .data
        .unwrap()
        .trip;
    let second = trips
        .amend(&super_admin(), &id, amend)
        .await
        .unwrap()
        .data
        .unwrap()
        .trip;

    assert_eq!(first.numero_dt.as_deref(), Some("99999"));
    assert_eq!(first.numero_dt, second.numero_dt);
    assert_eq!(first.valor_comissao, second.valor_comissao);
    assert_eq!(second.status, TripStatus::Aprovado);
}

fn amend_clone(request: &AmendRequest) -> AmendRequest {
    AmendRequest {
        audit: DecisionAuditFields {
            numero_dt: request.audit.numero_dt.clone(),
            valor_comissao: request.audit.valor_comissao,
        },
        comment: request.comment.clone(),
    }
}
