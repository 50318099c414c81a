// libs/appointment-cell/tests/handlers_test.rs

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use appointment_cell::handlers::*;
use appointment_cell::models::Appointment;
use appointment_cell::services::AppointmentBookingService;
use doctor_cell::models::Doctor;
use doctor_cell::services::DoctorStore;
use shared_models::error::AppError;

fn test_doctor(id: i64, available: bool) -> Doctor {
    Doctor {
        id,
        name: "Dr. John Smith".to_string(),
        specialization: "General Practice".to_string(),
        phone: "01-555-0199".to_string(),
        is_available: available,
    }
}

fn test_appointment(id: i64, doctor_id: i64) -> Appointment {
    Appointment {
        id,
        patient_id: 1,
        doctor_id,
        date: "2024-01-01".to_string(),
    }
}

fn setup(doctors: &[Doctor]) -> (Arc<AppointmentBookingService>, Arc<DoctorStore>) {
    let store = Arc::new(DoctorStore::new());
    for d in doctors {
        store.create(d.clone());
    }
    (
        Arc::new(AppointmentBookingService::new(store.clone())),
        store,
    )
}

#[tokio::test]
async fn test_create_appointment_reserves_doctor() {
    let (service, doctors) = setup(&[test_doctor(1, true)]);

    let result = create_appointment(State(service.clone()), Json(test_appointment(1, 1))).await;

    assert!(result.is_ok(), "Expected create_appointment to succeed, but got error: {:?}", result.err());
    let response = result.unwrap().0;
    assert_eq!(response["id"], 1);
    assert_eq!(response["doctor_id"], 1);
    assert!(!doctors.get(1).unwrap().is_available);
}

#[tokio::test]
async fn test_create_appointment_no_available_doctors() {
    let (service, doctors) = setup(&[test_doctor(1, false)]);

    let result = create_appointment(State(service.clone()), Json(test_appointment(1, 1))).await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::BadRequest(msg) => assert_eq!(msg, "No available doctors"),
        other => panic!("Expected BadRequest error, got {:?}", other),
    }
    assert!(service.list().is_empty());
    assert!(!doctors.get(1).unwrap().is_available);
}

#[tokio::test]
async fn test_complete_appointment_success_message() {
    let (service, doctors) = setup(&[test_doctor(1, true)]);
    service.book(test_appointment(1, 1)).unwrap();

    let result = complete_appointment(State(service.clone()), Path(1)).await;

    assert!(result.is_ok(), "Expected complete_appointment to succeed, but got error: {:?}", result.err());
    let response = result.unwrap().0;
    assert_eq!(response["message"], "Appointment completed successfully");
    assert!(doctors.get(1).unwrap().is_available);
    assert!(service.list().is_empty());
}

#[tokio::test]
async fn test_cancel_appointment_success_message() {
    let (service, doctors) = setup(&[test_doctor(1, true)]);
    service.book(test_appointment(1, 1)).unwrap();

    let result = cancel_appointment(State(service.clone()), Path(1)).await;

    assert!(result.is_ok());
    let response = result.unwrap().0;
    assert_eq!(response["message"], "Appointment canceled successfully");
    assert!(doctors.get(1).unwrap().is_available);
    assert!(service.list().is_empty());
}

#[tokio::test]
async fn test_complete_missing_appointment_not_found() {
    let (service, _doctors) = setup(&[test_doctor(1, true)]);

    let result = complete_appointment(State(service), Path(42)).await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::NotFound(msg) => assert_eq!(msg, "Appointment not found"),
        other => panic!("Expected NotFound error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_cancel_with_dangling_doctor_id_keeps_appointment() {
    let (service, _doctors) = setup(&[test_doctor(1, true)]);
    service.book(test_appointment(1, 99)).unwrap();

    let result = cancel_appointment(State(service.clone()), Path(1)).await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::NotFound(msg) => assert_eq!(msg, "Appointment not found"),
        other => panic!("Expected NotFound error, got {:?}", other),
    }
    assert_eq!(service.list().len(), 1);
}
