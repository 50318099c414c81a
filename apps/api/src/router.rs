use std::sync::Arc;

use axum::{routing::get, Router};

use appointment_cell::router::create_appointment_router;
use appointment_cell::services::AppointmentBookingService;
use doctor_cell::router::create_doctor_router;
use doctor_cell::services::DoctorStore;
use patient_cell::router::create_patient_router;
use patient_cell::services::PatientStore;

/// Builds the application router. Each store is constructed once here and
/// handed to its cell; the booking service shares the doctor store so it can
/// reserve and release availability.
pub fn create_router() -> Router {
    let patients = Arc::new(PatientStore::new());
    let doctors = Arc::new(DoctorStore::new());
    let appointments = Arc::new(AppointmentBookingService::new(doctors.clone()));

    Router::new()
        .route("/", get(|| async { "Clinic Records API is running!" }))
        .nest("/patients", create_patient_router(patients))
        .nest("/doctors", create_doctor_router(doctors))
        .nest("/appointments", create_appointment_router(appointments))
}
