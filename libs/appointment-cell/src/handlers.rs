// libs/appointment-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;

use crate::models::{Appointment, AppointmentError};
use crate::services::AppointmentBookingService;

#[axum::debug_handler]
pub async fn create_appointment(
    State(service): State<Arc<AppointmentBookingService>>,
    Json(request): Json<Appointment>,
) -> Result<Json<Value>, AppError> {
    let appointment = service.book(request).map_err(|e| match e {
        AppointmentError::NoAvailableDoctor => {
            AppError::BadRequest("No available doctors".to_string())
        }
        AppointmentError::NotFound => AppError::NotFound(e.to_string()),
    })?;

    Ok(Json(json!(appointment)))
}

#[axum::debug_handler]
pub async fn complete_appointment(
    State(service): State<Arc<AppointmentBookingService>>,
    Path(appointment_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    service
        .complete(appointment_id)
        .map_err(|e| AppError::NotFound(e.to_string()))?;

    Ok(Json(json!({"message": "Appointment completed successfully"})))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(service): State<Arc<AppointmentBookingService>>,
    Path(appointment_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    service
        .cancel(appointment_id)
        .map_err(|e| AppError::NotFound(e.to_string()))?;

    Ok(Json(json!({"message": "Appointment canceled successfully"})))
}
