use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use shared_models::error::AppError;

use crate::models::Doctor;
use crate::services::DoctorStore;

#[derive(Debug, Deserialize)]
pub struct AvailabilityParams {
    pub is_available: bool,
}

#[axum::debug_handler]
pub async fn create_doctor(
    State(store): State<Arc<DoctorStore>>,
    Json(doctor): Json<Doctor>,
) -> Result<Json<Value>, AppError> {
    let doctor = store.create(doctor);
    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn list_doctors(
    State(store): State<Arc<DoctorStore>>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(json!(store.list())))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(store): State<Arc<DoctorStore>>,
    Path(doctor_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let doctor = store
        .get(doctor_id)
        .map_err(|e| AppError::NotFound(e.to_string()))?;

    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn update_doctor(
    State(store): State<Arc<DoctorStore>>,
    Path(doctor_id): Path<i64>,
    Json(doctor): Json<Doctor>,
) -> Result<Json<Value>, AppError> {
    store
        .update(doctor_id, doctor)
        .map_err(|e| AppError::NotFound(e.to_string()))?;

    Ok(Json(json!({"message": "Doctor updated successfully"})))
}

#[axum::debug_handler]
pub async fn delete_doctor(
    State(store): State<Arc<DoctorStore>>,
    Path(doctor_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    store
        .delete(doctor_id)
        .map_err(|e| AppError::NotFound(e.to_string()))?;

    Ok(Json(json!({"message": "Doctor deleted successfully"})))
}

#[axum::debug_handler]
pub async fn set_doctor_availability(
    State(store): State<Arc<DoctorStore>>,
    Path(doctor_id): Path<i64>,
    Query(params): Query<AvailabilityParams>,
) -> Result<Json<Value>, AppError> {
    store
        .set_availability(doctor_id, params.is_available)
        .map_err(|e| AppError::NotFound(e.to_string()))?;

    Ok(Json(json!({
        "message": format!(
            "Availability status for doctor {} set to {}",
            doctor_id, params.is_available
        )
    })))
}
