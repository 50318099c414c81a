use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;

use crate::models::Patient;
use crate::services::PatientStore;

#[axum::debug_handler]
pub async fn create_patient(
    State(store): State<Arc<PatientStore>>,
    Json(patient): Json<Patient>,
) -> Result<Json<Value>, AppError> {
    let patient = store.create(patient);
    Ok(Json(json!(patient)))
}

#[axum::debug_handler]
pub async fn list_patients(
    State(store): State<Arc<PatientStore>>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(json!(store.list())))
}

#[axum::debug_handler]
pub async fn get_patient(
    State(store): State<Arc<PatientStore>>,
    Path(patient_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let patient = store
        .get(patient_id)
        .map_err(|e| AppError::NotFound(e.to_string()))?;

    Ok(Json(json!(patient)))
}

#[axum::debug_handler]
pub async fn update_patient(
    State(store): State<Arc<PatientStore>>,
    Path(patient_id): Path<i64>,
    Json(patient): Json<Patient>,
) -> Result<Json<Value>, AppError> {
    store
        .update(patient_id, patient)
        .map_err(|e| AppError::NotFound(e.to_string()))?;

    Ok(Json(json!({"message": "Patient updated successfully"})))
}

#[axum::debug_handler]
pub async fn delete_patient(
    State(store): State<Arc<PatientStore>>,
    Path(patient_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    store
        .delete(patient_id)
        .map_err(|e| AppError::NotFound(e.to_string()))?;

    Ok(Json(json!({"message": "Patient deleted successfully"})))
}
