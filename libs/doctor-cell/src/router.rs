use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::*;
use crate::services::DoctorStore;

pub fn create_doctor_router(store: Arc<DoctorStore>) -> Router {
    Router::new()
        .route("/", post(create_doctor))
        .route("/", get(list_doctors))
        .route("/{id}", get(get_doctor))
        .route("/{id}", put(update_doctor))
        .route("/{id}", delete(delete_doctor))
        .route("/{id}/set_availability", put(set_doctor_availability))
        .with_state(store)
}
