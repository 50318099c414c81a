use std::sync::Arc;

use axum::{
    routing::{post, put},
    Router,
};

use crate::handlers::*;
use crate::services::AppointmentBookingService;

pub fn create_appointment_router(service: Arc<AppointmentBookingService>) -> Router {
    Router::new()
        .route("/", post(create_appointment))
        .route("/{id}/complete", put(complete_appointment))
        .route("/{id}/cancel", put(cancel_appointment))
        .with_state(service)
}
