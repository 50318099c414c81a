use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub patient_id: i64,
    /// Caller-supplied doctor reference. Booking reserves the first available
    /// doctor regardless of this field and stores the record as supplied, so
    /// the two can diverge; completion releases whatever doctor this field
    /// names.
    pub doctor_id: i64,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppointmentError {
    #[error("Appointment not found")]
    NotFound,

    #[error("No available doctors")]
    NoAvailableDoctor,
}
