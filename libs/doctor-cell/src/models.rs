use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub specialization: String,
    pub phone: String,
    /// Whether the doctor can be assigned to a new appointment. Flipped to
    /// false when an appointment reserves the doctor and back to true when
    /// that appointment is completed or canceled.
    #[serde(default = "default_availability")]
    pub is_available: bool,
}

fn default_availability() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DoctorError {
    #[error("Doctor not found")]
    NotFound,
}
