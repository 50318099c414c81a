use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use doctor_cell::services::DoctorStore;

use crate::models::{Appointment, AppointmentError};

/// Owns the appointment collection and coordinates it with doctor
/// availability: booking reserves a doctor, completion or cancellation
/// releases it and drops the record. The doctor store is the only cross-cell
/// dependency.
pub struct AppointmentBookingService {
    doctors: Arc<DoctorStore>,
    records: RwLock<Vec<Appointment>>,
}

impl AppointmentBookingService {
    pub fn new(doctors: Arc<DoctorStore>) -> Self {
        Self {
            doctors,
            records: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Appointment>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Appointment>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn list(&self) -> Vec<Appointment> {
        self.read().clone()
    }

    /// Books an appointment against the first available doctor. The record is
    /// stored exactly as supplied; in particular its `doctor_id` is not
    /// rewritten to the reserved doctor's id.
    pub fn book(&self, appointment: Appointment) -> Result<Appointment, AppointmentError> {
        let doctor = self
            .doctors
            .reserve_next_available()
            .ok_or(AppointmentError::NoAvailableDoctor)?;

        debug!(
            "Booked appointment {} (patient {}), reserved doctor {}",
            appointment.id, appointment.patient_id, doctor.id
        );
        self.write().push(appointment.clone());
        Ok(appointment)
    }

    pub fn complete(&self, appointment_id: i64) -> Result<(), AppointmentError> {
        self.close(appointment_id, "completed")
    }

    pub fn cancel(&self, appointment_id: i64) -> Result<(), AppointmentError> {
        self.close(appointment_id, "canceled")
    }

    /// Releases the appointment's stored doctor and removes the record. If
    /// the stored `doctor_id` names no doctor the appointment is kept and the
    /// whole operation fails with `NotFound`.
    fn close(&self, appointment_id: i64, outcome: &str) -> Result<(), AppointmentError> {
        let doctor_id = self
            .read()
            .iter()
            .find(|a| a.id == appointment_id)
            .map(|a| a.doctor_id)
            .ok_or(AppointmentError::NotFound)?;

        self.doctors
            .set_availability(doctor_id, true)
            .map_err(|_| AppointmentError::NotFound)?;

        let mut records = self.write();
        if let Some(index) = records.iter().position(|a| a.id == appointment_id) {
            records.remove(index);
        }
        debug!("Appointment {} {}", appointment_id, outcome);
        Ok(())
    }
}
