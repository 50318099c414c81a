use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::models::{Patient, PatientError};

/// In-memory patient collection. Records are kept in insertion order and
/// looked up by a linear scan on their caller-assigned id; duplicate ids are
/// not rejected, the first match wins.
#[derive(Debug, Default)]
pub struct PatientStore {
    records: RwLock<Vec<Patient>>,
}

impl PatientStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Patient>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Patient>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn create(&self, patient: Patient) -> Patient {
        debug!("Creating patient record: {}", patient.id);
        self.write().push(patient.clone());
        patient
    }

    pub fn list(&self) -> Vec<Patient> {
        self.read().clone()
    }

    pub fn get(&self, id: i64) -> Result<Patient, PatientError> {
        self.read()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(PatientError::NotFound)
    }

    /// Replaces the record wholesale. The payload's own id is stored as-is,
    /// even if it differs from `id`.
    pub fn update(&self, id: i64, patient: Patient) -> Result<(), PatientError> {
        debug!("Updating patient record: {}", id);
        let mut records = self.write();
        match records.iter_mut().find(|p| p.id == id) {
            Some(existing) => {
                *existing = patient;
                Ok(())
            }
            None => Err(PatientError::NotFound),
        }
    }

    pub fn delete(&self, id: i64) -> Result<(), PatientError> {
        debug!("Deleting patient record: {}", id);
        let mut records = self.write();
        match records.iter().position(|p| p.id == id) {
            Some(index) => {
                records.remove(index);
                Ok(())
            }
            None => Err(PatientError::NotFound),
        }
    }
}
