use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::models::{Doctor, DoctorError};

/// In-memory doctor collection. Besides the usual linear-scan CRUD it owns
/// the availability flag that appointment booking reserves and releases.
#[derive(Debug, Default)]
pub struct DoctorStore {
    records: RwLock<Vec<Doctor>>,
}

impl DoctorStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Doctor>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Doctor>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn create(&self, doctor: Doctor) -> Doctor {
        debug!("Creating doctor record: {}", doctor.id);
        self.write().push(doctor.clone());
        doctor
    }

    pub fn list(&self) -> Vec<Doctor> {
        self.read().clone()
    }

    pub fn get(&self, id: i64) -> Result<Doctor, DoctorError> {
        self.read()
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or(DoctorError::NotFound)
    }

    pub fn update(&self, id: i64, doctor: Doctor) -> Result<(), DoctorError> {
        debug!("Updating doctor record: {}", id);
        let mut records = self.write();
        match records.iter_mut().find(|d| d.id == id) {
            Some(existing) => {
                *existing = doctor;
                Ok(())
            }
            None => Err(DoctorError::NotFound),
        }
    }

    pub fn delete(&self, id: i64) -> Result<(), DoctorError> {
        debug!("Deleting doctor record: {}", id);
        let mut records = self.write();
        match records.iter().position(|d| d.id == id) {
            Some(index) => {
                records.remove(index);
                Ok(())
            }
            None => Err(DoctorError::NotFound),
        }
    }

    /// Overrides the availability flag directly. No check is made against
    /// open appointments, so an operator can mark a doctor available while
    /// one is still running.
    pub fn set_availability(&self, id: i64, is_available: bool) -> Result<(), DoctorError> {
        debug!("Setting doctor {} availability to {}", id, is_available);
        let mut records = self.write();
        match records.iter_mut().find(|d| d.id == id) {
            Some(doctor) => {
                doctor.is_available = is_available;
                Ok(())
            }
            None => Err(DoctorError::NotFound),
        }
    }

    /// Reserves the first available doctor in insertion order, flipping its
    /// flag to unavailable under a single write lock so two concurrent
    /// bookings cannot pick the same doctor. Returns the reserved doctor, or
    /// `None` when every doctor is busy.
    pub fn reserve_next_available(&self) -> Option<Doctor> {
        let mut records = self.write();
        let doctor = records.iter_mut().find(|d| d.is_available)?;
        doctor.is_available = false;
        debug!("Reserved doctor {}", doctor.id);
        Some(doctor.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctor(id: i64, available: bool) -> Doctor {
        Doctor {
            id,
            name: format!("Dr. {}", id),
            specialization: "General Practice".to_string(),
            phone: "01-555-0199".to_string(),
            is_available: available,
        }
    }

    #[test]
    fn create_then_get_returns_equal_record() {
        let store = DoctorStore::new();
        let created = store.create(doctor(1, true));
        assert_eq!(store.get(1).unwrap(), created);
    }

    #[test]
    fn update_is_last_write_wins() {
        let store = DoctorStore::new();
        store.create(doctor(1, true));
        let mut replacement = doctor(1, true);
        replacement.specialization = "Cardiology".to_string();
        store.update(1, replacement.clone()).unwrap();
        assert_eq!(store.get(1).unwrap(), replacement);
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let store = DoctorStore::new();
        store.create(doctor(1, true));
        store.delete(1).unwrap();
        assert_eq!(store.get(1), Err(DoctorError::NotFound));
    }

    #[test]
    fn set_availability_overrides_flag() {
        let store = DoctorStore::new();
        store.create(doctor(1, false));
        store.set_availability(1, true).unwrap();
        assert!(store.get(1).unwrap().is_available);
    }

    #[test]
    fn set_availability_missing_is_not_found() {
        let store = DoctorStore::new();
        assert_eq!(store.set_availability(9, true), Err(DoctorError::NotFound));
    }

    #[test]
    fn reserve_picks_first_available_in_store_order() {
        let store = DoctorStore::new();
        store.create(doctor(1, false));
        store.create(doctor(2, true));
        store.create(doctor(3, true));

        let reserved = store.reserve_next_available().unwrap();
        assert_eq!(reserved.id, 2);
        assert!(!reserved.is_available);
        assert!(!store.get(2).unwrap().is_available);
        assert!(store.get(3).unwrap().is_available);
    }

    #[test]
    fn reserve_with_no_available_doctor_flips_nothing() {
        let store = DoctorStore::new();
        store.create(doctor(1, false));
        let before = store.list();
        assert!(store.reserve_next_available().is_none());
        assert_eq!(store.list(), before);
    }
}
