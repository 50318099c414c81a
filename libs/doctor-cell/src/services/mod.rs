pub mod doctor;

pub use doctor::DoctorStore;
