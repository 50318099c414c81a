pub mod patient;

pub use patient::PatientStore;
