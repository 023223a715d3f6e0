pub mod panel;

pub use panel::PatientManagement;
