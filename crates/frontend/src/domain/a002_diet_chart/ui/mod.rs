pub mod panel;

pub use panel::DietChartManagement;
