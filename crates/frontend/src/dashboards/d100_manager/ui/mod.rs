pub mod dashboard;
pub mod performance;

pub use dashboard::ManagerDashboard;
pub use performance::PantryPerformancePanel;
