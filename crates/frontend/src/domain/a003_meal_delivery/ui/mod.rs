pub mod panel;

pub use panel::DeliveryTracking;
