pub mod dto;

pub use dto::PantryPerformance;
