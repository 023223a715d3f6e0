pub mod a001_patient;
pub mod a002_diet_chart;
pub mod a003_meal_delivery;
