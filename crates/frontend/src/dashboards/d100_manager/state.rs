//! Local state for the manager dashboard page.

use contracts::dashboards::d100_pantry_performance::PantryPerformance;
use contracts::domain::a001_patient::aggregate::Patient;
use contracts::domain::a002_diet_chart::aggregate::DietChart;
use contracts::domain::a003_meal_delivery::aggregate::MealDelivery;

/// Shown in the error banner when every data source came back empty.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to fetch dashboard data. Please try again later.";

/// Tabs of the manager dashboard. Switching never refetches data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Patients,
    DietCharts,
    Deliveries,
    Performance,
}

impl DashboardTab {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Patients => "Patients",
            Self::DietCharts => "Diet Charts",
            Self::Deliveries => "Deliveries",
            Self::Performance => "Pantry Performance",
        }
    }

    pub const ALL: [DashboardTab; 4] = [
        Self::Patients,
        Self::DietCharts,
        Self::Deliveries,
        Self::Performance,
    ];
}

/// Decide whether the load cycle ended in total failure.
///
/// The banner message appears only when all four sources yielded
/// nothing. A single populated slice suppresses the error; sections
/// that failed individually just render empty.
pub fn aggregate_error(
    patients: &[Patient],
    diet_charts: &[DietChart],
    deliveries: &[MealDelivery],
    performance: &Option<PantryPerformance>,
) -> Option<String> {
    if patients.is_empty() && diet_charts.is_empty() && deliveries.is_empty() && performance.is_none()
    {
        Some(LOAD_FAILED_MESSAGE.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use contracts::domain::a001_patient::aggregate::Gender;
    use contracts::domain::a003_meal_delivery::aggregate::MealType;

    fn patient() -> Patient {
        Patient::new_for_insert(
            "PAT-001".into(),
            "John Doe".into(),
            47,
            Gender::Male,
            "B".into(),
            "12".into(),
            3,
        )
    }

    fn diet_chart() -> DietChart {
        DietChart::new_for_insert(
            "DC-001".into(),
            "Low sodium plan".into(),
            uuid::Uuid::new_v4().to_string(),
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
        )
    }

    fn delivery() -> MealDelivery {
        MealDelivery::new_for_insert(
            "DEL-001".into(),
            "Morning meal".into(),
            uuid::Uuid::new_v4().to_string(),
            uuid::Uuid::new_v4().to_string(),
            MealType::Morning,
            Utc.with_ymd_and_hms(2025, 1, 10, 8, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_all_sources_empty_yields_error() {
        let err = aggregate_error(&[], &[], &[], &None);
        assert_eq!(err.as_deref(), Some(LOAD_FAILED_MESSAGE));
    }

    #[test]
    fn test_single_populated_slice_suppresses_error() {
        assert!(aggregate_error(&[patient()], &[], &[], &None).is_none());
        assert!(aggregate_error(&[], &[diet_chart()], &[], &None).is_none());
        assert!(aggregate_error(&[], &[], &[delivery()], &None).is_none());
        assert!(aggregate_error(&[], &[], &[], &Some(PantryPerformance::default())).is_none());
    }

    #[test]
    fn test_all_sources_populated_yields_no_error() {
        let err = aggregate_error(
            &[patient()],
            &[diet_chart()],
            &[delivery()],
            &Some(PantryPerformance::default()),
        );
        assert!(err.is_none());
    }
}
