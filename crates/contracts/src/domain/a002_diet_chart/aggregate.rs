use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique diet chart identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DietChartId(pub Uuid);

impl DietChartId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for DietChartId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(DietChartId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Enums / value objects
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum DietChartStatus {
    Active,
    Completed,
}

impl Default for DietChartStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl DietChartStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }
}

/// Plan for a single meal slot of the day
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MealPlan {
    pub ingredients: Vec<String>,
    /// Special instructions, e.g. "no salt", "low sugar"
    pub instructions: Option<String>,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Patient-specific meal/nutrition plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietChart {
    #[serde(flatten)]
    pub base: BaseAggregate<DietChartId>,

    /// UUID of the patient this chart belongs to
    pub patient_ref: String,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    pub morning: MealPlan,
    pub evening: MealPlan,
    pub night: MealPlan,

    pub status: DietChartStatus,
}

impl DietChart {
    /// Build a new diet chart for insertion into the database
    pub fn new_for_insert(
        code: String,
        description: String,
        patient_ref: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            base: BaseAggregate::new(DietChartId::new_v4(), code, description),
            patient_ref,
            start_date,
            end_date,
            morning: MealPlan::default(),
            evening: MealPlan::default(),
            night: MealPlan::default(),
            status: DietChartStatus::default(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Apply editable fields from a DTO
    pub fn update(&mut self, dto: &DietChartDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.patient_ref = dto.patient_ref.clone();
        self.start_date = dto.start_date;
        self.end_date = dto.end_date;
        self.morning = dto.morning.clone();
        self.evening = dto.evening.clone();
        self.night = dto.night.clone();
        self.status = dto.status;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Description cannot be empty".into());
        }
        if self.patient_ref.trim().is_empty() {
            return Err("Patient must be specified".into());
        }
        if self.end_date < self.start_date {
            return Err("End date cannot be before start date".into());
        }
        Ok(())
    }

    /// Hook invoked before every write
    pub fn before_write(&mut self) {
        self.base.touch();
        self.base.metadata.increment_version();
    }
}

impl AggregateRoot for DietChart {
    type Id = DietChartId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "diet_chart"
    }

    fn element_name() -> &'static str {
        "Diet chart"
    }

    fn list_name() -> &'static str {
        "Diet charts"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating/updating a diet chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietChartDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub comment: Option<String>,

    pub patient_ref: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    #[serde(default)]
    pub morning: MealPlan,
    #[serde(default)]
    pub evening: MealPlan,
    #[serde(default)]
    pub night: MealPlan,

    #[serde(default)]
    pub status: DietChartStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DietChart {
        DietChart::new_for_insert(
            "DC-001".into(),
            "Low sodium plan".into(),
            Uuid::new_v4().to_string(),
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
        )
    }

    #[test]
    fn test_valid_chart_passes_validation() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_missing_patient_rejected() {
        let mut c = sample();
        c.patient_ref.clear();
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_inverted_date_range_rejected() {
        let mut c = sample();
        c.end_date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_full_name_matches_table() {
        assert_eq!(DietChart::full_name(), "a002_diet_chart");
    }

    #[test]
    fn test_single_day_range_allowed() {
        let mut c = sample();
        c.end_date = c.start_date;
        assert!(c.validate().is_ok());
    }
}
