use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique meal delivery identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MealDeliveryId(pub Uuid);

impl MealDeliveryId {
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

impl AggregateId for MealDeliveryId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(MealDeliveryId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Enums
// ============================================================================

/// Meal slot of the day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum MealType {
    Morning,
    Evening,
    Night,
}

impl Default for MealType {
    fn default() -> Self {
        Self::Morning
    }
}

impl MealType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Morning => "Morning",
            Self::Evening => "Evening",
            Self::Night => "Night",
        }
    }
}

/// Delivery lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum DeliveryStatus {
    Pending,
    Preparing,
    Ready,
    InDelivery,
    Delivered,
    Failed,
}

impl Default for DeliveryStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::Preparing => "Preparing",
            Self::Ready => "Ready",
            Self::InDelivery => "In delivery",
            Self::Delivered => "Delivered",
            Self::Failed => "Failed",
        }
    }

    /// A delivery that reached a terminal state (delivered or failed)
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Delivered | Self::Failed)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// One meal delivery from the pantry to a patient bed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealDelivery {
    #[serde(flatten)]
    pub base: BaseAggregate<MealDeliveryId>,

    /// UUID of the patient receiving the meal
    pub patient_ref: String,
    /// UUID of the diet chart the meal was prepared from
    pub diet_chart_ref: String,

    pub meal_type: MealType,
    pub status: DeliveryStatus,

    /// When the meal is supposed to leave the pantry
    pub scheduled_at: DateTime<Utc>,
    pub prepared_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,

    pub delivery_person: Option<String>,
    pub notes: Option<String>,
}

impl MealDelivery {
    /// Build a new delivery for insertion into the database
    pub fn new_for_insert(
        code: String,
        description: String,
        patient_ref: String,
        diet_chart_ref: String,
        meal_type: MealType,
        scheduled_at: DateTime<Utc>,
    ) -> Self {
        Self {
            base: BaseAggregate::new(MealDeliveryId::new_v4(), code, description),
            patient_ref,
            diet_chart_ref,
            meal_type,
            status: DeliveryStatus::default(),
            scheduled_at,
            prepared_at: None,
            delivered_at: None,
            delivery_person: None,
            notes: None,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Apply editable fields from a DTO
    pub fn update(&mut self, dto: &MealDeliveryDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.patient_ref = dto.patient_ref.clone();
        self.diet_chart_ref = dto.diet_chart_ref.clone();
        self.meal_type = dto.meal_type;
        self.status = dto.status;
        self.scheduled_at = dto.scheduled_at;
        self.prepared_at = dto.prepared_at;
        self.delivered_at = dto.delivered_at;
        self.delivery_person = dto.delivery_person.clone();
        self.notes = dto.notes.clone();
    }

    /// Mark the delivery as handed over to the patient
    pub fn mark_delivered(&mut self, at: DateTime<Utc>) {
        self.status = DeliveryStatus::Delivered;
        self.delivered_at = Some(at);
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.patient_ref.trim().is_empty() {
            return Err("Patient must be specified".into());
        }
        if self.diet_chart_ref.trim().is_empty() {
            return Err("Diet chart must be specified".into());
        }
        if let (Some(prepared), Some(delivered)) = (self.prepared_at, self.delivered_at) {
            if delivered < prepared {
                return Err("Delivery time cannot precede preparation time".into());
            }
        }
        Ok(())
    }

    /// Hook invoked before every write
    pub fn before_write(&mut self) {
        self.base.touch();
        self.base.metadata.increment_version();
    }
}

impl AggregateRoot for MealDelivery {
    type Id = MealDeliveryId;

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
        "a003"
    }

    fn collection_name() -> &'static str {
        "meal_delivery"
    }

    fn element_name() -> &'static str {
        "Meal delivery"
    }

    fn list_name() -> &'static str {
        "Meal deliveries"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating/updating a meal delivery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealDeliveryDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub comment: Option<String>,

    pub patient_ref: String,
    pub diet_chart_ref: String,

    #[serde(default)]
    pub meal_type: MealType,
    #[serde(default)]
    pub status: DeliveryStatus,

    pub scheduled_at: DateTime<Utc>,
    pub prepared_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,

    pub delivery_person: Option<String>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> MealDelivery {
        MealDelivery::new_for_insert(
            "DEL-001".into(),
            "Morning meal, ward B".into(),
            Uuid::new_v4().to_string(),
            Uuid::new_v4().to_string(),
            MealType::Morning,
            Utc.with_ymd_and_hms(2025, 1, 10, 8, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_valid_delivery_passes_validation() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_missing_refs_rejected() {
        let mut d = sample();
        d.patient_ref.clear();
        assert!(d.validate().is_err());

        let mut d = sample();
        d.diet_chart_ref.clear();
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_delivery_before_preparation_rejected() {
        let mut d = sample();
        d.prepared_at = Some(Utc.with_ymd_and_hms(2025, 1, 10, 8, 10, 0).unwrap());
        d.delivered_at = Some(Utc.with_ymd_and_hms(2025, 1, 10, 8, 0, 0).unwrap());
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_full_name_matches_table() {
        assert_eq!(MealDelivery::full_name(), "a003_meal_delivery");
    }

    #[test]
    fn test_mark_delivered() {
        let mut d = sample();
        let at = Utc.with_ymd_and_hms(2025, 1, 10, 8, 40, 0).unwrap();
        d.mark_delivered(at);
        assert_eq!(d.status, DeliveryStatus::Delivered);
        assert_eq!(d.delivered_at, Some(at));
        assert!(d.status.is_finished());
    }
}
