use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique patient identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatientId(pub Uuid);

impl PatientId {
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

impl AggregateId for PatientId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PatientId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Default for Gender {
    fn default() -> Self {
        Self::Other
    }
}

impl Gender {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Admitted patient receiving meal service
///
/// `base.description` carries the patient's full name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    #[serde(flatten)]
    pub base: BaseAggregate<PatientId>,

    pub age: u32,
    pub gender: Gender,

    // Placement inside the hospital
    pub ward: String,
    pub bed: String,
    pub floor: i32,

    pub contact_number: String,
    pub emergency_contact: String,

    pub diseases: Vec<String>,
    pub allergies: Vec<String>,
}

impl Patient {
    /// Build a new patient for insertion into the database
    pub fn new_for_insert(
        code: String,
        name: String,
        age: u32,
        gender: Gender,
        ward: String,
        bed: String,
        floor: i32,
    ) -> Self {
        Self {
            base: BaseAggregate::new(PatientId::new_v4(), code, name),
            age,
            gender,
            ward,
            bed,
            floor,
            contact_number: String::new(),
            emergency_contact: String::new(),
            diseases: Vec::new(),
            allergies: Vec::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Apply editable fields from a DTO
    pub fn update(&mut self, dto: &PatientDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.name.clone();
        self.base.comment = dto.comment.clone();
        self.age = dto.age;
        self.gender = dto.gender;
        self.ward = dto.ward.clone();
        self.bed = dto.bed.clone();
        self.floor = dto.floor;
        self.contact_number = dto.contact_number.clone();
        self.emergency_contact = dto.emergency_contact.clone();
        self.diseases = dto.diseases.clone();
        self.allergies = dto.allergies.clone();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Patient name cannot be empty".into());
        }
        if self.ward.trim().is_empty() {
            return Err("Ward must be specified".into());
        }
        if self.bed.trim().is_empty() {
            return Err("Bed must be specified".into());
        }
        if self.age > 150 {
            return Err("Age is out of range".into());
        }
        Ok(())
    }

    /// Hook invoked before every write
    pub fn before_write(&mut self) {
        self.base.touch();
        self.base.metadata.increment_version();
    }
}

impl AggregateRoot for Patient {
    type Id = PatientId;

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
        "a001"
    }

    fn collection_name() -> &'static str {
        "patient"
    }

    fn element_name() -> &'static str {
        "Patient"
    }

    fn list_name() -> &'static str {
        "Patients"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating/updating a patient
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PatientDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub name: String,
    pub comment: Option<String>,

    pub age: u32,
    pub gender: Gender,
    pub ward: String,
    pub bed: String,
    pub floor: i32,

    pub contact_number: String,
    pub emergency_contact: String,

    pub diseases: Vec<String>,
    pub allergies: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Patient {
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

    #[test]
    fn test_valid_patient_passes_validation() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut p = sample();
        p.base.description = "  ".into();
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_missing_placement_rejected() {
        let mut p = sample();
        p.ward.clear();
        assert!(p.validate().is_err());

        let mut p = sample();
        p.bed.clear();
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_age_out_of_range_rejected() {
        let mut p = sample();
        p.age = 151;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_before_write_touches_and_bumps_version() {
        let mut p = sample();
        assert_eq!(p.base.metadata.version, 0);
        let created = p.base.metadata.created_at;
        p.before_write();
        assert_eq!(p.base.metadata.version, 1);
        assert_eq!(p.base.metadata.created_at, created);
        assert!(p.base.metadata.updated_at >= created);
        p.before_write();
        assert_eq!(p.base.metadata.version, 2);
    }

    #[test]
    fn test_full_name_matches_table() {
        assert_eq!(Patient::full_name(), "a001_patient");
    }

    #[test]
    fn test_update_from_dto() {
        let mut p = sample();
        let dto = PatientDto {
            id: Some(p.to_string_id()),
            code: Some("PAT-001".into()),
            name: "Jane Doe".into(),
            age: 52,
            gender: Gender::Female,
            ward: "C".into(),
            bed: "4".into(),
            floor: 1,
            allergies: vec!["peanuts".into()],
            ..Default::default()
        };
        p.update(&dto);
        assert_eq!(p.base.description, "Jane Doe");
        assert_eq!(p.ward, "C");
        assert_eq!(p.allergies, vec!["peanuts".to_string()]);
    }
}
