use super::repository;
use contracts::domain::a001_patient::aggregate::{Gender, Patient, PatientDto};
use uuid::Uuid;

pub async fn create(dto: PatientDto) -> anyhow::Result<Uuid> {
    let code = dto
        .code
        .clone()
        .unwrap_or_else(|| format!("PAT-{}", Uuid::new_v4()));
    let mut aggregate = Patient::new_for_insert(
        code,
        dto.name.clone(),
        dto.age,
        dto.gender,
        dto.ward.clone(),
        dto.bed.clone(),
        dto.floor,
    );
    aggregate.base.comment = dto.comment.clone();
    aggregate.contact_number = dto.contact_number.clone();
    aggregate.emergency_contact = dto.emergency_contact.clone();
    aggregate.diseases = dto.diseases.clone();
    aggregate.allergies = dto.allergies.clone();

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    aggregate.before_write();

    repository::insert(&aggregate).await
}

pub async fn update(dto: PatientDto) -> anyhow::Result<()> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| anyhow::anyhow!("Invalid ID"))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;

    aggregate.update(&dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    aggregate.before_write();

    repository::update(&aggregate).await
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Patient>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Patient>> {
    repository::list_all().await
}

/// Seed a handful of demo patients for local development
pub async fn insert_test_data() -> anyhow::Result<usize> {
    let samples = [
        ("Arjun Mehta", 64, Gender::Male, "A", "3", 1, vec!["diabetes"], vec![]),
        ("Priya Sharma", 38, Gender::Female, "A", "7", 1, vec![], vec!["lactose"]),
        ("Ravi Iyer", 71, Gender::Male, "B", "12", 2, vec!["hypertension"], vec!["peanuts"]),
        ("Meena Kumari", 55, Gender::Female, "C", "2", 3, vec!["renal failure"], vec![]),
    ];

    let mut inserted = 0;
    for (i, (name, age, gender, ward, bed, floor, diseases, allergies)) in
        samples.into_iter().enumerate()
    {
        let mut aggregate = Patient::new_for_insert(
            format!("PAT-{:03}", i + 1),
            name.to_string(),
            age,
            gender,
            ward.to_string(),
            bed.to_string(),
            floor,
        );
        aggregate.diseases = diseases.into_iter().map(String::from).collect();
        aggregate.allergies = allergies.into_iter().map(String::from).collect();
        aggregate.before_write();
        repository::insert(&aggregate).await?;
        inserted += 1;
    }
    Ok(inserted)
}
