use super::repository;
use chrono::{Duration, Utc};
use contracts::domain::a002_diet_chart::aggregate::{DietChart, DietChartDto, MealPlan};
use uuid::Uuid;

pub async fn create(dto: DietChartDto) -> anyhow::Result<Uuid> {
    let code = dto
        .code
        .clone()
        .unwrap_or_else(|| format!("DC-{}", Uuid::new_v4()));
    let mut aggregate = DietChart::new_for_insert(
        code,
        dto.description.clone(),
        dto.patient_ref.clone(),
        dto.start_date,
        dto.end_date,
    );
    aggregate.base.comment = dto.comment.clone();
    aggregate.morning = dto.morning.clone();
    aggregate.evening = dto.evening.clone();
    aggregate.night = dto.night.clone();
    aggregate.status = dto.status;

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    aggregate.before_write();

    repository::insert(&aggregate).await
}

pub async fn update(dto: DietChartDto) -> anyhow::Result<()> {
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

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<DietChart>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<DietChart>> {
    repository::list_all().await
}

/// Seed one demo chart per existing patient
pub async fn insert_test_data() -> anyhow::Result<usize> {
    let patients = crate::domain::a001_patient::service::list_all().await?;
    let today = Utc::now().date_naive();

    let mut inserted = 0;
    for (i, patient) in patients.iter().enumerate() {
        let mut aggregate = DietChart::new_for_insert(
            format!("DC-{:03}", i + 1),
            format!("Plan for {}", patient.base.description),
            patient.to_string_id(),
            today,
            today + Duration::days(7),
        );
        aggregate.morning = MealPlan {
            ingredients: vec!["oatmeal".into(), "fruit".into()],
            instructions: Some("no sugar".into()),
        };
        aggregate.evening = MealPlan {
            ingredients: vec!["rice".into(), "dal".into(), "vegetables".into()],
            instructions: None,
        };
        aggregate.night = MealPlan {
            ingredients: vec!["soup".into(), "bread".into()],
            instructions: Some("low salt".into()),
        };
        aggregate.before_write();
        repository::insert(&aggregate).await?;
        inserted += 1;
    }
    Ok(inserted)
}
