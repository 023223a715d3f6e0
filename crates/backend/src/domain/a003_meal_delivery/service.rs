use super::repository;
use chrono::{Duration, Utc};
use contracts::domain::a003_meal_delivery::aggregate::{
    DeliveryStatus, MealDelivery, MealDeliveryDto, MealType,
};
use uuid::Uuid;

pub async fn create(dto: MealDeliveryDto) -> anyhow::Result<Uuid> {
    let code = dto
        .code
        .clone()
        .unwrap_or_else(|| format!("DEL-{}", Uuid::new_v4()));
    let mut aggregate = MealDelivery::new_for_insert(
        code,
        dto.description.clone(),
        dto.patient_ref.clone(),
        dto.diet_chart_ref.clone(),
        dto.meal_type,
        dto.scheduled_at,
    );
    aggregate.base.comment = dto.comment.clone();
    aggregate.status = dto.status;
    aggregate.prepared_at = dto.prepared_at;
    aggregate.delivered_at = dto.delivered_at;
    aggregate.delivery_person = dto.delivery_person.clone();
    aggregate.notes = dto.notes.clone();

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    aggregate.before_write();

    repository::insert(&aggregate).await
}

pub async fn update(dto: MealDeliveryDto) -> anyhow::Result<()> {
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

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<MealDelivery>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<MealDelivery>> {
    repository::list_all().await
}

/// Mark a delivery as handed over to the patient
pub async fn mark_delivered(id: Uuid) -> anyhow::Result<MealDelivery> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;

    aggregate.mark_delivered(Utc::now());
    aggregate.before_write();
    repository::update(&aggregate).await?;
    Ok(aggregate)
}

/// Seed demo deliveries for each existing diet chart: one delivered on
/// time, one still pending
pub async fn insert_test_data() -> anyhow::Result<usize> {
    let charts = crate::domain::a002_diet_chart::service::list_all().await?;
    let now = Utc::now();

    let mut inserted = 0;
    for (i, chart) in charts.iter().enumerate() {
        let mut delivered = MealDelivery::new_for_insert(
            format!("DEL-{:03}", inserted + 1),
            format!("Morning meal ({})", chart.base.description),
            chart.patient_ref.clone(),
            chart.to_string_id(),
            MealType::Morning,
            now - Duration::hours(4),
        );
        delivered.status = DeliveryStatus::Delivered;
        delivered.prepared_at = Some(now - Duration::hours(4) + Duration::minutes(10));
        delivered.delivered_at = Some(now - Duration::hours(4) + Duration::minutes(25));
        delivered.delivery_person = Some("K. Rao".into());
        delivered.before_write();
        repository::insert(&delivered).await?;
        inserted += 1;

        let mut pending = MealDelivery::new_for_insert(
            format!("DEL-{:03}", inserted + 1),
            format!("Evening meal ({})", chart.base.description),
            chart.patient_ref.clone(),
            chart.to_string_id(),
            MealType::Evening,
            now + Duration::hours(6) + Duration::minutes(i as i64),
        );
        pending.before_write();
        repository::insert(&pending).await?;
        inserted += 1;
    }
    Ok(inserted)
}
