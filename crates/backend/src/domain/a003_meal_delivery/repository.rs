use chrono::Utc;
use contracts::domain::a003_meal_delivery::aggregate::{
    DeliveryStatus, MealDelivery, MealDeliveryId, MealType,
};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a003_meal_delivery")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub patient_ref: String,
    pub diet_chart_ref: String,
    pub meal_type: String,
    pub status: String,
    pub scheduled_at: chrono::DateTime<chrono::Utc>,
    pub prepared_at: Option<chrono::DateTime<chrono::Utc>>,
    pub delivered_at: Option<chrono::DateTime<chrono::Utc>>,
    pub delivery_person: Option<String>,
    pub notes: Option<String>,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn parse_meal_type(s: &str) -> MealType {
    match s {
        "Evening" => MealType::Evening,
        "Night" => MealType::Night,
        _ => MealType::Morning,
    }
}

fn parse_status(s: &str) -> DeliveryStatus {
    match s {
        "Preparing" => DeliveryStatus::Preparing,
        "Ready" => DeliveryStatus::Ready,
        "In delivery" => DeliveryStatus::InDelivery,
        "Delivered" => DeliveryStatus::Delivered,
        "Failed" => DeliveryStatus::Failed,
        _ => DeliveryStatus::Pending,
    }
}

impl From<Model> for MealDelivery {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        MealDelivery {
            base: BaseAggregate::with_metadata(
                MealDeliveryId(uuid),
                m.code,
                m.description,
                m.comment.clone(),
                metadata,
            ),
            patient_ref: m.patient_ref,
            diet_chart_ref: m.diet_chart_ref,
            meal_type: parse_meal_type(&m.meal_type),
            status: parse_status(&m.status),
            scheduled_at: m.scheduled_at,
            prepared_at: m.prepared_at,
            delivered_at: m.delivered_at,
            delivery_person: m.delivery_person,
            notes: m.notes,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active_model(aggregate: &MealDelivery) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        patient_ref: Set(aggregate.patient_ref.clone()),
        diet_chart_ref: Set(aggregate.diet_chart_ref.clone()),
        meal_type: Set(aggregate.meal_type.as_str().to_string()),
        status: Set(aggregate.status.as_str().to_string()),
        scheduled_at: Set(aggregate.scheduled_at),
        prepared_at: Set(aggregate.prepared_at),
        delivered_at: Set(aggregate.delivered_at),
        delivery_person: Set(aggregate.delivery_person.clone()),
        notes: Set(aggregate.notes.clone()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

pub async fn list_all() -> anyhow::Result<Vec<MealDelivery>> {
    let mut items: Vec<MealDelivery> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    // Upcoming deliveries first
    items.sort_by(|a, b| a.scheduled_at.cmp(&b.scheduled_at));
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<MealDelivery>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &MealDelivery) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    to_active_model(aggregate).insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &MealDelivery) -> anyhow::Result<()> {
    let mut active = to_active_model(aggregate);
    active.created_at = sea_orm::ActiveValue::NotSet;
    active.update(conn()).await?;
    Ok(())
}

pub async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}
