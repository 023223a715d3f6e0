use chrono::{NaiveDate, Utc};
use contracts::domain::a002_diet_chart::aggregate::{
    DietChart, DietChartId, DietChartStatus, MealPlan,
};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a002_diet_chart")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub patient_ref: String,
    /// ISO date "YYYY-MM-DD"
    pub start_date: String,
    pub end_date: String,
    /// JSON-encoded MealPlan per slot
    pub morning: String,
    pub evening: String,
    pub night: String,
    pub status: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn parse_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or_else(|_| Utc::now().date_naive())
}

fn parse_status(s: &str) -> DietChartStatus {
    match s {
        "Completed" => DietChartStatus::Completed,
        _ => DietChartStatus::Active,
    }
}

fn parse_meal_plan(s: &str) -> MealPlan {
    serde_json::from_str(s).unwrap_or_default()
}

impl From<Model> for DietChart {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        DietChart {
            base: BaseAggregate::with_metadata(
                DietChartId(uuid),
                m.code,
                m.description,
                m.comment.clone(),
                metadata,
            ),
            patient_ref: m.patient_ref,
            start_date: parse_date(&m.start_date),
            end_date: parse_date(&m.end_date),
            morning: parse_meal_plan(&m.morning),
            evening: parse_meal_plan(&m.evening),
            night: parse_meal_plan(&m.night),
            status: parse_status(&m.status),
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn encode_meal_plan(plan: &MealPlan) -> String {
    serde_json::to_string(plan).unwrap_or_else(|_| "{}".into())
}

fn to_active_model(aggregate: &DietChart) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        patient_ref: Set(aggregate.patient_ref.clone()),
        start_date: Set(aggregate.start_date.format("%Y-%m-%d").to_string()),
        end_date: Set(aggregate.end_date.format("%Y-%m-%d").to_string()),
        morning: Set(encode_meal_plan(&aggregate.morning)),
        evening: Set(encode_meal_plan(&aggregate.evening)),
        night: Set(encode_meal_plan(&aggregate.night)),
        status: Set(aggregate.status.as_str().to_string()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

pub async fn list_all() -> anyhow::Result<Vec<DietChart>> {
    let mut items: Vec<DietChart> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    // Newest charts first
    items.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<DietChart>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &DietChart) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    to_active_model(aggregate).insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &DietChart) -> anyhow::Result<()> {
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
