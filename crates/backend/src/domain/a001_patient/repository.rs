use chrono::Utc;
use contracts::domain::a001_patient::aggregate::{Gender, Patient, PatientId};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_patient")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub age: i32,
    pub gender: String,
    pub ward: String,
    pub bed: String,
    pub floor: i32,
    pub contact_number: String,
    pub emergency_contact: String,
    /// JSON array of disease names
    pub diseases: String,
    /// JSON array of allergy names
    pub allergies: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn parse_gender(s: &str) -> Gender {
    match s {
        "Male" => Gender::Male,
        "Female" => Gender::Female,
        _ => Gender::Other,
    }
}

fn parse_string_list(s: &str) -> Vec<String> {
    serde_json::from_str(s).unwrap_or_default()
}

impl From<Model> for Patient {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        Patient {
            base: BaseAggregate::with_metadata(
                PatientId(uuid),
                m.code,
                m.description,
                m.comment.clone(),
                metadata,
            ),
            age: m.age.max(0) as u32,
            gender: parse_gender(&m.gender),
            ward: m.ward,
            bed: m.bed,
            floor: m.floor,
            contact_number: m.contact_number,
            emergency_contact: m.emergency_contact,
            diseases: parse_string_list(&m.diseases),
            allergies: parse_string_list(&m.allergies),
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active_model(aggregate: &Patient) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        age: Set(aggregate.age as i32),
        gender: Set(aggregate.gender.as_str().to_string()),
        ward: Set(aggregate.ward.clone()),
        bed: Set(aggregate.bed.clone()),
        floor: Set(aggregate.floor),
        contact_number: Set(aggregate.contact_number.clone()),
        emergency_contact: Set(aggregate.emergency_contact.clone()),
        diseases: Set(serde_json::to_string(&aggregate.diseases).unwrap_or_else(|_| "[]".into())),
        allergies: Set(serde_json::to_string(&aggregate.allergies).unwrap_or_else(|_| "[]".into())),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

pub async fn list_all() -> anyhow::Result<Vec<Patient>> {
    let mut items: Vec<Patient> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    // Sort by ward, then patient name (case-insensitive)
    items.sort_by(|a, b| {
        a.ward
            .to_lowercase()
            .cmp(&b.ward.to_lowercase())
            .then_with(|| {
                a.base
                    .description
                    .to_lowercase()
                    .cmp(&b.base.description.to_lowercase())
            })
    });
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Patient>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &Patient) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    to_active_model(aggregate).insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &Patient) -> anyhow::Result<()> {
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
