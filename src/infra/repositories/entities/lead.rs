//! SeaORM entity for the `leads` table.
//!
//! `status` and `timeline` are stored as their wire tokens; unknown values
//! read back as the safe defaults rather than failing the row.

use sea_orm::entity::prelude::*;

use crate::domain::{LeadStatus, Timeline};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "leads")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub created_at: DateTimeUtc,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub city: String,
    pub plz: String,
    pub service_id: Option<Uuid>,
    pub service_details: String,
    pub timeline: String,
    pub status: String,
    pub source: String,
    pub admin_notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::domain::Lead {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            created_at: model.created_at,
            name: model.name,
            phone: model.phone,
            email: model.email,
            city: model.city,
            plz: model.plz,
            service_id: model.service_id,
            service_details: model.service_details,
            timeline: Timeline::parse(&model.timeline).unwrap_or(Timeline::Flexibel),
            status: LeadStatus::parse(&model.status).unwrap_or(LeadStatus::New),
            source: model.source,
            admin_notes: model.admin_notes,
        }
    }
}
