//! SeaORM entity for the `companies` table.
//!
//! `service_ids` and `cities` are Postgres arrays, matching how the
//! directory declares coverage (sets of ids / city names, not join tables).

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub contact_person: Option<String>,
    pub email: String,
    pub phone: String,
    pub whatsapp: Option<String>,
    pub service_ids: Vec<Uuid>,
    pub cities: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::domain::Company {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            contact_person: model.contact_person,
            email: model.email,
            phone: model.phone,
            whatsapp: model.whatsapp,
            service_ids: model.service_ids,
            cities: model.cities,
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}
