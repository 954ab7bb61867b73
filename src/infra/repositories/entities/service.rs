//! SeaORM entity for the `services` table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub name_en: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub description: Option<String>,
    pub description_en: Option<String>,
    pub icon: String,
    pub lead_price: Decimal,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::domain::Service {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            name_en: model.name_en,
            slug: model.slug,
            description: model.description,
            description_en: model.description_en,
            icon: model.icon,
            lead_price: model.lead_price,
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}
