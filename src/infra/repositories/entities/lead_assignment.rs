//! SeaORM entity for the `lead_assignments` table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "lead_assignments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub lead_id: Uuid,
    pub company_id: Uuid,
    pub assigned_by: String,
    pub assigned_at: DateTimeUtc,
    pub amount_charged: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::domain::Assignment {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            lead_id: model.lead_id,
            company_id: model.company_id,
            assigned_by: model.assigned_by,
            assigned_at: model.assigned_at,
            amount_charged: model.amount_charged,
        }
    }
}
