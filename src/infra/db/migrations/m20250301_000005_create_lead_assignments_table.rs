//! Migration: Create the lead assignments table.
//!
//! `company_id` carries no foreign key on purpose: assignment rows are the
//! financial audit trail and must survive a company being deleted.

use sea_orm_migration::prelude::*;

use super::m20250301_000004_create_leads_table::Leads;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LeadAssignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LeadAssignments::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LeadAssignments::LeadId).uuid().not_null())
                    .col(
                        ColumnDef::new(LeadAssignments::CompanyId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LeadAssignments::AssignedBy)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LeadAssignments::AssignedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LeadAssignments::AmountCharged)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lead_assignments_lead_id")
                            .from(LeadAssignments::Table, LeadAssignments::LeadId)
                            .to(Leads::Table, Leads::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_lead_assignments_lead_id")
                    .table(LeadAssignments::Table)
                    .col(LeadAssignments::LeadId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_lead_assignments_assigned_at")
                    .table(LeadAssignments::Table)
                    .col(LeadAssignments::AssignedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_lead_assignments_assigned_at")
                    .table(LeadAssignments::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_lead_assignments_lead_id")
                    .table(LeadAssignments::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LeadAssignments::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum LeadAssignments {
    Table,
    Id,
    LeadId,
    CompanyId,
    AssignedBy,
    AssignedAt,
    AmountCharged,
}
