//! Migration: Create the leads table.

use sea_orm_migration::prelude::*;

use super::m20250301_000002_create_catalog_tables::Services;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Leads::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Leads::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Leads::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Leads::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Leads::Phone).string_len(20).not_null())
                    .col(ColumnDef::new(Leads::Email).string_len(255))
                    .col(ColumnDef::new(Leads::City).string_len(100).not_null())
                    .col(ColumnDef::new(Leads::Plz).string_len(10).not_null())
                    .col(ColumnDef::new(Leads::ServiceId).uuid())
                    .col(ColumnDef::new(Leads::ServiceDetails).text().not_null())
                    .col(ColumnDef::new(Leads::Timeline).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Leads::Status)
                            .string_len(32)
                            .not_null()
                            .default("new"),
                    )
                    .col(
                        ColumnDef::new(Leads::Source)
                            .string_len(64)
                            .not_null()
                            .default("website"),
                    )
                    .col(ColumnDef::new(Leads::AdminNotes).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_leads_service_id")
                            .from(Leads::Table, Leads::ServiceId)
                            .to(Services::Table, Services::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_leads_created_at")
                    .table(Leads::Table)
                    .col(Leads::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_leads_status")
                    .table(Leads::Table)
                    .col(Leads::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_leads_status")
                    .table(Leads::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_leads_created_at")
                    .table(Leads::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Leads::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub(crate) enum Leads {
    Table,
    Id,
    CreatedAt,
    Name,
    Phone,
    Email,
    City,
    Plz,
    ServiceId,
    ServiceDetails,
    Timeline,
    Status,
    Source,
    AdminNotes,
}
