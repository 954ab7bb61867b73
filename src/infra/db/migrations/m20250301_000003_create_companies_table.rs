//! Migration: Create the partner companies table.
//!
//! `service_ids` and `cities` are arrays: a company declares sets of
//! coverage, and matching intersects them with a lead's service and city.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Companies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Companies::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Companies::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Companies::ContactPerson).string_len(255))
                    .col(ColumnDef::new(Companies::Email).string_len(255).not_null())
                    .col(ColumnDef::new(Companies::Phone).string_len(50).not_null())
                    .col(ColumnDef::new(Companies::Whatsapp).string_len(50))
                    .col(
                        ColumnDef::new(Companies::ServiceIds)
                            .array(ColumnType::Uuid)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Companies::Cities)
                            .array(ColumnType::Text)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Companies::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Companies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_companies_is_active")
                    .table(Companies::Table)
                    .col(Companies::IsActive)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_companies_is_active")
                    .table(Companies::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Companies::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Companies {
    Table,
    Id,
    Name,
    ContactPerson,
    Email,
    Phone,
    Whatsapp,
    ServiceIds,
    Cities,
    IsActive,
    CreatedAt,
}
