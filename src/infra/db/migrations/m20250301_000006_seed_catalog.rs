//! Migration: Seed the launch catalog.
//!
//! The six service categories the platform opened with, plus the initial
//! city coverage. Admins manage everything beyond this through the API.

use chrono::Utc;
use sea_orm_migration::prelude::*;
use uuid::Uuid;

use super::m20250301_000002_create_catalog_tables::{Cities, Services};

const SERVICES: &[(&str, &str, &str, &str, &str, &str)] = &[
    (
        "heizung",
        "Heizung",
        "Heating",
        "flame",
        "Heizungsinstallation, Wartung und Notdienst",
        "Heating installation, maintenance and emergency service",
    ),
    (
        "solar",
        "Solar & Photovoltaik",
        "Solar & Photovoltaics",
        "sun",
        "Photovoltaikanlagen und Speicherlösungen",
        "Photovoltaic systems and storage solutions",
    ),
    (
        "dach",
        "Dach",
        "Roofing",
        "home",
        "Dachdeckung, Reparatur und Dämmung",
        "Roofing, repair and insulation",
    ),
    (
        "sanitaer",
        "Sanitär",
        "Plumbing",
        "droplet",
        "Sanitärinstallation und Badmodernisierung",
        "Plumbing installation and bathroom modernization",
    ),
    (
        "elektrik",
        "Elektrik",
        "Electrical",
        "zap",
        "Elektroinstallation und Smart-Home-Technik",
        "Electrical installation and smart home technology",
    ),
    (
        "renovierung",
        "Renovierung",
        "Renovation",
        "paintbrush",
        "Komplettrenovierung und Sanierung",
        "Complete renovation and refurbishment",
    ),
];

const CITIES: &[&str] = &[
    "Berlin",
    "Hamburg",
    "München",
    "Köln",
    "Frankfurt am Main",
    "Stuttgart",
    "Düsseldorf",
    "Leipzig",
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let now = Utc::now();

        for (slug, name, name_en, icon, description, description_en) in SERVICES {
            let values: Vec<SimpleExpr> = vec![
                Uuid::new_v4().into(),
                (*name).into(),
                (*name_en).into(),
                (*slug).into(),
                (*description).into(),
                (*description_en).into(),
                (*icon).into(),
                now.into(),
            ];

            let insert = Query::insert()
                .into_table(Services::Table)
                .columns([
                    Services::Id,
                    Services::Name,
                    Services::NameEn,
                    Services::Slug,
                    Services::Description,
                    Services::DescriptionEn,
                    Services::Icon,
                    Services::CreatedAt,
                ])
                .values_panic(values)
                .to_owned();

            manager.exec_stmt(insert).await?;
        }

        for city in CITIES {
            let values: Vec<SimpleExpr> = vec![Uuid::new_v4().into(), (*city).into(), now.into()];

            let insert = Query::insert()
                .into_table(Cities::Table)
                .columns([Cities::Id, Cities::Name, Cities::CreatedAt])
                .values_panic(values)
                .to_owned();

            manager.exec_stmt(insert).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let slugs: Vec<&str> = SERVICES.iter().map(|s| s.0).collect();
        let delete_services = Query::delete()
            .from_table(Services::Table)
            .and_where(Expr::col(Services::Slug).is_in(slugs))
            .to_owned();
        manager.exec_stmt(delete_services).await?;

        let delete_cities = Query::delete()
            .from_table(Cities::Table)
            .and_where(Expr::col(Cities::Name).is_in(CITIES.iter().copied()))
            .to_owned();
        manager.exec_stmt(delete_cities).await?;

        Ok(())
    }
}
