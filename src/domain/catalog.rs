//! Catalog reference data: service categories and covered cities.
//!
//! Both follow the same lifecycle: created/edited by admins, never
//! hard-deleted, only deactivated. Leads and assignments keep referring to
//! deactivated entries by id.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A bookable home-service category (Heizung, Solar, Dach, ...).
///
/// Names and descriptions are bilingual: `name`/`description` carry the
/// German copy, the `_en` variants the English one.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub name_en: String,
    /// URL-safe identifier used by the public service pages
    pub slug: String,
    pub description: Option<String>,
    pub description_en: Option<String>,
    pub icon: String,
    /// Price charged per assigned lead for this category
    pub lead_price: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// A city the referral network covers.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct City {
    pub id: Uuid,
    pub name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Admin edit payload for a service. Absent fields stay untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ServiceChanges {
    pub name: Option<String>,
    pub name_en: Option<String>,
    pub description: Option<String>,
    pub description_en: Option<String>,
    pub icon: Option<String>,
    /// Must be >= 0; affects future assignments only
    pub lead_price: Option<Decimal>,
    pub is_active: Option<bool>,
}

impl ServiceChanges {
    /// Whether this payload changes anything at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.name_en.is_none()
            && self.description.is_none()
            && self.description_en.is_none()
            && self.icon.is_none()
            && self.lead_price.is_none()
            && self.is_active.is_none()
    }
}
