//! Partner companies eligible to receive leads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A partner contractor. Each company declares which service categories it
/// offers (`service_ids`) and which cities it serves (`cities`, by City
/// name). Both sets must be non-empty for the company to exist.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub contact_person: Option<String>,
    pub email: String,
    pub phone: String,
    pub whatsapp: Option<String>,
    pub service_ids: Vec<Uuid>,
    pub cities: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Company {
    /// Whether this company offers the given service category.
    ///
    /// Matching is identity-based on the service id: a service that has been
    /// deactivated since the company declared it still counts.
    pub fn offers_service(&self, service_id: Uuid) -> bool {
        self.service_ids.contains(&service_id)
    }

    /// Whether this company serves the given city (exact name match).
    pub fn serves_city(&self, city: &str) -> bool {
        self.cities.iter().any(|c| c == city)
    }

    /// The matching predicate: active, offers the service, serves the city.
    pub fn matches(&self, service_id: Uuid, city: &str) -> bool {
        self.is_active && self.offers_service(service_id) && self.serves_city(city)
    }
}

/// Contact subset embedded in assignment history views.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanyContact {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub whatsapp: Option<String>,
}

impl From<Company> for CompanyContact {
    fn from(company: Company) -> Self {
        Self {
            name: company.name,
            phone: company.phone,
            email: company.email,
            whatsapp: company.whatsapp,
        }
    }
}

/// Company creation payload.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCompany {
    #[validate(length(min = 1, message = "Company name is required"))]
    pub name: String,
    pub contact_person: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    pub whatsapp: Option<String>,
    #[validate(length(min = 1, message = "At least one service is required"))]
    pub service_ids: Vec<Uuid>,
    #[validate(length(min = 1, message = "At least one city is required"))]
    pub cities: Vec<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Company edit payload. Absent fields stay untouched; the non-empty
/// invariants on `service_ids` and `cities` are re-checked on update.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CompanyChanges {
    pub name: Option<String>,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub service_ids: Option<Vec<Uuid>>,
    pub cities: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

/// List filter for the admin companies table.
#[derive(Debug, Clone, Default)]
pub struct CompanyFilter {
    /// Case-insensitive substring match over name/email/phone
    pub search: Option<String>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(active: bool, service_ids: Vec<Uuid>, cities: Vec<&str>) -> Company {
        Company {
            id: Uuid::new_v4(),
            name: "Muster Handwerk GmbH".to_string(),
            contact_person: None,
            email: "info@muster-handwerk.de".to_string(),
            phone: "+4930123456".to_string(),
            whatsapp: None,
            service_ids,
            cities: cities.into_iter().map(String::from).collect(),
            is_active: active,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn matches_requires_all_three_conditions() {
        let service = Uuid::new_v4();
        let other = Uuid::new_v4();

        let c = company(true, vec![service], vec!["Berlin"]);
        assert!(c.matches(service, "Berlin"));
        assert!(!c.matches(other, "Berlin"));
        assert!(!c.matches(service, "Munich"));

        let inactive = company(false, vec![service], vec!["Berlin"]);
        assert!(!inactive.matches(service, "Berlin"));
    }

    #[test]
    fn city_match_is_exact() {
        let service = Uuid::new_v4();
        let c = company(true, vec![service], vec!["Berlin"]);
        // No prefix or case folding: the lead city is free text matched
        // verbatim against the declared list.
        assert!(!c.matches(service, "berlin"));
        assert!(!c.matches(service, "Berlin-Mitte"));
    }

    #[test]
    fn create_company_rejects_empty_sets() {
        use validator::Validate;

        let payload = CreateCompany {
            name: "Test GmbH".to_string(),
            contact_person: None,
            email: "test@example.de".to_string(),
            phone: "030123".to_string(),
            whatsapp: None,
            service_ids: vec![],
            cities: vec!["Berlin".to_string()],
            is_active: true,
        };
        assert!(payload.validate().is_err());
    }
}
