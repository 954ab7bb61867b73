//! Lead domain entity, status/timeline enums and intake validation.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{
    MAX_CITY_LENGTH, MAX_DETAILS_LENGTH, MAX_EMAIL_LENGTH, MAX_NAME_LENGTH, MAX_PHONE_LENGTH,
    MIN_DETAILS_LENGTH, MIN_NAME_LENGTH,
};
use crate::domain::Service;

/// How urgently the customer wants the work done.
///
/// Wire tokens are the German identifiers the public form submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Timeline {
    Sofort,
    DieseWoche,
    DiesenMonat,
    Flexibel,
}

impl Timeline {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeline::Sofort => "sofort",
            Timeline::DieseWoche => "diese_woche",
            Timeline::DiesenMonat => "diesen_monat",
            Timeline::Flexibel => "flexibel",
        }
    }

    /// Parse a wire token; `None` for anything outside the enum.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "sofort" => Some(Timeline::Sofort),
            "diese_woche" => Some(Timeline::DieseWoche),
            "diesen_monat" => Some(Timeline::DiesenMonat),
            "flexibel" => Some(Timeline::Flexibel),
            _ => None,
        }
    }
}

impl std::fmt::Display for Timeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Processing state of a lead.
///
/// Transitions are unrestricted: admins may set any state from any state.
/// `converted` is conventionally final but not guarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    New,
    Contacted,
    Converted,
}

impl LeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Converted => "converted",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "new" => Some(LeadStatus::New),
            "contacted" => Some(LeadStatus::Contacted),
            "converted" => Some(LeadStatus::Converted),
            _ => None,
        }
    }
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A customer's service request.
///
/// `id`, `created_at` and `source` are fixed at creation; `status` and
/// `admin_notes` are the only fields admins mutate directly.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Lead {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    /// Free text, matched verbatim against `City.name` during matching
    pub city: String,
    /// German postal code, exactly five digits
    pub plz: String,
    pub service_id: Option<Uuid>,
    pub service_details: String,
    pub timeline: Timeline,
    pub status: LeadStatus,
    pub source: String,
    pub admin_notes: Option<String>,
}

/// A lead together with its resolved service category (may be `None` when
/// the request came in without one).
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LeadWithService {
    #[serde(flatten)]
    pub lead: Lead,
    pub service: Option<Service>,
}

/// Sanitized insert payload produced by a successful validation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLead {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub city: String,
    pub plz: String,
    pub service_id: Option<Uuid>,
    pub service_details: String,
    pub timeline: Timeline,
}

/// Filter for the admin leads table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadFilter {
    /// Case-insensitive substring match over name/phone/email
    pub search: Option<String>,
    pub service_id: Option<Uuid>,
    pub city: Option<String>,
    pub status: Option<LeadStatus>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
}

/// Raw submission body of the public lead form.
///
/// Every field is optional at the wire level so that a missing field shows
/// up as a validation message instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SubmitLead {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
    pub plz: Option<String>,
    pub service_id: Option<String>,
    pub service_details: Option<String>,
    pub timeline: Option<String>,
}

static PLZ_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{5}$").expect("valid plz regex"));
static PHONE_CHARSET_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\d\s+()-]+$").expect("valid phone charset regex"));
static PHONE_DE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+49|0)[0-9]{9,14}$").expect("valid phone regex"));
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

impl SubmitLead {
    /// Validate the submission and produce the sanitized insert payload.
    ///
    /// All rules are checked so the caller gets the complete list of
    /// violations in one round trip; no partial record is ever created.
    pub fn validate(&self) -> Result<NewLead, Vec<String>> {
        let mut errors = Vec::new();

        let name = self.name.as_deref().map(str::trim).unwrap_or("");
        match self.name.as_deref() {
            None => errors.push("Name is required".to_string()),
            Some(_) if name.is_empty() => errors.push("Name cannot be empty".to_string()),
            Some(_) if name.chars().count() < MIN_NAME_LENGTH => errors.push(format!(
                "Name must be at least {} characters",
                MIN_NAME_LENGTH
            )),
            Some(raw) if raw.len() > MAX_NAME_LENGTH => errors.push(format!(
                "Name must be less than {} characters",
                MAX_NAME_LENGTH
            )),
            _ => {}
        }

        let phone = self.phone.as_deref().map(str::trim).unwrap_or("");
        match self.phone.as_deref() {
            None => errors.push("Phone is required".to_string()),
            Some(_) if phone.is_empty() => errors.push("Phone cannot be empty".to_string()),
            Some(raw) if raw.len() > MAX_PHONE_LENGTH => errors.push(format!(
                "Phone must be less than {} characters",
                MAX_PHONE_LENGTH
            )),
            Some(_) if !PHONE_CHARSET_REGEX.is_match(phone) => {
                errors.push("Phone number contains invalid characters".to_string())
            }
            Some(_) if !PHONE_DE_REGEX.is_match(&normalize_phone(phone)) => {
                errors.push("Please enter a valid German phone number".to_string())
            }
            _ => {}
        }

        let email = self
            .email
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty());
        if let Some(email) = email {
            if email.len() > MAX_EMAIL_LENGTH {
                errors.push(format!(
                    "Email must be less than {} characters",
                    MAX_EMAIL_LENGTH
                ));
            } else if !EMAIL_REGEX.is_match(email) {
                errors.push("Invalid email format".to_string());
            }
        }

        let plz = self.plz.as_deref().map(str::trim).unwrap_or("");
        match self.plz.as_deref() {
            None => errors.push("PLZ is required".to_string()),
            Some(_) if !PLZ_REGEX.is_match(plz) => {
                errors.push("PLZ must be a 5-digit number".to_string())
            }
            _ => {}
        }

        let city = self.city.as_deref().map(str::trim).unwrap_or("");
        match self.city.as_deref() {
            None => errors.push("City is required".to_string()),
            Some(_) if city.is_empty() => errors.push("City cannot be empty".to_string()),
            Some(raw) if raw.len() > MAX_CITY_LENGTH => errors.push(format!(
                "City must be less than {} characters",
                MAX_CITY_LENGTH
            )),
            _ => {}
        }

        let details = self
            .service_details
            .as_deref()
            .map(str::trim)
            .unwrap_or("");
        match self.service_details.as_deref() {
            None => errors.push("Service details are required".to_string()),
            Some(_) if details.chars().count() < MIN_DETAILS_LENGTH => errors.push(format!(
                "Service details must be at least {} characters",
                MIN_DETAILS_LENGTH
            )),
            Some(raw) if raw.len() > MAX_DETAILS_LENGTH => errors.push(format!(
                "Service details must be less than {} characters",
                MAX_DETAILS_LENGTH
            )),
            _ => {}
        }

        let timeline = match self.timeline.as_deref().map(str::trim) {
            None => {
                errors.push("Timeline is required".to_string());
                None
            }
            Some(raw) => {
                let parsed = Timeline::parse(raw);
                if parsed.is_none() {
                    errors.push(
                        "Timeline must be one of: sofort, diese_woche, diesen_monat, flexibel"
                            .to_string(),
                    );
                }
                parsed
            }
        };

        let service_id = match self.service_id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => match Uuid::parse_str(raw) {
                Ok(id) => Some(id),
                Err(_) => {
                    errors.push("Invalid service ID format".to_string());
                    None
                }
            },
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewLead {
            name: name.to_string(),
            phone: normalize_phone(phone),
            email: email.map(String::from),
            city: city.to_string(),
            plz: plz.to_string(),
            service_id,
            service_details: details.to_string(),
            // Checked above; errors would have short-circuited otherwise
            timeline: timeline.expect("timeline validated"),
        })
    }
}

/// Strip the separator characters the charset admits so the German number
/// pattern sees digits only (plus the optional +49 prefix).
fn normalize_phone(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, ' ' | '(' | ')' | '-'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_submission() -> SubmitLead {
        SubmitLead {
            name: Some("Max Muster".to_string()),
            phone: Some("+49 151 12345678".to_string()),
            email: Some("max@example.de".to_string()),
            city: Some("Berlin".to_string()),
            plz: Some("10115".to_string()),
            service_id: Some(Uuid::new_v4().to_string()),
            service_details: Some("Heizung ausgefallen, bitte schnell helfen".to_string()),
            timeline: Some("sofort".to_string()),
        }
    }

    #[test]
    fn valid_submission_passes_and_is_sanitized() {
        let lead = valid_submission().validate().expect("should validate");
        assert_eq!(lead.name, "Max Muster");
        assert_eq!(lead.phone, "+4915112345678");
        assert_eq!(lead.timeline, Timeline::Sofort);
    }

    #[test]
    fn missing_fields_each_produce_a_message() {
        let errors = SubmitLead::default().validate().unwrap_err();
        assert!(errors.iter().any(|e| e == "Name is required"));
        assert!(errors.iter().any(|e| e == "Phone is required"));
        assert!(errors.iter().any(|e| e == "PLZ is required"));
        assert!(errors.iter().any(|e| e == "City is required"));
        assert!(errors.iter().any(|e| e == "Service details are required"));
        assert!(errors.iter().any(|e| e == "Timeline is required"));
    }

    #[test]
    fn short_name_is_rejected() {
        let mut submission = valid_submission();
        submission.name = Some("M".to_string());
        let errors = submission.validate().unwrap_err();
        assert_eq!(errors, vec!["Name must be at least 2 characters"]);
    }

    #[test]
    fn phone_charset_and_pattern_are_enforced() {
        let mut submission = valid_submission();
        submission.phone = Some("call me".to_string());
        let errors = submission.validate().unwrap_err();
        assert_eq!(errors, vec!["Phone number contains invalid characters"]);

        let mut submission = valid_submission();
        submission.phone = Some("+33 1 2345 6789".to_string());
        let errors = submission.validate().unwrap_err();
        assert_eq!(errors, vec!["Please enter a valid German phone number"]);
    }

    #[test]
    fn plz_must_be_five_digits() {
        for bad in ["1011", "101159", "1011a", ""] {
            let mut submission = valid_submission();
            submission.plz = Some(bad.to_string());
            let errors = submission.validate().unwrap_err();
            assert_eq!(errors, vec!["PLZ must be a 5-digit number"]);
        }
    }

    #[test]
    fn details_minimum_is_twenty_characters() {
        let mut submission = valid_submission();
        submission.service_details = Some("zu kurz".to_string());
        let errors = submission.validate().unwrap_err();
        assert_eq!(errors, vec!["Service details must be at least 20 characters"]);
    }

    #[test]
    fn empty_email_is_treated_as_absent() {
        let mut submission = valid_submission();
        submission.email = Some("   ".to_string());
        let lead = submission.validate().expect("should validate");
        assert_eq!(lead.email, None);
    }

    #[test]
    fn invalid_email_is_rejected() {
        let mut submission = valid_submission();
        submission.email = Some("not-an-email".to_string());
        let errors = submission.validate().unwrap_err();
        assert_eq!(errors, vec!["Invalid email format"]);
    }

    #[test]
    fn unknown_timeline_is_rejected() {
        let mut submission = valid_submission();
        submission.timeline = Some("next_year".to_string());
        assert!(submission.validate().is_err());
    }

    #[test]
    fn invalid_service_id_is_rejected_but_absent_is_fine() {
        let mut submission = valid_submission();
        submission.service_id = Some("not-a-uuid".to_string());
        let errors = submission.validate().unwrap_err();
        assert_eq!(errors, vec!["Invalid service ID format"]);

        let mut submission = valid_submission();
        submission.service_id = None;
        let lead = submission.validate().expect("should validate");
        assert_eq!(lead.service_id, None);
    }

    #[test]
    fn multiple_violations_are_all_reported() {
        let submission = SubmitLead {
            name: Some("M".to_string()),
            phone: Some("123".to_string()),
            email: None,
            city: Some("Berlin".to_string()),
            plz: Some("abc".to_string()),
            service_id: None,
            service_details: Some("kurz".to_string()),
            timeline: Some("sofort".to_string()),
        };
        let errors = submission.validate().unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn status_and_timeline_round_trip_their_tokens() {
        for status in [LeadStatus::New, LeadStatus::Contacted, LeadStatus::Converted] {
            assert_eq!(LeadStatus::parse(status.as_str()), Some(status));
        }
        for timeline in [
            Timeline::Sofort,
            Timeline::DieseWoche,
            Timeline::DiesenMonat,
            Timeline::Flexibel,
        ] {
            assert_eq!(Timeline::parse(timeline.as_str()), Some(timeline));
        }
        assert_eq!(LeadStatus::parse("archived"), None);
    }
}
