//! Lead assignments: the priced link between a lead and a partner company.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::CompanyContact;

/// One lead handed to one company, with the price charged.
///
/// `amount_charged` is a snapshot of the service price at assignment time.
/// It is part of the financial audit trail and never re-derived, even when
/// the service price changes later.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Assignment {
    pub id: Uuid,
    pub lead_id: Uuid,
    pub company_id: Uuid,
    /// Identifier (email) of the admin who made the assignment
    pub assigned_by: String,
    pub assigned_at: DateTime<Utc>,
    pub amount_charged: Decimal,
}

/// Insert payload for one assignment row.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAssignment {
    pub lead_id: Uuid,
    pub company_id: Uuid,
    pub assigned_by: String,
    pub amount_charged: Decimal,
}

/// Assignment plus the receiving company's contact channels, for the lead
/// detail view. The company may have been deleted since.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AssignmentWithCompany {
    #[serde(flatten)]
    pub assignment: Assignment,
    pub company: Option<CompanyContact>,
}

/// One failed insert within a batch assignment.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AssignmentFailure {
    pub company_id: Uuid,
    pub error: String,
}

/// Outcome of assigning one lead to a set of companies.
///
/// Inserts are independent per company; a failure for one company does not
/// roll back the others. Callers get the full picture instead of only the
/// last error.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BatchAssignment {
    pub created: Vec<Assignment>,
    pub failed: Vec<AssignmentFailure>,
}

impl BatchAssignment {
    /// True when every requested company received the lead.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}
