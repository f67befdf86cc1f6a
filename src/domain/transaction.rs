//! Domain model for ledger transactions.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::category::EntryKind;
use crate::domain::common::*;

/// A single ledger entry. Amounts are stored as non-negative magnitudes;
/// [`EntryKind`] carries the sign.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialTransaction {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub kind: EntryKind,
    pub date: NaiveDateTime,
    pub category_id: Option<Uuid>,
    /// Set when the entry was derived from a completed work order.
    pub work_order_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub user_id: Uuid,
}

impl FinancialTransaction {
    pub fn new(
        user_id: Uuid,
        description: impl Into<String>,
        amount: f64,
        kind: EntryKind,
        date: NaiveDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            kind,
            date,
            category_id: None,
            work_order_id: None,
            created_at: Utc::now(),
            user_id,
        }
    }

    pub fn with_category(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            EntryKind::Income => self.amount,
            EntryKind::Expense => -self.amount,
        }
    }
}

impl Identifiable for FinancialTransaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl TenantScoped for FinancialTransaction {
    fn tenant(&self) -> Uuid {
        self.user_id
    }
}

impl Displayable for FinancialTransaction {
    fn display_label(&self) -> String {
        format!("{} [{}]", self.description, self.kind)
    }
}
