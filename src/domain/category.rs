//! Domain types for financial classification.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// Classifies ledger activity for reporting. Many transactions reference one
/// category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialCategory {
    pub id: Uuid,
    pub name: String,
    pub kind: EntryKind,
    /// Display color consumed by chart widgets.
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub user_id: Uuid,
}

impl FinancialCategory {
    pub fn new(
        user_id: Uuid,
        name: impl Into<String>,
        kind: EntryKind,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            color: color.into(),
            created_at: Utc::now(),
            user_id,
        }
    }
}

impl Identifiable for FinancialCategory {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for FinancialCategory {
    fn name(&self) -> &str {
        &self.name
    }
}

impl TenantScoped for FinancialCategory {
    fn tenant(&self) -> Uuid {
        self.user_id
    }
}

impl Displayable for FinancialCategory {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.kind)
    }
}

/// Whether an entry adds to or subtracts from the balance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Income,
    Expense,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryKind::Income => "Income",
            EntryKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}
