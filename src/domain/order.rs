//! Domain model for work orders and their lifecycle status.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// A tracked repair job linking a client, an instrument, a problem, and a
/// service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkOrder {
    pub id: Uuid,
    /// Tenant-scoped sequential display number.
    pub number: u32,
    pub client_id: Uuid,
    pub instrument_id: Uuid,
    pub brand_id: Uuid,
    pub model: String,
    pub accessories: String,
    pub problem_id: Option<Uuid>,
    /// Snapshot of the problem description; catalog edits never touch it.
    pub problem_description: String,
    pub service_id: Option<Uuid>,
    /// Snapshot of the service description; catalog edits never touch it.
    pub service_description: String,
    pub base_price: f64,
    pub discount: f64,
    pub payment_method: PaymentMethod,
    pub notes: String,
    /// Stamped at creation; anchors the maintenance reminder clock.
    pub intake_at: NaiveDateTime,
    /// Confirmed appointment slot.
    pub scheduled_at: NaiveDateTime,
    pub completed_at: Option<NaiveDateTime>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_id: Uuid,
}

impl WorkOrder {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_id: Uuid,
        number: u32,
        client_id: Uuid,
        instrument_id: Uuid,
        brand_id: Uuid,
        intake_at: NaiveDateTime,
        scheduled_at: NaiveDateTime,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            number,
            client_id,
            instrument_id,
            brand_id,
            model: String::new(),
            accessories: String::new(),
            problem_id: None,
            problem_description: String::new(),
            service_id: None,
            service_description: String::new(),
            base_price: 0.0,
            discount: 0.0,
            payment_method: PaymentMethod::InstantTransfer,
            notes: String::new(),
            intake_at,
            scheduled_at,
            completed_at: None,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
            user_id,
        }
    }

    /// Total charged for the order. Always derived, never stored.
    pub fn total(&self) -> f64 {
        self.base_price - self.discount
    }

    pub fn is_open(&self) -> bool {
        matches!(self.status, OrderStatus::Pending | OrderStatus::InProgress)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.status, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Identifiable for WorkOrder {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl TenantScoped for WorkOrder {
    fn tenant(&self) -> Uuid {
        self.user_id
    }
}

impl Displayable for WorkOrder {
    fn display_label(&self) -> String {
        format!("#{} [{}]", self.number, self.status)
    }
}

/// Lifecycle state of a work order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        };
        f.write_str(label)
    }
}

/// Accepted payment methods.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Credit,
    Debit,
    InstantTransfer,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentMethod::Credit => "Credit Card",
            PaymentMethod::Debit => "Debit Card",
            PaymentMethod::InstantTransfer => "Instant Transfer",
        };
        f.write_str(label)
    }
}
