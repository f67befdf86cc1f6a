//! Validated operations over the domain models.

pub mod catalog_service;
pub mod client_service;
pub mod import_service;
pub mod order_service;
pub mod reminder_service;
pub mod scheduling_service;
pub mod summary_service;

pub use catalog_service::CatalogService;
pub use client_service::ClientService;
pub use import_service::{CsvImporter, DraftTransaction};
pub use order_service::{OrderContext, OrderService};
pub use reminder_service::ReminderService;
pub use scheduling_service::{Scheduler, SlotGranularity};
pub use summary_service::{
    CashFlowPoint, CategoryTotal, LedgerSummary, ReportingPeriod, SummaryService, WorkshopStats,
};

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::domain::OrderStatus;
use crate::storage::StoreError;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failure modes surfaced by the service layer. Validation variants are
/// returned to the caller for correction and never retried.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("appointment {0} falls outside business hours")]
    OutsideBusinessHours(NaiveDateTime),
    #[error("appointment slot {0} is already taken")]
    SlotTaken(NaiveDateTime),
    #[error("cannot move order from {from} to {to}")]
    InvalidTransition {
        from: OrderStatus,
        to: OrderStatus,
    },
    #[error("line {line}: `{value}` is not a monetary amount")]
    MalformedAmount { line: usize, value: String },
    #[error("rows without a category: {rows:?}")]
    UnresolvedCategory { rows: Vec<usize> },
    #[error("record store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),
    #[error("no authenticated tenant")]
    NotAuthenticated,
    #[error("{0}")]
    Validation(String),
}

/// Resolves the active tenant or aborts before any mutation is attempted.
pub fn require_tenant(session: Option<Uuid>) -> ServiceResult<Uuid> {
    session.ok_or(ServiceError::NotAuthenticated)
}
