//! Record store seam: the durable, filterable table storage the services
//! consume.
//!
//! The production adapter lives outside this crate; only the in-memory
//! reference backend ships here, for tests and embedding.

pub mod memory;

use chrono::NaiveDateTime;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{
    Brand, Client, EntryKind, FinancialCategory, FinancialTransaction, Instrument, OrderStatus,
    Problem, ServiceItem, WorkOrder,
};

pub use memory::MemoryStore;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Adapter-level failure. The service layer folds every variant into a single
/// transient store error for callers.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Offset/limit window over a filtered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: usize,
    pub limit: usize,
}

impl PageRequest {
    pub fn new(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }
}

/// A page of results plus the exact pre-pagination count.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
}

/// Filters for the work order listing. Orders come back newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderQuery {
    /// In-set status filter; empty matches every status.
    pub statuses: Vec<OrderStatus>,
    /// Case-insensitive substring over client name and model.
    pub search: Option<String>,
    pub page: Option<PageRequest>,
}

impl OrderQuery {
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.statuses.push(status);
        self
    }

    pub fn open() -> Self {
        Self::default()
            .with_status(OrderStatus::Pending)
            .with_status(OrderStatus::InProgress)
    }
}

/// Filters for the transaction listing. Entries come back date-descending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionQuery {
    /// Inclusive date range.
    pub period: Option<(NaiveDateTime, NaiveDateTime)>,
    pub kind: Option<EntryKind>,
    pub category_id: Option<Uuid>,
    /// Case-insensitive substring over the description.
    pub search: Option<String>,
    pub page: Option<PageRequest>,
}

impl TransactionQuery {
    pub fn in_period(mut self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        self.period = Some((start, end));
        self
    }

    pub fn of_kind(mut self, kind: EntryKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn in_category(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }
}

/// Tenant-scoped CRUD plus the filter/sort/count/pagination primitives the
/// services rely on.
///
/// Update and delete report whether a matching record existed; deciding what
/// a miss means is a caller concern. Any infrastructure failure surfaces as
/// [`StoreError`].
pub trait RecordStore: Send + Sync {
    // Clients
    fn clients(&self, tenant: Uuid) -> StoreResult<Vec<Client>>;
    fn insert_client(&mut self, client: Client) -> StoreResult<()>;
    fn update_client(&mut self, client: Client) -> StoreResult<bool>;
    fn delete_client(&mut self, tenant: Uuid, id: Uuid) -> StoreResult<bool>;

    // Catalog
    fn instruments(&self, tenant: Uuid) -> StoreResult<Vec<Instrument>>;
    fn insert_instrument(&mut self, instrument: Instrument) -> StoreResult<()>;
    fn delete_instrument(&mut self, tenant: Uuid, id: Uuid) -> StoreResult<bool>;
    fn brands(&self, tenant: Uuid) -> StoreResult<Vec<Brand>>;
    fn insert_brand(&mut self, brand: Brand) -> StoreResult<()>;
    fn delete_brand(&mut self, tenant: Uuid, id: Uuid) -> StoreResult<bool>;
    fn problems(&self, tenant: Uuid) -> StoreResult<Vec<Problem>>;
    fn insert_problem(&mut self, problem: Problem) -> StoreResult<()>;
    fn delete_problem(&mut self, tenant: Uuid, id: Uuid) -> StoreResult<bool>;
    fn service_items(&self, tenant: Uuid) -> StoreResult<Vec<ServiceItem>>;
    fn insert_service_item(&mut self, item: ServiceItem) -> StoreResult<()>;
    fn delete_service_item(&mut self, tenant: Uuid, id: Uuid) -> StoreResult<bool>;

    // Work orders
    fn orders(&self, tenant: Uuid, query: OrderQuery) -> StoreResult<Page<WorkOrder>>;
    fn order(&self, tenant: Uuid, id: Uuid) -> StoreResult<Option<WorkOrder>>;
    /// Appointment timestamps for every order of the tenant.
    fn booked_slots(&self, tenant: Uuid) -> StoreResult<Vec<NaiveDateTime>>;
    /// Next sequential display number for the tenant.
    fn next_order_number(&self, tenant: Uuid) -> StoreResult<u32>;
    fn insert_order(&mut self, order: WorkOrder) -> StoreResult<()>;
    fn update_order(&mut self, order: WorkOrder) -> StoreResult<bool>;
    fn delete_order(&mut self, tenant: Uuid, id: Uuid) -> StoreResult<bool>;

    // Finance
    /// Categories sorted by name.
    fn categories(&self, tenant: Uuid) -> StoreResult<Vec<FinancialCategory>>;
    fn insert_category(&mut self, category: FinancialCategory) -> StoreResult<()>;
    fn update_category(&mut self, category: FinancialCategory) -> StoreResult<bool>;
    fn delete_category(&mut self, tenant: Uuid, id: Uuid) -> StoreResult<bool>;
    fn transactions(
        &self,
        tenant: Uuid,
        query: TransactionQuery,
    ) -> StoreResult<Page<FinancialTransaction>>;
    /// Single all-or-nothing batch insert.
    fn insert_transactions(&mut self, batch: Vec<FinancialTransaction>) -> StoreResult<()>;
    fn update_transaction(&mut self, txn: FinancialTransaction) -> StoreResult<bool>;
    fn delete_transaction(&mut self, tenant: Uuid, id: Uuid) -> StoreResult<bool>;
}
