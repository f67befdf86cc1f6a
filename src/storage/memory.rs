//! Volatile reference backend with the same filter semantics the production
//! adapter provides.

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::domain::{
    Brand, Client, FinancialCategory, FinancialTransaction, Identifiable, Instrument, Problem,
    ServiceItem, TenantScoped, WorkOrder,
};

use super::{OrderQuery, Page, PageRequest, RecordStore, StoreResult, TransactionQuery};

#[derive(Debug, Default)]
pub struct MemoryStore {
    clients: Vec<Client>,
    instruments: Vec<Instrument>,
    brands: Vec<Brand>,
    problems: Vec<Problem>,
    service_items: Vec<ServiceItem>,
    orders: Vec<WorkOrder>,
    categories: Vec<FinancialCategory>,
    transactions: Vec<FinancialTransaction>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn owned<T: TenantScoped + Clone>(items: &[T], tenant: Uuid) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.tenant() == tenant)
        .cloned()
        .collect()
}

fn replace<T: Identifiable + TenantScoped>(items: &mut [T], entity: T) -> bool {
    match items
        .iter_mut()
        .find(|item| item.id() == entity.id() && item.tenant() == entity.tenant())
    {
        Some(slot) => {
            *slot = entity;
            true
        }
        None => false,
    }
}

fn remove_by_id<T: Identifiable + TenantScoped>(
    items: &mut Vec<T>,
    tenant: Uuid,
    id: Uuid,
) -> bool {
    let before = items.len();
    items.retain(|item| !(item.id() == id && item.tenant() == tenant));
    items.len() != before
}

fn paginate<T>(items: Vec<T>, page: Option<PageRequest>) -> Page<T> {
    let total = items.len();
    let items = match page {
        Some(PageRequest { offset, limit }) => {
            items.into_iter().skip(offset).take(limit).collect()
        }
        None => items,
    };
    Page { items, total }
}

impl RecordStore for MemoryStore {
    fn clients(&self, tenant: Uuid) -> StoreResult<Vec<Client>> {
        Ok(owned(&self.clients, tenant))
    }

    fn insert_client(&mut self, client: Client) -> StoreResult<()> {
        self.clients.push(client);
        Ok(())
    }

    fn update_client(&mut self, client: Client) -> StoreResult<bool> {
        Ok(replace(&mut self.clients, client))
    }

    fn delete_client(&mut self, tenant: Uuid, id: Uuid) -> StoreResult<bool> {
        Ok(remove_by_id(&mut self.clients, tenant, id))
    }

    fn instruments(&self, tenant: Uuid) -> StoreResult<Vec<Instrument>> {
        Ok(owned(&self.instruments, tenant))
    }

    fn insert_instrument(&mut self, instrument: Instrument) -> StoreResult<()> {
        self.instruments.push(instrument);
        Ok(())
    }

    fn delete_instrument(&mut self, tenant: Uuid, id: Uuid) -> StoreResult<bool> {
        Ok(remove_by_id(&mut self.instruments, tenant, id))
    }

    fn brands(&self, tenant: Uuid) -> StoreResult<Vec<Brand>> {
        Ok(owned(&self.brands, tenant))
    }

    fn insert_brand(&mut self, brand: Brand) -> StoreResult<()> {
        self.brands.push(brand);
        Ok(())
    }

    fn delete_brand(&mut self, tenant: Uuid, id: Uuid) -> StoreResult<bool> {
        Ok(remove_by_id(&mut self.brands, tenant, id))
    }

    fn problems(&self, tenant: Uuid) -> StoreResult<Vec<Problem>> {
        Ok(owned(&self.problems, tenant))
    }

    fn insert_problem(&mut self, problem: Problem) -> StoreResult<()> {
        self.problems.push(problem);
        Ok(())
    }

    fn delete_problem(&mut self, tenant: Uuid, id: Uuid) -> StoreResult<bool> {
        Ok(remove_by_id(&mut self.problems, tenant, id))
    }

    fn service_items(&self, tenant: Uuid) -> StoreResult<Vec<ServiceItem>> {
        Ok(owned(&self.service_items, tenant))
    }

    fn insert_service_item(&mut self, item: ServiceItem) -> StoreResult<()> {
        self.service_items.push(item);
        Ok(())
    }

    fn delete_service_item(&mut self, tenant: Uuid, id: Uuid) -> StoreResult<bool> {
        Ok(remove_by_id(&mut self.service_items, tenant, id))
    }

    fn orders(&self, tenant: Uuid, query: OrderQuery) -> StoreResult<Page<WorkOrder>> {
        let needle = query.search.as_deref().map(str::to_lowercase);
        let mut matched: Vec<WorkOrder> = self
            .orders
            .iter()
            .filter(|order| order.user_id == tenant)
            .filter(|order| query.statuses.is_empty() || query.statuses.contains(&order.status))
            .filter(|order| match &needle {
                None => true,
                Some(needle) => {
                    let client_name = self
                        .clients
                        .iter()
                        .find(|client| client.id == order.client_id)
                        .map(|client| client.name.to_lowercase());
                    order.model.to_lowercase().contains(needle)
                        || client_name.is_some_and(|name| name.contains(needle))
                }
            })
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(paginate(matched, query.page))
    }

    fn order(&self, tenant: Uuid, id: Uuid) -> StoreResult<Option<WorkOrder>> {
        Ok(self
            .orders
            .iter()
            .find(|order| order.id == id && order.user_id == tenant)
            .cloned())
    }

    fn booked_slots(&self, tenant: Uuid) -> StoreResult<Vec<NaiveDateTime>> {
        Ok(self
            .orders
            .iter()
            .filter(|order| order.user_id == tenant)
            .map(|order| order.scheduled_at)
            .collect())
    }

    fn next_order_number(&self, tenant: Uuid) -> StoreResult<u32> {
        Ok(self
            .orders
            .iter()
            .filter(|order| order.user_id == tenant)
            .map(|order| order.number)
            .max()
            .map_or(1, |highest| highest + 1))
    }

    fn insert_order(&mut self, order: WorkOrder) -> StoreResult<()> {
        self.orders.push(order);
        Ok(())
    }

    fn update_order(&mut self, order: WorkOrder) -> StoreResult<bool> {
        Ok(replace(&mut self.orders, order))
    }

    fn delete_order(&mut self, tenant: Uuid, id: Uuid) -> StoreResult<bool> {
        Ok(remove_by_id(&mut self.orders, tenant, id))
    }

    fn categories(&self, tenant: Uuid) -> StoreResult<Vec<FinancialCategory>> {
        let mut categories = owned(&self.categories, tenant);
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    fn insert_category(&mut self, category: FinancialCategory) -> StoreResult<()> {
        self.categories.push(category);
        Ok(())
    }

    fn update_category(&mut self, category: FinancialCategory) -> StoreResult<bool> {
        Ok(replace(&mut self.categories, category))
    }

    fn delete_category(&mut self, tenant: Uuid, id: Uuid) -> StoreResult<bool> {
        Ok(remove_by_id(&mut self.categories, tenant, id))
    }

    fn transactions(
        &self,
        tenant: Uuid,
        query: TransactionQuery,
    ) -> StoreResult<Page<FinancialTransaction>> {
        let needle = query.search.as_deref().map(str::to_lowercase);
        let mut matched: Vec<FinancialTransaction> = self
            .transactions
            .iter()
            .filter(|txn| txn.user_id == tenant)
            .filter(|txn| {
                query
                    .period
                    .is_none_or(|(start, end)| txn.date >= start && txn.date <= end)
            })
            .filter(|txn| query.kind.is_none_or(|kind| txn.kind == kind))
            .filter(|txn| query.category_id.is_none_or(|id| txn.category_id == Some(id)))
            .filter(|txn| match &needle {
                None => true,
                Some(needle) => txn.description.to_lowercase().contains(needle),
            })
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(paginate(matched, query.page))
    }

    fn insert_transactions(&mut self, batch: Vec<FinancialTransaction>) -> StoreResult<()> {
        self.transactions.extend(batch);
        Ok(())
    }

    fn update_transaction(&mut self, txn: FinancialTransaction) -> StoreResult<bool> {
        Ok(replace(&mut self.transactions, txn))
    }

    fn delete_transaction(&mut self, tenant: Uuid, id: Uuid) -> StoreResult<bool> {
        Ok(remove_by_id(&mut self.transactions, tenant, id))
    }
}
