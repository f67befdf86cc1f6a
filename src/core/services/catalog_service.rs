//! Catalog and financial-category CRUD with duplicate-name protection.

use uuid::Uuid;

use crate::domain::{
    Brand, FinancialCategory, Identifiable, Instrument, NamedEntity, Problem, ServiceItem,
};
use crate::storage::{RecordStore, TransactionQuery};

use super::{ServiceError, ServiceResult};

pub struct CatalogService;

impl CatalogService {
    pub fn add_instrument(
        store: &mut dyn RecordStore,
        tenant: Uuid,
        instrument: Instrument,
    ) -> ServiceResult<Uuid> {
        ensure_unique_name(&store.instruments(tenant)?, None, &instrument.name)?;
        let id = instrument.id;
        store.insert_instrument(instrument)?;
        Ok(id)
    }

    pub fn add_brand(store: &mut dyn RecordStore, tenant: Uuid, brand: Brand) -> ServiceResult<Uuid> {
        ensure_unique_name(&store.brands(tenant)?, None, &brand.name)?;
        let id = brand.id;
        store.insert_brand(brand)?;
        Ok(id)
    }

    pub fn add_problem(
        store: &mut dyn RecordStore,
        tenant: Uuid,
        problem: Problem,
    ) -> ServiceResult<Uuid> {
        ensure_unique_name(&store.problems(tenant)?, None, &problem.name)?;
        let id = problem.id;
        store.insert_problem(problem)?;
        Ok(id)
    }

    pub fn add_service_item(
        store: &mut dyn RecordStore,
        tenant: Uuid,
        item: ServiceItem,
    ) -> ServiceResult<Uuid> {
        ensure_unique_name(&store.service_items(tenant)?, None, &item.name)?;
        if item.price < 0.0 {
            return Err(ServiceError::Validation(
                "service price must be non-negative".into(),
            ));
        }
        let id = item.id;
        store.insert_service_item(item)?;
        Ok(id)
    }

    pub fn add_category(
        store: &mut dyn RecordStore,
        tenant: Uuid,
        category: FinancialCategory,
    ) -> ServiceResult<Uuid> {
        ensure_unique_name(&store.categories(tenant)?, None, &category.name)?;
        let id = category.id;
        store.insert_category(category)?;
        Ok(id)
    }

    pub fn update_category(
        store: &mut dyn RecordStore,
        tenant: Uuid,
        category: FinancialCategory,
    ) -> ServiceResult<()> {
        ensure_unique_name(&store.categories(tenant)?, Some(category.id), &category.name)?;
        if !store.update_category(category)? {
            return Err(ServiceError::Validation("category not found".into()));
        }
        Ok(())
    }

    /// Removes a category unless transactions still reference it.
    pub fn remove_category(
        store: &mut dyn RecordStore,
        tenant: Uuid,
        id: Uuid,
    ) -> ServiceResult<()> {
        let linked = store
            .transactions(tenant, TransactionQuery::default().in_category(id))?
            .total;
        if linked > 0 {
            return Err(ServiceError::Validation(
                "category has linked transactions".into(),
            ));
        }
        if !store.delete_category(tenant, id)? {
            return Err(ServiceError::Validation("category not found".into()));
        }
        Ok(())
    }
}

fn ensure_unique_name<T: NamedEntity + Identifiable>(
    existing: &[T],
    exclude: Option<Uuid>,
    candidate: &str,
) -> ServiceResult<()> {
    let normalized = candidate.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(ServiceError::Validation("name is required".into()));
    }
    let duplicate = existing.iter().any(|entry| {
        entry.name().trim().to_lowercase() == normalized
            && exclude.is_none_or(|id| entry.id() != id)
    });
    if duplicate {
        Err(ServiceError::Validation(format!(
            "`{}` already exists",
            candidate.trim()
        )))
    } else {
        Ok(())
    }
}
