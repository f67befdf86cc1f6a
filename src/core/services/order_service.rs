//! Work order lifecycle and persistence helpers.

use chrono::NaiveDateTime;
use tracing::{info, warn};
use uuid::Uuid;

use crate::core::notifications::NotificationRequest;
use crate::domain::{Brand, Client, Instrument, OrderStatus, WorkOrder};
use crate::storage::{OrderQuery, Page, RecordStore};

use super::{ServiceError, ServiceResult};

/// Related records needed to compose notifications for an order.
#[derive(Debug, Clone, Copy)]
pub struct OrderContext<'a> {
    pub client: &'a Client,
    pub instrument: &'a Instrument,
    pub brand: &'a Brand,
}

pub struct OrderService;

impl OrderService {
    /// Applies a status transition, returning the notification request the
    /// edge demands, if any. Illegal edges leave the order untouched.
    pub fn transition(
        order: &mut WorkOrder,
        to: OrderStatus,
        context: OrderContext<'_>,
        now: NaiveDateTime,
    ) -> ServiceResult<Option<NotificationRequest>> {
        let from = order.status;
        let outcome = match (from, to) {
            (OrderStatus::Pending, OrderStatus::InProgress) => {
                Some(NotificationRequest::maintenance_outreach(
                    context.client,
                    context.instrument,
                    context.brand,
                    &order.model,
                ))
            }
            (OrderStatus::Pending | OrderStatus::InProgress, OrderStatus::Completed) => Some(
                NotificationRequest::ready_for_pickup(context.client, context.instrument),
            ),
            (OrderStatus::Pending | OrderStatus::InProgress, OrderStatus::Cancelled) => None,
            (OrderStatus::Pending, OrderStatus::Pending)
            | (OrderStatus::InProgress, OrderStatus::Pending | OrderStatus::InProgress)
            | (OrderStatus::Completed, _)
            | (OrderStatus::Cancelled, _) => {
                return Err(ServiceError::InvalidTransition { from, to })
            }
        };
        order.status = to;
        if to == OrderStatus::Completed {
            order.completed_at = Some(now);
        }
        order.touch();
        info!(order = %order.id, %from, %to, "order status changed");
        Ok(outcome)
    }

    /// Persists a new order, stamping intake time, pending status, and the
    /// tenant's next sequential display number. Appointment validation is the
    /// scheduler's job and must happen before this call.
    pub fn create(
        store: &mut dyn RecordStore,
        tenant: Uuid,
        mut order: WorkOrder,
        now: NaiveDateTime,
    ) -> ServiceResult<WorkOrder> {
        if order.user_id != tenant {
            return Err(ServiceError::Validation(
                "order does not belong to the tenant".into(),
            ));
        }
        check_amounts(&order)?;
        order.number = store.next_order_number(tenant)?;
        order.status = OrderStatus::Pending;
        order.intake_at = now;
        order.completed_at = None;
        store.insert_order(order.clone())?;
        info!(order = %order.id, number = order.number, "order created");
        Ok(order)
    }

    /// Applies a direct edit. Edits never change status, numbering, or the
    /// scheduling anchors; those move only through transitions.
    pub fn update(
        store: &mut dyn RecordStore,
        tenant: Uuid,
        mut changes: WorkOrder,
    ) -> ServiceResult<WorkOrder> {
        check_amounts(&changes)?;
        let Some(current) = store.order(tenant, changes.id)? else {
            return Err(ServiceError::Validation("work order not found".into()));
        };
        changes.status = current.status;
        changes.number = current.number;
        changes.intake_at = current.intake_at;
        changes.completed_at = current.completed_at;
        changes.created_at = current.created_at;
        changes.touch();
        store.update_order(changes.clone())?;
        Ok(changes)
    }

    /// Explicit operator removal. Terminal and irreversible.
    pub fn remove(store: &mut dyn RecordStore, tenant: Uuid, id: Uuid) -> ServiceResult<()> {
        if !store.delete_order(tenant, id)? {
            return Err(ServiceError::Validation("work order not found".into()));
        }
        info!(order = %id, "order removed");
        Ok(())
    }

    /// Lists the tenant's orders with the caller's filters.
    pub fn list(
        store: &dyn RecordStore,
        tenant: Uuid,
        query: OrderQuery,
    ) -> ServiceResult<Page<WorkOrder>> {
        Ok(store.orders(tenant, query)?)
    }

    /// Loads, transitions, and persists an order in one step, returning the
    /// notification request for the messaging collaborator.
    pub fn change_status(
        store: &mut dyn RecordStore,
        tenant: Uuid,
        id: Uuid,
        to: OrderStatus,
        context: OrderContext<'_>,
        now: NaiveDateTime,
    ) -> ServiceResult<Option<NotificationRequest>> {
        let Some(mut order) = store.order(tenant, id)? else {
            return Err(ServiceError::Validation("work order not found".into()));
        };
        let notification = Self::transition(&mut order, to, context, now)?;
        store.update_order(order)?;
        Ok(notification)
    }
}

fn check_amounts(order: &WorkOrder) -> ServiceResult<()> {
    if order.base_price < 0.0 || order.discount < 0.0 {
        return Err(ServiceError::Validation(
            "monetary amounts must be non-negative".into(),
        ));
    }
    if order.discount > order.base_price {
        warn!(order = %order.id, "discount exceeds base price");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 4)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn fixture(tenant: Uuid) -> (Client, Instrument, Brand, WorkOrder) {
        let client = Client::new(tenant, "Ana Souza", "123.456.789-00", "+55 11 98888-7777");
        let instrument = Instrument::new(tenant, "Violao");
        let brand = Brand::new(tenant, "Takamine");
        let mut order = WorkOrder::new(
            tenant,
            1,
            client.id,
            instrument.id,
            brand.id,
            at(9),
            at(10),
        );
        order.model = "EG341SC".into();
        (client, instrument, brand, order)
    }

    #[test]
    fn starting_work_emits_maintenance_outreach() {
        let tenant = Uuid::new_v4();
        let (client, instrument, brand, mut order) = fixture(tenant);
        let context = OrderContext {
            client: &client,
            instrument: &instrument,
            brand: &brand,
        };
        let request = OrderService::transition(&mut order, OrderStatus::InProgress, context, at(11))
            .unwrap()
            .expect("outreach request");
        assert_eq!(order.status, OrderStatus::InProgress);
        assert_eq!(request.phone, client.phone);
        assert!(request.message.contains("Takamine"));
    }

    #[test]
    fn completion_emits_pickup_notice_and_stamps_time() {
        let tenant = Uuid::new_v4();
        let (client, instrument, brand, mut order) = fixture(tenant);
        let context = OrderContext {
            client: &client,
            instrument: &instrument,
            brand: &brand,
        };
        let request = OrderService::transition(&mut order, OrderStatus::Completed, context, at(16))
            .unwrap()
            .expect("pickup request");
        assert_eq!(order.completed_at, Some(at(16)));
        assert!(request.message.contains("10:00-13:00"));
    }

    #[test]
    fn cancellation_is_silent() {
        let tenant = Uuid::new_v4();
        let (client, instrument, brand, mut order) = fixture(tenant);
        let context = OrderContext {
            client: &client,
            instrument: &instrument,
            brand: &brand,
        };
        let request =
            OrderService::transition(&mut order, OrderStatus::Cancelled, context, at(11)).unwrap();
        assert!(request.is_none());
        assert_eq!(order.status, OrderStatus::Cancelled);
    }

    #[test]
    fn terminal_states_are_absorbing() {
        let tenant = Uuid::new_v4();
        let (client, instrument, brand, mut order) = fixture(tenant);
        let context = OrderContext {
            client: &client,
            instrument: &instrument,
            brand: &brand,
        };
        order.status = OrderStatus::Completed;
        for target in [
            OrderStatus::Pending,
            OrderStatus::InProgress,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ] {
            let err = OrderService::transition(&mut order, target, context, at(11))
                .expect_err("terminal state must not move");
            assert!(matches!(err, ServiceError::InvalidTransition { .. }));
            assert_eq!(order.status, OrderStatus::Completed);
        }
    }

    #[test]
    fn same_state_transition_is_rejected() {
        let tenant = Uuid::new_v4();
        let (client, instrument, brand, mut order) = fixture(tenant);
        let context = OrderContext {
            client: &client,
            instrument: &instrument,
            brand: &brand,
        };
        let err = OrderService::transition(&mut order, OrderStatus::Pending, context, at(11))
            .expect_err("no-op transition must fail");
        assert!(matches!(err, ServiceError::InvalidTransition { .. }));
    }
}
