//! Transient reminder views derived from the order collection.
//!
//! Both sets are recomputed on demand and hold no state of their own.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::domain::{OrderStatus, WorkOrder};

/// Whole-month buckets between intake and the maintenance nudge.
const MAINTENANCE_INTERVAL_MONTHS: i32 = 6;

pub struct ReminderService;

impl ReminderService {
    /// Open orders booked for `today`, earliest slot first.
    pub fn due_today(orders: &[WorkOrder], today: NaiveDate) -> Vec<&WorkOrder> {
        let mut due: Vec<&WorkOrder> = orders
            .iter()
            .filter(|order| order.is_open() && order.scheduled_at.date() == today)
            .collect();
        due.sort_by_key(|order| order.scheduled_at);
        due
    }

    /// Completed orders whose intake lies at least six month buckets back.
    ///
    /// The difference is `(year_now - year_intake) * 12 + (month_now -
    /// month_intake)`, ignoring day-of-month.
    pub fn overdue_maintenance(orders: &[WorkOrder], now: NaiveDateTime) -> Vec<&WorkOrder> {
        orders
            .iter()
            .filter(|order| {
                order.status == OrderStatus::Completed
                    && month_bucket_diff(order.intake_at, now) >= MAINTENANCE_INTERVAL_MONTHS
            })
            .collect()
    }
}

fn month_bucket_diff(earlier: NaiveDateTime, later: NaiveDateTime) -> i32 {
    (later.year() - earlier.year()) * 12 + (later.month() as i32 - earlier.month() as i32)
}
