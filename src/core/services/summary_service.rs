//! Ledger aggregation into period totals and chart-ready series.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use uuid::Uuid;

use crate::domain::{
    Client, EntryKind, FinancialCategory, FinancialTransaction, OrderStatus, WorkOrder,
};

/// Label used for transactions without a category reference.
pub const UNCATEGORIZED: &str = "uncategorized";

/// Number of slots in the trailing cash-flow series.
const SERIES_MONTHS: usize = 6;

/// A calendar-month aggregation window, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingPeriod {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ReportingPeriod {
    /// The full month containing `date`, from first to last instant.
    pub fn month_of(date: NaiveDate) -> Self {
        let first = date.with_day(1).unwrap_or(date);
        let next_first = month_start(first, 1);
        let last = next_first - Duration::days(1);
        Self {
            start: first.and_time(NaiveTime::MIN),
            end: last.and_time(last_instant()),
        }
    }

    pub fn contains(&self, at: NaiveDateTime) -> bool {
        at >= self.start && at <= self.end
    }
}

/// Running total for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub name: String,
    pub total: f64,
}

/// Month totals with per-category breakdowns, sorted by category name.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerSummary {
    pub period: ReportingPeriod,
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
    pub income_by_category: Vec<CategoryTotal>,
    pub expense_by_category: Vec<CategoryTotal>,
}

/// One slot of the trailing cash-flow series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CashFlowPoint {
    /// First day of the slot's calendar month.
    pub month: NaiveDate,
    pub income: f64,
    pub expense: f64,
}

/// Headline counters for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkshopStats {
    pub total_clients: usize,
    pub open_orders: usize,
    pub completed_orders: usize,
}

pub struct SummaryService;

impl SummaryService {
    /// Aggregates the period's transactions into totals and breakdowns.
    /// Order-independent: shuffling the input never changes the result.
    pub fn monthly_summary(
        transactions: &[FinancialTransaction],
        categories: &[FinancialCategory],
        period: ReportingPeriod,
    ) -> LedgerSummary {
        let mut income = 0.0;
        let mut expense = 0.0;
        let mut income_by_category: BTreeMap<String, f64> = BTreeMap::new();
        let mut expense_by_category: BTreeMap<String, f64> = BTreeMap::new();

        for txn in transactions.iter().filter(|txn| period.contains(txn.date)) {
            let label = category_label(categories, txn.category_id);
            match txn.kind {
                EntryKind::Income => {
                    income += txn.amount;
                    *income_by_category.entry(label).or_insert(0.0) += txn.amount;
                }
                EntryKind::Expense => {
                    expense += txn.amount;
                    *expense_by_category.entry(label).or_insert(0.0) += txn.amount;
                }
            }
        }

        LedgerSummary {
            period,
            income,
            expense,
            balance: income - expense,
            income_by_category: into_totals(income_by_category),
            expense_by_category: into_totals(expense_by_category),
        }
    }

    /// Bins the trailing six months of activity, oldest slot first.
    ///
    /// Slot `i` carries the month `start + i`, where `start` is five months
    /// before `reference`; a transaction lands in
    /// `(month(t) - month(start) + 12) % 6`.
    pub fn cash_flow_series(
        transactions: &[FinancialTransaction],
        reference: NaiveDate,
    ) -> [CashFlowPoint; SERIES_MONTHS] {
        let start = month_start(reference, -(SERIES_MONTHS as i32 - 1));
        let mut series = [CashFlowPoint {
            month: start,
            income: 0.0,
            expense: 0.0,
        }; SERIES_MONTHS];
        for (offset, point) in series.iter_mut().enumerate() {
            point.month = month_start(start, offset as i32);
        }

        let window_start = start.and_time(NaiveTime::MIN);
        let window_end = ReportingPeriod::month_of(reference).end;
        for txn in transactions {
            if txn.date < window_start || txn.date > window_end {
                continue;
            }
            let index = ((txn.date.month() as i32 - start.month() as i32 + 12)
                % SERIES_MONTHS as i32) as usize;
            match txn.kind {
                EntryKind::Income => series[index].income += txn.amount,
                EntryKind::Expense => series[index].expense += txn.amount,
            }
        }
        series
    }

    /// Realized revenue over completed orders.
    pub fn completed_revenue(orders: &[WorkOrder]) -> f64 {
        orders
            .iter()
            .filter(|order| order.status == OrderStatus::Completed)
            .map(WorkOrder::total)
            .sum()
    }

    /// Headline dashboard counters.
    pub fn workshop_stats(clients: &[Client], orders: &[WorkOrder]) -> WorkshopStats {
        WorkshopStats {
            total_clients: clients.len(),
            open_orders: orders.iter().filter(|order| order.is_open()).count(),
            completed_orders: orders
                .iter()
                .filter(|order| order.status == OrderStatus::Completed)
                .count(),
        }
    }
}

fn category_label(categories: &[FinancialCategory], id: Option<Uuid>) -> String {
    id.and_then(|id| categories.iter().find(|category| category.id == id))
        .map(|category| category.name.clone())
        .unwrap_or_else(|| UNCATEGORIZED.to_string())
}

fn into_totals(map: BTreeMap<String, f64>) -> Vec<CategoryTotal> {
    map.into_iter()
        .map(|(name, total)| CategoryTotal { name, total })
        .collect()
}

fn last_instant() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN)
}

/// First day of the month `months` steps away from `date`'s month.
fn month_start(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    NaiveDate::from_ymd_opt(year, month as u32, 1).unwrap_or(date)
}
