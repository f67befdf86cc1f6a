mod common;

use chrono::NaiveDate;
use luthier_core::core::services::{ReportingPeriod, SummaryService};
use luthier_core::core::services::summary_service::UNCATEGORIZED;
use luthier_core::domain::{EntryKind, OrderStatus};
use uuid::Uuid;

use common::{
    at, expense_category, income_category, sample_brand, sample_client, sample_instrument,
    sample_order, transaction,
};

#[test]
fn monthly_totals_and_breakdowns() {
    let tenant = Uuid::new_v4();
    let materials = expense_category(tenant, "Materiais");
    let services = income_category(tenant, "Servicos");
    let categories = vec![materials.clone(), services.clone()];

    let transactions = vec![
        transaction(tenant, "Setup", 300.0, EntryKind::Income, at(2024, 2, 5, 10, 0))
            .with_category(services.id),
        transaction(tenant, "Cordas", 150.0, EntryKind::Expense, at(2024, 2, 8, 0, 0))
            .with_category(materials.id),
        transaction(tenant, "Gorjeta", 50.0, EntryKind::Income, at(2024, 2, 20, 15, 0)),
        // Outside the period.
        transaction(tenant, "Aluguel", 900.0, EntryKind::Expense, at(2024, 3, 1, 0, 0))
            .with_category(materials.id),
    ];

    assert_eq!(transactions[1].signed_amount(), -150.0);

    let period = ReportingPeriod::month_of(NaiveDate::from_ymd_opt(2024, 2, 15).unwrap());
    let summary = SummaryService::monthly_summary(&transactions, &categories, period);

    assert_eq!(summary.income, 350.0);
    assert_eq!(summary.expense, 150.0);
    assert_eq!(summary.balance, 200.0);
    assert_eq!(summary.expense_by_category.len(), 1);
    assert_eq!(summary.expense_by_category[0].name, "Materiais");
    assert_eq!(summary.expense_by_category[0].total, 150.0);

    // Income breakdown is sorted by name; the uncategorized bucket keeps its
    // placeholder label.
    let names: Vec<&str> = summary
        .income_by_category
        .iter()
        .map(|entry| entry.name.as_str())
        .collect();
    assert_eq!(names, vec!["Servicos", UNCATEGORIZED]);
}

#[test]
fn aggregation_is_order_independent() {
    let tenant = Uuid::new_v4();
    let materials = expense_category(tenant, "Materiais");
    let categories = vec![materials.clone()];
    let mut transactions = vec![
        transaction(tenant, "A", 10.0, EntryKind::Expense, at(2024, 2, 1, 0, 0))
            .with_category(materials.id),
        transaction(tenant, "B", 20.0, EntryKind::Income, at(2024, 2, 2, 0, 0)),
        transaction(tenant, "C", 30.0, EntryKind::Expense, at(2024, 2, 3, 0, 0)),
    ];
    let period = ReportingPeriod::month_of(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());

    let forward = SummaryService::monthly_summary(&transactions, &categories, period);
    transactions.reverse();
    let backward = SummaryService::monthly_summary(&transactions, &categories, period);
    assert_eq!(forward, backward);
}

#[test]
fn cash_flow_series_bins_by_month_offset() {
    let tenant = Uuid::new_v4();
    let reference = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let transactions = vec![
        // January lands in slot 0, June in slot 5.
        transaction(tenant, "Old", 100.0, EntryKind::Income, at(2024, 1, 10, 0, 0)),
        transaction(tenant, "New", 40.0, EntryKind::Expense, at(2024, 6, 2, 0, 0)),
        // Before the window: ignored.
        transaction(tenant, "Ancient", 999.0, EntryKind::Income, at(2023, 12, 31, 0, 0)),
    ];

    let series = SummaryService::cash_flow_series(&transactions, reference);
    assert_eq!(series[0].month, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert_eq!(series[5].month, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    assert_eq!(series[0].income, 100.0);
    assert_eq!(series[5].expense, 40.0);
    let total_income: f64 = series.iter().map(|point| point.income).sum();
    assert_eq!(total_income, 100.0);
}

#[test]
fn cash_flow_series_wraps_year_boundaries() {
    let tenant = Uuid::new_v4();
    let reference = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
    let transactions = vec![
        transaction(tenant, "Sep", 10.0, EntryKind::Income, at(2023, 9, 5, 0, 0)),
        transaction(tenant, "Feb", 20.0, EntryKind::Income, at(2024, 2, 5, 0, 0)),
    ];
    let series = SummaryService::cash_flow_series(&transactions, reference);
    assert_eq!(series[0].month, NaiveDate::from_ymd_opt(2023, 9, 1).unwrap());
    assert_eq!(series[0].income, 10.0);
    assert_eq!(series[5].income, 20.0);
}

#[test]
fn stats_and_revenue_over_mixed_orders() {
    let tenant = Uuid::new_v4();
    let client = sample_client(tenant);
    let instrument = sample_instrument(tenant);
    let brand = sample_brand(tenant);
    let intake = at(2024, 3, 1, 9, 0);

    let pending = sample_order(tenant, &client, &instrument, &brand, intake, at(2024, 3, 4, 10, 0));
    let mut working =
        sample_order(tenant, &client, &instrument, &brand, intake, at(2024, 3, 5, 10, 0));
    working.status = OrderStatus::InProgress;
    let mut done = sample_order(tenant, &client, &instrument, &brand, intake, at(2024, 3, 6, 10, 0));
    done.status = OrderStatus::Completed;
    done.base_price = 500.0;
    done.discount = 100.0;
    let mut cancelled =
        sample_order(tenant, &client, &instrument, &brand, intake, at(2024, 3, 7, 10, 0));
    cancelled.status = OrderStatus::Cancelled;
    cancelled.base_price = 999.0;

    let clients = vec![client];
    let orders = vec![pending, working, done, cancelled];

    let stats = SummaryService::workshop_stats(&clients, &orders);
    assert_eq!(stats.total_clients, 1);
    assert_eq!(stats.open_orders, 2);
    assert_eq!(stats.completed_orders, 1);
    assert_eq!(SummaryService::completed_revenue(&orders), 400.0);
}
