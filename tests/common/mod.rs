use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

use luthier_core::domain::{
    Brand, Client, EntryKind, FinancialCategory, FinancialTransaction, Instrument, WorkOrder,
};

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

pub fn sample_client(tenant: Uuid) -> Client {
    Client::new(tenant, "Ana Souza", "123.456.789-00", "+55 11 98888-7777")
}

pub fn sample_instrument(tenant: Uuid) -> Instrument {
    Instrument::new(tenant, "Violao")
}

pub fn sample_brand(tenant: Uuid) -> Brand {
    Brand::new(tenant, "Takamine")
}

pub fn sample_order(
    tenant: Uuid,
    client: &Client,
    instrument: &Instrument,
    brand: &Brand,
    intake: NaiveDateTime,
    scheduled: NaiveDateTime,
) -> WorkOrder {
    let mut order = WorkOrder::new(
        tenant,
        1,
        client.id,
        instrument.id,
        brand.id,
        intake,
        scheduled,
    );
    order.model = "EG341SC".into();
    order.base_price = 350.0;
    order.discount = 50.0;
    order
}

pub fn expense_category(tenant: Uuid, name: &str) -> FinancialCategory {
    FinancialCategory::new(tenant, name, EntryKind::Expense, "#EF4444")
}

pub fn income_category(tenant: Uuid, name: &str) -> FinancialCategory {
    FinancialCategory::new(tenant, name, EntryKind::Income, "#10B981")
}

pub fn transaction(
    tenant: Uuid,
    description: &str,
    amount: f64,
    kind: EntryKind,
    date: NaiveDateTime,
) -> FinancialTransaction {
    FinancialTransaction::new(tenant, description, amount, kind, date)
}
