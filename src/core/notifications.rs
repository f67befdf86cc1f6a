//! Outbound message requests handed to an external messaging collaborator.
//!
//! The engine only composes requests; delivery happens elsewhere and is never
//! awaited or confirmed.

use crate::currency::format_brl;
use crate::domain::{Brand, Client, Instrument, WorkOrder};

/// Pickup window quoted in completion messages.
pub const PICKUP_HOURS: &str = "10:00-13:00 and 14:00-18:00, Monday to Saturday";

/// A composed message for one recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub phone: String,
    pub message: String,
}

impl NotificationRequest {
    /// Tells the client the repaired instrument is ready for pickup.
    pub fn ready_for_pickup(client: &Client, instrument: &Instrument) -> Self {
        Self {
            phone: client.phone.clone(),
            message: format!(
                "Hello {}, your {} is ready. Pickup between {}.",
                client.name, instrument.name, PICKUP_HOURS
            ),
        }
    }

    /// Invites the client back for maintenance six months after intake.
    pub fn maintenance_outreach(
        client: &Client,
        instrument: &Instrument,
        brand: &Brand,
        model: &str,
    ) -> Self {
        Self {
            phone: client.phone.clone(),
            message: format!(
                "Hello {}, your {} {} {} has gone six months without maintenance. \
                 We recommend bringing it in for hydration, cleaning and a string \
                 change before more serious problems develop.",
                client.name, instrument.name, brand.name, model
            ),
        }
    }

    /// Summarizes an order for ad-hoc sharing with the client.
    pub fn order_summary(order: &WorkOrder, client: &Client, instrument: &Instrument) -> Self {
        Self {
            phone: client.phone.clone(),
            message: format!(
                "Order #{}: {} {} - {}. Total: {}.",
                order.number,
                instrument.name,
                order.model,
                order.service_description,
                format_brl(order.total())
            ),
        }
    }
}
