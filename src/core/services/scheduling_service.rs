//! Appointment slot validation and normalization.
//!
//! The scheduler never persists anything; it hands back a normalized slot for
//! the caller to store through the record store.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use super::{ServiceError, ServiceResult};

/// Opening hour of the booking window (inclusive).
const OPENING_HOUR: u32 = 8;
/// Closing hour of the booking window (exclusive).
const CLOSING_HOUR: u32 = 18;
/// Time applied when the caller supplies only a date.
const DEFAULT_APPOINTMENT_HOUR: u32 = 10;

/// Minimum spacing enforced between two bookings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SlotGranularity {
    /// Bookings collide only on the exact same minute.
    Exact,
    /// Bookings collide anywhere within the same hour.
    #[default]
    Hour,
}

/// Validates candidate appointment timestamps against business hours and the
/// tenant's existing bookings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scheduler {
    granularity: SlotGranularity,
}

impl Scheduler {
    pub fn new(granularity: SlotGranularity) -> Self {
        Self { granularity }
    }

    /// Validates `candidate` against Monday-Saturday 08:00-18:00 and the
    /// booked slots, returning the normalized timestamp on acceptance.
    pub fn propose(
        &self,
        candidate: NaiveDateTime,
        booked: &[NaiveDateTime],
    ) -> ServiceResult<NaiveDateTime> {
        let slot = normalize(candidate);
        if !within_business_hours(slot) {
            return Err(ServiceError::OutsideBusinessHours(slot));
        }
        if booked.iter().any(|existing| self.collides(slot, *existing)) {
            return Err(ServiceError::SlotTaken(slot));
        }
        Ok(slot)
    }

    /// Books a bare date at the default mid-morning time.
    pub fn propose_date(
        &self,
        date: NaiveDate,
        booked: &[NaiveDateTime],
    ) -> ServiceResult<NaiveDateTime> {
        let candidate = date
            .and_hms_opt(DEFAULT_APPOINTMENT_HOUR, 0, 0)
            .unwrap_or_else(|| date.and_time(chrono::NaiveTime::MIN));
        self.propose(candidate, booked)
    }

    fn collides(&self, a: NaiveDateTime, b: NaiveDateTime) -> bool {
        match self.granularity {
            SlotGranularity::Exact => a == b,
            SlotGranularity::Hour => a.date() == b.date() && a.hour() == b.hour(),
        }
    }
}

/// Truncates seconds so persisted slots compare on whole minutes.
fn normalize(at: NaiveDateTime) -> NaiveDateTime {
    at.with_second(0)
        .and_then(|truncated| truncated.with_nanosecond(0))
        .unwrap_or(at)
}

fn within_business_hours(at: NaiveDateTime) -> bool {
    at.weekday() != Weekday::Sun && (OPENING_HOUR..CLOSING_HOUR).contains(&at.hour())
}
