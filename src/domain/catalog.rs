//! Tenant-scoped catalog entries referenced by work orders.
//!
//! Orders snapshot free-text descriptions at creation time, so editing a
//! catalog entry never rewrites historical orders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// An instrument family the workshop services.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Instrument {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub user_id: Uuid,
}

impl Instrument {
    pub fn new(user_id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: Utc::now(),
            user_id,
        }
    }
}

/// A manufacturer name attached to orders alongside a free-text model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Brand {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub user_id: Uuid,
}

impl Brand {
    pub fn new(user_id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: Utc::now(),
            user_id,
        }
    }
}

/// A recurring defect with a reusable description template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Problem {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub user_id: Uuid,
}

impl Problem {
    pub fn new(user_id: Uuid, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            created_at: Utc::now(),
            user_id,
        }
    }
}

/// A billable service with a reference price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceItem {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub user_id: Uuid,
}

impl ServiceItem {
    pub fn new(
        user_id: Uuid,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            price,
            created_at: Utc::now(),
            user_id,
        }
    }
}

macro_rules! catalog_entry {
    ($entity:ty) => {
        impl Identifiable for $entity {
            fn id(&self) -> Uuid {
                self.id
            }
        }

        impl NamedEntity for $entity {
            fn name(&self) -> &str {
                &self.name
            }
        }

        impl TenantScoped for $entity {
            fn tenant(&self) -> Uuid {
                self.user_id
            }
        }
    };
}

catalog_entry!(Instrument);
catalog_entry!(Brand);
catalog_entry!(Problem);
catalog_entry!(ServiceItem);
