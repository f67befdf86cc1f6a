//! Domain model for workshop clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// A customer of the workshop. Work orders reference clients by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub tax_id: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub user_id: Uuid,
}

impl Client {
    pub fn new(
        user_id: Uuid,
        name: impl Into<String>,
        tax_id: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            tax_id: tax_id.into(),
            phone: phone.into(),
            created_at: Utc::now(),
            user_id,
        }
    }
}

impl Identifiable for Client {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Client {
    fn name(&self) -> &str {
        &self.name
    }
}

impl TenantScoped for Client {
    fn tenant(&self) -> Uuid {
        self.user_id
    }
}

impl Displayable for Client {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.phone)
    }
}
