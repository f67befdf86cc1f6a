//! Validated CRUD passthroughs for client records.

use uuid::Uuid;

use crate::domain::Client;
use crate::storage::RecordStore;

use super::{ServiceError, ServiceResult};

pub struct ClientService;

impl ClientService {
    /// Adds a new client and returns its identifier.
    pub fn add(store: &mut dyn RecordStore, tenant: Uuid, client: Client) -> ServiceResult<Uuid> {
        if client.user_id != tenant {
            return Err(ServiceError::Validation(
                "client does not belong to the tenant".into(),
            ));
        }
        if client.name.trim().is_empty() {
            return Err(ServiceError::Validation("client name is required".into()));
        }
        let id = client.id;
        store.insert_client(client)?;
        Ok(id)
    }

    /// Replaces the stored record with `client`.
    pub fn update(store: &mut dyn RecordStore, tenant: Uuid, client: Client) -> ServiceResult<()> {
        if client.user_id != tenant {
            return Err(ServiceError::Validation(
                "client does not belong to the tenant".into(),
            ));
        }
        if client.name.trim().is_empty() {
            return Err(ServiceError::Validation("client name is required".into()));
        }
        if !store.update_client(client)? {
            return Err(ServiceError::Validation("client not found".into()));
        }
        Ok(())
    }

    pub fn remove(store: &mut dyn RecordStore, tenant: Uuid, id: Uuid) -> ServiceResult<()> {
        if !store.delete_client(tenant, id)? {
            return Err(ServiceError::Validation("client not found".into()));
        }
        Ok(())
    }

    pub fn list(store: &dyn RecordStore, tenant: Uuid) -> ServiceResult<Vec<Client>> {
        Ok(store.clients(tenant)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn rejects_blank_names() {
        let mut store = MemoryStore::new();
        let tenant = Uuid::new_v4();
        let client = Client::new(tenant, "  ", "123", "555");
        let err = ClientService::add(&mut store, tenant, client).expect_err("blank name");
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn rejects_cross_tenant_writes() {
        let mut store = MemoryStore::new();
        let tenant = Uuid::new_v4();
        let client = Client::new(Uuid::new_v4(), "Ana", "123", "555");
        let err = ClientService::add(&mut store, tenant, client).expect_err("wrong tenant");
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn add_then_remove_roundtrip() {
        let mut store = MemoryStore::new();
        let tenant = Uuid::new_v4();
        let client = Client::new(tenant, "Ana Souza", "123.456.789-00", "+55 11 98888-7777");
        let id = ClientService::add(&mut store, tenant, client).unwrap();
        assert_eq!(ClientService::list(&store, tenant).unwrap().len(), 1);
        ClientService::remove(&mut store, tenant, id).unwrap();
        assert!(ClientService::list(&store, tenant).unwrap().is_empty());
    }
}
