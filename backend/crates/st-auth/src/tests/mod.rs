mod credentials;

use crate::{IdentityStore, OwnedResource, RecordOwnerStore, Result as AuthErrorResult};

use st_core::{Identity, Role};

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

pub(crate) const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// In-memory identity and owner store that counts lookups
#[derive(Default)]
pub(crate) struct FakeStore {
    identities: Mutex<HashMap<String, Identity>>,
    owners: Mutex<HashMap<String, String>>,
    lookups: AtomicUsize,
}

impl FakeStore {
    pub(crate) fn with_identity(self, email: &str, role: Option<Role>) -> Self {
        self.put(email, role);
        self
    }

    pub(crate) fn put(&self, email: &str, role: Option<Role>) {
        let identity = match role {
            Some(Role::Admin) => Identity::admin(email),
            role => Identity::register(email, None, role).unwrap(),
        };
        self.identities
            .lock()
            .unwrap()
            .insert(email.to_string(), identity);
    }

    pub(crate) fn with_owner(self, id: &str, owner: &str) -> Self {
        self.owners
            .lock()
            .unwrap()
            .insert(id.to_string(), owner.to_string());
        self
    }

    pub(crate) fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityStore for FakeStore {
    async fn find_identity(&self, email: &str) -> AuthErrorResult<Option<Identity>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.identities.lock().unwrap().get(email).cloned())
    }
}

#[async_trait]
impl RecordOwnerStore for FakeStore {
    async fn find_owner(
        &self,
        _resource: OwnedResource,
        id: &str,
    ) -> AuthErrorResult<Option<String>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.owners.lock().unwrap().get(id).cloned())
    }
}
