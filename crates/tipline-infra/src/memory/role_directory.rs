//! In-memory role directory.

use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use tipline_core::domain::Role;
use tipline_core::error::RepoError;
use tipline_core::ports::RoleDirectory;

/// Role memberships held in a set of `(user_id, role)` pairs.
pub struct InMemoryRoleDirectory {
    memberships: RwLock<HashSet<(Uuid, Role)>>,
}

impl InMemoryRoleDirectory {
    pub fn new() -> Self {
        Self {
            memberships: RwLock::new(HashSet::new()),
        }
    }

    /// Directory where every listed user is an admin.
    pub fn with_admins(user_ids: impl IntoIterator<Item = Uuid>) -> Self {
        Self {
            memberships: RwLock::new(user_ids.into_iter().map(|id| (id, Role::Admin)).collect()),
        }
    }

    pub async fn grant(&self, user_id: Uuid, role: Role) {
        self.memberships.write().await.insert((user_id, role));
    }

    pub async fn revoke(&self, user_id: Uuid, role: Role) {
        self.memberships.write().await.remove(&(user_id, role));
    }
}

impl Default for InMemoryRoleDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoleDirectory for InMemoryRoleDirectory {
    async fn has_role(&self, user_id: Uuid, role: Role) -> Result<bool, RepoError> {
        Ok(self.memberships.read().await.contains(&(user_id, role)))
    }
}
