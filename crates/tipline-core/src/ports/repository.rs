use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Capability, Identity, Role, Tip, TipDraft};
use crate::error::RepoError;

/// Durable tip collection.
#[async_trait]
pub trait TipStore: Send + Sync {
    /// All tips in canonical order (newest `date_posted` first).
    /// Never partially applies.
    async fn list_all(&self) -> Result<Vec<Tip>, RepoError>;

    /// Insert a tip; the store assigns `id` and `date_posted`.
    async fn insert(&self, draft: TipDraft) -> Result<Tip, RepoError>;

    /// Replace title and content. `date_posted` is left untouched.
    async fn update(&self, id: Uuid, draft: TipDraft) -> Result<(), RepoError>;

    /// Remove a tip irreversibly.
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}

/// Mapping from identity to role memberships.
#[async_trait]
pub trait RoleDirectory: Send + Sync {
    /// Does `user_id` hold `role`?
    async fn has_role(&self, user_id: Uuid, role: Role) -> Result<bool, RepoError>;
}

/// Check whether an identity holds any role granting `capability`.
pub async fn has_capability(
    directory: &dyn RoleDirectory,
    identity: &Identity,
    capability: Capability,
) -> Result<bool, RepoError> {
    for role in capability.granting_roles() {
        if directory.has_role(identity.user_id, role).await? {
            return Ok(true);
        }
    }
    Ok(false)
}
