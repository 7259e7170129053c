//! Tip CRUD service.
//!
//! Mutations require an [`AdminCapability`]. When a view's catalog is attached
//! it is reloaded in full after every successful mutation so today's tip, the
//! random tip and pagination all reflect the change. Readers without an
//! attached catalog see the change on their next fetch.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Tip, TipDraft};
use crate::error::{DomainError, RepoError};
use crate::ports::TipStore;

use super::catalog::SharedCatalog;
use super::gate::AdminCapability;

const ENTITY: &str = "Tip";

/// A deletion awaiting explicit confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletionRequest {
    id: Uuid,
}

impl DeletionRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The user affirmatively confirmed the deletion.
    pub fn confirm(self) -> ConfirmedDeletion {
        ConfirmedDeletion { id: self.id }
    }
}

/// A deletion the user has confirmed. Only obtainable via [`DeletionRequest::confirm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmedDeletion {
    id: Uuid,
}

impl ConfirmedDeletion {
    pub fn id(&self) -> Uuid {
        self.id
    }
}

pub struct TipService {
    store: Arc<dyn TipStore>,
    catalog: Option<SharedCatalog>,
}

impl TipService {
    pub fn new(store: Arc<dyn TipStore>) -> Self {
        Self {
            store,
            catalog: None,
        }
    }

    /// Attach a view's catalog to be reloaded after each mutation.
    pub fn with_catalog(mut self, catalog: SharedCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn catalog(&self) -> Option<&SharedCatalog> {
        self.catalog.as_ref()
    }

    pub fn store(&self) -> &Arc<dyn TipStore> {
        &self.store
    }

    /// Create a tip from a validated draft.
    pub async fn create(&self, cap: &AdminCapability, draft: TipDraft) -> Result<Tip, DomainError> {
        draft.validate()?;

        let tip = self.store.insert(draft).await.map_err(|e| {
            tracing::error!(user_id = %cap.identity().user_id, error = %e, "Failed to create tip");
            DomainError::Write(e.to_string())
        })?;

        tracing::info!(tip_id = %tip.id, user_id = %cap.identity().user_id, "Tip created");
        self.refresh().await;
        Ok(tip)
    }

    /// Replace a tip's title and content.
    pub async fn update(
        &self,
        cap: &AdminCapability,
        id: Uuid,
        draft: TipDraft,
    ) -> Result<(), DomainError> {
        draft.validate()?;

        if let Err(e) = self.store.update(id, draft).await {
            return Err(self.mutation_failed(cap, id, "update", e).await);
        }

        tracing::info!(tip_id = %id, user_id = %cap.identity().user_id, "Tip updated");
        self.refresh().await;
        Ok(())
    }

    /// Delete a tip. Not retried on failure.
    pub async fn delete(
        &self,
        cap: &AdminCapability,
        deletion: ConfirmedDeletion,
    ) -> Result<(), DomainError> {
        let id = deletion.id();

        if let Err(e) = self.store.delete(id).await {
            return Err(self.mutation_failed(cap, id, "delete", e).await);
        }

        tracing::info!(tip_id = %id, user_id = %cap.identity().user_id, "Tip deleted");
        self.refresh().await;
        Ok(())
    }

    /// Reload the attached catalog, if any. A failed reload keeps the prior view.
    async fn refresh(&self) {
        let Some(catalog) = &self.catalog else {
            return;
        };
        if let Err(e) = catalog.write().await.reload(self.store.as_ref()).await {
            tracing::warn!(error = %e, "Catalog refresh after mutation failed");
        }
    }

    async fn mutation_failed(
        &self,
        cap: &AdminCapability,
        id: Uuid,
        action: &'static str,
        err: RepoError,
    ) -> DomainError {
        tracing::error!(
            tip_id = %id,
            user_id = %cap.identity().user_id,
            error = %err,
            "Failed to {action} tip"
        );

        // The target vanished underneath us: reconcile the list before reporting.
        if matches!(err, RepoError::NotFound) {
            self.refresh().await;
        }
        err.into_domain(ENTITY, id)
    }
}
