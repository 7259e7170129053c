//! In-memory tip store.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use tipline_core::domain::{Tip, TipDraft, canonical_order};
use tipline_core::error::RepoError;
use tipline_core::ports::TipStore;

/// Tip store backed by a `Vec` behind an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryTipStore {
    tips: RwLock<Vec<Tip>>,
}

impl InMemoryTipStore {
    pub fn new() -> Self {
        Self::with_tips(Vec::new())
    }

    /// Seed the store, e.g. with fixtures.
    pub fn with_tips(tips: Vec<Tip>) -> Self {
        Self {
            tips: RwLock::new(tips),
        }
    }
}

impl Default for InMemoryTipStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TipStore for InMemoryTipStore {
    async fn list_all(&self) -> Result<Vec<Tip>, RepoError> {
        let mut tips = self.tips.read().await.clone();
        canonical_order(&mut tips);
        Ok(tips)
    }

    async fn insert(&self, draft: TipDraft) -> Result<Tip, RepoError> {
        let tip = Tip::new(draft.title, draft.content);
        self.tips.write().await.push(tip.clone());
        tracing::debug!(tip_id = %tip.id, "Inserted tip");
        Ok(tip)
    }

    async fn update(&self, id: Uuid, draft: TipDraft) -> Result<(), RepoError> {
        let mut tips = self.tips.write().await;
        let tip = tips
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(RepoError::NotFound)?;
        tip.title = draft.title;
        tip.content = draft.content;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut tips = self.tips.write().await;
        let index = tips
            .iter()
            .position(|t| t.id == id)
            .ok_or(RepoError::NotFound)?;
        tips.remove(index);
        Ok(())
    }
}
