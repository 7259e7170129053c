//! Reader view model: the canonical sequence a view is showing and its derived views.
//!
//! Every fetch goes through [`fetch_canonical`], directly or via
//! [`TipCatalog::reload`], so writes made by any process show up on the next
//! fetch. The catalog only carries per-view state: the sequence last shown,
//! the random pick and the page position.

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::RwLock;

use crate::domain::{Tip, canonical_order};
use crate::error::DomainError;
use crate::ports::TipStore;

use super::feed;
use super::pagination::{PageView, Paginator};

/// Catalog shared between an admin view and the CRUD service.
pub type SharedCatalog = Arc<RwLock<TipCatalog>>;

/// Read the whole collection from the store in canonical order.
pub async fn fetch_canonical(store: &dyn TipStore) -> Result<Vec<Tip>, DomainError> {
    let mut tips = store.list_all().await.map_err(|e| {
        tracing::warn!(error = %e, "Failed to fetch tips");
        DomainError::Query(e.to_string())
    })?;
    canonical_order(&mut tips);
    Ok(tips)
}

#[derive(Debug)]
pub struct TipCatalog {
    tips: Vec<Tip>,
    random: Option<Tip>,
    paginator: Paginator,
    rng: StdRng,
}

impl TipCatalog {
    /// An empty, not-yet-loaded catalog.
    pub fn new(page_size: usize) -> Self {
        Self::with_rng(page_size, StdRng::from_entropy())
    }

    /// Use a caller-supplied RNG for the random selection.
    pub fn with_rng(page_size: usize, rng: StdRng) -> Self {
        Self {
            tips: Vec::new(),
            random: None,
            paginator: Paginator::new(page_size),
            rng,
        }
    }

    pub fn shared(self) -> SharedCatalog {
        Arc::new(RwLock::new(self))
    }

    /// Replace the sequence with a fresh `list_all`.
    ///
    /// On failure the prior sequence and selections stay in place.
    pub async fn reload(&mut self, store: &dyn TipStore) -> Result<(), DomainError> {
        let tips = fetch_canonical(store).await?;

        tracing::debug!(count = tips.len(), "Tip catalog reloaded");
        self.tips = tips;
        self.paginator.reset();
        self.shuffle();
        Ok(())
    }

    pub fn tips(&self) -> &[Tip] {
        &self.tips
    }

    pub fn find(&self, id: uuid::Uuid) -> Option<&Tip> {
        self.tips.iter().find(|t| t.id == id)
    }

    pub fn today(&self) -> Option<&Tip> {
        feed::today(&self.tips)
    }

    /// The random tip drawn at the last reload or shuffle.
    pub fn random(&self) -> Option<&Tip> {
        self.random.as_ref()
    }

    /// Draw a new random tip. The previous one may come up again.
    pub fn shuffle(&mut self) -> Option<&Tip> {
        self.random = feed::random(&self.tips, &mut self.rng).cloned();
        self.random.as_ref()
    }

    pub fn current_page(&self) -> PageView<'_, Tip> {
        self.paginator.view(&self.tips)
    }

    pub fn next_page(&mut self) -> bool {
        self.paginator.next(self.tips.len())
    }

    pub fn previous_page(&mut self) -> bool {
        self.paginator.previous()
    }
}
