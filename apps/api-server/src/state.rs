//! Application state - shared across all handlers.

use std::sync::Arc;

use tipline_core::ports::{IdentityResolver, RoleDirectory, TipStore};
use tipline_core::services::{AdminGate, TipService};
use tipline_infra::{InMemoryRoleDirectory, InMemoryTipStore, JwtIdentityResolver};

#[cfg(feature = "postgres")]
use tipline_infra::{DatabaseConnections, PostgresRoleDirectory, PostgresTipStore};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TipStore>,
    pub page_size: usize,
    pub tips: Arc<TipService>,
    pub gate: Arc<AdminGate>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let (store, roles) = Self::adapters(config).await;
        let identities: Arc<dyn IdentityResolver> =
            Arc::new(JwtIdentityResolver::new(config.jwt.clone()));

        tracing::info!(page_size = config.page_size, "Application state initialized");
        Self::from_parts(store, roles, identities, config.page_size)
    }

    /// Wire the services around the given adapters.
    pub fn from_parts(
        store: Arc<dyn TipStore>,
        roles: Arc<dyn RoleDirectory>,
        identities: Arc<dyn IdentityResolver>,
        page_size: usize,
    ) -> Self {
        Self {
            tips: Arc::new(TipService::new(store.clone())),
            gate: Arc::new(AdminGate::new(identities, roles)),
            store,
            page_size,
        }
    }

    #[cfg(feature = "postgres")]
    async fn adapters(config: &AppConfig) -> (Arc<dyn TipStore>, Arc<dyn RoleDirectory>) {
        let Some(db_config) = config.database.as_ref() else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Self::in_memory(config);
        };

        match DatabaseConnections::init(db_config).await {
            Ok(connections) => (
                Arc::new(PostgresTipStore::new(connections.main.clone())),
                Arc::new(PostgresRoleDirectory::new(connections.main)),
            ),
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                Self::in_memory(config)
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn adapters(config: &AppConfig) -> (Arc<dyn TipStore>, Arc<dyn RoleDirectory>) {
        tracing::info!("Running without postgres feature - using in-memory adapters");
        Self::in_memory(config)
    }

    fn in_memory(config: &AppConfig) -> (Arc<dyn TipStore>, Arc<dyn RoleDirectory>) {
        if config.admin_user_ids.is_empty() {
            tracing::warn!("ADMIN_USER_IDS not set; no one can reach the admin views");
        }
        (
            Arc::new(InMemoryTipStore::new()),
            Arc::new(InMemoryRoleDirectory::with_admins(
                config.admin_user_ids.iter().copied(),
            )),
        )
    }
}
