//! Admin authorization gate.
//!
//! ```text
//! Resolving ──► Authorized(capability)
//!          ├──► Denied
//!          └──► Unauthenticated
//! ```
//!
//! Lookup failures of the identity provider or the role directory resolve to
//! `Denied`, never to `Authorized`.

use std::sync::Arc;

use crate::domain::{Capability, Identity};
use crate::error::DomainError;
use crate::ports::{IdentityResolver, RoleDirectory, has_capability};

/// Proof that the holder passed the gate. Only [`AdminGate`] can mint one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCapability {
    identity: Identity,
}

impl AdminCapability {
    pub(crate) fn grant(identity: Identity) -> Self {
        Self { identity }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }
}

/// Outcome of an admin-view entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessState {
    Resolving,
    Authorized(AdminCapability),
    Denied,
    Unauthenticated,
}

impl AccessState {
    pub fn capability(&self) -> Option<&AdminCapability> {
        match self {
            AccessState::Authorized(cap) => Some(cap),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, AccessState::Resolving)
    }

    /// Convert into the capability or the authorization error for the caller.
    pub fn into_result(self) -> Result<AdminCapability, DomainError> {
        match self {
            AccessState::Authorized(cap) => Ok(cap),
            AccessState::Unauthenticated => Err(DomainError::Unauthenticated),
            AccessState::Denied | AccessState::Resolving => Err(DomainError::Denied),
        }
    }
}

/// Resolves identity and role membership for admin views.
pub struct AdminGate {
    identities: Arc<dyn IdentityResolver>,
    roles: Arc<dyn RoleDirectory>,
}

impl AdminGate {
    pub fn new(identities: Arc<dyn IdentityResolver>, roles: Arc<dyn RoleDirectory>) -> Self {
        Self { identities, roles }
    }

    /// Run the gate once for the given credentials.
    pub async fn evaluate(&self, credentials: Option<&str>) -> AccessState {
        let identity = match self.identities.resolve(credentials).await {
            Ok(identity) => identity,
            Err(e) if e.is_unauthenticated() => {
                tracing::debug!(error = %e, "No identity for admin view");
                return AccessState::Unauthenticated;
            }
            Err(e) => {
                tracing::error!(error = %e, "Identity lookup failed; denying admin access");
                return AccessState::Denied;
            }
        };

        match has_capability(self.roles.as_ref(), &identity, Capability::ManageTips).await {
            Ok(true) => {
                tracing::info!(user_id = %identity.user_id, "Admin access granted");
                AccessState::Authorized(AdminCapability::grant(identity))
            }
            Ok(false) => {
                tracing::warn!(user_id = %identity.user_id, "Admin access denied");
                AccessState::Denied
            }
            Err(e) => {
                tracing::error!(
                    user_id = %identity.user_id,
                    error = %e,
                    "Role lookup failed; denying admin access"
                );
                AccessState::Denied
            }
        }
    }
}

/// Per-view gate state, evaluated once on entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    state: AccessState,
}

impl AdminSession {
    pub fn new() -> Self {
        Self {
            state: AccessState::Resolving,
        }
    }

    /// Leave `Resolving`. Later calls keep the first outcome.
    pub async fn resolve(&mut self, gate: &AdminGate, credentials: Option<&str>) -> &AccessState {
        if !self.state.is_terminal() {
            self.state = gate.evaluate(credentials).await;
        }
        &self.state
    }

    pub fn state(&self) -> &AccessState {
        &self.state
    }
}

impl Default for AdminSession {
    fn default() -> Self {
        Self::new()
    }
}
