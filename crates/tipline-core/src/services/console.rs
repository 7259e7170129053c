//! Admin console state: the tip form, modal editing and delete confirmation.

use uuid::Uuid;

use crate::domain::{Tip, TipDraft};
use crate::error::DomainError;

use super::crud::{DeletionRequest, TipService};
use super::gate::AdminCapability;

/// What a successful form submission did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(Tip),
    Updated(Uuid),
}

/// Form and mode state of one admin view.
///
/// At most one tip is being edited at a time. Failed submissions leave the
/// form and the editing mode untouched so the user can retry.
#[derive(Debug, Default)]
pub struct AdminConsole {
    form: TipDraft,
    editing: Option<Uuid>,
    pending_delete: Option<DeletionRequest>,
}

impl AdminConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &TipDraft {
        &self.form
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.form.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.form.content = content.into();
    }

    /// Id of the tip currently being edited, if any.
    pub fn editing(&self) -> Option<Uuid> {
        self.editing
    }

    pub fn pending_delete(&self) -> Option<Uuid> {
        self.pending_delete.map(|req| req.id())
    }

    /// Enter editing mode for `tip`, replacing any edit in progress.
    pub fn begin_edit(&mut self, tip: &Tip) {
        self.editing = Some(tip.id);
        self.form = TipDraft::from(tip);
    }

    /// Discard in-progress edits without touching the store.
    pub fn cancel_edit(&mut self) -> Result<(), DomainError> {
        if self.editing.take().is_none() {
            return Err(DomainError::NoEditInProgress);
        }
        self.form = TipDraft::default();
        Ok(())
    }

    /// Create or update depending on the editing mode.
    pub async fn submit(
        &mut self,
        service: &TipService,
        cap: &AdminCapability,
    ) -> Result<SubmitOutcome, DomainError> {
        let outcome = match self.editing {
            Some(id) => {
                service.update(cap, id, self.form.clone()).await?;
                SubmitOutcome::Updated(id)
            }
            None => SubmitOutcome::Created(service.create(cap, self.form.clone()).await?),
        };

        self.editing = None;
        self.form = TipDraft::default();
        Ok(outcome)
    }

    /// Stage a deletion. Nothing is removed until [`confirm_delete`](Self::confirm_delete).
    pub fn request_delete(&mut self, id: Uuid) {
        self.pending_delete = Some(DeletionRequest::new(id));
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Carry out the staged deletion.
    pub async fn confirm_delete(
        &mut self,
        service: &TipService,
        cap: &AdminCapability,
    ) -> Result<Uuid, DomainError> {
        let request = self
            .pending_delete
            .take()
            .ok_or(DomainError::ConfirmationRequired)?;
        let id = request.id();

        service.delete(cap, request.confirm()).await?;

        if self.editing == Some(id) {
            self.editing = None;
            self.form = TipDraft::default();
        }
        Ok(id)
    }
}
