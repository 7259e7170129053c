use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Tip entity - a single published unit of advice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// Defines canonical ordering and recency. Never altered by updates.
    pub date_posted: DateTime<Utc>,
}

impl Tip {
    /// Create a new tip posted now.
    pub fn new(title: String, content: String) -> Self {
        Self::posted_at(title, content, Utc::now())
    }

    /// Create a new tip with an explicit post timestamp.
    pub fn posted_at(title: String, content: String, date_posted: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            date_posted,
        }
    }

    /// Ordering of the canonical sequence: newest first, then by id.
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        other
            .date_posted
            .cmp(&self.date_posted)
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// Sort tips into the canonical sequence.
///
/// Tips sharing a `date_posted` are ordered by ascending `id`, which keeps the
/// order stable across reloads regardless of which backend produced them.
pub fn canonical_order(tips: &mut [Tip]) {
    tips.sort_by(Tip::canonical_cmp);
}

/// The editable fields of a tip, as submitted from the admin form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipDraft {
    pub title: String,
    pub content: String,
}

impl TipDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Reject drafts with a blank title or content.
    pub fn validate(&self) -> Result<(), DomainError> {
        let missing: Vec<&str> = [("title", &self.title), ("content", &self.content)]
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(format!(
                "{} must not be empty",
                missing.join(" and ")
            )))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.content.is_empty()
    }
}

impl From<&Tip> for TipDraft {
    fn from(tip: &Tip) -> Self {
        Self {
            title: tip.title.clone(),
            content: tip.content.clone(),
        }
    }
}
