//! Test doubles for the ports.

use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::domain::{Identity, Role, Tip, TipDraft, canonical_order};
use crate::error::RepoError;
use crate::ports::{AuthError, IdentityResolver, RoleDirectory, TipStore};
use crate::services::AdminCapability;

/// A tip posted on 2024-01-`day`.
pub fn tip_on(day: u32) -> Tip {
    let date = Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap();
    Tip::posted_at(format!("Tip {day}"), format!("Content {day}"), date)
}

/// Tips for the given days, in canonical order.
pub fn dated_tips(days: &[u32]) -> Vec<Tip> {
    let mut tips: Vec<Tip> = days.iter().copied().map(tip_on).collect();
    canonical_order(&mut tips);
    tips
}

pub fn admin_capability() -> AdminCapability {
    AdminCapability::grant(Identity::new(Uuid::new_v4()))
}

#[derive(Default)]
pub struct FakeTipStore {
    tips: Mutex<Vec<Tip>>,
    fail_queries: AtomicBool,
    fail_writes: AtomicBool,
    list_calls: AtomicUsize,
    write_calls: AtomicUsize,
}

impl FakeTipStore {
    pub fn with_tips(tips: Vec<Tip>) -> Self {
        Self {
            tips: Mutex::new(tips),
            ..Self::default()
        }
    }

    pub fn fail_queries(&self, fail: bool) {
        self.fail_queries.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn write_calls(&self) -> usize {
        self.write_calls.load(Ordering::SeqCst)
    }

    fn begin_write(&self) -> Result<(), RepoError> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RepoError::Write("injected".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl TipStore for FakeTipStore {
    async fn list_all(&self) -> Result<Vec<Tip>, RepoError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_queries.load(Ordering::SeqCst) {
            return Err(RepoError::Query("injected".into()));
        }
        let mut tips = self.tips.lock().unwrap().clone();
        canonical_order(&mut tips);
        Ok(tips)
    }

    async fn insert(&self, draft: TipDraft) -> Result<Tip, RepoError> {
        self.begin_write()?;
        let tip = Tip::new(draft.title, draft.content);
        self.tips.lock().unwrap().push(tip.clone());
        Ok(tip)
    }

    async fn update(&self, id: Uuid, draft: TipDraft) -> Result<(), RepoError> {
        self.begin_write()?;
        let mut tips = self.tips.lock().unwrap();
        let tip = tips.iter_mut().find(|t| t.id == id).ok_or(RepoError::NotFound)?;
        tip.title = draft.title;
        tip.content = draft.content;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.begin_write()?;
        let mut tips = self.tips.lock().unwrap();
        let before = tips.len();
        tips.retain(|t| t.id != id);
        if tips.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeRoleDirectory {
    admins: HashSet<Uuid>,
    failing: bool,
}

impl FakeRoleDirectory {
    pub fn admins(ids: &[Uuid]) -> Self {
        Self {
            admins: ids.iter().copied().collect(),
            failing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            admins: HashSet::new(),
            failing: true,
        }
    }
}

#[async_trait]
impl RoleDirectory for FakeRoleDirectory {
    async fn has_role(&self, user_id: Uuid, role: Role) -> Result<bool, RepoError> {
        if self.failing {
            return Err(RepoError::Query("injected".into()));
        }
        Ok(role == Role::Admin && self.admins.contains(&user_id))
    }
}

pub struct FakeResolver {
    user: Option<Uuid>,
}

impl FakeResolver {
    pub fn user(id: Uuid) -> Self {
        Self { user: Some(id) }
    }

    pub fn failing() -> Self {
        Self { user: None }
    }
}

#[async_trait]
impl IdentityResolver for FakeResolver {
    async fn resolve(&self, credentials: Option<&str>) -> Result<Identity, AuthError> {
        if credentials.is_none() {
            return Err(AuthError::MissingAuth);
        }
        self.user
            .map(Identity::new)
            .ok_or_else(|| AuthError::Backend("injected".into()))
    }
}
