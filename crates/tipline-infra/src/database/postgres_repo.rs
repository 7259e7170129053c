//! PostgreSQL adapters for the tip store and role directory.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbConn, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use tipline_core::domain::{Role, Tip, TipDraft};
use tipline_core::error::RepoError;
use tipline_core::ports::{RoleDirectory, TipStore};

use super::entity::tip::{self, Entity as TipEntity};
use super::entity::user_role::{self, Entity as UserRoleEntity};

/// PostgreSQL tip store.
pub struct PostgresTipStore {
    db: DbConn,
}

impl PostgresTipStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TipStore for PostgresTipStore {
    async fn list_all(&self) -> Result<Vec<Tip>, RepoError> {
        let result = TipEntity::find()
            .order_by_desc(tip::Column::DatePosted)
            .order_by_asc(tip::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, draft: TipDraft) -> Result<Tip, RepoError> {
        let active_model: tip::ActiveModel = Tip::new(draft.title, draft.content).into();
        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| RepoError::Write(e.to_string()))?;

        tracing::debug!(tip_id = %model.id, "Inserted tip");
        Ok(model.into())
    }

    async fn update(&self, id: Uuid, draft: TipDraft) -> Result<(), RepoError> {
        let result = TipEntity::update_many()
            .col_expr(tip::Column::Title, Expr::value(draft.title))
            .col_expr(tip::Column::Content, Expr::value(draft.content))
            .filter(tip::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Write(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = TipEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Write(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

/// PostgreSQL role directory over the `user_roles` table.
pub struct PostgresRoleDirectory {
    db: DbConn,
}

impl PostgresRoleDirectory {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoleDirectory for PostgresRoleDirectory {
    async fn has_role(&self, user_id: Uuid, role: Role) -> Result<bool, RepoError> {
        tracing::debug!(%user_id, role = %role, "Checking role membership");

        let membership = UserRoleEntity::find()
            .filter(user_role::Column::UserId.eq(user_id))
            .filter(user_role::Column::Role.eq(role.as_str()))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(membership.is_some())
    }
}
