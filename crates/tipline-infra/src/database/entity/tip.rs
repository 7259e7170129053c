//! Tip entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tips")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub date_posted: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Tip.
impl From<Model> for tipline_core::domain::Tip {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            date_posted: model.date_posted.into(),
        }
    }
}

/// Conversion from Domain Tip to SeaORM ActiveModel.
impl From<tipline_core::domain::Tip> for ActiveModel {
    fn from(tip: tipline_core::domain::Tip) -> Self {
        Self {
            id: Set(tip.id),
            title: Set(tip.title),
            content: Set(tip.content),
            date_posted: Set(tip.date_posted.into()),
        }
    }
}
