//! Schema migrations for the `tips` and `user_roles` tables.

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_tips;
mod m20240101_000002_create_user_roles;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_tips::Migration),
            Box::new(m20240101_000002_create_user_roles::Migration),
        ]
    }
}
