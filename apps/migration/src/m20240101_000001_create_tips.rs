use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tips::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tips::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Tips::Title).string().not_null())
                    .col(ColumnDef::new(Tips::Content).text().not_null())
                    .col(
                        ColumnDef::new(Tips::DatePosted)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Canonical order is newest first.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_tips_date_posted")
                    .table(Tips::Table)
                    .col((Tips::DatePosted, IndexOrder::Desc))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tips::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Tips {
    Table,
    Id,
    Title,
    Content,
    DatePosted,
}
