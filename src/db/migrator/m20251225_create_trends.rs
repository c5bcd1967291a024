use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trends::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Trends::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Trends::Date).string().not_null())
                    .col(ColumnDef::new(Trends::Slot).integer().not_null())
                    .col(ColumnDef::new(Trends::RawResponse).text().not_null())
                    .col(ColumnDef::new(Trends::FetchedAt).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_trends_date_slot")
                    .table(Trends::Table)
                    .if_not_exists()
                    .col(Trends::Date)
                    .col(Trends::Slot)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trends::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Trends {
    Table,
    Id,
    Date,
    Slot,
    RawResponse,
    FetchedAt,
}
