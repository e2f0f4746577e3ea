use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Dealers::Table)
                    .if_not_exists()
                    .col(pk_auto(Dealers::Id))
                    .col(string_uniq(Dealers::Name))
                    .col(string_uniq(Dealers::Address))
                    .col(string_uniq(Dealers::PhoneNumber))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Dealers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Dealers {
    Table,
    Id,
    Name,
    Address,
    PhoneNumber,
}
