use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000002_create_dealers_table::Dealers, m20250301_000003_create_orders_table::Orders,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cars::Table)
                    .if_not_exists()
                    .col(pk_auto(Cars::Id))
                    .col(string_uniq(Cars::Vin))
                    .col(string(Cars::Model))
                    .col(string(Cars::Brand))
                    .col(integer(Cars::Year))
                    .col(double(Cars::Price))
                    .col(string(Cars::Color))
                    .col(double(Cars::Mileage))
                    .col(integer(Cars::DealerId))
                    .col(integer_null(Cars::OrderId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cars_dealer_id")
                            .from(Cars::Table, Cars::DealerId)
                            .to(Dealers::Table, Dealers::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cars_order_id")
                            .from(Cars::Table, Cars::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Brand lookups filter on the lowercased brand of every car
        manager
            .create_index(
                Index::create()
                    .name("idx_cars_brand")
                    .table(Cars::Table)
                    .col(Cars::Brand)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cars::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Cars {
    Table,
    Id,
    Vin,
    Model,
    Brand,
    Year,
    Price,
    Color,
    Mileage,
    DealerId,
    OrderId,
}
