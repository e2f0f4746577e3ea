use sea_orm_migration::{prelude::*, schema::*};

use super::{m20250301_000001_create_users_table::Users, m20250301_000004_create_cars_table::Cars};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserFavoriteCar::Table)
                    .if_not_exists()
                    .col(integer(UserFavoriteCar::UserId))
                    .col(integer(UserFavoriteCar::CarId))
                    .primary_key(
                        Index::create()
                            .col(UserFavoriteCar::UserId)
                            .col(UserFavoriteCar::CarId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_favorite_car_user_id")
                            .from(UserFavoriteCar::Table, UserFavoriteCar::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_favorite_car_car_id")
                            .from(UserFavoriteCar::Table, UserFavoriteCar::CarId)
                            .to(Cars::Table, Cars::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserFavoriteCar::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserFavoriteCar {
    Table,
    UserId,
    CarId,
}
