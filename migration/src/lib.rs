pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users_table;
mod m20250301_000002_create_dealers_table;
mod m20250301_000003_create_orders_table;
mod m20250301_000004_create_cars_table;
mod m20250301_000005_create_user_favorite_car_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users_table::Migration),
            Box::new(m20250301_000002_create_dealers_table::Migration),
            Box::new(m20250301_000003_create_orders_table::Migration),
            Box::new(m20250301_000004_create_cars_table::Migration),
            Box::new(m20250301_000005_create_user_favorite_car_table::Migration),
        ]
    }
}
