//! SeaORM entity definitions for the car dealership schema.

pub mod prelude;

pub mod car;
pub mod dealer;
pub mod order;
pub mod user;
pub mod user_favorite_car;
