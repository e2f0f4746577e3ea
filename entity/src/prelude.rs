pub use super::car::Entity as Car;
pub use super::dealer::Entity as Dealer;
pub use super::order::Entity as Order;
pub use super::user::Entity as User;
pub use super::user_favorite_car::Entity as UserFavoriteCar;
