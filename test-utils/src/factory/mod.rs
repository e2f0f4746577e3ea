//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` convenience
//! function for quick default creation. Factories only insert rows; they never create the
//! rows an entity depends on, so pass the ids of a dealer or user created beforehand.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let dealer = factory::create_dealer(&db).await?;
//! let car = factory::create_car(&db, dealer.id).await?;
//! let user = factory::create_user(&db).await?;
//! let order = factory::create_order(&db, user.id, &[car]).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let car = factory::car::CarFactory::new(&db, dealer.id)
//!     .brand("Honda")
//!     .year(2015)
//!     .build()
//!     .await?;
//! ```

pub mod car;
pub mod dealer;
pub mod favorite;
pub mod helpers;
pub mod order;
pub mod user;

pub use car::create_car;
pub use dealer::create_dealer;
pub use favorite::create_favorite;
pub use order::create_order;
pub use user::create_user;
