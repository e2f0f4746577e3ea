//! Cardealer Test Utils
//!
//! Shared testing utilities for the cardealer backend. Provides a builder for test contexts
//! backed by an in-memory SQLite database along with factories for inserting dealers, cars,
//! users, orders and favorites with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_dealer_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_dealership_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
