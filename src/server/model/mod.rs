//! Server-side domain models and parameter types.
//!
//! Domain models are assembled from entity rows at the repository and service boundary and
//! turned into DTOs at the controller boundary. Parameter types carry already-parsed input
//! from controllers into services.

pub mod car;
pub mod dealer;
pub mod order;
pub mod user;
