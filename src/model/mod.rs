//! Wire-level transfer objects shared by the HTTP layer.
//!
//! Every DTO serializes in camelCase. Request bodies derive `Validate` so the
//! `ValidatedJson` extractor can reject malformed input before it reaches a service.

pub mod api;
pub mod car;
pub mod dealer;
pub mod order;
pub mod user;
