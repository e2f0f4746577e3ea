//! HTTP request handlers.
//!
//! Controllers parse path, query and body input, convert DTOs into service parameters,
//! call a service, and convert the resulting domain model back into a DTO. They hold no
//! business rules. Every handler carries a `#[utoipa::path]` annotation collected by
//! `router::ApiDoc`.

pub mod car;
pub mod dealer;
pub mod health;
pub mod order;
pub mod user;

#[cfg(test)]
mod test;
