//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They run the business rules
//! from `server::validation`, check uniqueness and referential constraints, keep both sides
//! of every relationship consistent through `association`, and assemble domain models.
//!
//! Every mutating operation runs inside one database transaction. Repositories are handed
//! the transaction, so a failure anywhere in the operation rolls back all of its writes.

pub mod association;
pub mod car;
pub mod dealer;
pub mod order;
pub mod user;

#[cfg(test)]
mod test;
