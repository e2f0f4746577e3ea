//! Database repository layer for all domain entities.
//!
//! Repositories wrap SeaORM queries for one table each and are generic over
//! `ConnectionTrait`, so services can hand them either the pool or an open transaction.
//! They return entity models; services assemble domain models from them.

pub mod car;
pub mod dealer;
pub mod favorite;
pub mod order;
pub mod user;

#[cfg(test)]
mod test;
