//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for
//! each domain in the application. Repositories use SeaORM entity models internally
//! and are the only layer that touches the database. The car and order repositories
//! are generic over the connection so the order/inventory coordinator can run them
//! inside a transaction.

pub mod car;
pub mod customer;
pub mod location;
pub mod message;
pub mod order;
pub mod role;
pub mod user;

#[cfg(test)]
mod test;
