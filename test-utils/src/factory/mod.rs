//! Factories for creating test entities with sensible defaults.
//!
//! Each factory inserts a fully-populated row and lets tests override only the
//! fields they care about. `helpers` bundles common multi-entity setups.

pub mod car;
pub mod customer;
pub mod helpers;
pub mod location;
pub mod message;
pub mod order;
pub mod role;
pub mod user;
