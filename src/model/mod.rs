//! Request/response DTOs and operation parameter types.
//!
//! DTOs carry data across the HTTP boundary and use the API's wire vocabulary;
//! `*Params` structs carry validated data from the service layer into the
//! repositories.

pub mod api;
pub mod car;
pub mod customer;
pub mod location;
pub mod message;
pub mod order;
pub mod user;
