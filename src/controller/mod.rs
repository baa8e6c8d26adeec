//! HTTP request handlers.
//!
//! Each handler follows the same shape: resolve the authenticated user through
//! `AuthGuard` (where the route requires it), validate the request DTO, call
//! the service, and convert the result into a response.

pub mod auth;
pub mod car;
pub mod customer;
pub mod location;
pub mod message;
pub mod order;
