//! HTTP surface of the sheetstack template catalog.
//!
//! Public library interface so integration tests can build the exact same
//! router and middleware stack as the production binary.

pub mod config;
pub mod error;
pub mod middleware;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
