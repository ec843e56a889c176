//! Pure domain logic for the sheetstack template catalog.
//!
//! This crate has no internal dependencies and performs no I/O, so it can be
//! used by the catalog loader, the API layer, and any future CLI tooling.

pub mod category;
pub mod error;
pub mod filter;
pub mod keyword;
pub mod metrics;
pub mod slug;
pub mod stats;
pub mod template;
