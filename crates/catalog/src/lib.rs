//! Filesystem-backed template catalog.
//!
//! The "database" of this system is a directory of JSON files, one per
//! template, written by an external content-generation pipeline. This crate
//! owns all filesystem access and exposes read-only query operations over
//! it; failures degrade to empty/`None` results rather than propagating
//! (a missing template is a 404 page, not an outage).

mod keywords;
mod store;

pub use keywords::load_keywords;
pub use store::TemplateStore;
