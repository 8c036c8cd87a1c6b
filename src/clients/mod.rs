//! Type-safe handles for talking to the catalog actor.

pub mod catalog_client;

pub use catalog_client::*;
