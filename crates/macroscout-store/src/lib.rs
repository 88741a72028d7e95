#![forbid(unsafe_code)]
//! Shared result cache for the discovery screen.
//!
//! One item can be cached under three structurally distinct shapes at the
//! same time: the infinite-scroll page accumulation, a flat list, and a
//! detail record. The store keeps the shape set closed so a favorite patch
//! dispatches explicitly per shape instead of assuming one of them.
//!
//! The store is an injectable handle, never ambient state: the fetch
//! controller and the mutation engine both receive a clone and share the
//! underlying map.

mod key;
mod shape;
mod store;

pub use key::{CacheKey, CacheNamespace};
pub use shape::CachedResultSet;
pub use store::{CacheConfig, CacheSnapshot, CacheStore};

pub const CRATE_NAME: &str = "macroscout-store";
