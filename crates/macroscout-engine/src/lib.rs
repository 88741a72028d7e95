#![forbid(unsafe_code)]
//! Async half of the discovery screen: drives incremental page retrieval
//! against the search collaborator and applies optimistic, rollback-capable
//! favorite toggles across every cached result shape.
//!
//! The model is cooperative and event-driven. The only suspension points
//! are the two backend awaits (a search page, a toggle submit); all cache
//! access in between runs to completion under a short-lived lock that is
//! never held across an await.

mod backend;
mod detail;
mod error;
mod favorite;
mod fetch;
mod query_hash;

pub use backend::{BackendError, BackendErrorCode, CatalogBackend};
pub use detail::DetailLoader;
pub use error::{EngineError, EngineErrorCode};
pub use favorite::{FavoriteMutator, ToggleOutcome, ToggleRequest};
pub use fetch::{
    FetchConfig, FetchController, FetchOutcome, FetchPhase, FULL_LIST_PAGE_SIZE, SCROLL_PAGE_SIZE,
};
pub use query_hash::query_tuple_hash;

pub const CRATE_NAME: &str = "macroscout-engine";
