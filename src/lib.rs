//! Storage and layout engine for the MoodTree journal.
//!
//! Entries are stored by [`services::EntryStore`]; the pure functions in
//! [`services::growth`], [`services::ranking`] and [`services::layout`] turn a
//! loaded collection into a render-ready belief tree.

#[cfg(feature = "desktop")]
pub mod commands;
pub mod database;
pub mod models;
pub mod services;
#[cfg(feature = "desktop")]
pub mod state;
pub mod utils;

pub use services::EntryStore;
pub use utils::error::{StoreError, StoreResult};
