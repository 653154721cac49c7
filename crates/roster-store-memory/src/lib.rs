//! In-memory backend for the Roster person directory.
//!
//! The reference implementation of the repository traits: one id-indexed
//! map per collection with an insertion-order index, behind a
//! [`tokio::sync::RwLock`]. Cloning a store is cheap and clones share
//! state, so a store handle can be passed to each service that needs it.
//!
//! Also home of the sample dataset (see [`seed`]). Seeding is an explicit
//! constructor choice, never an implicit side effect of construction.

mod store;

pub mod error;
pub mod seed;

pub use error::{Error, Result};
pub use store::{MemoryCountryStore, MemoryPersonStore};
