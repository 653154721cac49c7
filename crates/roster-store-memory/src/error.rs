//! Error type for `roster-store-memory`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// An update targeted a row that is not in the store.
  #[error("person not found: {0}")]
  PersonNotFound(uuid::Uuid),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
