//! Error types for `roster-core`.
//!
//! One taxonomy covers both directory services. Callers can rely on the
//! variant to pick a response: `MissingRequest` and `InvalidField` are
//! caller mistakes, `DuplicateCountryName` is a conflict, `PersonNotFound`
//! means the target row vanished, and `Store` wraps a backend failure.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  /// A required request object or id argument was not supplied.
  #[error("required request was not supplied")]
  MissingRequest,

  /// A request field violated a validation rule. Carries the first
  /// violated rule only; the validation pass itself reports all of them.
  #[error("invalid {field}: {message}")]
  InvalidField {
    field:   &'static str,
    message: &'static str,
  },

  /// A country with exactly this name already exists (case-sensitive).
  #[error("country name {0:?} already exists")]
  DuplicateCountryName(String),

  /// An update targeted a person id that is not in the store.
  #[error("person not found: {0}")]
  PersonNotFound(Uuid),

  /// The persistence collaborator failed.
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
