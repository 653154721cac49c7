//! The repository traits and the country read capability.
//!
//! The repository traits are implemented by storage backends (e.g.
//! `roster-store-memory`). The directory services depend on these
//! abstractions, never on a concrete backend.
//!
//! All methods return `Send` futures so the traits can be used in
//! multi-threaded async runtimes.

use std::future::Future;

use uuid::Uuid;

use crate::{
  country::{Country, CountryResponse},
  error::Error,
  person::Person,
};

// ─── Repositories ────────────────────────────────────────────────────────────

/// Abstraction over the country collection.
pub trait CountriesRepository: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist `country` (id already assigned) and return the stored row.
  fn add_country(
    &self,
    country: Country,
  ) -> impl Future<Output = Result<Country, Self::Error>> + Send + '_;

  /// All countries, in insertion order.
  fn get_all_countries(
    &self,
  ) -> impl Future<Output = Result<Vec<Country>, Self::Error>> + Send + '_;

  /// Retrieve a country by id. Returns `None` if not found.
  fn get_country_by_country_id(
    &self,
    country_id: Uuid,
  ) -> impl Future<Output = Result<Option<Country>, Self::Error>> + Send + '_;

  /// Retrieve a country by exact name (case-sensitive). Returns `None` if
  /// not found.
  fn get_country_by_country_name<'a>(
    &'a self,
    country_name: &'a str,
  ) -> impl Future<Output = Result<Option<Country>, Self::Error>> + Send + 'a;
}

/// Abstraction over the person collection.
pub trait PersonsRepository: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist `person` (id already assigned) and return the stored row.
  fn add_person(
    &self,
    person: Person,
  ) -> impl Future<Output = Result<Person, Self::Error>> + Send + '_;

  /// All persons, in insertion order.
  fn get_all_persons(
    &self,
  ) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + '_;

  /// Retrieve a person by id. Returns `None` if not found.
  fn get_person_by_person_id(
    &self,
    person_id: Uuid,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + '_;

  /// Replace the stored row matched on `person.person_id` and return it.
  ///
  /// An unknown id is an error, never an insert.
  fn update_person(
    &self,
    person: Person,
  ) -> impl Future<Output = Result<Person, Self::Error>> + Send + '_;

  /// Remove one person. Returns `false` if the id matched nothing.
  fn delete_person_by_person_id(
    &self,
    person_id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}

// ─── Read capability ─────────────────────────────────────────────────────────

/// The narrow, read-only view of the country directory that the person
/// directory holds for response enrichment. The handle is injected at
/// construction; the person service never builds a country service itself.
pub trait CountryLookup: Send + Sync {
  /// Resolve a (possibly absent) country reference. `Ok(None)` covers both
  /// a missing id and an id that matches nothing; dangling references are
  /// lenient on read.
  fn get_country_by_country_id(
    &self,
    country_id: Option<Uuid>,
  ) -> impl Future<Output = Result<Option<CountryResponse>, Error>> + Send + '_;
}
