//! Directory services for Roster.
//!
//! The decision logic of the system lives here: validation-guarded
//! mutation, country-name uniqueness, field-driven filter and sort
//! dispatch, and read-time response enrichment. Both services are generic
//! over the repository traits in [`roster_core::store`]; storage engines,
//! transport, and bootstrap are the caller's responsibility.

pub mod countries;
pub mod persons;
pub mod query;

pub use countries::CountriesService;
pub use persons::PersonsService;
pub use query::{SearchField, SortField, SortOrder};
