//! Country, the small lookup entity person records reference by id.
//!
//! The person directory never embeds a country; it stores the id and
//! resolves the name live on every read, so a country rename is reflected
//! in person views immediately.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored country. `country_id` is assigned by the directory service at
/// creation and never changes. `country_name` is validated non-empty and is
/// unique across the store under exact, case-sensitive comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
  pub country_id:   Uuid,
  pub country_name: String,
}

/// Input to `add_country`. Ids are never accepted from callers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountryAddRequest {
  pub country_name: Option<String>,
}

/// The caller-facing view of a country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryResponse {
  pub country_id:   Uuid,
  pub country_name: String,
}

impl From<Country> for CountryResponse {
  fn from(country: Country) -> Self {
    Self {
      country_id:   country.country_id,
      country_name: country.country_name,
    }
  }
}
