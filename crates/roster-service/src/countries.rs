//! The country directory service.

use roster_core::{
  country::{Country, CountryAddRequest, CountryResponse},
  error::{Error, Result},
  store::{CountriesRepository, CountryLookup},
};
use uuid::Uuid;

/// Owns the country collection through its repository handle and enforces
/// the name-uniqueness invariant. Also implements [`CountryLookup`], the
/// read capability the person service consumes for enrichment.
///
/// Cloning is cheap whenever the repository handle is; clones share the
/// backing collection.
#[derive(Clone)]
pub struct CountriesService<R> {
  countries: R,
}

impl<R> CountriesService<R>
where
  R: CountriesRepository,
{
  pub fn new(countries: R) -> Self {
    Self { countries }
  }

  /// Store one country under a freshly assigned id and return its view.
  ///
  /// The duplicate check is an exact, case-sensitive name match. That is
  /// deliberately asymmetric with the case-insensitive person filters; see
  /// `duplicate_country_name_check_is_case_sensitive` in the tests.
  pub async fn add_country(
    &self,
    request: Option<CountryAddRequest>,
  ) -> Result<CountryResponse> {
    let request = request.ok_or(Error::MissingRequest)?;
    let Some(country_name) =
      request.country_name.filter(|name| !name.is_empty())
    else {
      return Err(Error::InvalidField {
        field:   "country_name",
        message: "is required and can't be blank",
      });
    };

    let existing = self
      .countries
      .get_country_by_country_name(&country_name)
      .await
      .map_err(|e| Error::Store(Box::new(e)))?;
    if existing.is_some() {
      return Err(Error::DuplicateCountryName(country_name));
    }

    let country = Country {
      country_id: Uuid::new_v4(),
      country_name,
    };
    let stored = self
      .countries
      .add_country(country)
      .await
      .map_err(|e| Error::Store(Box::new(e)))?;
    tracing::debug!(country_id = %stored.country_id, "country added");
    Ok(stored.into())
  }

  /// All countries as response views, in insertion order.
  pub async fn get_all_countries(&self) -> Result<Vec<CountryResponse>> {
    let countries = self
      .countries
      .get_all_countries()
      .await
      .map_err(|e| Error::Store(Box::new(e)))?;
    Ok(countries.into_iter().map(CountryResponse::from).collect())
  }

  /// Resolve a (possibly absent) country id. `Ok(None)` when no id was
  /// supplied or nothing matched.
  pub async fn get_country_by_country_id(
    &self,
    country_id: Option<Uuid>,
  ) -> Result<Option<CountryResponse>> {
    let Some(country_id) = country_id else {
      return Ok(None);
    };
    let country = self
      .countries
      .get_country_by_country_id(country_id)
      .await
      .map_err(|e| Error::Store(Box::new(e)))?;
    Ok(country.map(CountryResponse::from))
  }
}

impl<R> CountryLookup for CountriesService<R>
where
  R: CountriesRepository,
{
  async fn get_country_by_country_id(
    &self,
    country_id: Option<Uuid>,
  ) -> Result<Option<CountryResponse>> {
    CountriesService::get_country_by_country_id(self, country_id).await
  }
}
