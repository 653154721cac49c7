//! The person directory service.

use chrono::Utc;
use roster_core::{
  error::{Error, Result},
  person::{Person, PersonAddRequest, PersonResponse, PersonUpdateRequest},
  store::{CountryLookup, PersonsRepository},
  validate,
};
use uuid::Uuid;

use crate::query::{self, SortOrder};

/// Owns the person collection through its repository handle and holds a
/// read-only country lookup for enrichment. The lookup is injected at
/// construction, never built here, so the wiring stays the caller's choice.
///
/// Cloning is cheap whenever both handles are; clones share the backing
/// collections.
#[derive(Clone)]
pub struct PersonsService<P, C> {
  persons:   P,
  countries: C,
}

impl<P, C> PersonsService<P, C>
where
  P: PersonsRepository,
  C: CountryLookup,
{
  pub fn new(persons: P, countries: C) -> Self {
    Self { persons, countries }
  }

  /// The shared enrichment step: resolve the live country name and derive
  /// the age as of today. Recomputed on every read, never persisted, so a
  /// country rename or a passed birthday shows up immediately.
  async fn to_person_response(&self, person: Person) -> Result<PersonResponse> {
    let country = self
      .countries
      .get_country_by_country_id(person.country_id)
      .await?;
    let country_name = country.map(|c| c.country_name);
    Ok(PersonResponse::from_person(
      person,
      country_name,
      Utc::now().date_naive(),
    ))
  }

  /// Validate, store under a freshly assigned id, and return the enriched
  /// view.
  pub async fn add_person(
    &self,
    request: Option<PersonAddRequest>,
  ) -> Result<PersonResponse> {
    let request = request.ok_or(Error::MissingRequest)?;
    let violations = validate::validate_person_add(&request);
    if let Some(violation) = violations.first() {
      return Err((*violation).into());
    }

    let person = request.into_person(Uuid::new_v4());
    let stored = self
      .persons
      .add_person(person)
      .await
      .map_err(|e| Error::Store(Box::new(e)))?;
    tracing::debug!(person_id = %stored.person_id, "person added");
    self.to_person_response(stored).await
  }

  /// All persons as enriched views, in insertion order.
  pub async fn get_all_persons(&self) -> Result<Vec<PersonResponse>> {
    let persons = self
      .persons
      .get_all_persons()
      .await
      .map_err(|e| Error::Store(Box::new(e)))?;
    let mut responses = Vec::with_capacity(persons.len());
    for person in persons {
      responses.push(self.to_person_response(person).await?);
    }
    Ok(responses)
  }

  /// Retrieve one person. `Ok(None)` when no id was supplied or nothing
  /// matched; neither case is an error.
  pub async fn get_person_by_person_id(
    &self,
    person_id: Option<Uuid>,
  ) -> Result<Option<PersonResponse>> {
    let Some(person_id) = person_id else {
      return Ok(None);
    };
    let Some(person) = self
      .persons
      .get_person_by_person_id(person_id)
      .await
      .map_err(|e| Error::Store(Box::new(e)))?
    else {
      return Ok(None);
    };
    Ok(Some(self.to_person_response(person).await?))
  }

  /// Case-insensitive substring filter over the field named by `search_by`.
  ///
  /// Identity behaviours, part of the published contract: an empty
  /// `search_by` or `search_text` returns the full list, and so does an
  /// unrecognised field name (logged, not an error). Records whose target
  /// field is absent or empty always match, so partially-populated rows
  /// never vanish from filtered views.
  pub async fn get_filtered_persons(
    &self,
    search_by: &str,
    search_text: &str,
  ) -> Result<Vec<PersonResponse>> {
    let all = self.get_all_persons().await?;
    if search_by.is_empty() || search_text.is_empty() {
      return Ok(all);
    }
    let Some(field) = query::parse_search_field(search_by) else {
      return Ok(all);
    };

    Ok(
      all
        .into_iter()
        .filter(|person| field.matches(person, search_text))
        .collect(),
    )
  }

  /// Stable sort of `persons` by the field named by `sort_by`.
  ///
  /// An empty or unrecognised `sort_by` returns the input unchanged
  /// (logged, not an error). String fields compare case-insensitively and
  /// absent values order before present ones ascending. Purely in-memory;
  /// callers feed it the output of one of the read operations.
  pub fn get_sorted_persons(
    &self,
    persons: Vec<PersonResponse>,
    sort_by: &str,
    sort_order: SortOrder,
  ) -> Vec<PersonResponse> {
    if sort_by.is_empty() {
      return persons;
    }
    let Some(field) = query::parse_sort_field(sort_by) else {
      return persons;
    };
    query::sort_persons(persons, field, sort_order)
  }

  /// Validate and overwrite every mutable field of an existing person,
  /// returning the enriched view of the new state. The id never changes.
  pub async fn update_person(
    &self,
    request: Option<PersonUpdateRequest>,
  ) -> Result<PersonResponse> {
    let request = request.ok_or(Error::MissingRequest)?;
    let violations = validate::validate_person_update(&request);
    if let Some(violation) = violations.first() {
      return Err((*violation).into());
    }

    let mut person = self
      .persons
      .get_person_by_person_id(request.person_id)
      .await
      .map_err(|e| Error::Store(Box::new(e)))?
      .ok_or(Error::PersonNotFound(request.person_id))?;

    person.person_name = request.person_name;
    person.email = request.email;
    person.date_of_birth = request.date_of_birth;
    person.gender = request.gender;
    person.country_id = request.country_id;
    person.address = request.address;
    person.receive_newsletters = request.receive_newsletters;

    let stored = self
      .persons
      .update_person(person)
      .await
      .map_err(|e| Error::Store(Box::new(e)))?;
    tracing::debug!(person_id = %stored.person_id, "person updated");
    self.to_person_response(stored).await
  }

  /// Remove one person. `Ok(true)` if a row was removed, `Ok(false)` if the
  /// id matched nothing.
  pub async fn delete_person(&self, person_id: Option<Uuid>) -> Result<bool> {
    let person_id = person_id.ok_or(Error::MissingRequest)?;
    let deleted = self
      .persons
      .delete_person_by_person_id(person_id)
      .await
      .map_err(|e| Error::Store(Box::new(e)))?;
    if deleted {
      tracing::debug!(%person_id, "person deleted");
    }
    Ok(deleted)
  }
}
