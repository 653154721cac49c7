//! Person, the directory's primary record, plus its request and response
//! shapes.
//!
//! Stored fields stay `Option` even though validation requires most of them
//! on create and update: the persistence collaborator is external, and may
//! hold partially-populated rows (seeded or migrated). Read paths must not
//! silently drop those.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

// ─── Gender ──────────────────────────────────────────────────────────────────

/// The fixed gender enumeration. Parses case-insensitively; displays and
/// serialises as `Male` / `Female` / `Other`.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  Display,
  EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Gender {
  Male,
  Female,
  Other,
}

// ─── Person ──────────────────────────────────────────────────────────────────

/// A stored person record. `person_id` is assigned by the directory service
/// at creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
  pub person_id:           Uuid,
  pub person_name:         Option<String>,
  pub email:               Option<String>,
  pub date_of_birth:       Option<NaiveDate>,
  pub gender:              Option<Gender>,
  /// Reference into the country directory. May dangle; reads resolve it
  /// leniently to an absent name rather than failing.
  pub country_id:          Option<Uuid>,
  pub address:             Option<String>,
  pub receive_newsletters: bool,
}

// ─── Requests ────────────────────────────────────────────────────────────────

/// Input to `add_person`. Ids are never accepted from callers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonAddRequest {
  pub person_name:         Option<String>,
  pub email:               Option<String>,
  pub date_of_birth:       Option<NaiveDate>,
  pub gender:              Option<Gender>,
  pub country_id:          Option<Uuid>,
  pub address:             Option<String>,
  #[serde(default)]
  pub receive_newsletters: bool,
}

impl PersonAddRequest {
  /// Build the stored record under a service-assigned id.
  pub fn into_person(self, person_id: Uuid) -> Person {
    Person {
      person_id,
      person_name: self.person_name,
      email: self.email,
      date_of_birth: self.date_of_birth,
      gender: self.gender,
      country_id: self.country_id,
      address: self.address,
      receive_newsletters: self.receive_newsletters,
    }
  }
}

/// Input to `update_person`: the full replacement state for an existing id.
/// Every mutable field is overwritten from this shape; `person_id` selects
/// the row and is itself immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonUpdateRequest {
  pub person_id:           Uuid,
  pub person_name:         Option<String>,
  pub email:               Option<String>,
  pub date_of_birth:       Option<NaiveDate>,
  pub gender:              Option<Gender>,
  pub country_id:          Option<Uuid>,
  pub address:             Option<String>,
  #[serde(default)]
  pub receive_newsletters: bool,
}

// ─── Response ────────────────────────────────────────────────────────────────

/// The enriched, caller-facing view of a person: every stored field plus the
/// live-resolved country name and the derived age. Both enrichment fields
/// are recomputed on every read and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonResponse {
  pub person_id:           Uuid,
  pub person_name:         Option<String>,
  pub email:               Option<String>,
  pub date_of_birth:       Option<NaiveDate>,
  pub gender:              Option<Gender>,
  pub country_id:          Option<Uuid>,
  pub address:             Option<String>,
  pub receive_newsletters: bool,
  /// Resolved from `country_id` at read time; `None` when the reference is
  /// absent or dangling.
  pub country_name:        Option<String>,
  /// Whole years between `date_of_birth` and the read date; `None` when the
  /// birth date is unknown.
  pub age:                 Option<i32>,
}

impl PersonResponse {
  /// Assemble the enriched view. `country_name` is the caller's live lookup
  /// result; `age` is derived from the stored birth date as of `today`.
  pub fn from_person(
    person: Person,
    country_name: Option<String>,
    today: NaiveDate,
  ) -> Self {
    let age = person
      .date_of_birth
      .map(|date_of_birth| age_on(date_of_birth, today));
    Self {
      person_id: person.person_id,
      person_name: person.person_name,
      email: person.email,
      date_of_birth: person.date_of_birth,
      gender: person.gender,
      country_id: person.country_id,
      address: person.address,
      receive_newsletters: person.receive_newsletters,
      country_name,
      age,
    }
  }
}

// ─── Derived age ─────────────────────────────────────────────────────────────

/// Whole calendar years between `date_of_birth` and `today`. The count
/// increments on the birthday itself, never mid-year.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
  let mut age = today.year() - date_of_birth.year();
  let birthday = (date_of_birth.month(), date_of_birth.day());
  if (today.month(), today.day()) < birthday {
    age -= 1;
  }
  age
}

// ─── Tests ───────────────────────────────────────────────────────────────────
