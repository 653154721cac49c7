//! Filter and sort dispatch over person response views.
//!
//! Callers name fields with plain strings; those parse into the enums here
//! and the dispatch is an exhaustive match, so every supported (field,
//! order) pairing is checked at compile time. Unknown names stay a graceful
//! identity fallback at the parse boundary: logged, never an error, since
//! long-standing callers rely on the leniency.

use std::cmp::Ordering;

use chrono::NaiveDate;
use roster_core::person::PersonResponse;
use serde::{Deserialize, Serialize};
use strum::EnumString;

// ─── Field names ─────────────────────────────────────────────────────────────

/// Fields a filter may target. Parses case-insensitively. `CountryID` is an
/// accepted alias of `Country`: existing callers send either key for the
/// country-name filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum SearchField {
  PersonName,
  Email,
  DateOfBirth,
  Gender,
  #[strum(serialize = "Country", serialize = "CountryID")]
  Country,
  Address,
}

/// Fields a sort may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum SortField {
  PersonName,
  Email,
  DateOfBirth,
  Age,
  Gender,
  Country,
  Address,
  ReceiveNewsletters,
}

/// Sort direction. Parses `ASC` / `DESC` in any case.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
  Asc,
  Desc,
}

pub(crate) fn parse_search_field(search_by: &str) -> Option<SearchField> {
  match search_by.parse() {
    Ok(field) => Some(field),
    Err(_) => {
      tracing::warn!(search_by, "unknown search field, returning all persons");
      None
    }
  }
}

pub(crate) fn parse_sort_field(sort_by: &str) -> Option<SortField> {
  match sort_by.parse() {
    Ok(field) => Some(field),
    Err(_) => {
      tracing::warn!(sort_by, "unknown sort field, leaving order unchanged");
      None
    }
  }
}

// ─── Filtering ───────────────────────────────────────────────────────────────

impl SearchField {
  /// Case-insensitive substring test against the selected response field.
  ///
  /// A record whose selected field is absent or empty matches vacuously, so
  /// partially-populated rows stay visible in filtered views.
  pub(crate) fn matches(
    self,
    person: &PersonResponse,
    search_text: &str,
  ) -> bool {
    let target = match self {
      Self::PersonName => person.person_name.clone(),
      Self::Email => person.email.clone(),
      Self::DateOfBirth => person.date_of_birth.map(long_date),
      Self::Gender => person.gender.map(|gender| gender.to_string()),
      Self::Country => person.country_name.clone(),
      Self::Address => person.address.clone(),
    };
    match target.as_deref() {
      Some(value) if !value.is_empty() => {
        value.to_lowercase().contains(&search_text.to_lowercase())
      }
      _ => true,
    }
  }
}

/// The long date form filters match against, e.g. `11 April 1996`.
fn long_date(date: NaiveDate) -> String {
  date.format("%d %B %Y").to_string()
}

// ─── Sorting ─────────────────────────────────────────────────────────────────

/// Stable sort by `field`. `Desc` reverses the comparator rather than the
/// result, so equal keys keep their input order in both directions.
pub(crate) fn sort_persons(
  mut persons: Vec<PersonResponse>,
  field: SortField,
  order: SortOrder,
) -> Vec<PersonResponse> {
  persons.sort_by(|a, b| {
    let ordering = compare(field, a, b);
    match order {
      SortOrder::Asc => ordering,
      SortOrder::Desc => ordering.reverse(),
    }
  });
  persons
}

fn compare(
  field: SortField,
  a: &PersonResponse,
  b: &PersonResponse,
) -> Ordering {
  match field {
    SortField::PersonName => cmp_ci(&a.person_name, &b.person_name),
    SortField::Email => cmp_ci(&a.email, &b.email),
    SortField::DateOfBirth => a.date_of_birth.cmp(&b.date_of_birth),
    SortField::Age => a.age.cmp(&b.age),
    // Genders order by display name, not declaration order.
    SortField::Gender => cmp_ci(
      &a.gender.map(|gender| gender.to_string()),
      &b.gender.map(|gender| gender.to_string()),
    ),
    SortField::Country => cmp_ci(&a.country_name, &b.country_name),
    SortField::Address => cmp_ci(&a.address, &b.address),
    SortField::ReceiveNewsletters => {
      a.receive_newsletters.cmp(&b.receive_newsletters)
    }
  }
}

/// Case-insensitive string ordering; absent values order first.
fn cmp_ci(a: &Option<String>, b: &Option<String>) -> Ordering {
  match (a, b) {
    (None, None) => Ordering::Equal,
    (None, Some(_)) => Ordering::Less,
    (Some(_), None) => Ordering::Greater,
    (Some(a), Some(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
