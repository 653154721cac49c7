//! Field validation for mutation requests.
//!
//! Explicit per-field rule functions, composed into one pass per request
//! shape. A pass reports every violated rule; the services surface the
//! first entry as [`Error::InvalidField`]. Everything here is pure: no
//! store access, no clock.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
  error::Error,
  person::{Gender, PersonAddRequest, PersonUpdateRequest},
};

/// Single `@`, non-empty local part, dotted domain, no whitespace.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

/// One violated field rule. Both halves are static so violations stay
/// `Copy` and comparisons in tests stay trivial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
  pub field:   &'static str,
  pub message: &'static str,
}

impl From<Violation> for Error {
  fn from(violation: Violation) -> Self {
    Error::InvalidField {
      field:   violation.field,
      message: violation.message,
    }
  }
}

// ─── Per-field rules ─────────────────────────────────────────────────────────

/// Required-and-non-empty rule for string fields.
pub fn required_non_empty(
  field: &'static str,
  value: Option<&str>,
) -> Option<Violation> {
  match value {
    Some(s) if !s.is_empty() => None,
    _ => Some(Violation {
      field,
      message: "is required and can't be blank",
    }),
  }
}

/// Required rule for non-string fields.
pub fn required<T>(
  field: &'static str,
  value: &Option<T>,
) -> Option<Violation> {
  value.is_none().then_some(Violation {
    field,
    message: "is required",
  })
}

/// Required-and-well-formed rule for email fields.
pub fn email_format(
  field: &'static str,
  value: Option<&str>,
) -> Option<Violation> {
  match value {
    Some(s) if s.is_empty() => Some(Violation {
      field,
      message: "is required and can't be blank",
    }),
    Some(s) if !EMAIL_RE.is_match(s) => Some(Violation {
      field,
      message: "must be a valid email address",
    }),
    Some(_) => None,
    None => Some(Violation {
      field,
      message: "is required and can't be blank",
    }),
  }
}

// ─── Composed passes ─────────────────────────────────────────────────────────

/// Every rule violated by an add-person request. Empty means valid.
pub fn validate_person_add(request: &PersonAddRequest) -> Vec<Violation> {
  person_fields(
    request.person_name.as_deref(),
    request.email.as_deref(),
    &request.date_of_birth,
    &request.gender,
  )
}

/// Every rule violated by an update-person request. Empty means valid.
/// The update shape shares the add shape's field rules; the target id is
/// checked against the store by the service, not here.
pub fn validate_person_update(request: &PersonUpdateRequest) -> Vec<Violation> {
  person_fields(
    request.person_name.as_deref(),
    request.email.as_deref(),
    &request.date_of_birth,
    &request.gender,
  )
}

fn person_fields(
  person_name: Option<&str>,
  email: Option<&str>,
  date_of_birth: &Option<NaiveDate>,
  gender: &Option<Gender>,
) -> Vec<Violation> {
  let mut violations = Vec::new();
  violations.extend(required_non_empty("person_name", person_name));
  violations.extend(email_format("email", email));
  violations.extend(required("date_of_birth", date_of_birth));
  violations.extend(required("gender", gender));
  violations
}

// ─── Tests ───────────────────────────────────────────────────────────────────
