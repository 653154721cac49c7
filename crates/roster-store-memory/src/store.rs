//! [`MemoryCountryStore`] and [`MemoryPersonStore`], the in-memory
//! implementations of the repository traits.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;
use uuid::Uuid;

use roster_core::{
  country::Country,
  person::Person,
  store::{CountriesRepository, PersonsRepository},
};

use crate::{seed, Error, Result};

// ─── Ordered rows ────────────────────────────────────────────────────────────

/// Id-indexed rows plus an insertion-order index: lookups stay O(1) while
/// full listings keep the order rows were added in.
#[derive(Debug)]
struct OrderedRows<T> {
  rows:  HashMap<Uuid, T>,
  order: Vec<Uuid>,
}

impl<T> Default for OrderedRows<T> {
  fn default() -> Self {
    Self {
      rows:  HashMap::new(),
      order: Vec::new(),
    }
  }
}

impl<T: Clone> OrderedRows<T> {
  fn insert(&mut self, id: Uuid, row: T) {
    if self.rows.insert(id, row).is_none() {
      self.order.push(id);
    }
  }

  fn get(&self, id: Uuid) -> Option<T> {
    self.rows.get(&id).cloned()
  }

  fn all(&self) -> Vec<T> {
    self
      .order
      .iter()
      .filter_map(|id| self.rows.get(id).cloned())
      .collect()
  }

  fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<T> {
    self
      .order
      .iter()
      .filter_map(|id| self.rows.get(id))
      .find(|row| pred(row))
      .cloned()
  }

  /// Replace an existing row in place. Returns `false` if `id` matched
  /// nothing; the order index is untouched either way.
  fn replace(&mut self, id: Uuid, row: T) -> bool {
    match self.rows.get_mut(&id) {
      Some(slot) => {
        *slot = row;
        true
      }
      None => false,
    }
  }

  fn remove(&mut self, id: Uuid) -> bool {
    let removed = self.rows.remove(&id).is_some();
    if removed {
      self.order.retain(|other| *other != id);
    }
    removed
  }
}

// ─── Country store ───────────────────────────────────────────────────────────

/// Countries held in process memory.
///
/// Cloning is cheap; the backing collection is reference-counted and
/// shared between clones.
#[derive(Clone, Default)]
pub struct MemoryCountryStore {
  rows: Arc<RwLock<OrderedRows<Country>>>,
}

impl MemoryCountryStore {
  /// An empty store.
  pub fn new() -> Self {
    Self::default()
  }

  /// A store pre-populated with [`seed::sample_countries`].
  pub fn with_sample_data() -> Self {
    let mut rows = OrderedRows::default();
    for country in seed::sample_countries() {
      rows.insert(country.country_id, country);
    }
    Self {
      rows: Arc::new(RwLock::new(rows)),
    }
  }
}

impl CountriesRepository for MemoryCountryStore {
  type Error = Error;

  async fn add_country(&self, country: Country) -> Result<Country> {
    let mut rows = self.rows.write().await;
    rows.insert(country.country_id, country.clone());
    Ok(country)
  }

  async fn get_all_countries(&self) -> Result<Vec<Country>> {
    Ok(self.rows.read().await.all())
  }

  async fn get_country_by_country_id(
    &self,
    country_id: Uuid,
  ) -> Result<Option<Country>> {
    Ok(self.rows.read().await.get(country_id))
  }

  async fn get_country_by_country_name(
    &self,
    country_name: &str,
  ) -> Result<Option<Country>> {
    // Exact comparison: the uniqueness contract is case-sensitive.
    Ok(
      self
        .rows
        .read()
        .await
        .find(|country| country.country_name == country_name),
    )
  }
}

// ─── Person store ────────────────────────────────────────────────────────────

/// Persons held in process memory.
///
/// Cloning is cheap; the backing collection is reference-counted and
/// shared between clones.
#[derive(Clone, Default)]
pub struct MemoryPersonStore {
  rows: Arc<RwLock<OrderedRows<Person>>>,
}

impl MemoryPersonStore {
  /// An empty store.
  pub fn new() -> Self {
    Self::default()
  }

  /// A store pre-populated with [`seed::sample_persons`]. Their country
  /// references resolve against [`MemoryCountryStore::with_sample_data`].
  pub fn with_sample_data() -> Self {
    let mut rows = OrderedRows::default();
    for person in seed::sample_persons() {
      rows.insert(person.person_id, person);
    }
    Self {
      rows: Arc::new(RwLock::new(rows)),
    }
  }
}

impl PersonsRepository for MemoryPersonStore {
  type Error = Error;

  async fn add_person(&self, person: Person) -> Result<Person> {
    let mut rows = self.rows.write().await;
    rows.insert(person.person_id, person.clone());
    Ok(person)
  }

  async fn get_all_persons(&self) -> Result<Vec<Person>> {
    Ok(self.rows.read().await.all())
  }

  async fn get_person_by_person_id(
    &self,
    person_id: Uuid,
  ) -> Result<Option<Person>> {
    Ok(self.rows.read().await.get(person_id))
  }

  async fn update_person(&self, person: Person) -> Result<Person> {
    let mut rows = self.rows.write().await;
    if !rows.replace(person.person_id, person.clone()) {
      return Err(Error::PersonNotFound(person.person_id));
    }
    Ok(person)
  }

  async fn delete_person_by_person_id(&self, person_id: Uuid) -> Result<bool> {
    let mut rows = self.rows.write().await;
    Ok(rows.remove(person_id))
  }
}
