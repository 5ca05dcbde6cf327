//! In-memory developer store.
//!
//! The store owns its map and takes `&mut self` for writes; callers that
//! share it across requests wrap it in a lock (see [`crate::api::AppState`]).

use std::collections::HashMap;

use crate::models::Developer;
use crate::tax::{TaxRates, apply_tax};

/// Developer records keyed by id.
///
/// Writes are last-write-wins: no operation checks whether an id is
/// already present.
#[derive(Debug, Clone, Default)]
pub struct DeveloperStore {
    developers: HashMap<i32, Developer>,
}

impl DeveloperStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every stored developer, in no particular order.
    pub fn list(&self) -> Vec<Developer> {
        self.developers.values().cloned().collect()
    }

    /// Returns the developer stored under `id`, if any.
    pub fn get(&self, id: i32) -> Option<Developer> {
        self.developers.get(&id).cloned()
    }

    /// Taxes the submitted gross salary and stores the record under its own id.
    ///
    /// An existing record with the same id is overwritten.
    ///
    /// # Examples
    ///
    /// ```
    /// use developer_registry::models::Developer;
    /// use developer_registry::store::DeveloperStore;
    /// use developer_registry::tax::TaxTable;
    /// use rust_decimal::Decimal;
    ///
    /// let rates = TaxTable::new(Decimal::new(15, 0), Decimal::new(25, 0), Decimal::new(35, 0))?;
    /// let mut store = DeveloperStore::new();
    ///
    /// let stored = store.create(Developer::junior(1, "Ada", Decimal::new(5000, 0)), &rates);
    /// assert_eq!(stored.salary, Decimal::new(4250, 0));
    /// assert_eq!(store.get(1), Some(stored));
    /// # Ok::<(), developer_registry::error::ServiceError>(())
    /// ```
    pub fn create<R>(&mut self, developer: Developer, rates: &R) -> Developer
    where
        R: TaxRates + ?Sized,
    {
        let taxed = apply_tax(developer, rates);
        self.developers.insert(taxed.id, taxed.clone());
        taxed
    }

    /// Stores `developer` under `id` exactly as given.
    ///
    /// The salary is not re-taxed, and `id` need not match `developer.id`.
    pub fn update(&mut self, id: i32, developer: Developer) -> Developer {
        self.developers.insert(id, developer.clone());
        developer
    }

    /// Removes and returns the developer stored under `id`, if any.
    pub fn delete(&mut self, id: i32) -> Option<Developer> {
        self.developers.remove(&id)
    }

    /// Number of stored developers.
    pub fn len(&self) -> usize {
        self.developers.len()
    }

    /// Returns true if no developers are stored.
    pub fn is_empty(&self) -> bool {
        self.developers.is_empty()
    }
}
