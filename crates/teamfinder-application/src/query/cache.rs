use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use teamfinder_core::Result;

use super::cell::{QueryCell, QueryFn};

/// A family of [`QueryCell`]s addressed by key, e.g. one per hackathon id.
///
/// Cells are created lazily on first access and share the family's stale
/// time.
pub struct QueryCache<K, T> {
    name: &'static str,
    stale_time: Option<Duration>,
    cells: Mutex<HashMap<K, QueryCell<T>>>,
}

impl<K, T> QueryCache<K, T>
where
    K: Eq + Hash + Clone + std::fmt::Debug,
    T: Clone + Send + Sync + 'static,
{
    pub fn new(name: &'static str, stale_time: Option<Duration>) -> Self {
        Self {
            name,
            stale_time,
            cells: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cell for `key`, creating it with `make_fetcher` if absent.
    pub fn cell<F>(&self, key: &K, make_fetcher: F) -> QueryCell<T>
    where
        F: FnOnce(&K) -> QueryFn<T>,
    {
        let mut cells = self.lock_cells();
        cells
            .entry(key.clone())
            .or_insert_with(|| {
                QueryCell::new(
                    format!("{}/{:?}", self.name, key),
                    self.stale_time,
                    make_fetcher(key),
                )
            })
            .clone()
    }

    /// Shorthand for `cell(key, make_fetcher).fetch()`.
    pub async fn fetch<F>(&self, key: &K, make_fetcher: F) -> Result<T>
    where
        F: FnOnce(&K) -> QueryFn<T>,
    {
        let cell = self.cell(key, make_fetcher);
        cell.fetch().await
    }

    pub fn invalidate(&self, key: &K) {
        if let Some(cell) = self.lock_cells().get(key) {
            cell.invalidate();
        }
    }

    pub fn invalidate_all(&self) {
        for cell in self.lock_cells().values() {
            cell.invalidate();
        }
    }

    /// Forgets every cell.
    pub fn clear(&self) {
        self.lock_cells().clear();
    }

    pub fn len(&self) -> usize {
        self.lock_cells().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_cells().is_empty()
    }

    fn lock_cells(&self) -> MutexGuard<'_, HashMap<K, QueryCell<T>>> {
        self.cells.lock().unwrap_or_else(|e| e.into_inner())
    }
}
