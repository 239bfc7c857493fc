use std::collections::BTreeMap;

/// One entity table: an id counter plus the keyed rows.
///
/// The counter starts at 1 and only ever advances; retired ids are never
/// handed out again. Keeping the counter inside the table means callers who
/// hold the table's write lock get allocate-then-insert as one critical
/// section.
pub(crate) struct Table<K, T> {
    next_id: i64,
    rows: BTreeMap<K, T>,
}

impl<K: Copy + Ord + From<i64>, T: Clone> Table<K, T> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }

    /// Allocate the next id and insert the row built from it.
    pub(crate) fn insert_with(&mut self, build: impl FnOnce(K) -> T) -> T {
        let id = K::from(self.next_id);
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    pub(crate) fn get(&self, id: K) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    /// All rows in key order. Ids are monotonic and never reused, so key
    /// order is also insertion order.
    pub(crate) fn list(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    /// Mutate the row in place if present, returning a copy of the result.
    pub(crate) fn update_with(&mut self, id: K, apply: impl FnOnce(&mut T)) -> Option<T> {
        let row = self.rows.get_mut(&id)?;
        apply(row);
        Some(row.clone())
    }

    /// Remove the row. Returns whether anything was actually removed.
    pub(crate) fn remove(&mut self, id: K) -> bool {
        self.rows.remove(&id).is_some()
    }
}
