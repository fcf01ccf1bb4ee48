//! In-memory record store backed by a concurrent map.

use dashmap::DashMap;

use crate::error::ClockResult;

use super::{EmployeeRecords, RecordStore};

/// An in-memory [`RecordStore`] keyed by employee id.
///
/// `transact` holds the employee's map entry exclusively for the duration
/// of the closure, which is the row-level lock the punch path needs: two
/// concurrent punches for the same employee are serialized, and the loser
/// re-reads state that already includes the winner's writes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: DashMap<String, EmployeeRecords>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn transact<T, F>(&self, employee_id: &str, op: F) -> ClockResult<T>
    where
        F: FnOnce(&mut EmployeeRecords) -> ClockResult<T>,
    {
        let mut entry = self.records.entry(employee_id.to_string()).or_default();
        op(entry.value_mut())
    }

    fn snapshot(&self, employee_id: &str) -> ClockResult<EmployeeRecords> {
        Ok(self
            .records
            .get(employee_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }
}
