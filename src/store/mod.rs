//! The abstract record store the punch-clock core is written against.
//!
//! The core never talks to a concrete database; it asks a [`RecordStore`]
//! for an exclusive read-modify scope over one employee's records and
//! applies its write-set inside that scope. [`MemoryStore`] is the in-crate
//! implementation; anything that can provide per-employee serialization can
//! back the same trait.

mod memory;

pub use memory::MemoryStore;

use crate::engine::WriteSet;
use crate::error::{ClockError, ClockResult};
use crate::models::{BreakSpan, LunchSpan, ShiftRecord};

/// All stored records for one employee.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeRecords {
    /// Shifts, in insertion order.
    pub shifts: Vec<ShiftRecord>,
    /// Lunch spans, referencing shifts by id.
    pub lunches: Vec<LunchSpan>,
    /// Break spans, referencing shifts by id.
    pub breaks: Vec<BreakSpan>,
}

impl EmployeeRecords {
    /// Applies a write-set to these records.
    ///
    /// Dual-write variants (span insert/close plus the shift flag flip) are
    /// validated before any mutation, so either both writes land or
    /// neither. Record identifiers are generated here, at the store, on
    /// insert.
    ///
    /// A write-set referencing a shift that is not in these records means
    /// the decision was made against records we do not hold; that is a
    /// corruption condition, not a rejection.
    pub fn apply(&mut self, employee_id: &str, write: &WriteSet) -> ClockResult<()> {
        match *write {
            WriteSet::OpenShift { start_time } => {
                self.shifts.push(ShiftRecord::open(employee_id, start_time));
            }
            WriteSet::CloseShift { shift_id, end_time } => {
                let idx = self.shift_index(employee_id, shift_id)?;
                let shift = &mut self.shifts[idx];
                shift.end_time = Some(end_time);
                shift.is_active = false;
            }
            WriteSet::OpenLunch {
                shift_id,
                start_time,
            } => {
                let idx = self.shift_index(employee_id, shift_id)?;
                self.shifts[idx].on_lunch = true;
                self.lunches.push(LunchSpan::open(shift_id, start_time));
            }
            WriteSet::CloseLunch { shift_id, end_time } => {
                let shift_idx = self.shift_index(employee_id, shift_id)?;
                let span_idx = self
                    .lunches
                    .iter()
                    .position(|l| l.shift_id == shift_id && l.is_active)
                    .ok_or_else(|| ClockError::DataIntegrity {
                        employee_id: employee_id.to_string(),
                        message: format!("no active lunch span for shift {shift_id}"),
                    })?;
                let span = &mut self.lunches[span_idx];
                span.end_time = Some(end_time);
                span.is_active = false;
                self.shifts[shift_idx].on_lunch = false;
            }
            WriteSet::OpenBreak {
                shift_id,
                start_time,
            } => {
                let idx = self.shift_index(employee_id, shift_id)?;
                self.shifts[idx].on_break = true;
                self.breaks.push(BreakSpan::open(shift_id, start_time));
            }
            WriteSet::CloseBreak { shift_id, end_time } => {
                let shift_idx = self.shift_index(employee_id, shift_id)?;
                let span_idx = self
                    .breaks
                    .iter()
                    .position(|b| b.shift_id == shift_id && b.is_active)
                    .ok_or_else(|| ClockError::DataIntegrity {
                        employee_id: employee_id.to_string(),
                        message: format!("no active break span for shift {shift_id}"),
                    })?;
                let span = &mut self.breaks[span_idx];
                span.end_time = Some(end_time);
                span.is_active = false;
                self.shifts[shift_idx].on_break = false;
            }
        }
        Ok(())
    }

    fn shift_index(&self, employee_id: &str, shift_id: uuid::Uuid) -> ClockResult<usize> {
        self.shifts
            .iter()
            .position(|s| s.shift_id == shift_id)
            .ok_or_else(|| ClockError::DataIntegrity {
                employee_id: employee_id.to_string(),
                message: format!("shift {shift_id} not found"),
            })
    }
}

/// An abstract record store keyed by employee.
///
/// `transact` is the row-level lock the concurrency model requires: the
/// closure runs with exclusive access to the employee's records, so a
/// resolve-decide-apply sequence inside it cannot interleave with another
/// punch for the same employee.
pub trait RecordStore: Send + Sync {
    /// Runs `op` with exclusive access to `employee_id`'s records.
    fn transact<T, F>(&self, employee_id: &str, op: F) -> ClockResult<T>
    where
        F: FnOnce(&mut EmployeeRecords) -> ClockResult<T>;

    /// Returns a read-only copy of `employee_id`'s records.
    fn snapshot(&self, employee_id: &str) -> ClockResult<EmployeeRecords>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn records_with_open_shift() -> (EmployeeRecords, uuid::Uuid) {
        let mut records = EmployeeRecords::default();
        records
            .apply(
                "emp_001",
                &WriteSet::OpenShift {
                    start_time: make_datetime("2026-01-15 09:00:00"),
                },
            )
            .unwrap();
        let shift_id = records.shifts[0].shift_id;
        (records, shift_id)
    }

    #[test]
    fn test_open_shift_inserts_an_active_row() {
        let (records, _) = records_with_open_shift();
        assert_eq!(records.shifts.len(), 1);
        assert!(records.shifts[0].is_active);
        assert_eq!(records.shifts[0].employee_id, "emp_001");
    }

    #[test]
    fn test_close_shift_sets_end_time_and_clears_flag() {
        let (mut records, shift_id) = records_with_open_shift();
        records
            .apply(
                "emp_001",
                &WriteSet::CloseShift {
                    shift_id,
                    end_time: make_datetime("2026-01-15 17:00:00"),
                },
            )
            .unwrap();
        let shift = &records.shifts[0];
        assert!(!shift.is_active);
        assert_eq!(shift.end_time, Some(make_datetime("2026-01-15 17:00:00")));
    }

    #[test]
    fn test_open_lunch_inserts_span_and_sets_flag_together() {
        let (mut records, shift_id) = records_with_open_shift();
        records
            .apply(
                "emp_001",
                &WriteSet::OpenLunch {
                    shift_id,
                    start_time: make_datetime("2026-01-15 12:00:00"),
                },
            )
            .unwrap();
        assert_eq!(records.lunches.len(), 1);
        assert!(records.lunches[0].is_active);
        assert!(records.shifts[0].on_lunch);
    }

    #[test]
    fn test_close_lunch_closes_span_and_clears_flag_together() {
        let (mut records, shift_id) = records_with_open_shift();
        records
            .apply(
                "emp_001",
                &WriteSet::OpenLunch {
                    shift_id,
                    start_time: make_datetime("2026-01-15 12:00:00"),
                },
            )
            .unwrap();
        records
            .apply(
                "emp_001",
                &WriteSet::CloseLunch {
                    shift_id,
                    end_time: make_datetime("2026-01-15 12:30:00"),
                },
            )
            .unwrap();
        assert!(!records.lunches[0].is_active);
        assert_eq!(
            records.lunches[0].end_time,
            Some(make_datetime("2026-01-15 12:30:00"))
        );
        assert!(!records.shifts[0].on_lunch);
    }

    #[test]
    fn test_close_break_closes_span_and_clears_flag_together() {
        let (mut records, shift_id) = records_with_open_shift();
        records
            .apply(
                "emp_001",
                &WriteSet::OpenBreak {
                    shift_id,
                    start_time: make_datetime("2026-01-15 10:30:00"),
                },
            )
            .unwrap();
        assert!(records.shifts[0].on_break);
        records
            .apply(
                "emp_001",
                &WriteSet::CloseBreak {
                    shift_id,
                    end_time: make_datetime("2026-01-15 10:45:00"),
                },
            )
            .unwrap();
        assert!(!records.breaks[0].is_active);
        assert!(!records.shifts[0].on_break);
    }

    #[test]
    fn test_close_lunch_without_span_is_corruption_and_leaves_records_untouched() {
        let (mut records, shift_id) = records_with_open_shift();
        let before = records.clone();
        let err = records
            .apply(
                "emp_001",
                &WriteSet::CloseLunch {
                    shift_id,
                    end_time: make_datetime("2026-01-15 12:30:00"),
                },
            )
            .unwrap_err();
        assert!(matches!(err, ClockError::DataIntegrity { .. }));
        assert_eq!(records, before);
    }

    #[test]
    fn test_write_against_unknown_shift_is_corruption() {
        let mut records = EmployeeRecords::default();
        let err = records
            .apply(
                "emp_001",
                &WriteSet::CloseShift {
                    shift_id: uuid::Uuid::new_v4(),
                    end_time: make_datetime("2026-01-15 17:00:00"),
                },
            )
            .unwrap_err();
        assert!(matches!(err, ClockError::DataIntegrity { .. }));
    }
}
