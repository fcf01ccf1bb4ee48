//! State resolver: derives an employee's current punch-clock state from
//! their stored records.
//!
//! Read-only. At most one shift per employee may be active (invariant of
//! the store); finding more than one is a corruption condition and resolves
//! to an error rather than silently picking a row.

use uuid::Uuid;

use crate::error::{ClockError, ClockResult};
use crate::store::EmployeeRecords;

/// The currently open shift for an employee, with its sub-states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveShift {
    /// Identifier of the open shift.
    pub shift_id: Uuid,
    /// True iff a lunch span is currently open on this shift.
    pub on_lunch: bool,
    /// True iff a break span is currently open on this shift.
    pub on_break: bool,
}

/// The resolved punch-clock state for one employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolvedState {
    /// The open shift, if any.
    pub shift: Option<ActiveShift>,
}

impl ResolvedState {
    /// True iff the employee has an open shift.
    pub fn shift_active(&self) -> bool {
        self.shift.is_some()
    }

    /// True iff the employee is currently on lunch.
    pub fn lunch_active(&self) -> bool {
        self.shift.is_some_and(|s| s.on_lunch)
    }

    /// True iff the employee is currently on a break.
    pub fn break_active(&self) -> bool {
        self.shift.is_some_and(|s| s.on_break)
    }
}

/// Resolves the current state for `employee_id` from its records.
///
/// Fails fast with [`ClockError::DataIntegrity`] if more than one active
/// shift is found.
pub fn resolve(employee_id: &str, records: &EmployeeRecords) -> ClockResult<ResolvedState> {
    let active: Vec<_> = records.shifts.iter().filter(|s| s.is_active).collect();

    match active.as_slice() {
        [] => Ok(ResolvedState::default()),
        [shift] => Ok(ResolvedState {
            shift: Some(ActiveShift {
                shift_id: shift.shift_id,
                on_lunch: shift.on_lunch,
                on_break: shift.on_break,
            }),
        }),
        many => Err(ClockError::DataIntegrity {
            employee_id: employee_id.to_string(),
            message: format!("found {} active shifts", many.len()),
        }),
    }
}
