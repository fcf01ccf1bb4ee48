//! The punch-clock service: one punch, one transaction.
//!
//! [`TimeClock`] ties the resolver, the transition engine, and the record
//! store together. A punch runs resolve, decide, and apply inside a single
//! `transact` scope, so the check-then-act sequence cannot interleave with
//! a concurrent punch for the same employee.

use chrono::NaiveDateTime;

use crate::engine::{self, Rejection, ResolvedState};
use crate::error::ClockResult;
use crate::models::{ShiftAction, ShiftHistory};
use crate::store::RecordStore;

/// The outcome of a punch.
///
/// Rejections are part of the normal contract, not errors: the caller
/// surfaces the message and the employee resubmits after checking their
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunchOutcome {
    /// The action was legal and its records were written.
    Accepted {
        /// The action that was applied.
        action: ShiftAction,
        /// The fixed confirmation text for the action.
        message: &'static str,
    },
    /// The action was not legal for the employee's current state. Nothing
    /// was written.
    Rejected(Rejection),
}

impl PunchOutcome {
    /// True iff the punch was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, PunchOutcome::Accepted { .. })
    }

    /// The text to show the employee, success or rejection.
    pub fn message(&self) -> String {
        match self {
            PunchOutcome::Accepted { message, .. } => (*message).to_string(),
            PunchOutcome::Rejected(rejection) => rejection.to_string(),
        }
    }
}

/// A punch clock over a record store.
#[derive(Debug, Default)]
pub struct TimeClock<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> TimeClock<S> {
    /// Creates a punch clock over `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Processes one punch for `employee_id`.
    ///
    /// The whole read-decide-write sequence holds the employee's store
    /// entry, so concurrent punches for the same employee serialize; the
    /// later one decides against state that already includes the earlier
    /// one's writes.
    ///
    /// Errors only on store failure or record corruption; illegal actions
    /// come back as [`PunchOutcome::Rejected`].
    pub fn punch(
        &self,
        employee_id: &str,
        action: ShiftAction,
        time_punch: NaiveDateTime,
    ) -> ClockResult<PunchOutcome> {
        self.store.transact(employee_id, |records| {
            let state = engine::resolve(employee_id, records)?;
            match engine::decide(&state, action, time_punch) {
                Ok(write) => {
                    records.apply(employee_id, &write)?;
                    Ok(PunchOutcome::Accepted {
                        action,
                        message: action.success_message(),
                    })
                }
                Err(rejection) => Ok(PunchOutcome::Rejected(rejection)),
            }
        })
    }

    /// Resolves the employee's current state without side effects.
    pub fn resolve_state(&self, employee_id: &str) -> ClockResult<ResolvedState> {
        let records = self.store.snapshot(employee_id)?;
        engine::resolve(employee_id, &records)
    }

    /// Returns the employee's shift history, most recent shift first, each
    /// shift joined with its lunch and break spans.
    pub fn history(&self, employee_id: &str) -> ClockResult<Vec<ShiftHistory>> {
        let records = self.store.snapshot(employee_id)?;
        let mut shifts: Vec<_> = records.shifts.iter().collect();
        shifts.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        Ok(shifts
            .into_iter()
            .map(|shift| ShiftHistory::from_records(shift, &records.lunches, &records.breaks))
            .collect())
    }
}
