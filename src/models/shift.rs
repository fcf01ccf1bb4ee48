//! Shift, lunch, and break records.
//!
//! These are plain value structs mirroring the rows the record store keeps.
//! A shift carries `on_lunch`/`on_break` convenience flags that must always
//! agree with whether an active lunch/break span exists for it; the store
//! applies span writes and flag flips together to keep that true.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One continuous work session for an employee, open until explicitly
/// ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Unique identifier for the shift.
    pub shift_id: Uuid,
    /// The employee this shift belongs to.
    pub employee_id: String,
    /// When the shift was started.
    pub start_time: NaiveDateTime,
    /// When the shift was ended, if it has been.
    pub end_time: Option<NaiveDateTime>,
    /// True until the shift is ended.
    pub is_active: bool,
    /// True iff the shift currently owns an active lunch span.
    pub on_lunch: bool,
    /// True iff the shift currently owns an active break span.
    pub on_break: bool,
}

impl ShiftRecord {
    /// Creates a freshly opened shift with a generated identifier.
    pub fn open(employee_id: impl Into<String>, start_time: NaiveDateTime) -> Self {
        Self {
            shift_id: Uuid::new_v4(),
            employee_id: employee_id.into(),
            start_time,
            end_time: None,
            is_active: true,
            on_lunch: false,
            on_break: false,
        }
    }
}

/// A lunch taken during a shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LunchSpan {
    /// Unique identifier for the lunch span.
    pub lunch_id: Uuid,
    /// The shift this lunch belongs to.
    pub shift_id: Uuid,
    /// When the lunch was started.
    pub start_time: NaiveDateTime,
    /// When the lunch was ended, if it has been.
    pub end_time: Option<NaiveDateTime>,
    /// True until the lunch is ended.
    pub is_active: bool,
}

impl LunchSpan {
    /// Creates a freshly opened lunch span with a generated identifier.
    pub fn open(shift_id: Uuid, start_time: NaiveDateTime) -> Self {
        Self {
            lunch_id: Uuid::new_v4(),
            shift_id,
            start_time,
            end_time: None,
            is_active: true,
        }
    }
}

/// A short break taken during a shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakSpan {
    /// Unique identifier for the break span.
    pub break_id: Uuid,
    /// The shift this break belongs to.
    pub shift_id: Uuid,
    /// When the break was started.
    pub start_time: NaiveDateTime,
    /// When the break was ended, if it has been.
    pub end_time: Option<NaiveDateTime>,
    /// True until the break is ended.
    pub is_active: bool,
}

impl BreakSpan {
    /// Creates a freshly opened break span with a generated identifier.
    pub fn open(shift_id: Uuid, start_time: NaiveDateTime) -> Self {
        Self {
            break_id: Uuid::new_v4(),
            shift_id,
            start_time,
            end_time: None,
            is_active: true,
        }
    }
}
