//! Request types for the punch-clock API.
//!
//! This module defines the JSON request structure for the `/punch`
//! endpoint.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::ShiftAction;

/// The wire format of a time punch: `HH:MM:SS MM-DD-YYYY`, the clock face
/// and date the time-clock UI submits.
pub const TIME_PUNCH_FORMAT: &str = "%H:%M:%S %m-%d-%Y";

/// Request body for the `/punch` endpoint.
///
/// One call per punch. `time` and `date` are combined into the event
/// timestamp at this boundary; the core receives an already-parsed
/// [`NaiveDateTime`] and treats it as opaque beyond ordering and storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunchRequest {
    /// The employee submitting the punch.
    pub employee_id: String,
    /// The requested action.
    pub action: ShiftAction,
    /// Clock time of the punch, `HH:MM:SS`.
    pub time: String,
    /// Date of the punch, `MM-DD-YYYY`.
    pub date: String,
}

impl PunchRequest {
    /// Combines `time` and `date` into the event timestamp.
    ///
    /// # Example
    ///
    /// ```
    /// use punch_clock::api::PunchRequest;
    /// use punch_clock::models::ShiftAction;
    ///
    /// let request = PunchRequest {
    ///     employee_id: "emp_001".to_string(),
    ///     action: ShiftAction::StartShift,
    ///     time: "09:00:00".to_string(),
    ///     date: "01-15-2026".to_string(),
    /// };
    /// let ts = request.time_punch().unwrap();
    /// assert_eq!(ts.to_string(), "2026-01-15 09:00:00");
    /// ```
    pub fn time_punch(&self) -> Result<NaiveDateTime, chrono::ParseError> {
        NaiveDateTime::parse_from_str(&format!("{} {}", self.time, self.date), TIME_PUNCH_FORMAT)
    }
}
