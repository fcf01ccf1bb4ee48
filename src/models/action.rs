//! The six punch-clock actions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A requested punch-clock action.
///
/// Every request names exactly one of these six actions. Using an enum
/// (rather than matching on action-name strings) lets the compiler flag
/// any transition the engine forgets to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftAction {
    /// Open a new shift for the employee.
    StartShift,
    /// Close the employee's open shift.
    EndShift,
    /// Open a lunch span within the open shift.
    StartLunch,
    /// Close the open lunch span.
    EndLunch,
    /// Open a break span within the open shift.
    StartBreak,
    /// Close the open break span.
    EndBreak,
}

impl ShiftAction {
    /// All six actions, in wire order.
    pub const ALL: [ShiftAction; 6] = [
        ShiftAction::StartShift,
        ShiftAction::EndShift,
        ShiftAction::StartLunch,
        ShiftAction::EndLunch,
        ShiftAction::StartBreak,
        ShiftAction::EndBreak,
    ];

    /// Returns the wire name of the action (its `snake_case` serde form).
    pub fn as_str(self) -> &'static str {
        match self {
            ShiftAction::StartShift => "start_shift",
            ShiftAction::EndShift => "end_shift",
            ShiftAction::StartLunch => "start_lunch",
            ShiftAction::EndLunch => "end_lunch",
            ShiftAction::StartBreak => "start_break",
            ShiftAction::EndBreak => "end_break",
        }
    }

    /// Returns the fixed confirmation text reported when this action is
    /// accepted.
    ///
    /// # Example
    ///
    /// ```
    /// use punch_clock::models::ShiftAction;
    ///
    /// assert_eq!(ShiftAction::StartShift.success_message(), "Shift has started");
    /// ```
    pub fn success_message(self) -> &'static str {
        match self {
            ShiftAction::StartShift => "Shift has started",
            ShiftAction::EndShift => "Shift has ended",
            ShiftAction::StartLunch => "Lunch has started",
            ShiftAction::EndLunch => "Lunch has ended",
            ShiftAction::StartBreak => "Break has started",
            ShiftAction::EndBreak => "Break has ended",
        }
    }
}

impl fmt::Display for ShiftAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
