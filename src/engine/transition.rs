//! Transition engine: decides whether a requested action is legal for the
//! resolved state, and what records to write if it is.
//!
//! The decision is a pure function over the resolved state; it performs no
//! reads or writes itself. Accepted actions produce a [`WriteSet`] the
//! store applies as one unit; illegal actions produce a [`Rejection`]
//! carrying the exact message shown to the employee. Rejections are values,
//! not errors: they never propagate past the caller that asked for the
//! decision.

use chrono::NaiveDateTime;
use thiserror::Error;
use uuid::Uuid;

use crate::models::ShiftAction;

use super::resolver::ResolvedState;

/// Why a requested action was refused.
///
/// The Display form of each variant is the exact text surfaced to the
/// employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// Any action other than `start_shift` was requested with no open
    /// shift.
    #[error("There is no active shift")]
    NoActiveShift,

    /// `start_shift` was requested while a shift is already open.
    #[error("A shift is already active")]
    ShiftAlreadyActive,

    /// `end_shift` was requested while a break span is open. Break takes
    /// priority over lunch in the message when both are open.
    #[error("End break before ending shift")]
    BreakOpenOnShiftEnd,

    /// `end_shift` was requested while a lunch span is open (and no break).
    #[error("End lunch before ending shift")]
    LunchOpenOnShiftEnd,

    /// `start_lunch` was requested while a lunch span is already open.
    #[error("End active lunch before starting a new lunch")]
    LunchAlreadyActive,

    /// `start_break` was requested while a break span is already open.
    #[error("End active break before starting a new break")]
    BreakAlreadyActive,

    /// `end_lunch` was requested with no open lunch span.
    #[error("There is no active lunch to end")]
    NoActiveLunch,

    /// `end_break` was requested with no open break span.
    #[error("There is no active break to end")]
    NoActiveBreak,
}

/// Coarse classification of a rejection, for callers that branch on the
/// category rather than the exact variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionKind {
    /// A non-`start_shift` action with no open shift.
    NoActiveShift,
    /// Starting a shift/lunch/break while one of that kind is already open.
    DuplicateActive,
    /// The action is not legal for the current sub-states.
    InvalidTransition,
}

impl Rejection {
    /// Returns the taxonomy category of this rejection.
    pub fn kind(self) -> RejectionKind {
        match self {
            Rejection::NoActiveShift => RejectionKind::NoActiveShift,
            Rejection::ShiftAlreadyActive
            | Rejection::LunchAlreadyActive
            | Rejection::BreakAlreadyActive => RejectionKind::DuplicateActive,
            Rejection::BreakOpenOnShiftEnd
            | Rejection::LunchOpenOnShiftEnd
            | Rejection::NoActiveLunch
            | Rejection::NoActiveBreak => RejectionKind::InvalidTransition,
        }
    }

    /// Returns a stable machine-readable code for this rejection.
    pub fn code(self) -> &'static str {
        match self {
            Rejection::NoActiveShift => "NO_ACTIVE_SHIFT",
            Rejection::ShiftAlreadyActive => "SHIFT_ALREADY_ACTIVE",
            Rejection::BreakOpenOnShiftEnd => "BREAK_STILL_OPEN",
            Rejection::LunchOpenOnShiftEnd => "LUNCH_STILL_OPEN",
            Rejection::LunchAlreadyActive => "LUNCH_ALREADY_ACTIVE",
            Rejection::BreakAlreadyActive => "BREAK_ALREADY_ACTIVE",
            Rejection::NoActiveLunch => "NO_ACTIVE_LUNCH",
            Rejection::NoActiveBreak => "NO_ACTIVE_BREAK",
        }
    }
}

/// The records an accepted action inserts or updates.
///
/// Variants that touch a span and its parent shift describe both writes;
/// the store applies them inside one exclusive scope so a partial update is
/// never observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteSet {
    /// Insert a new active shift starting at `start_time`.
    OpenShift {
        /// The punch timestamp to record as the shift start.
        start_time: NaiveDateTime,
    },
    /// Set `end_time` on the open shift and clear its active flag.
    CloseShift {
        /// The shift being closed.
        shift_id: Uuid,
        /// The punch timestamp to record as the shift end.
        end_time: NaiveDateTime,
    },
    /// Insert a new active lunch span and set the shift's `on_lunch` flag.
    OpenLunch {
        /// The shift the lunch belongs to.
        shift_id: Uuid,
        /// The punch timestamp to record as the lunch start.
        start_time: NaiveDateTime,
    },
    /// Close the open lunch span and clear the shift's `on_lunch` flag.
    CloseLunch {
        /// The shift whose lunch is being closed.
        shift_id: Uuid,
        /// The punch timestamp to record as the lunch end.
        end_time: NaiveDateTime,
    },
    /// Insert a new active break span and set the shift's `on_break` flag.
    OpenBreak {
        /// The shift the break belongs to.
        shift_id: Uuid,
        /// The punch timestamp to record as the break start.
        start_time: NaiveDateTime,
    },
    /// Close the open break span and clear the shift's `on_break` flag.
    CloseBreak {
        /// The shift whose break is being closed.
        shift_id: Uuid,
        /// The punch timestamp to record as the break end.
        end_time: NaiveDateTime,
    },
}

/// Decides whether `action` is legal for `state`.
///
/// Returns the write-set to apply on acceptance, or the rejection to
/// surface otherwise. Lunch and break are independent sub-states: both may
/// be open at once, and only starting a second span of the same kind is
/// refused. A shift cannot be ended while either sub-state is open.
///
/// # Example
///
/// ```
/// use chrono::NaiveDateTime;
/// use punch_clock::engine::{decide, ResolvedState, Rejection, WriteSet};
/// use punch_clock::models::ShiftAction;
///
/// let ts = NaiveDateTime::parse_from_str("2026-01-15 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let state = ResolvedState::default();
///
/// assert!(matches!(
///     decide(&state, ShiftAction::StartShift, ts),
///     Ok(WriteSet::OpenShift { .. })
/// ));
/// assert_eq!(
///     decide(&state, ShiftAction::EndShift, ts),
///     Err(Rejection::NoActiveShift)
/// );
/// ```
pub fn decide(
    state: &ResolvedState,
    action: ShiftAction,
    time_punch: NaiveDateTime,
) -> Result<WriteSet, Rejection> {
    // With no open shift, start_shift is the only legal action. All five
    // other actions are blocked uniformly.
    let Some(shift) = state.shift else {
        return match action {
            ShiftAction::StartShift => Ok(WriteSet::OpenShift {
                start_time: time_punch,
            }),
            _ => Err(Rejection::NoActiveShift),
        };
    };

    match action {
        ShiftAction::StartShift => Err(Rejection::ShiftAlreadyActive),

        // Break takes priority in the message when both sub-states are open.
        ShiftAction::EndShift if shift.on_break => Err(Rejection::BreakOpenOnShiftEnd),
        ShiftAction::EndShift if shift.on_lunch => Err(Rejection::LunchOpenOnShiftEnd),
        ShiftAction::EndShift => Ok(WriteSet::CloseShift {
            shift_id: shift.shift_id,
            end_time: time_punch,
        }),

        ShiftAction::StartLunch if shift.on_lunch => Err(Rejection::LunchAlreadyActive),
        ShiftAction::StartLunch => Ok(WriteSet::OpenLunch {
            shift_id: shift.shift_id,
            start_time: time_punch,
        }),

        ShiftAction::EndLunch if shift.on_lunch => Ok(WriteSet::CloseLunch {
            shift_id: shift.shift_id,
            end_time: time_punch,
        }),
        ShiftAction::EndLunch => Err(Rejection::NoActiveLunch),

        ShiftAction::StartBreak if shift.on_break => Err(Rejection::BreakAlreadyActive),
        ShiftAction::StartBreak => Ok(WriteSet::OpenBreak {
            shift_id: shift.shift_id,
            start_time: time_punch,
        }),

        ShiftAction::EndBreak if shift.on_break => Ok(WriteSet::CloseBreak {
            shift_id: shift.shift_id,
            end_time: time_punch,
        }),
        ShiftAction::EndBreak => Err(Rejection::NoActiveBreak),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::resolver::ActiveShift;

    fn ts() -> NaiveDateTime {
        NaiveDateTime::parse_from_str("2026-01-15 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn no_shift() -> ResolvedState {
        ResolvedState::default()
    }

    fn open_shift(on_lunch: bool, on_break: bool) -> (ResolvedState, Uuid) {
        let shift_id = Uuid::new_v4();
        (
            ResolvedState {
                shift: Some(ActiveShift {
                    shift_id,
                    on_lunch,
                    on_break,
                }),
            },
            shift_id,
        )
    }

    #[test]
    fn test_start_shift_with_no_shift_opens_one() {
        let write = decide(&no_shift(), ShiftAction::StartShift, ts()).unwrap();
        assert_eq!(write, WriteSet::OpenShift { start_time: ts() });
    }

    #[test]
    fn test_all_other_actions_blocked_with_no_shift() {
        for action in [
            ShiftAction::EndShift,
            ShiftAction::StartLunch,
            ShiftAction::EndLunch,
            ShiftAction::StartBreak,
            ShiftAction::EndBreak,
        ] {
            assert_eq!(
                decide(&no_shift(), action, ts()),
                Err(Rejection::NoActiveShift),
                "action {action} should be blocked with no active shift"
            );
        }
    }

    #[test]
    fn test_start_shift_while_open_is_duplicate() {
        let (state, _) = open_shift(false, false);
        let rejection = decide(&state, ShiftAction::StartShift, ts()).unwrap_err();
        assert_eq!(rejection, Rejection::ShiftAlreadyActive);
        assert_eq!(rejection.kind(), RejectionKind::DuplicateActive);
        assert_eq!(rejection.to_string(), "A shift is already active");
    }

    #[test]
    fn test_end_shift_with_no_sub_states_closes_it() {
        let (state, shift_id) = open_shift(false, false);
        let write = decide(&state, ShiftAction::EndShift, ts()).unwrap();
        assert_eq!(
            write,
            WriteSet::CloseShift {
                shift_id,
                end_time: ts()
            }
        );
    }

    #[test]
    fn test_end_shift_blocked_by_open_break() {
        let (state, _) = open_shift(false, true);
        let rejection = decide(&state, ShiftAction::EndShift, ts()).unwrap_err();
        assert_eq!(rejection, Rejection::BreakOpenOnShiftEnd);
        assert_eq!(rejection.to_string(), "End break before ending shift");
    }

    #[test]
    fn test_end_shift_blocked_by_open_lunch() {
        let (state, _) = open_shift(true, false);
        let rejection = decide(&state, ShiftAction::EndShift, ts()).unwrap_err();
        assert_eq!(rejection, Rejection::LunchOpenOnShiftEnd);
        assert_eq!(rejection.to_string(), "End lunch before ending shift");
    }

    #[test]
    fn test_break_takes_priority_over_lunch_in_end_shift_message() {
        let (state, _) = open_shift(true, true);
        let rejection = decide(&state, ShiftAction::EndShift, ts()).unwrap_err();
        assert_eq!(rejection, Rejection::BreakOpenOnShiftEnd);
    }

    #[test]
    fn test_start_lunch_opens_span_on_the_shift() {
        let (state, shift_id) = open_shift(false, false);
        let write = decide(&state, ShiftAction::StartLunch, ts()).unwrap();
        assert_eq!(
            write,
            WriteSet::OpenLunch {
                shift_id,
                start_time: ts()
            }
        );
    }

    #[test]
    fn test_second_start_lunch_is_duplicate() {
        let (state, _) = open_shift(true, false);
        let rejection = decide(&state, ShiftAction::StartLunch, ts()).unwrap_err();
        assert_eq!(rejection, Rejection::LunchAlreadyActive);
        assert_eq!(
            rejection.to_string(),
            "End active lunch before starting a new lunch"
        );
    }

    #[test]
    fn test_end_lunch_closes_the_open_span() {
        let (state, shift_id) = open_shift(true, false);
        let write = decide(&state, ShiftAction::EndLunch, ts()).unwrap();
        assert_eq!(
            write,
            WriteSet::CloseLunch {
                shift_id,
                end_time: ts()
            }
        );
    }

    #[test]
    fn test_end_lunch_without_lunch_is_rejected() {
        let (state, _) = open_shift(false, false);
        let rejection = decide(&state, ShiftAction::EndLunch, ts()).unwrap_err();
        assert_eq!(rejection, Rejection::NoActiveLunch);
        assert_eq!(rejection.to_string(), "There is no active lunch to end");
    }

    #[test]
    fn test_second_start_break_is_duplicate() {
        let (state, _) = open_shift(false, true);
        let rejection = decide(&state, ShiftAction::StartBreak, ts()).unwrap_err();
        assert_eq!(rejection, Rejection::BreakAlreadyActive);
        assert_eq!(
            rejection.to_string(),
            "End active break before starting a new break"
        );
    }

    #[test]
    fn test_end_break_without_break_is_rejected() {
        let (state, _) = open_shift(false, false);
        let rejection = decide(&state, ShiftAction::EndBreak, ts()).unwrap_err();
        assert_eq!(rejection, Rejection::NoActiveBreak);
    }

    #[test]
    fn test_lunch_and_break_are_independent_sub_states() {
        // A lunch may start while a break is open, and vice versa.
        let (on_break, shift_id) = open_shift(false, true);
        assert_eq!(
            decide(&on_break, ShiftAction::StartLunch, ts()),
            Ok(WriteSet::OpenLunch {
                shift_id,
                start_time: ts()
            })
        );

        let (on_lunch, shift_id) = open_shift(true, false);
        assert_eq!(
            decide(&on_lunch, ShiftAction::StartBreak, ts()),
            Ok(WriteSet::OpenBreak {
                shift_id,
                start_time: ts()
            })
        );
    }

    #[test]
    fn test_every_rejection_has_a_stable_code() {
        let rejections = [
            Rejection::NoActiveShift,
            Rejection::ShiftAlreadyActive,
            Rejection::BreakOpenOnShiftEnd,
            Rejection::LunchOpenOnShiftEnd,
            Rejection::LunchAlreadyActive,
            Rejection::BreakAlreadyActive,
            Rejection::NoActiveLunch,
            Rejection::NoActiveBreak,
        ];
        let codes: std::collections::HashSet<_> =
            rejections.iter().map(|r| r.code()).collect();
        assert_eq!(codes.len(), rejections.len());
    }

    #[test]
    fn test_rejection_kinds() {
        assert_eq!(
            Rejection::LunchAlreadyActive.kind(),
            RejectionKind::DuplicateActive
        );
        assert_eq!(
            Rejection::NoActiveBreak.kind(),
            RejectionKind::InvalidTransition
        );
        assert_eq!(
            Rejection::NoActiveShift.kind(),
            RejectionKind::NoActiveShift
        );
    }
}
