//! Display-ready shift history for the reporting view.
//!
//! These types carry pre-formatted timestamps; they are a read model built
//! from store contents and enforce no invariants of their own.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{BreakSpan, LunchSpan, ShiftRecord};

/// Timestamp format used for display (`MM-DD-YYYY HH:MM:SS`).
pub const DISPLAY_FORMAT: &str = "%m-%d-%Y %H:%M:%S";

/// One shift, with its lunch and break spans, formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftHistory {
    /// Unique identifier for the shift.
    pub shift_id: Uuid,
    /// Formatted shift start timestamp.
    pub shift_start: String,
    /// Formatted shift end timestamp, absent while the shift is open.
    pub shift_end: Option<String>,
    /// "Yes" while the shift is open, "No" once ended.
    pub active_shift: String,
    /// Lunches taken during the shift.
    pub lunches: Vec<SpanHistory>,
    /// Breaks taken during the shift.
    pub breaks: Vec<SpanHistory>,
}

/// A lunch or break span formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanHistory {
    /// Formatted span start timestamp.
    pub start: String,
    /// Formatted span end timestamp, absent while the span is open.
    pub end: Option<String>,
    /// True until the span is ended.
    pub is_active: bool,
}

impl ShiftHistory {
    /// Builds a display row from a shift record and the spans it owns.
    pub fn from_records(
        shift: &ShiftRecord,
        lunches: &[LunchSpan],
        breaks: &[BreakSpan],
    ) -> Self {
        Self {
            shift_id: shift.shift_id,
            shift_start: shift.start_time.format(DISPLAY_FORMAT).to_string(),
            shift_end: shift
                .end_time
                .map(|t| t.format(DISPLAY_FORMAT).to_string()),
            active_shift: if shift.is_active { "Yes" } else { "No" }.to_string(),
            lunches: lunches
                .iter()
                .filter(|l| l.shift_id == shift.shift_id)
                .map(|l| SpanHistory {
                    start: l.start_time.format(DISPLAY_FORMAT).to_string(),
                    end: l.end_time.map(|t| t.format(DISPLAY_FORMAT).to_string()),
                    is_active: l.is_active,
                })
                .collect(),
            breaks: breaks
                .iter()
                .filter(|b| b.shift_id == shift.shift_id)
                .map(|b| SpanHistory {
                    start: b.start_time.format(DISPLAY_FORMAT).to_string(),
                    end: b.end_time.map(|t| t.format(DISPLAY_FORMAT).to_string()),
                    is_active: b.is_active,
                })
                .collect(),
        }
    }
}
