//! Core data models for the punch-clock engine.
//!
//! This module contains the record structs the store keeps, the action
//! enum, and the display-ready history view.

mod action;
mod history;
mod shift;

pub use action::ShiftAction;
pub use history::{DISPLAY_FORMAT, ShiftHistory, SpanHistory};
pub use shift::{BreakSpan, LunchSpan, ShiftRecord};
