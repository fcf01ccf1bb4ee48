//! Punch-clock engine for tracking employee work sessions.
//!
//! This crate tracks shifts containing lunch and break spans, enforcing
//! which punch-clock actions are legal for an employee's current state.
//! The core is a pure transition engine over a resolved state, run inside
//! a per-employee store transaction so concurrent punches cannot violate
//! the one-active-shift invariant.

#![warn(missing_docs)]

pub mod api;
pub mod clock;
pub mod engine;
pub mod error;
pub mod models;
pub mod store;
