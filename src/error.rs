//! Error types for the punch-clock engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the failures that can escape the engine. Transition rejections are
//! not errors; they are returned as values by the transition engine (see
//! [`crate::engine::Rejection`]).

use thiserror::Error;

/// The main error type for the punch-clock engine.
///
/// Only two things can go wrong below the transition engine: the stored
/// records are inconsistent, or the record store itself failed. Everything
/// else is a rejection, not an error.
///
/// # Example
///
/// ```
/// use punch_clock::error::ClockError;
///
/// let error = ClockError::DataIntegrity {
///     employee_id: "emp_001".to_string(),
///     message: "found 2 active shifts".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "data integrity violation for employee 'emp_001': found 2 active shifts"
/// );
/// ```
#[derive(Debug, Error)]
pub enum ClockError {
    /// The stored records violate an invariant (for example, more than one
    /// active shift for an employee). The operation is aborted rather than
    /// guessing which record is real.
    #[error("data integrity violation for employee '{employee_id}': {message}")]
    DataIntegrity {
        /// The employee whose records are inconsistent.
        employee_id: String,
        /// A description of the inconsistency.
        message: String,
    },

    /// The record store was unreachable or a transaction aborted. Safe for
    /// the caller to retry.
    #[error("record store failure: {message}")]
    Store {
        /// A description of the store failure.
        message: String,
    },
}

/// A type alias for Results that return ClockError.
pub type ClockResult<T> = Result<T, ClockError>;
