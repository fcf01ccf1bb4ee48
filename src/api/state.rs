//! Application state for the punch-clock API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::clock::TimeClock;
use crate::store::MemoryStore;

/// Shared application state.
///
/// Holds the punch clock shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    clock: Arc<TimeClock<MemoryStore>>,
}

impl AppState {
    /// Creates a new application state around the given punch clock.
    pub fn new(clock: TimeClock<MemoryStore>) -> Self {
        Self {
            clock: Arc::new(clock),
        }
    }

    /// Returns a reference to the punch clock.
    pub fn clock(&self) -> &TimeClock<MemoryStore> {
        &self.clock
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TimeClock::new(MemoryStore::new()))
    }
}
