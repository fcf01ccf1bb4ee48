//! The punch-clock core: state resolution and the transition engine.
//!
//! [`resolve`] derives an employee's current state from their stored
//! records; [`decide`] applies the state-machine rules to a requested
//! action, producing either a write-set or a rejection. Both are pure with
//! respect to the store; [`crate::clock::TimeClock`] runs them inside a
//! store transaction so a punch is a single atomic unit.

mod resolver;
mod transition;

pub use resolver::{ActiveShift, ResolvedState, resolve};
pub use transition::{Rejection, RejectionKind, WriteSet, decide};
