//! Shared types and pure vector/matrix helpers.
//!
//! # Invariants
//! - Math helpers are pure functions with no state.
//! - No helper produces NaN from a finite input: zero-length directions stay zero.

pub mod math;
pub mod types;

pub use types::{DisplayConfig, EntityId};
