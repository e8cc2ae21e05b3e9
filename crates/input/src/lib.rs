//! Input: immutable per-frame snapshot and key-to-movement bindings.
//!
//! # Invariants
//! - A snapshot is produced once per frame by the windowing layer and never mutated.
//! - Cameras consume movement actions, never raw key names.

pub mod action;
pub mod snapshot;

pub use action::{CameraAction, KeyBindings};
pub use snapshot::InputSnapshot;
