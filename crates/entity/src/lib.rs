//! Entities ("children"): flat, positioned, renderable units.
//!
//! Each entity integrates its own velocity and gravity, produces a
//! translation-only model matrix, and owns a registry of copies that can be
//! drawn with its mesh in one instanced submission.
//!
//! # Invariants
//! - Geometry and materials are referenced by handle, never owned.
//! - `current_copies` is always a subset of `copies`; it is rebuilt, never patched.
//! - Every registry mutation produces an event.

mod child;
mod copy;
mod draw;
mod handle;
mod registry;

pub use child::{Child, GeometryBinding};
pub use copy::{CopyDescriptor, CopySet};
pub use draw::DrawCall;
pub use handle::{MaterialHandle, MeshHandle};
pub use registry::{EntityRegistry, RegistryEvent};
