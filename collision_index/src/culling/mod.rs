//! Culling tools
//!
//! Maintenance passes that inspect every registered volume and disable the
//! ones that no longer matter, without removing their handles.

mod offscreen_culler;

pub use offscreen_culler::{CullTarget, OffscreenCuller, OffscreenCullerConfig};
