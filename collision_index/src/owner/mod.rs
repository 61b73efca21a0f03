//! Owner references
//!
//! Tagged, non-owning references from collision handles to the gameplay
//! objects that registered them.

mod owner_ref;

pub use owner_ref::{OwnerKind, OwnerRef};
