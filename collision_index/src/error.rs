//! Error types for the collision index
//!
//! The collision index itself never fails on unknown handles (every handle
//! operation has a neutral result). Errors only come from configuration
//! validation and from the engine session lifecycle.

use std::fmt;

/// Result type for collision index operations
pub type Result<T> = std::result::Result<T, Error>;

/// Collision index errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Initialization failed (engine session, shared collision index)
    InitializationFailed(String),

    /// A configuration value is out of range (octree bounds, culler margins, ...)
    InvalidParameter(String),

    /// A lock guarding shared state was poisoned by a panicking thread
    LockPoisoned(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::LockPoisoned(msg) => write!(f, "Lock poisoned: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Log an ERROR entry and build an `Error::InvalidParameter` from the same message.
///
/// # Example
///
/// ```no_run
/// # use collision_index::collision_err;
/// # fn check(depth: u32) -> collision_index::collision::Result<()> {
/// if depth > 6 {
///     return Err(collision_err!("collision::Octree", "max_depth {} exceeds 6", depth));
/// }
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! collision_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::collision_error!($source, "{}", message);
        $crate::collision::Error::InvalidParameter(message)
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
