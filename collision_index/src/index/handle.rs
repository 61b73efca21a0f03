use std::fmt;

/// Stable identifier of one registered bounding volume.
///
/// Handles are issued in increasing order starting at 0 and are never
/// reused by the index that issued them, so a stale handle can only ever
/// resolve to "gone", never to another object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColliderHandle(u64);

impl ColliderHandle {
    /// Wrap a raw handle value (e.g. one stored by a consumer as an integer).
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw handle value
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ColliderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
