/// Issues unique, monotonically increasing `u64` handle values.
///
/// Unlike a recycling slot allocator, values are never handed out again:
/// a stale handle held by a consumer can never alias a newer object. The
/// live count is owned by whoever stores the handles.
///
/// # Example
///
/// ```ignore
/// let mut alloc = HandleAllocator::new();
/// let a = alloc.alloc();  // 0
/// let b = alloc.alloc();  // 1
/// assert_eq!(alloc.high_water_mark(), 2);
/// ```
pub struct HandleAllocator {
    next_id: u64,
}

impl HandleAllocator {
    /// Create a new allocator starting at 0
    pub fn new() -> Self {
        Self { next_id: 0 }
    }

    /// Issue the next handle value
    pub fn alloc(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Highest value ever issued + 1 (total number of handles issued)
    pub fn high_water_mark(&self) -> u64 {
        self.next_id
    }
}

impl Default for HandleAllocator {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "handle_allocator_tests.rs"]
mod tests;
