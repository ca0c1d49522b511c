//! Pagination window for list queries.

/// Page size used when the requested count is absent or out of range
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Largest page size a caller may request
pub const MAX_PAGE_SIZE: i64 = 10;

/// Offset/limit window, always within bounds once constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    start: i64,
    count: i64,
}

impl Page {
    /// Build a page from raw request values.
    ///
    /// A `count` outside `[1, MAX_PAGE_SIZE]` falls back to
    /// `DEFAULT_PAGE_SIZE`; a negative `start` becomes 0. `start` has no
    /// upper bound.
    #[must_use]
    pub fn clamped(start: Option<i64>, count: Option<i64>) -> Self {
        let count = match count {
            Some(count) if (1..=MAX_PAGE_SIZE).contains(&count) => count,
            _ => DEFAULT_PAGE_SIZE,
        };
        let start = start.filter(|start| *start >= 0).unwrap_or(0);

        Self { start, count }
    }

    #[must_use]
    pub fn start(&self) -> i64 {
        self.start
    }

    #[must_use]
    pub fn count(&self) -> i64 {
        self.count
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::clamped(None, None)
    }
}
