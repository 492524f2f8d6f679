use std::num::NonZeroUsize;

/// Tracks which of `N` pages is visible.
///
/// Exactly one page is active at any time. Navigation never wraps around and
/// out-of-range targets are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    total: NonZeroUsize,
    current: usize,
}

impl Paginator {
    /// Creates a paginator showing the first page.
    #[must_use]
    pub fn new(total: NonZeroUsize) -> Self {
        Self { total, current: 0 }
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total.get()
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.current == index
    }

    /// Shows the page at `index`.
    ///
    /// Returns `false` without touching state when `index` is out of range.
    /// Showing the page that is already active is allowed and returns `true`.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.total() {
            return false;
        }
        self.current = index;
        true
    }

    /// Moves one page forward. No-op on the last page.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.go_to(self.current + 1)
    }

    /// Moves one page back. No-op on the first page.
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.go_to(self.current - 1)
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current + 1 == self.total()
    }

    #[must_use]
    pub fn prev_disabled(&self) -> bool {
        self.is_first()
    }

    #[must_use]
    pub fn next_disabled(&self) -> bool {
        self.is_last()
    }

    /// Page indicator text, e.g. `Page 2 / 5`.
    #[must_use]
    pub fn indicator(&self) -> String {
        format!("Page {} / {}", self.current + 1, self.total())
    }
}
