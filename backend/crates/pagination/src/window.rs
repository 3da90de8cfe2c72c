//! Offset/limit windows derived from page numbers.

use std::num::NonZeroU32;

use crate::PageNumber;

/// Number of rows on a single page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(NonZeroU32);

impl PageSize {
    /// Create a page size from a non-zero row count.
    #[must_use]
    pub const fn new(rows: NonZeroU32) -> Self {
        Self(rows)
    }

    /// Return the row count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

/// Page size used by every listing endpoint.
pub const DEFAULT_PAGE_SIZE: PageSize = PageSize(NonZeroU32::MIN.saturating_add(9));

/// Row window selected by a page number.
///
/// `offset` rows are skipped and at most `limit` rows are returned. Both are
/// expressed as `i64` because that is what SQL `OFFSET`/`LIMIT` bindings use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageWindow {
    offset: i64,
    limit: i64,
}

impl PageWindow {
    /// Compute the window for `page`, or `None` when the page cannot select
    /// any rows.
    ///
    /// Page numbers below one and pages whose offset would overflow yield
    /// `None`. Callers treat that the same way as a window past the end of the
    /// data: the page is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagination::{PageNumber, PageWindow, DEFAULT_PAGE_SIZE};
    ///
    /// let first = PageWindow::for_page(PageNumber::FIRST, DEFAULT_PAGE_SIZE);
    /// assert_eq!(first.map(|w| w.offset()), Some(0));
    /// assert!(PageWindow::for_page(PageNumber::new(0), DEFAULT_PAGE_SIZE).is_none());
    /// ```
    #[must_use]
    pub fn for_page(page: PageNumber, size: PageSize) -> Option<Self> {
        let limit = i64::from(size.get());
        let preceding_pages = page.get().checked_sub(1).filter(|n| *n >= 0)?;
        let offset = preceding_pages.checked_mul(limit)?;
        Some(Self { offset, limit })
    }

    /// Rows to skip before the window starts.
    #[must_use]
    pub const fn offset(self) -> i64 {
        self.offset
    }

    /// Maximum rows in the window.
    #[must_use]
    pub const fn limit(self) -> i64 {
        self.limit
    }
}
