//! Page-number pagination primitives shared by trivia backend endpoints.
//!
//! Listing endpoints accept a 1-based page number from the query string and
//! translate it into an offset/limit window over a stable row order. The
//! crate keeps that arithmetic in one place so handlers and repositories agree
//! on what "page 3" means.
//!
//! Parsing and windowing are separate steps on purpose: a page value that is
//! not an integer is a malformed request, while an integer that selects no
//! rows (zero, negative, or past the end) is a well-formed request for an
//! empty page.
//!
//! # Examples
//!
//! ```
//! use pagination::{PageNumber, PageWindow, DEFAULT_PAGE_SIZE};
//!
//! let page: PageNumber = "3".parse().expect("integer page");
//! let window = PageWindow::for_page(page, DEFAULT_PAGE_SIZE).expect("positive page");
//! assert_eq!(window.offset(), 20);
//! assert_eq!(window.limit(), 10);
//! ```

mod page;
mod window;

pub use page::{PageNumber, PageNumberError};
pub use window::{DEFAULT_PAGE_SIZE, PageSize, PageWindow};
