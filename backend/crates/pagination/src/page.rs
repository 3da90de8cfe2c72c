//! Client-supplied page numbers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors raised while parsing a page number from request input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageNumberError {
    /// The page value was present but empty.
    #[error("page number must not be empty")]
    Empty,
    /// The page value is not a base-10 integer.
    #[error("page number must be an integer, got {value:?}")]
    NotAnInteger {
        /// The raw value supplied by the client.
        value: String,
    },
}

/// A page number as requested by a client.
///
/// The value is any integer. Page numbers below one are representable because
/// they are syntactically valid requests; they simply select no rows (see
/// [`crate::PageWindow::for_page`]).
///
/// # Examples
///
/// ```
/// use pagination::{PageNumber, PageNumberError};
///
/// assert_eq!(PageNumber::parse("2").map(PageNumber::get), Ok(2));
/// assert!(matches!(
///     PageNumber::parse("two"),
///     Err(PageNumberError::NotAnInteger { .. })
/// ));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageNumber(i64);

impl PageNumber {
    /// The first page.
    pub const FIRST: Self = Self(1);

    /// Wrap an already-parsed page number.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Parse a page number from raw query-string text.
    ///
    /// # Errors
    ///
    /// Returns [`PageNumberError::Empty`] for an empty string and
    /// [`PageNumberError::NotAnInteger`] when the text is not an integer.
    pub fn parse(raw: &str) -> Result<Self, PageNumberError> {
        if raw.is_empty() {
            return Err(PageNumberError::Empty);
        }
        raw.parse::<i64>()
            .map(Self)
            .map_err(|_| PageNumberError::NotAnInteger {
                value: raw.to_owned(),
            })
    }

    /// Return the raw page value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl FromStr for PageNumber {
    type Err = PageNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
