//! Trivia questions and categories.
//!
//! Questions are created and deleted but never edited. Categories are
//! pre-populated reference data. Neither type validates its contents: the
//! service accepts whatever difficulty and category a client submits and
//! leaves referential integrity to the store.

use std::fmt;

/// Store-assigned question identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuestionId(i32);

impl QuestionId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for QuestionId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CategoryId(i32);

impl CategoryId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for CategoryId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A question category such as "Science" or "History".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    /// Display label, exposed on the wire as the category's `type`.
    pub label: String,
}

impl Category {
    /// Build a category from its parts.
    pub fn new(id: CategoryId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// Client-submitted fields of a question that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: CategoryId,
}

/// A stored trivia question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: CategoryId,
}

impl Question {
    /// Attach a store-assigned identifier to submitted fields.
    ///
    /// # Examples
    /// ```
    /// use trivia_backend::domain::{CategoryId, NewQuestion, Question, QuestionId};
    ///
    /// let stored = Question::from_new(
    ///     QuestionId::new(7),
    ///     NewQuestion {
    ///         question: "Who painted the Mona Lisa?".to_owned(),
    ///         answer: "Leonardo da Vinci".to_owned(),
    ///         difficulty: 2,
    ///         category: CategoryId::new(2),
    ///     },
    /// );
    /// assert_eq!(stored.id.get(), 7);
    /// ```
    pub fn from_new(id: QuestionId, draft: NewQuestion) -> Self {
        let NewQuestion {
            question,
            answer,
            difficulty,
            category,
        } = draft;
        Self {
            id,
            question,
            answer,
            difficulty,
            category,
        }
    }

    /// Whether the question text contains `term`, ignoring case.
    ///
    /// Mirrors the store's case-insensitive substring search so in-process
    /// adapters agree with PostgreSQL `ILIKE`.
    pub fn question_contains(&self, term: &str) -> bool {
        self.question.to_lowercase().contains(&term.to_lowercase())
    }
}
