//! Driven port for the question store.
//!
//! Each method is one unit of work against the store: adapters run it inside
//! a single transaction and release their connection before returning, so
//! callers never see partially applied changes.

use async_trait::async_trait;
use pagination::PageWindow;

use crate::domain::{Category, CategoryId, NewQuestion, Question, QuestionId, QuizRequest};

use super::define_port_error;

define_port_error! {
    /// Errors raised by question store adapters.
    pub enum QuestionRepositoryError {
        /// A store connection could not be obtained.
        Connection { message: String } =>
            "question store connection failed: {message}",
        /// A statement failed or returned rows that could not be converted.
        Query { message: String } =>
            "question store query failed: {message}",
    }
}

/// One page of questions plus the listing context shown alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPage {
    /// Questions inside the requested window, in listing order.
    pub questions: Vec<Question>,
    /// Number of questions across all pages.
    pub total_questions: i64,
    /// Every category, ordered by id.
    pub categories: Vec<Category>,
}

/// Port for reading and mutating stored questions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Every category ordered by id.
    async fn list_categories(&self) -> Result<Vec<Category>, QuestionRepositoryError>;

    /// Questions inside `window` (ordered by id), the total count, and the
    /// category list, read from one consistent snapshot.
    async fn question_page(
        &self,
        window: PageWindow,
    ) -> Result<QuestionPage, QuestionRepositoryError>;

    /// Questions whose category equals `category`, ordered by id.
    async fn questions_in_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, QuestionRepositoryError>;

    /// Questions whose text contains `term`, ignoring case. The answer text
    /// is not searched.
    async fn search_questions(&self, term: &str)
    -> Result<Vec<Question>, QuestionRepositoryError>;

    /// Questions the quiz round in `request` may still ask, in id order.
    async fn quiz_candidates(
        &self,
        request: &QuizRequest,
    ) -> Result<Vec<Question>, QuestionRepositoryError>;

    /// Store a new question and return it with its assigned id.
    async fn insert_question(
        &self,
        question: &NewQuestion,
    ) -> Result<Question, QuestionRepositoryError>;

    /// Delete a question. Returns `false` when no such question exists.
    async fn delete_question(&self, id: QuestionId) -> Result<bool, QuestionRepositoryError>;
}
