//! Driving port for read-only trivia use cases.

use async_trait::async_trait;
use pagination::PageNumber;

use crate::domain::{Category, CategoryId, Error, Question, QuizOutcome, QuizRequest};

use super::QuestionPage;

/// Read-side trivia operations exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TriviaQuery: Send + Sync {
    /// Every category ordered by id.
    async fn categories(&self) -> Result<Vec<Category>, Error>;

    /// The requested page of questions.
    ///
    /// Fails with an unprocessable error when the page selects no rows.
    async fn questions_page(&self, page: PageNumber) -> Result<QuestionPage, Error>;

    /// Every question in `category`.
    ///
    /// Fails with a not-found error when the category has no questions,
    /// whether or not the category exists.
    async fn questions_by_category(&self, category: CategoryId) -> Result<Vec<Question>, Error>;

    /// Questions whose text contains `term`, ignoring case.
    ///
    /// Fails with a not-found error when nothing matches.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, Error>;

    /// Pick the next quiz question, or report that the round is exhausted.
    async fn next_quiz_question(&self, request: QuizRequest) -> Result<QuizOutcome, Error>;
}
