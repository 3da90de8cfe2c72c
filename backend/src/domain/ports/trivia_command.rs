//! Driving port for trivia mutations.

use async_trait::async_trait;

use crate::domain::{Error, NewQuestion, Question, QuestionId};

/// Write-side trivia operations exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TriviaCommand: Send + Sync {
    /// Store a new question exactly as submitted.
    async fn add_question(&self, question: NewQuestion) -> Result<Question, Error>;

    /// Permanently delete a question.
    ///
    /// Fails with an unprocessable error when the question does not exist.
    async fn delete_question(&self, id: QuestionId) -> Result<(), Error>;
}
