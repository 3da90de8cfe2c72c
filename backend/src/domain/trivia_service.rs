//! Trivia use cases.
//!
//! `TriviaService` implements both driving ports over a
//! [`QuestionRepository`] and a [`RandomSource`]. It owns the client-facing
//! failure rules (which empty results are errors, and which error) and leaves
//! everything else to the store.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{DEFAULT_PAGE_SIZE, PageNumber, PageWindow};
use tracing::{debug, error};

use crate::domain::ports::{
    QuestionPage, QuestionRepository, QuestionRepositoryError, RandomSource, TriviaCommand,
    TriviaQuery,
};
use crate::domain::{
    Category, CategoryId, Error, NewQuestion, Question, QuestionId, QuizOutcome, QuizRequest,
};

const PAGE_OUT_OF_RANGE: &str = "Page out of range";
const NO_QUESTIONS_IN_CATEGORY: &str = "No questions in this category";
const NO_SUCH_QUESTION: &str = "No such question";
const NO_RESULTS: &str = "No results";

fn map_repository_error(err: QuestionRepositoryError) -> Error {
    error!(error = %err, "question store failure");
    match err {
        QuestionRepositoryError::Connection { .. } => {
            Error::service_unavailable("Service Unavailable")
        }
        QuestionRepositoryError::Query { message } => {
            Error::internal(format!("question store error: {message}"))
        }
    }
}

/// Trivia service implementing [`TriviaQuery`] and [`TriviaCommand`].
pub struct TriviaService<R: ?Sized> {
    questions: Arc<R>,
    random: Arc<dyn RandomSource>,
}

impl<R: ?Sized> Clone for TriviaService<R> {
    fn clone(&self) -> Self {
        Self {
            questions: Arc::clone(&self.questions),
            random: Arc::clone(&self.random),
        }
    }
}

impl<R: ?Sized> TriviaService<R> {
    /// Create a service over a question store and a random source.
    pub fn new(questions: Arc<R>, random: Arc<dyn RandomSource>) -> Self {
        Self { questions, random }
    }
}

impl<R> TriviaService<R>
where
    R: QuestionRepository + ?Sized,
{
    fn pick(&self, mut candidates: Vec<Question>) -> Result<QuizOutcome, Error> {
        let Some(index) = self.random.pick_index(candidates.len()) else {
            return Ok(QuizOutcome::Exhausted);
        };
        if index >= candidates.len() {
            error!(index, len = candidates.len(), "random source returned index out of bounds");
            return Err(Error::internal("quiz draw failed"));
        }
        Ok(QuizOutcome::Found(candidates.swap_remove(index)))
    }
}

#[async_trait]
impl<R> TriviaQuery for TriviaService<R>
where
    R: QuestionRepository + ?Sized,
{
    async fn categories(&self) -> Result<Vec<Category>, Error> {
        self.questions
            .list_categories()
            .await
            .map_err(map_repository_error)
    }

    async fn questions_page(&self, page: PageNumber) -> Result<QuestionPage, Error> {
        let window = PageWindow::for_page(page, DEFAULT_PAGE_SIZE)
            .ok_or_else(|| Error::unprocessable(PAGE_OUT_OF_RANGE))?;
        let listing = self
            .questions
            .question_page(window)
            .await
            .map_err(map_repository_error)?;
        if listing.questions.is_empty() {
            debug!(%page, total = listing.total_questions, "page selects no questions");
            return Err(Error::unprocessable(PAGE_OUT_OF_RANGE));
        }
        Ok(listing)
    }

    async fn questions_by_category(&self, category: CategoryId) -> Result<Vec<Question>, Error> {
        let questions = self
            .questions
            .questions_in_category(category)
            .await
            .map_err(map_repository_error)?;
        if questions.is_empty() {
            return Err(Error::not_found(NO_QUESTIONS_IN_CATEGORY));
        }
        Ok(questions)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, Error> {
        let questions = self
            .questions
            .search_questions(term)
            .await
            .map_err(map_repository_error)?;
        if questions.is_empty() {
            return Err(Error::not_found(NO_RESULTS));
        }
        Ok(questions)
    }

    async fn next_quiz_question(&self, request: QuizRequest) -> Result<QuizOutcome, Error> {
        let candidates = self
            .questions
            .quiz_candidates(&request)
            .await
            .map_err(map_repository_error)?;
        debug!(
            candidates = candidates.len(),
            excluded = request.previous_questions().len(),
            "drawing quiz question"
        );
        self.pick(candidates)
    }
}

#[async_trait]
impl<R> TriviaCommand for TriviaService<R>
where
    R: QuestionRepository + ?Sized,
{
    async fn add_question(&self, question: NewQuestion) -> Result<Question, Error> {
        let stored = self
            .questions
            .insert_question(&question)
            .await
            .map_err(map_repository_error)?;
        debug!(question_id = %stored.id, "question created");
        Ok(stored)
    }

    async fn delete_question(&self, id: QuestionId) -> Result<(), Error> {
        let deleted = self
            .questions
            .delete_question(id)
            .await
            .map_err(map_repository_error)?;
        if !deleted {
            return Err(Error::unprocessable(NO_SUCH_QUESTION));
        }
        debug!(question_id = %id, "question deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "trivia_service_tests.rs"]
mod tests;
