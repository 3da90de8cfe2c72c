//! PostgreSQL-backed question store.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::Error as DieselError;
use diesel_async::AsyncConnection as _;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use diesel_async::pooled_connection::bb8::PooledConnection;
use pagination::PageWindow;

use crate::domain::ports::{QuestionPage, QuestionRepository, QuestionRepositoryError};
use crate::domain::{Category, CategoryId, NewQuestion, Question, QuestionId, QuizRequest};

use super::diesel_helpers::{LIKE_ESCAPE, contains_pattern, map_diesel_error, map_pool_error};
use super::models::{CategoryRow, NewQuestionRow, QuestionRow};
use super::pool::DbPool;
use super::schema::{categories, questions};

/// Diesel implementation of [`QuestionRepository`].
///
/// Every method checks out one connection and runs its statements in a
/// single transaction.
#[derive(Clone)]
pub struct DieselQuestionRepository {
    pool: DbPool,
}

impl DieselQuestionRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn connection(
        &self,
    ) -> Result<PooledConnection<'_, AsyncPgConnection>, QuestionRepositoryError> {
        self.pool.get().await.map_err(map_pool_error)
    }
}

async fn load_categories(conn: &mut AsyncPgConnection) -> Result<Vec<CategoryRow>, DieselError> {
    categories::table
        .select(CategoryRow::as_select())
        .order_by(categories::id)
        .load(conn)
        .await
}

fn into_questions(rows: Vec<QuestionRow>) -> Vec<Question> {
    rows.into_iter().map(Question::from).collect()
}

#[async_trait]
impl QuestionRepository for DieselQuestionRepository {
    async fn list_categories(&self) -> Result<Vec<Category>, QuestionRepositoryError> {
        let mut conn = self.connection().await?;
        let rows = conn
            .transaction(|conn| async move { load_categories(conn).await }.scope_boxed())
            .await
            .map_err(|err: DieselError| map_diesel_error(err, "list categories"))?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn question_page(
        &self,
        window: PageWindow,
    ) -> Result<QuestionPage, QuestionRepositoryError> {
        let mut conn = self.connection().await?;
        let (rows, total_questions, category_rows) = conn
            .transaction(|conn| {
                async move {
                    let rows: Vec<QuestionRow> = questions::table
                        .select(QuestionRow::as_select())
                        .order_by(questions::id)
                        .offset(window.offset())
                        .limit(window.limit())
                        .load(conn)
                        .await?;
                    let total: i64 = questions::table.count().get_result(conn).await?;
                    let category_rows = load_categories(conn).await?;
                    Ok((rows, total, category_rows))
                }
                .scope_boxed()
            })
            .await
            .map_err(|err: DieselError| map_diesel_error(err, "list questions"))?;

        Ok(QuestionPage {
            questions: into_questions(rows),
            total_questions,
            categories: category_rows.into_iter().map(Category::from).collect(),
        })
    }

    async fn questions_in_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        let mut conn = self.connection().await?;
        let rows = conn
            .transaction(|conn| {
                async move {
                    let rows: Vec<QuestionRow> = questions::table
                        .filter(questions::category.eq(category.get()))
                        .select(QuestionRow::as_select())
                        .order_by(questions::id)
                        .load(conn)
                        .await?;
                    Ok(rows)
                }
                .scope_boxed()
            })
            .await
            .map_err(|err: DieselError| map_diesel_error(err, "questions by category"))?;
        Ok(into_questions(rows))
    }

    async fn search_questions(
        &self,
        term: &str,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        let pattern = contains_pattern(term);
        let mut conn = self.connection().await?;
        let rows = conn
            .transaction(|conn| {
                async move {
                    let rows: Vec<QuestionRow> = questions::table
                        .filter(questions::question.ilike(pattern).escape(LIKE_ESCAPE))
                        .select(QuestionRow::as_select())
                        .order_by(questions::id)
                        .load(conn)
                        .await?;
                    Ok(rows)
                }
                .scope_boxed()
            })
            .await
            .map_err(|err: DieselError| map_diesel_error(err, "search questions"))?;
        Ok(into_questions(rows))
    }

    async fn quiz_candidates(
        &self,
        request: &QuizRequest,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        let excluded_ids: Vec<i32> = request
            .previous_questions()
            .iter()
            .map(|id| id.get())
            .collect();
        let category = request.category().category_id();
        let mut conn = self.connection().await?;
        let rows = conn
            .transaction(|conn| {
                async move {
                    let mut query = questions::table
                        .select(QuestionRow::as_select())
                        .order_by(questions::id)
                        .into_boxed();
                    if !excluded_ids.is_empty() {
                        query = query.filter(questions::id.ne_all(excluded_ids));
                    }
                    if let Some(category) = category {
                        query = query.filter(questions::category.eq(category.get()));
                    }
                    let rows: Vec<QuestionRow> = query.load(conn).await?;
                    Ok(rows)
                }
                .scope_boxed()
            })
            .await
            .map_err(|err: DieselError| map_diesel_error(err, "quiz candidates"))?;
        Ok(into_questions(rows))
    }

    async fn insert_question(
        &self,
        question: &NewQuestion,
    ) -> Result<Question, QuestionRepositoryError> {
        let row = NewQuestionRow::from(question);
        let mut conn = self.connection().await?;
        let stored = conn
            .transaction(|conn| {
                async move {
                    let stored: QuestionRow = diesel::insert_into(questions::table)
                        .values(&row)
                        .returning(QuestionRow::as_returning())
                        .get_result(conn)
                        .await?;
                    Ok(stored)
                }
                .scope_boxed()
            })
            .await
            .map_err(|err: DieselError| map_diesel_error(err, "insert question"))?;
        Ok(Question::from(stored))
    }

    async fn delete_question(&self, id: QuestionId) -> Result<bool, QuestionRepositoryError> {
        let mut conn = self.connection().await?;
        let deleted = conn
            .transaction(|conn| {
                async move {
                    let existing: Option<i32> = questions::table
                        .find(id.get())
                        .select(questions::id)
                        .for_update()
                        .first(conn)
                        .await
                        .optional()?;
                    if existing.is_none() {
                        return Ok(false);
                    }
                    let removed = diesel::delete(questions::table.find(id.get()))
                        .execute(conn)
                        .await?;
                    Ok(removed > 0)
                }
                .scope_boxed()
            })
            .await
            .map_err(|err: DieselError| map_diesel_error(err, "delete question"))?;
        Ok(deleted)
    }
}
