//! In-process question store.
//!
//! Used when no database is configured and by the HTTP integration tests.
//! Ids are assigned from a counter that never reuses a deleted id, like a
//! PostgreSQL sequence.

mod seed;

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use pagination::PageWindow;

use crate::domain::ports::{QuestionPage, QuestionRepository, QuestionRepositoryError};
use crate::domain::{Category, CategoryId, NewQuestion, Question, QuestionId, QuizRequest};

#[derive(Debug, Default)]
struct Store {
    categories: Vec<Category>,
    questions: BTreeMap<QuestionId, Question>,
    last_id: i32,
}

impl Store {
    fn insert(&mut self, draft: NewQuestion) -> Result<Question, QuestionRepositoryError> {
        let next = self
            .last_id
            .checked_add(1)
            .ok_or_else(|| QuestionRepositoryError::query("question id sequence exhausted"))?;
        self.last_id = next;
        let question = Question::from_new(QuestionId::new(next), draft);
        self.questions.insert(question.id, question.clone());
        Ok(question)
    }

    fn matching(&self, keep: impl Fn(&Question) -> bool) -> Vec<Question> {
        self.questions.values().filter(|q| keep(q)).cloned().collect()
    }
}

/// [`QuestionRepository`] held in memory behind a read-write lock.
#[derive(Debug, Default)]
pub struct InMemoryQuestionRepository {
    store: RwLock<Store>,
}

impl InMemoryQuestionRepository {
    /// Build a store with `categories` and `questions`, assigning ids from 1
    /// in iteration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use trivia_backend::domain::{Category, CategoryId};
    /// use trivia_backend::outbound::memory::InMemoryQuestionRepository;
    ///
    /// let repo = InMemoryQuestionRepository::new(
    ///     vec![Category::new(CategoryId::new(1), "Science")],
    ///     Vec::new(),
    /// );
    /// # let _ = repo;
    /// ```
    pub fn new(mut categories: Vec<Category>, questions: Vec<NewQuestion>) -> Self {
        categories.sort_by_key(|category| category.id);
        let mut store = Store {
            categories,
            ..Store::default()
        };
        for draft in questions {
            // Seed sizes are far below i32::MAX.
            if store.insert(draft).is_err() {
                break;
            }
        }
        Self {
            store: RwLock::new(store),
        }
    }

    /// Store pre-populated with the sample categories and questions that the
    /// database seed migrations insert.
    pub fn with_sample_data() -> Self {
        Self::new(seed::categories(), seed::questions())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Store>, QuestionRepositoryError> {
        self.store
            .read()
            .map_err(|_| QuestionRepositoryError::query("question store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Store>, QuestionRepositoryError> {
        self.store
            .write()
            .map_err(|_| QuestionRepositoryError::query("question store lock poisoned"))
    }
}

fn window_bounds(window: PageWindow) -> (usize, usize) {
    let offset = usize::try_from(window.offset()).unwrap_or(usize::MAX);
    let limit = usize::try_from(window.limit()).unwrap_or(usize::MAX);
    (offset, limit)
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn list_categories(&self) -> Result<Vec<Category>, QuestionRepositoryError> {
        Ok(self.read()?.categories.clone())
    }

    async fn question_page(
        &self,
        window: PageWindow,
    ) -> Result<QuestionPage, QuestionRepositoryError> {
        let store = self.read()?;
        let (offset, limit) = window_bounds(window);
        let questions = store
            .questions
            .values()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();
        let total_questions = i64::try_from(store.questions.len())
            .map_err(|_| QuestionRepositoryError::query("question count overflow"))?;
        Ok(QuestionPage {
            questions,
            total_questions,
            categories: store.categories.clone(),
        })
    }

    async fn questions_in_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        Ok(self.read()?.matching(|q| q.category == category))
    }

    async fn search_questions(
        &self,
        term: &str,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        Ok(self.read()?.matching(|q| q.question_contains(term)))
    }

    async fn quiz_candidates(
        &self,
        request: &QuizRequest,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        Ok(self.read()?.matching(|q| request.admits(q)))
    }

    async fn insert_question(
        &self,
        question: &NewQuestion,
    ) -> Result<Question, QuestionRepositoryError> {
        self.write()?.insert(question.clone())
    }

    async fn delete_question(&self, id: QuestionId) -> Result<bool, QuestionRepositoryError> {
        Ok(self.write()?.questions.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::QuizCategory;
    use pagination::{DEFAULT_PAGE_SIZE, PageNumber};
    use rstest::{fixture, rstest};

    #[fixture]
    fn repo() -> InMemoryQuestionRepository {
        InMemoryQuestionRepository::with_sample_data()
    }

    fn window(page: i64) -> PageWindow {
        PageWindow::for_page(PageNumber::new(page), DEFAULT_PAGE_SIZE).expect("positive page")
    }

    #[rstest]
    #[tokio::test]
    async fn sample_data_has_six_categories(repo: InMemoryQuestionRepository) {
        let categories = repo.list_categories().await.expect("categories");
        let labels: Vec<&str> = categories.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            ["Science", "Art", "Geography", "History", "Entertainment", "Sports"]
        );
    }

    #[rstest]
    #[case(1, 10)]
    #[case(2, 9)]
    #[case(3, 0)]
    #[tokio::test]
    async fn pages_are_ten_rows_wide(
        repo: InMemoryQuestionRepository,
        #[case] page: i64,
        #[case] expected: usize,
    ) {
        let listing = repo.question_page(window(page)).await.expect("page");
        assert_eq!(listing.questions.len(), expected);
        assert_eq!(listing.total_questions, 19);
    }

    #[rstest]
    #[tokio::test]
    async fn search_ignores_case_and_answers(repo: InMemoryQuestionRepository) {
        let found = repo.search_questions("TITLE").await.expect("search");
        assert_eq!(found.len(), 2);

        let by_answer = repo.search_questions("Uruguay").await.expect("search");
        assert!(by_answer.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn quiz_candidates_skip_excluded_and_other_categories(
        repo: InMemoryQuestionRepository,
    ) {
        let request = QuizRequest::new(
            [QuestionId::new(1)],
            QuizCategory::Only(CategoryId::new(1)),
        );
        let candidates = repo.quiz_candidates(&request).await.expect("candidates");
        let ids: Vec<i32> = candidates.iter().map(|q| q.id.get()).collect();
        assert_eq!(ids, [2, 3]);
    }

    #[rstest]
    #[tokio::test]
    async fn quiz_candidates_span_all_categories(repo: InMemoryQuestionRepository) {
        let request = QuizRequest::new((1..=18).map(QuestionId::new), QuizCategory::All);
        let candidates = repo.quiz_candidates(&request).await.expect("candidates");
        let ids: Vec<i32> = candidates.iter().map(|q| q.id.get()).collect();
        assert_eq!(ids, [19]);
    }

    #[rstest]
    #[tokio::test]
    async fn deleted_ids_are_not_reused(repo: InMemoryQuestionRepository) {
        assert!(repo.delete_question(QuestionId::new(19)).await.expect("delete"));
        assert!(!repo.delete_question(QuestionId::new(19)).await.expect("delete"));

        let stored = repo
            .insert_question(&NewQuestion {
                question: "question".to_owned(),
                answer: "answer".to_owned(),
                difficulty: 1,
                category: CategoryId::new(1),
            })
            .await
            .expect("insert");
        assert_eq!(stored.id, QuestionId::new(20));
    }
}
