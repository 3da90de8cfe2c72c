//! Tests for the trivia service.

use std::sync::Arc;

use mockall::predicate::eq;
use pagination::PageNumber;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{MockQuestionRepository, MockRandomSource};
use crate::domain::{ErrorCode, QuizCategory};

fn question(id: i32, category: i32) -> Question {
    Question {
        id: QuestionId::new(id),
        question: format!("Question {id}?"),
        answer: format!("Answer {id}"),
        difficulty: 1,
        category: CategoryId::new(category),
    }
}

fn categories() -> Vec<Category> {
    vec![
        Category::new(CategoryId::new(1), "Science"),
        Category::new(CategoryId::new(2), "Art"),
    ]
}

#[fixture]
fn unused_random() -> Arc<dyn RandomSource> {
    let mut random = MockRandomSource::new();
    random.expect_pick_index().times(0);
    Arc::new(random)
}

fn first_index_random() -> Arc<dyn RandomSource> {
    let mut random = MockRandomSource::new();
    random
        .expect_pick_index()
        .returning(|len| (len > 0).then_some(0));
    Arc::new(random)
}

fn service(repo: MockQuestionRepository, random: Arc<dyn RandomSource>) -> TriviaService<MockQuestionRepository> {
    TriviaService::new(Arc::new(repo), random)
}

#[rstest]
#[tokio::test]
async fn categories_are_returned_from_the_store(unused_random: Arc<dyn RandomSource>) {
    let mut repo = MockQuestionRepository::new();
    repo.expect_list_categories()
        .times(1)
        .return_once(|| Ok(categories()));

    let listed = service(repo, unused_random)
        .categories()
        .await
        .expect("categories load");

    assert_eq!(listed, categories());
}

#[rstest]
#[tokio::test]
async fn questions_page_uses_ten_row_windows(unused_random: Arc<dyn RandomSource>) {
    let mut repo = MockQuestionRepository::new();
    repo.expect_question_page()
        .withf(|window| window.offset() == 10 && window.limit() == 10)
        .times(1)
        .return_once(|_| {
            Ok(QuestionPage {
                questions: (11..=19).map(|id| question(id, 1)).collect(),
                total_questions: 19,
                categories: categories(),
            })
        });

    let page = service(repo, unused_random)
        .questions_page(PageNumber::new(2))
        .await
        .expect("second page exists");

    assert_eq!(page.questions.len(), 9);
    assert_eq!(page.total_questions, 19);
}

#[rstest]
#[tokio::test]
async fn empty_window_is_out_of_range(unused_random: Arc<dyn RandomSource>) {
    let mut repo = MockQuestionRepository::new();
    repo.expect_question_page().times(1).return_once(|_| {
        Ok(QuestionPage {
            questions: Vec::new(),
            total_questions: 19,
            categories: categories(),
        })
    });

    let err = service(repo, unused_random)
        .questions_page(PageNumber::new(1000))
        .await
        .expect_err("page beyond data");

    assert_eq!(err.code(), ErrorCode::Unprocessable);
    assert_eq!(err.message(), "Page out of range");
}

#[rstest]
#[case(0)]
#[case(-3)]
#[tokio::test]
async fn non_positive_pages_are_out_of_range_without_store_access(
    #[case] page: i64,
    unused_random: Arc<dyn RandomSource>,
) {
    let mut repo = MockQuestionRepository::new();
    repo.expect_question_page().times(0);

    let err = service(repo, unused_random)
        .questions_page(PageNumber::new(page))
        .await
        .expect_err("no rows before page one");

    assert_eq!(err.code(), ErrorCode::Unprocessable);
    assert_eq!(err.message(), "Page out of range");
}

#[rstest]
#[tokio::test]
async fn category_without_questions_is_not_found(unused_random: Arc<dyn RandomSource>) {
    let mut repo = MockQuestionRepository::new();
    repo.expect_questions_in_category()
        .with(eq(CategoryId::new(1000)))
        .times(1)
        .return_once(|_| Ok(Vec::new()));

    let err = service(repo, unused_random)
        .questions_by_category(CategoryId::new(1000))
        .await
        .expect_err("empty category");

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), "No questions in this category");
}

#[rstest]
#[tokio::test]
async fn category_questions_are_passed_through(unused_random: Arc<dyn RandomSource>) {
    let mut repo = MockQuestionRepository::new();
    repo.expect_questions_in_category()
        .with(eq(CategoryId::new(2)))
        .return_once(|_| Ok(vec![question(4, 2), question(8, 2)]));

    let found = service(repo, unused_random)
        .questions_by_category(CategoryId::new(2))
        .await
        .expect("category has questions");

    assert!(found.iter().all(|q| q.category == CategoryId::new(2)));
    assert_eq!(found.len(), 2);
}

#[rstest]
#[tokio::test]
async fn search_without_matches_is_not_found(unused_random: Arc<dyn RandomSource>) {
    let mut repo = MockQuestionRepository::new();
    repo.expect_search_questions()
        .withf(|term| term == "!@#$")
        .return_once(|_| Ok(Vec::new()));

    let err = service(repo, unused_random)
        .search_questions("!@#$")
        .await
        .expect_err("no matches");

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), "No results");
}

#[rstest]
#[tokio::test]
async fn deleting_missing_question_is_unprocessable(unused_random: Arc<dyn RandomSource>) {
    let mut repo = MockQuestionRepository::new();
    repo.expect_delete_question()
        .with(eq(QuestionId::new(1000)))
        .return_once(|_| Ok(false));

    let err = service(repo, unused_random)
        .delete_question(QuestionId::new(1000))
        .await
        .expect_err("missing question");

    assert_eq!(err.code(), ErrorCode::Unprocessable);
    assert_eq!(err.message(), "No such question");
}

#[rstest]
#[tokio::test]
async fn deleting_existing_question_succeeds(unused_random: Arc<dyn RandomSource>) {
    let mut repo = MockQuestionRepository::new();
    repo.expect_delete_question()
        .with(eq(QuestionId::new(5)))
        .times(1)
        .return_once(|_| Ok(true));

    service(repo, unused_random)
        .delete_question(QuestionId::new(5))
        .await
        .expect("delete succeeds");
}

#[rstest]
#[tokio::test]
async fn add_question_stores_submitted_fields(unused_random: Arc<dyn RandomSource>) {
    let draft = NewQuestion {
        question: "question for adding".to_owned(),
        answer: "answer".to_owned(),
        difficulty: 1,
        category: CategoryId::new(1),
    };
    let expected = draft.clone();
    let mut repo = MockQuestionRepository::new();
    repo.expect_insert_question()
        .withf(move |submitted| *submitted == expected)
        .times(1)
        .return_once(|submitted| Ok(Question::from_new(QuestionId::new(42), submitted.clone())));

    let stored = service(repo, unused_random)
        .add_question(draft)
        .await
        .expect("insert succeeds");

    assert_eq!(stored.id, QuestionId::new(42));
    assert_eq!(stored.question, "question for adding");
}

#[rstest]
#[tokio::test]
async fn quiz_passes_exclusions_and_category_to_store() {
    let mut repo = MockQuestionRepository::new();
    repo.expect_quiz_candidates()
        .withf(|request| {
            request
                .previous_questions()
                .iter()
                .copied()
                .eq([QuestionId::new(1), QuestionId::new(2)])
                && request.category() == QuizCategory::Only(CategoryId::new(1))
        })
        .times(1)
        .return_once(|_| Ok(vec![question(3, 1)]));

    let request = QuizRequest::new(
        [QuestionId::new(2), QuestionId::new(1), QuestionId::new(2)],
        QuizCategory::Only(CategoryId::new(1)),
    );
    let outcome = service(repo, first_index_random())
        .next_quiz_question(request)
        .await
        .expect("quiz draw succeeds");

    assert_eq!(outcome, QuizOutcome::Found(question(3, 1)));
}

#[rstest]
#[tokio::test]
async fn quiz_uses_the_random_index() {
    let mut repo = MockQuestionRepository::new();
    repo.expect_quiz_candidates()
        .return_once(|_| Ok(vec![question(3, 1), question(4, 2), question(5, 3)]));
    let mut random = MockRandomSource::new();
    random
        .expect_pick_index()
        .with(eq(3))
        .times(1)
        .return_const(Some(2));

    let outcome = service(repo, Arc::new(random))
        .next_quiz_question(QuizRequest::new([], QuizCategory::All))
        .await
        .expect("quiz draw succeeds");

    assert_eq!(outcome, QuizOutcome::Found(question(5, 3)));
}

#[rstest]
#[tokio::test]
async fn quiz_without_candidates_is_exhausted() {
    let mut repo = MockQuestionRepository::new();
    repo.expect_quiz_candidates()
        .withf(|request| request.category() == QuizCategory::All)
        .return_once(|_| Ok(Vec::new()));

    let outcome = service(repo, first_index_random())
        .next_quiz_question(QuizRequest::new([QuestionId::new(1)], QuizCategory::All))
        .await
        .expect("exhaustion is not an error");

    assert_eq!(outcome, QuizOutcome::Exhausted);
}

#[rstest]
#[tokio::test]
async fn out_of_bounds_random_index_is_an_internal_error() {
    let mut repo = MockQuestionRepository::new();
    repo.expect_quiz_candidates()
        .return_once(|_| Ok(vec![question(3, 1)]));
    let mut random = MockRandomSource::new();
    random.expect_pick_index().return_const(Some(7));

    let err = service(repo, Arc::new(random))
        .next_quiz_question(QuizRequest::new([], QuizCategory::All))
        .await
        .expect_err("draw fails");

    assert_eq!(err.code(), ErrorCode::InternalError);
}

#[rstest]
#[case(QuestionRepositoryError::connection("pool timed out"), ErrorCode::ServiceUnavailable)]
#[case(QuestionRepositoryError::query("relation missing"), ErrorCode::InternalError)]
#[tokio::test]
async fn store_failures_are_classified(
    #[case] failure: QuestionRepositoryError,
    #[case] expected: ErrorCode,
    unused_random: Arc<dyn RandomSource>,
) {
    let mut repo = MockQuestionRepository::new();
    repo.expect_list_categories().return_once(move || Err(failure));

    let err = service(repo, unused_random)
        .categories()
        .await
        .expect_err("store failure propagates");

    assert_eq!(err.code(), expected);
}
