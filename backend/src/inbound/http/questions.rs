//! Question endpoints.
//!
//! ```text
//! GET    /questions?page=N
//! POST   /category
//! POST   /search
//! POST   /question
//! DELETE /question/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use pagination::PageNumber;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{CategoryId, NewQuestion, QuestionId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::trivia_dto::{
    CategoryMap, QuestionBody, category_map, question_bodies,
};
use crate::inbound::http::validation::{
    FieldName, IntegerInput, invalid_integer_error, parse_integer, parse_integer_text, require,
};

const PAGE: FieldName = FieldName::new("page");
const CATEGORY: FieldName = FieldName::new("category");
const SEARCH_TERM: FieldName = FieldName::new("searchTerm");
const QUESTION: FieldName = FieldName::new("question");
const ANSWER: FieldName = FieldName::new("answer");
const DIFFICULTY: FieldName = FieldName::new("difficulty");
const ID: FieldName = FieldName::new("id");

/// Query string for the paginated listing.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number.
    #[param(example = "1")]
    pub page: Option<String>,
}

/// One page of questions with listing context.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuestionsResponse {
    /// Questions on the requested page, in id order.
    pub questions: Vec<QuestionBody>,
    /// Number of questions across all pages.
    pub total_questions: i64,
    /// Every category keyed by id.
    #[schema(value_type = Object, example = json!({"1": "Science"}))]
    pub categories: CategoryMap,
    /// Always empty.
    pub current_category: String,
}

/// Request body for questions in one category.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CategoryQuestionsRequest {
    /// Category id, as a number or numeric string.
    #[schema(value_type = i32, example = 1)]
    pub category: Option<IntegerInput>,
}

/// Questions in one category.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryQuestionsResponse {
    /// Questions in the category.
    pub questions: Vec<QuestionBody>,
    /// Number of questions returned.
    pub total_questions: usize,
}

/// Request body for the search endpoint.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Text to look for in question text, ignoring case.
    #[schema(value_type = String, example = "title")]
    pub search_term: Option<String>,
}

/// Search matches.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    /// Questions whose text contains the search term.
    pub questions: Vec<QuestionBody>,
    /// Number of matches.
    pub total_questions: usize,
    /// Always empty.
    pub current_category: String,
}

/// Request body for creating a question.
///
/// `difficulty` and `category` accept numbers or numeric strings; neither is
/// range-checked.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct NewQuestionRequest {
    #[schema(value_type = String)]
    pub question: Option<String>,
    #[schema(value_type = String)]
    pub answer: Option<String>,
    #[schema(value_type = i32, example = 1)]
    pub difficulty: Option<IntegerInput>,
    #[schema(value_type = i32, example = 1)]
    pub category: Option<IntegerInput>,
}

impl TryFrom<NewQuestionRequest> for NewQuestion {
    type Error = crate::domain::Error;

    fn try_from(body: NewQuestionRequest) -> Result<Self, Self::Error> {
        let question = require(body.question, QUESTION)?;
        let answer = require(body.answer, ANSWER)?;
        let difficulty = parse_integer(require(body.difficulty, DIFFICULTY)?, DIFFICULTY)?;
        let category = parse_integer(require(body.category, CATEGORY)?, CATEGORY)?;
        Ok(Self {
            question,
            answer,
            difficulty,
            category: CategoryId::new(category),
        })
    }
}

fn parse_page(query: PageQuery) -> ApiResult<PageNumber> {
    let raw = require(query.page, PAGE)?;
    PageNumber::parse(&raw).map_err(|_| invalid_integer_error(PAGE, raw))
}

/// List questions ten at a time.
#[utoipa::path(
    get,
    path = "/questions",
    params(PageQuery),
    responses(
        (status = 200, description = "Requested page", body = QuestionsResponse),
        (status = 400, description = "Missing or non-integer page", body = ErrorSchema),
        (status = 422, description = "Page out of range", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["questions"],
    operation_id = "listQuestions"
)]
#[get("/questions")]
pub async fn list_questions(
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
) -> ApiResult<HttpResponse> {
    let page = parse_page(query.into_inner())?;
    let listing = state.query.questions_page(page).await?;
    Ok(HttpResponse::Ok().json(QuestionsResponse {
        questions: question_bodies(listing.questions),
        total_questions: listing.total_questions,
        categories: category_map(listing.categories),
        current_category: String::new(),
    }))
}

/// List every question in one category.
#[utoipa::path(
    post,
    path = "/category",
    request_body = CategoryQuestionsRequest,
    responses(
        (status = 200, description = "Questions in the category", body = CategoryQuestionsResponse),
        (status = 400, description = "Missing or invalid category", body = ErrorSchema),
        (status = 404, description = "No questions in this category", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["questions"],
    operation_id = "questionsByCategory"
)]
#[post("/category")]
pub async fn questions_by_category(
    state: web::Data<HttpState>,
    payload: web::Json<CategoryQuestionsRequest>,
) -> ApiResult<HttpResponse> {
    let raw = require(payload.into_inner().category, CATEGORY)?;
    let category = CategoryId::new(parse_integer(raw, CATEGORY)?);
    let questions = state.query.questions_by_category(category).await?;
    Ok(HttpResponse::Ok().json(CategoryQuestionsResponse {
        total_questions: questions.len(),
        questions: question_bodies(questions),
    }))
}

/// Case-insensitive search over question text.
#[utoipa::path(
    post,
    path = "/search",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Matching questions", body = SearchResponse),
        (status = 400, description = "Missing search term", body = ErrorSchema),
        (status = 404, description = "No results", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["questions"],
    operation_id = "searchQuestions"
)]
#[post("/search")]
pub async fn search_questions(
    state: web::Data<HttpState>,
    payload: web::Json<SearchRequest>,
) -> ApiResult<HttpResponse> {
    let term = require(payload.into_inner().search_term, SEARCH_TERM)?;
    let questions = state.query.search_questions(&term).await?;
    Ok(HttpResponse::Ok().json(SearchResponse {
        total_questions: questions.len(),
        questions: question_bodies(questions),
        current_category: String::new(),
    }))
}

/// Create a question.
#[utoipa::path(
    post,
    path = "/question",
    request_body = NewQuestionRequest,
    responses(
        (status = 201, description = "Question stored"),
        (status = 400, description = "Missing or mistyped field", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["questions"],
    operation_id = "addQuestion"
)]
#[post("/question")]
pub async fn add_question(
    state: web::Data<HttpState>,
    payload: web::Json<NewQuestionRequest>,
) -> ApiResult<HttpResponse> {
    let draft = NewQuestion::try_from(payload.into_inner())?;
    state.command.add_question(draft).await?;
    Ok(HttpResponse::Created().finish())
}

/// Delete a question.
#[utoipa::path(
    delete,
    path = "/question/{id}",
    params(("id" = i32, Path, description = "Question id")),
    responses(
        (status = 204, description = "Question deleted"),
        (status = 400, description = "Non-integer id", body = ErrorSchema),
        (status = 422, description = "No such question", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["questions"],
    operation_id = "deleteQuestion"
)]
#[delete("/question/{id}")]
pub async fn delete_question(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = QuestionId::new(parse_integer_text(&path.into_inner(), ID)?);
    state.command.delete_question(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "questions_tests.rs"]
mod tests;
