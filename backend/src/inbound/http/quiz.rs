//! Quiz endpoint.
//!
//! ```text
//! POST /quiz
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{CategoryId, Error, QuestionId, QuizCategory, QuizOutcome, QuizRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::trivia_dto::QuestionBody;
use crate::inbound::http::validation::{FieldName, IntegerInput, parse_integer, require};

const PREVIOUS_QUESTIONS: FieldName = FieldName::new("previous_questions");
const QUIZ_CATEGORY: FieldName = FieldName::new("quiz_category");

/// Category selector sent by quiz clients.
///
/// Either `0` / `"0"` for every category, or the category object the client
/// received from `/categories`. An object with id `0` also means every
/// category; a bare non-zero id selects that category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum QuizCategoryBody {
    /// `{ "id": 3, "type": "Geography" }`.
    Selected {
        id: IntegerInput,
        /// Display label; ignored.
        #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
    /// `0` or `"0"`.
    Id(IntegerInput),
}

impl QuizCategoryBody {
    fn into_quiz_category(self) -> Result<QuizCategory, Error> {
        let raw = match self {
            Self::Selected { id, .. } | Self::Id(id) => id,
        };
        let id = parse_integer(raw, QUIZ_CATEGORY)?;
        Ok(if id == 0 {
            QuizCategory::All
        } else {
            QuizCategory::Only(CategoryId::new(id))
        })
    }
}

/// Request body for the next quiz question.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct QuizRequestBody {
    /// Ids already asked in this round.
    #[schema(value_type = Vec<i32>, example = json!([1, 4]))]
    pub previous_questions: Option<Vec<IntegerInput>>,
    /// `0` for every category, or `{ "id": <category id>, "type": <label> }`.
    #[schema(value_type = Object, example = json!({"id": 1, "type": "Science"}))]
    pub quiz_category: Option<QuizCategoryBody>,
}

impl TryFrom<QuizRequestBody> for QuizRequest {
    type Error = Error;

    fn try_from(body: QuizRequestBody) -> Result<Self, Self::Error> {
        let previous = require(body.previous_questions, PREVIOUS_QUESTIONS)?
            .into_iter()
            .map(|raw| parse_integer(raw, PREVIOUS_QUESTIONS).map(QuestionId::new))
            .collect::<Result<Vec<_>, _>>()?;
        let category = require(body.quiz_category, QUIZ_CATEGORY)?.into_quiz_category()?;
        Ok(Self::new(previous, category))
    }
}

/// Draw the next quiz question.
///
/// When no question remains the response is a placeholder whose `question`
/// is `"none"`.
#[utoipa::path(
    post,
    path = "/quiz",
    request_body = QuizRequestBody,
    responses(
        (status = 200, description = "Next question, or the placeholder once exhausted", body = QuestionBody),
        (status = 400, description = "Missing or invalid field", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["quiz"],
    operation_id = "nextQuizQuestion"
)]
#[post("/quiz")]
pub async fn next_quiz_question(
    state: web::Data<HttpState>,
    payload: web::Json<QuizRequestBody>,
) -> ApiResult<HttpResponse> {
    let request = QuizRequest::try_from(payload.into_inner())?;
    let body = match state.query.next_quiz_question(request).await? {
        QuizOutcome::Found(question) => QuestionBody::from(question),
        QuizOutcome::Exhausted => QuestionBody::exhausted(),
    };
    Ok(HttpResponse::Ok().json(body))
}
