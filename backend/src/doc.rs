//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every trivia endpoint plus the health probes, and the
//! adapter-layer schema wrappers for the domain error. Swagger UI serves it in
//! debug builds; `cargo run --bin openapi-dump` prints it for tooling.

use crate::inbound::http::categories::CategoriesResponse;
use crate::inbound::http::questions::{
    CategoryQuestionsRequest, CategoryQuestionsResponse, NewQuestionRequest, QuestionsResponse,
    SearchRequest, SearchResponse,
};
use crate::inbound::http::quiz::QuizRequestBody;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::trivia_dto::QuestionBody;
use utoipa::OpenApi;

/// OpenAPI document for the trivia REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trivia backend API",
        description = "Question bank management and quiz rounds for the trivia web client."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::categories::list_categories,
        crate::inbound::http::questions::list_questions,
        crate::inbound::http::questions::questions_by_category,
        crate::inbound::http::questions::search_questions,
        crate::inbound::http::questions::add_question,
        crate::inbound::http::questions::delete_question,
        crate::inbound::http::quiz::next_quiz_question,
        crate::inbound::http::diagnostics::server_error,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        QuestionBody,
        CategoriesResponse,
        QuestionsResponse,
        CategoryQuestionsRequest,
        CategoryQuestionsResponse,
        SearchRequest,
        SearchResponse,
        NewQuestionRequest,
        QuizRequestBody,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "categories", description = "Question categories"),
        (name = "questions", description = "Browse and edit the question bank"),
        (name = "quiz", description = "Quiz rounds"),
        (name = "diagnostics", description = "Failure rendering checks"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    #[rstest]
    #[case("/categories")]
    #[case("/questions")]
    #[case("/category")]
    #[case("/search")]
    #[case("/question")]
    #[case("/question/{id}")]
    #[case("/quiz")]
    #[case("/error")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn document_lists_path(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[rstest]
    fn error_schema_has_envelope_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let Some(RefOr::T(Schema::Object(error))) = schemas.get(ERROR_SCHEMA_NAME) else {
            panic!("expected Error object schema");
        };

        for field in ["code", "message", "traceId", "details"] {
            assert!(error.properties.contains_key(field), "missing {field}");
        }
    }

    #[rstest]
    #[case("QuestionsResponse")]
    #[case("CategoryQuestionsRequest")]
    #[case("CategoryQuestionsResponse")]
    #[case("SearchRequest")]
    #[case("SearchResponse")]
    fn listing_schemas_describe_every_field(#[case] name: &str) {
        let doc = serde_json::to_value(ApiDoc::openapi()).expect("document serialises");
        let properties = doc["components"]["schemas"][name]["properties"]
            .as_object()
            .unwrap_or_else(|| panic!("{name} has no properties"));

        for (field, schema) in properties {
            assert!(
                schema.get("description").is_some(),
                "{name}.{field} has no description"
            );
        }
    }

    #[rstest]
    fn document_serialises_to_json() {
        let json = ApiDoc::openapi().to_json().expect("document serialises");
        assert!(json.contains("nextQuizQuestion"));
    }
}
