//! HTTP inbound adapter exposing the trivia REST endpoints.

pub mod categories;
pub mod diagnostics;
pub mod error;
pub mod health;
pub mod questions;
pub mod quiz;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod trivia_dto;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register every trivia route at the application root.
///
/// Extractor failures are rewritten into the JSON error envelope and unknown
/// paths answer with a JSON 404. Health probes are registered separately by
/// the server because they need their own state.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
        .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .service(categories::list_categories)
        .service(questions::list_questions)
        .service(questions::questions_by_category)
        .service(questions::search_questions)
        .service(questions::add_question)
        .service(questions::delete_question)
        .service(quiz::next_quiz_question)
        .service(diagnostics::server_error)
        .default_service(web::route().to(error::not_found));
}
