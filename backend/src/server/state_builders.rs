//! Wiring from server configuration to handler state.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use trivia_backend::domain::TriviaService;
use trivia_backend::domain::ports::QuestionRepository;
use trivia_backend::inbound::http::state::HttpState;
use trivia_backend::outbound::memory::InMemoryQuestionRepository;
use trivia_backend::outbound::persistence::DieselQuestionRepository;
use trivia_backend::outbound::random::StdRandomSource;

use super::ServerConfig;

/// Pick the question store: PostgreSQL when a pool is configured, otherwise
/// the in-memory sample data.
fn build_question_store(config: &ServerConfig) -> Arc<dyn QuestionRepository> {
    match &config.db_pool {
        Some(pool) => Arc::new(DieselQuestionRepository::new(pool.clone())),
        None => {
            info!("no database configured; serving in-memory sample questions");
            Arc::new(InMemoryQuestionRepository::with_sample_data())
        }
    }
}

/// Build the shared handler state for every worker.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let service = TriviaService::new(
        build_question_store(config),
        Arc::new(StdRandomSource::from_optional_seed(config.quiz_seed)),
    );
    web::Data::new(HttpState::from_service(Arc::new(service)))
}
