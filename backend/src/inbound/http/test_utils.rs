//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::TriviaService;
use crate::inbound::http::configure_routes;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryQuestionRepository;
use crate::outbound::random::StdRandomSource;

/// State over the sample in-memory store with a fixed random seed.
pub fn sample_state() -> HttpState {
    let service = TriviaService::new(
        Arc::new(InMemoryQuestionRepository::with_sample_data()),
        Arc::new(StdRandomSource::seeded(7)),
    );
    HttpState::from_service(Arc::new(service))
}

/// App with every trivia route registered over `state`.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .configure(configure_routes)
}
