//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data` and only see the
//! driving ports, so they can be tested against mocks or the in-memory store.

use std::sync::Arc;

use crate::domain::ports::{TriviaCommand, TriviaQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub query: Arc<dyn TriviaQuery>,
    pub command: Arc<dyn TriviaCommand>,
}

impl HttpState {
    /// Bundle the read and write ports.
    pub fn new(query: Arc<dyn TriviaQuery>, command: Arc<dyn TriviaCommand>) -> Self {
        Self { query, command }
    }

    /// State where one service implements both ports.
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: TriviaQuery + TriviaCommand + 'static,
    {
        Self {
            query: service.clone(),
            command: service,
        }
    }
}
