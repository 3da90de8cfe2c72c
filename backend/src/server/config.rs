//! HTTP server configuration object.

use std::net::SocketAddr;

use trivia_backend::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) quiz_seed: Option<u64>,
}

impl ServerConfig {
    /// Configuration serving the in-memory sample store on `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            quiz_seed: None,
        }
    }

    /// Serve questions from PostgreSQL instead of memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Make quiz draws reproducible.
    #[must_use]
    pub fn with_quiz_seed(mut self, seed: Option<u64>) -> Self {
        self.quiz_seed = seed;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
