//! PostgreSQL persistence via Diesel.
//!
//! Row structs (`models`) and table definitions (`schema`) stay private to
//! this module; only the repository, the pool and the migration runner are
//! exported.
//!
//! ```ignore
//! use trivia_backend::outbound::persistence::{DbPool, DieselQuestionRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/trivia")).await?;
//! let repo = DieselQuestionRepository::new(pool);
//! ```

mod diesel_helpers;
mod diesel_question_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_helpers::contains_pattern;
pub use diesel_question_repository::DieselQuestionRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
