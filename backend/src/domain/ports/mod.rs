//! Domain ports for the hexagonal boundary.
//!
//! Driving ports ([`TriviaQuery`], [`TriviaCommand`]) are what inbound
//! adapters call. Driven ports ([`QuestionRepository`], [`RandomSource`]) are
//! what the domain needs from the outside world.

mod macros;
pub(crate) use macros::define_port_error;

mod question_repository;
mod random_source;
mod trivia_command;
mod trivia_query;

#[cfg(test)]
pub use question_repository::MockQuestionRepository;
pub use question_repository::{QuestionPage, QuestionRepository, QuestionRepositoryError};
#[cfg(test)]
pub use random_source::MockRandomSource;
pub use random_source::RandomSource;
#[cfg(test)]
pub use trivia_command::MockTriviaCommand;
pub use trivia_command::TriviaCommand;
#[cfg(test)]
pub use trivia_query::MockTriviaQuery;
pub use trivia_query::TriviaQuery;
